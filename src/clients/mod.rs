pub mod aggregator;

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Captured result of one CLI invocation. `ok == false` means "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub ok: bool,
}

impl CommandOutput {
    fn failed(text: impl Into<String>) -> Self {
        Self {
            stdout: text.into(),
            ok: false,
        }
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[&str]) -> CommandOutput;
}

/// Runs the cluster CLI as a child process, one process per call.
pub struct KubectlClient {
    pub program: String,
    timeout: Duration,
}

impl KubectlClient {
    pub fn new(program: String, timeout: Duration) -> Self {
        Self { program, timeout }
    }
}

#[async_trait]
impl CommandRunner for KubectlClient {
    async fn run(&self, args: &[&str]) -> CommandOutput {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                if output.status.success() {
                    debug!("{} {} returned {} bytes", self.program, args.join(" "), stdout.len());
                    CommandOutput { stdout, ok: true }
                } else {
                    warn!(
                        "{} {} exited with {}: {}",
                        self.program,
                        args.join(" "),
                        output.status,
                        String::from_utf8_lossy(&output.stderr).trim()
                    );
                    CommandOutput::failed(stdout)
                }
            }
            Ok(Err(e)) => {
                warn!("failed to run {}: {}", self.program, e);
                CommandOutput::failed(e.to_string())
            }
            Err(_) => {
                warn!(
                    "{} {} timed out after {:?}",
                    self.program,
                    args.join(" "),
                    self.timeout
                );
                CommandOutput::failed("")
            }
        }
    }
}
