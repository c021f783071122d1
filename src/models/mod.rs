pub mod records;
pub mod views;
