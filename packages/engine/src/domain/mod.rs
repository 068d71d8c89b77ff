pub mod options;
pub mod tuning;
