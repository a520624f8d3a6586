pub mod error;
pub mod report;
pub mod runner;
pub mod scanner;

pub use error::ScanError;
