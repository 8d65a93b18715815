//! dnslite application layer
pub mod ports;
pub mod records;
pub mod use_cases;
