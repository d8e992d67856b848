pub mod calendar;
pub mod import;
pub mod log;
pub mod report;
