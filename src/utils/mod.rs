// Wed Aug 26 2026 - Alex

pub mod logging;

pub use logging::LoggingUtils;
