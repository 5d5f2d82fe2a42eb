// Mon Aug 24 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Zero-sized {0} region")]
    ZeroRegion(&'static str),
    #[error("Size arithmetic overflow")]
    Overflow,
}
