// Mon Aug 24 2026 - Alex

pub mod layout;
pub mod report;
pub mod ui;
pub mod utils;

pub use layout::{largest_pow2_factor, padding_size, tail_aligned_size, tail_offset};
pub use layout::{sort_sizes_descending, LayoutError, SizeKeyed, SizeRecord};
pub use report::{LayoutWalk, MemberSetReport, PaddingStep};
