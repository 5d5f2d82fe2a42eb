// Mon Aug 24 2026 - Alex

pub mod error;
pub mod factor;
pub mod record;
pub mod sort;
pub mod tail;

pub use error::LayoutError;
pub use factor::largest_pow2_factor;
pub use record::SizeRecord;
pub use sort::{sort_sizes_descending, SizeKeyed};
pub use tail::{padding_size, tail_aligned_size, tail_offset};
pub use tail::{try_padding_size, try_tail_aligned_size};
