// Wed Aug 26 2026 - Alex

pub mod table;

pub use table::{CellAlign, TableBuilder};
