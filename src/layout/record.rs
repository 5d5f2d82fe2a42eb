// Mon Aug 24 2026 - Alex

use crate::layout::sort::SizeKeyed;
use serde::Serialize;
use std::fmt;
use std::mem;

/// A candidate structure member: a byte size plus a display label. The
/// label is payload only; ordering never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeRecord {
    size: usize,
    label: String,
}

impl SizeRecord {
    pub fn new(size: usize, label: impl Into<String>) -> Self {
        Self {
            size,
            label: label.into(),
        }
    }

    pub fn of<T>(label: impl Into<String>) -> Self {
        Self::new(mem::size_of::<T>(), label)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl SizeKeyed for SizeRecord {
    fn size_key(&self) -> usize {
        self.size
    }
}

impl fmt::Display for SizeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.size, self.label)
    }
}
