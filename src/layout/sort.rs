// Mon Aug 24 2026 - Alex

/// Exposes the byte-size key that decides ordering. Everything else a
/// record carries is opaque payload and travels with it untouched.
pub trait SizeKeyed {
    fn size_key(&self) -> usize;
}

impl SizeKeyed for usize {
    fn size_key(&self) -> usize {
        *self
    }
}

/// In-place reorder of `records` so size keys run largest to smallest.
/// Relative order of equal keys is unspecified. An empty slice is left
/// unmodified.
pub fn sort_sizes_descending<T: SizeKeyed>(records: &mut [T]) {
    if records.is_empty() {
        return;
    }
    records.sort_unstable_by(|a, b| b.size_key().cmp(&a.size_key()));
}
