// Mon Aug 24 2026 - Alex

use crate::layout::error::LayoutError;
use crate::layout::factor::largest_pow2_factor;

/// Total storage size for a head object at offset zero and a tail object
/// whose final byte is the final byte of the total. The total is a multiple
/// of the stricter of the two heuristic alignment factors, and any padding
/// sits between the head and the tail.
///
/// Returns 0 if either size is zero or the arithmetic would overflow.
pub fn tail_aligned_size(head_size: usize, tail_size: usize) -> usize {
    try_tail_aligned_size(head_size, tail_size).unwrap_or(0)
}

pub fn try_tail_aligned_size(head_size: usize, tail_size: usize) -> Result<usize, LayoutError> {
    if head_size == 0 {
        return Err(LayoutError::ZeroRegion("head"));
    }
    if tail_size == 0 {
        return Err(LayoutError::ZeroRegion("tail"));
    }

    let hpow = largest_pow2_factor(head_size);
    let tpow = largest_pow2_factor(tail_size);
    let factor = hpow.max(tpow);

    let sum = head_size
        .checked_add(tail_size)
        .ok_or(LayoutError::Overflow)?;

    let remainder = sum % factor;
    if remainder == 0 {
        return Ok(sum);
    }

    let padding = factor - remainder;
    sum.checked_add(padding).ok_or(LayoutError::Overflow)
}

/// Padding `tail_aligned_size` would insert between the two regions.
/// Returns `usize::MAX` whenever `tail_aligned_size` would return 0.
pub fn padding_size(head_size: usize, tail_size: usize) -> usize {
    try_padding_size(head_size, tail_size).unwrap_or(usize::MAX)
}

pub fn try_padding_size(head_size: usize, tail_size: usize) -> Result<usize, LayoutError> {
    let total = try_tail_aligned_size(head_size, tail_size)?;
    Ok(total - tail_size - head_size)
}

/// Offset of the tail region within a previously computed total size.
/// Precondition: `total_size >= tail_size`; violations wrap.
pub fn tail_offset(total_size: usize, tail_size: usize) -> usize {
    total_size.wrapping_sub(tail_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unaligned_pair() {
        // Both factors are 1, so the plain sum is already aligned.
        assert_eq!(tail_aligned_size(3, 5), 8);
        assert_eq!(padding_size(3, 5), 0);
    }

    #[test]
    fn test_padded_pair() {
        // Factors 4 and 8; 12 rounds up to 16 with 4 bytes between.
        assert_eq!(tail_aligned_size(4, 8), 16);
        assert_eq!(padding_size(4, 8), 4);
        assert_eq!(tail_offset(16, 8), 8);
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(tail_aligned_size(0, 16), 0);
        assert_eq!(tail_aligned_size(16, 0), 0);
        assert_eq!(tail_aligned_size(0, 0), 0);
        assert_eq!(padding_size(0, 16), usize::MAX);
        assert_eq!(padding_size(16, 0), usize::MAX);
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(tail_aligned_size(usize::MAX, 2), 0);
        assert_eq!(tail_aligned_size(2, usize::MAX), 0);
        assert_eq!(padding_size(usize::MAX, 2), usize::MAX);
    }

    #[test]
    fn test_padding_overflow() {
        // usize::MAX - 1 is twice an odd number, so its factor is 2. The
        // sum fits but rounding it up to the next multiple of 2 does not.
        assert_eq!(tail_aligned_size(usize::MAX - 1, 1), 0);
        assert_eq!(padding_size(usize::MAX - 1, 1), usize::MAX);
    }

    #[test]
    fn test_checked_variants() {
        assert_eq!(try_tail_aligned_size(4, 8), Ok(16));
        assert_eq!(
            try_tail_aligned_size(0, 8),
            Err(LayoutError::ZeroRegion("head"))
        );
        assert_eq!(
            try_tail_aligned_size(8, 0),
            Err(LayoutError::ZeroRegion("tail"))
        );
        assert_eq!(
            try_tail_aligned_size(usize::MAX, 2),
            Err(LayoutError::Overflow)
        );
        assert_eq!(try_padding_size(4, 8), Ok(4));
    }

    #[test]
    fn test_alignment_properties() {
        use crate::layout::factor::largest_pow2_factor;

        for head in 1usize..=64 {
            for tail in 1usize..=64 {
                let total = tail_aligned_size(head, tail);
                let factor =
                    largest_pow2_factor(head).max(largest_pow2_factor(tail));

                assert_eq!(total % factor, 0, "({}, {}) misaligned", head, tail);
                assert!(total >= head + tail);
                assert_eq!(padding_size(head, tail), total - head - tail);

                // Head and tail must not overlap.
                let offset = tail_offset(total, tail);
                assert!(offset >= head);
                assert_eq!(offset + tail, total);
            }
        }
    }
}
