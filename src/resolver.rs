//! Block-size resolution.
//!
//! Determines the sorted, deduplicated set of block sizes to evaluate from
//! whichever selection parameter the caller supplied:
//!
//! 1. An explicit set of block sizes (used as-is; block counts are ignored).
//! 2. A set of block counts, each converted via `block_size = N / n`
//!    (integer division).
//! 3. Neither: block counts are synthesized as the range `5..=N` and
//!    converted the same way.
//!
//! Validation applies to whichever parameter is actually in use and fails
//! with [`BlockingError::InvalidArgument`] naming that parameter.

use crate::error::BlockingError;

/// Smallest block count in the synthesized default range.
///
/// Fewer than 5 blocks gives an unusably noisy variance estimate, so the
/// auto range starts there and runs up to one observation per block.
const AUTO_MIN_BLOCKS: usize = 5;

/// Resolve the candidate block sizes for a sequence of length `n`.
///
/// Returns the sorted, deduplicated block sizes, each in `1..=n`. With
/// neither parameter supplied and `n < 5` the synthesized range is empty
/// and an empty set is returned; that is not an error.
///
/// # Errors
///
/// [`BlockingError::InvalidArgument`] when the parameter in use contains a
/// value outside `(0, n]`.
pub fn resolve_block_sizes(
    n: usize,
    block_sizes: Option<&[usize]>,
    n_blocks: Option<&[usize]>,
) -> Result<Vec<usize>, BlockingError> {
    let mut sizes = if let Some(sizes) = block_sizes {
        validate_set(sizes, "block_sizes", n)?;
        sizes.to_vec()
    } else if let Some(counts) = n_blocks {
        validate_set(counts, "n_blocks", n)?;
        counts.iter().map(|&c| n / c).collect()
    } else {
        // Default: one row per block count from 5 up to one-per-observation.
        (AUTO_MIN_BLOCKS..=n).map(|c| n / c).collect()
    };

    sizes.sort_unstable();
    sizes.dedup();
    Ok(sizes)
}

/// Check that every element of a block-size or block-count set lies in
/// `(0, n]`.
fn validate_set(values: &[usize], parameter: &'static str, n: usize) -> Result<(), BlockingError> {
    for &v in values {
        if v == 0 {
            return Err(BlockingError::invalid(parameter, "values must be positive"));
        }
        if v > n {
            return Err(BlockingError::invalid(
                parameter,
                format!("value {v} exceeds sequence length {n}"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_sizes_sorted_deduped() {
        let sizes = resolve_block_sizes(100, Some(&[10, 2, 10, 5]), None).unwrap();
        assert_eq!(sizes, vec![2, 5, 10]);
    }

    #[test]
    fn test_sizes_take_priority_over_counts() {
        // When block sizes are given, counts are ignored entirely (even
        // invalid ones are never inspected).
        let sizes = resolve_block_sizes(100, Some(&[4]), Some(&[0, 999])).unwrap();
        assert_eq!(sizes, vec![4]);
    }

    #[test]
    fn test_counts_convert_by_integer_division() {
        // N=10: counts {3, 4} -> sizes {10/3, 10/4} = {3, 2}
        let sizes = resolve_block_sizes(10, None, Some(&[3, 4])).unwrap();
        assert_eq!(sizes, vec![2, 3]);
    }

    #[test]
    fn test_counts_collapse_to_same_size() {
        // N=10: counts 6..=10 all map to block size 1
        let sizes = resolve_block_sizes(10, None, Some(&[6, 7, 8, 9, 10])).unwrap();
        assert_eq!(sizes, vec![1]);
    }

    #[test]
    fn test_default_range() {
        // N=10: counts 5..=10 -> sizes {2, 1, 1, 1, 1, 1} -> {1, 2}
        let sizes = resolve_block_sizes(10, None, None).unwrap();
        assert_eq!(sizes, vec![1, 2]);
    }

    #[test]
    fn test_default_range_short_sequence_is_empty() {
        // N < 5: the synthesized count range 5..=N is empty
        let sizes = resolve_block_sizes(4, None, None).unwrap();
        assert!(sizes.is_empty());
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let err = resolve_block_sizes(10, Some(&[0]), None).unwrap_err();
        assert_eq!(err.parameter(), "block_sizes");
    }

    #[test]
    fn test_oversized_block_size_rejected() {
        let err = resolve_block_sizes(10, Some(&[11]), None).unwrap_err();
        assert_eq!(err.parameter(), "block_sizes");
    }

    #[test]
    fn test_zero_block_count_rejected() {
        let err = resolve_block_sizes(10, None, Some(&[0])).unwrap_err();
        assert_eq!(err.parameter(), "n_blocks");
    }

    #[test]
    fn test_oversized_block_count_rejected() {
        let err = resolve_block_sizes(10, None, Some(&[11])).unwrap_err();
        assert_eq!(err.parameter(), "n_blocks");
    }

    #[test]
    fn test_boundary_values_accepted() {
        // block size N and block count N are both in range
        assert_eq!(resolve_block_sizes(10, Some(&[10]), None).unwrap(), vec![10]);
        assert_eq!(resolve_block_sizes(10, None, Some(&[10])).unwrap(), vec![1]);
    }
}
