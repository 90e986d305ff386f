//! Per-block-size block-average statistics.
//!
//! For a block size `b` and a sequence of length `N`, the sequence is
//! partitioned into `floor(N / b)` contiguous, non-overlapping chunks.
//! Integer truncation can leave up to `b - 1` trailing observations; the
//! final chunk absorbs them, so the partition always covers the whole
//! sequence and only the last chunk may be longer than `b`.
//!
//! The standard error at block size `b` is the population standard
//! deviation of the chunk means divided by `sqrt(num_blocks - 1)`.

use crate::result::BlockRow;

/// Compute the block-average statistics for one block size.
///
/// Pure function of the sequence and the block size; produces the table
/// row for this block size.
///
/// `se` is `None` when the sequence forms a single block: the standard
/// error of one point is undefined, and fabricating a value would be
/// worse than saying so.
///
/// # Panics
///
/// Debug-asserts `1 <= block_size <= x.len()`; callers go through
/// [`resolve_block_sizes`](crate::resolve_block_sizes), which guarantees
/// this.
pub fn block_statistics(x: &[f64], block_size: usize) -> BlockRow {
    debug_assert!(block_size >= 1 && block_size <= x.len());

    let n = x.len();
    let num_blocks = n / block_size;

    let chunk_means = chunk_means(x, block_size, num_blocks);
    let mean = chunk_means.iter().sum::<f64>() / num_blocks as f64;

    let se = if num_blocks > 1 {
        // Population (divisor num_blocks) standard deviation of the chunk
        // means, then the sqrt(m - 1) scaling of the block-average method.
        let sum_sq: f64 = chunk_means.iter().map(|m| (m - mean).powi(2)).sum();
        let pop_std = (sum_sq / num_blocks as f64).sqrt();
        Some(pop_std / ((num_blocks - 1) as f64).sqrt())
    } else {
        None
    };

    BlockRow {
        block_size,
        num_blocks,
        mean,
        se,
    }
}

/// Mean of each of the `num_blocks` chunks, in sequence order.
///
/// Chunk `j` starts at `j * block_size`; every chunk has length
/// `block_size` except the last, which runs to the end of the sequence.
fn chunk_means(x: &[f64], block_size: usize, num_blocks: usize) -> Vec<f64> {
    let n = x.len();
    let mut means = Vec::with_capacity(num_blocks);

    for j in 0..num_blocks {
        let start = j * block_size;
        let end = if j + 1 == num_blocks {
            n
        } else {
            start + block_size
        };
        let chunk = &x[start..end];
        means.push(chunk.iter().sum::<f64>() / chunk.len() as f64);
    }

    means
}
