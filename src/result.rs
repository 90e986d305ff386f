//! Result types for block-average analysis.

use serde::{Deserialize, Serialize};

/// One row of the block-average table: the statistics for a single
/// candidate block size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockRow {
    /// Number of observations per block.
    pub block_size: usize,

    /// Number of blocks the sequence was partitioned into,
    /// `floor(N / block_size)`. Always >= 1.
    pub num_blocks: usize,

    /// Arithmetic mean of the per-block means.
    pub mean: f64,

    /// Estimated standard error of the mean at this block size.
    ///
    /// `None` when `num_blocks == 1`: the standard error of a single block
    /// mean is mathematically undefined. Callers that need a plain float
    /// can use [`se_or_nan`](Self::se_or_nan).
    pub se: Option<f64>,
}

impl BlockRow {
    /// The standard error, or `f64::NAN` when it is undefined.
    pub fn se_or_nan(&self) -> f64 {
        self.se.unwrap_or(f64::NAN)
    }

    /// Whether the standard error is undefined for this row
    /// (single-block case).
    pub fn is_se_undefined(&self) -> bool {
        self.se.is_none()
    }
}

/// The block-average table: one [`BlockRow`] per distinct candidate block
/// size, sorted ascending by `block_size`.
///
/// The table is the sole output of the computation. Rendering it (see
/// [`output::terminal`](crate::output::terminal)) or plotting `se` against
/// `block_size` is the caller's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTable {
    sequence_len: usize,
    rows: Vec<BlockRow>,
}

impl BlockTable {
    /// Assemble a table from rows already sorted ascending by `block_size`.
    pub(crate) fn new(sequence_len: usize, rows: Vec<BlockRow>) -> Self {
        debug_assert!(
            rows.windows(2).all(|w| w[0].block_size < w[1].block_size),
            "rows must be strictly ascending by block_size"
        );
        Self { sequence_len, rows }
    }

    /// Length of the input sequence the table was computed from.
    pub fn sequence_len(&self) -> usize {
        self.sequence_len
    }

    /// All rows, ascending by block size.
    pub fn rows(&self) -> &[BlockRow] {
        &self.rows
    }

    /// Look up the row for a specific block size, if it was evaluated.
    pub fn get(&self, block_size: usize) -> Option<&BlockRow> {
        self.rows
            .binary_search_by_key(&block_size, |r| r.block_size)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows in ascending block-size order.
    pub fn iter(&self) -> std::slice::Iter<'_, BlockRow> {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a BlockTable {
    type Item = &'a BlockRow;
    type IntoIter = std::slice::Iter<'a, BlockRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl IntoIterator for BlockTable {
    type Item = BlockRow;
    type IntoIter = std::vec::IntoIter<BlockRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table() -> BlockTable {
        BlockTable::new(
            10,
            vec![
                BlockRow {
                    block_size: 2,
                    num_blocks: 5,
                    mean: 5.5,
                    se: Some(1.4142),
                },
                BlockRow {
                    block_size: 10,
                    num_blocks: 1,
                    mean: 5.5,
                    se: None,
                },
            ],
        )
    }

    #[test]
    fn test_get_by_block_size() {
        let table = make_table();
        assert_eq!(table.get(2).unwrap().num_blocks, 5);
        assert_eq!(table.get(10).unwrap().num_blocks, 1);
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_undefined_se_flag() {
        let table = make_table();
        let single = table.get(10).unwrap();
        assert!(single.is_se_undefined());
        assert!(single.se_or_nan().is_nan());

        let multi = table.get(2).unwrap();
        assert!(!multi.is_se_undefined());
        assert_eq!(multi.se_or_nan(), 1.4142);
    }

    #[test]
    fn test_iteration_order() {
        let table = make_table();
        let sizes: Vec<usize> = table.iter().map(|r| r.block_size).collect();
        assert_eq!(sizes, vec![2, 10]);
    }
}
