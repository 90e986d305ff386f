//! Main `BlockAverage` entry point and builder.

use rayon::prelude::*;

use crate::config::Config;
use crate::error::BlockingError;
use crate::resolver::resolve_block_sizes;
use crate::result::{BlockRow, BlockTable};
use crate::statistics::block_statistics;

/// Main entry point for block-average analysis.
///
/// Use the builder pattern to select the candidate block sizes, then call
/// [`compute`](Self::compute) with the sequence.
///
/// # Example
///
/// ```
/// use block_average::BlockAverage;
///
/// let x: Vec<f64> = (1..=10).map(|i| i as f64).collect();
/// let table = BlockAverage::new().block_sizes([2]).compute(&x)?;
///
/// let row = table.get(2).unwrap();
/// assert_eq!(row.num_blocks, 5);
/// assert!((row.mean - 5.5).abs() < 1e-12);
/// assert!((row.se.unwrap() - 2.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), block_average::BlockingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct BlockAverage {
    config: Config,
}

impl BlockAverage {
    /// Create with default configuration (auto block-count range `5..=N`).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Create from an existing configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the explicit block sizes. Takes priority over block counts.
    pub fn block_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.config = self.config.block_sizes(sizes);
        self
    }

    /// Set the block counts, converted to sizes as `floor(N / count)`.
    pub fn n_blocks(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.config = self.config.n_blocks(counts);
        self
    }

    /// Compute table rows on a rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config = self.config.parallel(parallel);
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the block-average analysis over `x`.
    ///
    /// Resolves the candidate block sizes, computes one [`BlockRow`] per
    /// size and assembles them into a [`BlockTable`], ascending by block
    /// size.
    ///
    /// # Errors
    ///
    /// [`BlockingError::InvalidArgument`] when `x` is empty or a supplied
    /// block size / block count lies outside `(0, x.len()]`.
    pub fn compute(&self, x: &[f64]) -> Result<BlockTable, BlockingError> {
        if x.is_empty() {
            return Err(BlockingError::invalid(
                "x",
                "sequence must contain at least one observation",
            ));
        }

        let sizes = resolve_block_sizes(
            x.len(),
            self.config.block_sizes.as_deref(),
            self.config.n_blocks.as_deref(),
        )?;

        // Rows are independent; the parallel map keeps the input order, so
        // the table is identical either way.
        let rows: Vec<BlockRow> = if self.config.parallel {
            sizes.par_iter().map(|&b| block_statistics(x, b)).collect()
        } else {
            sizes.iter().map(|&b| block_statistics(x, b)).collect()
        };

        Ok(BlockTable::new(x.len(), rows))
    }
}

/// Compute the block-average table for a sequence.
///
/// Convenience wrapper over [`BlockAverage`] mirroring its defaults:
/// `block_sizes` takes priority over `n_blocks`, and with neither supplied
/// the block counts `5..=N` are used.
///
/// # Errors
///
/// [`BlockingError::InvalidArgument`] under the same conditions as
/// [`BlockAverage::compute`].
pub fn compute_block_average(
    x: &[f64],
    block_sizes: Option<&[usize]>,
    n_blocks: Option<&[usize]>,
) -> Result<BlockTable, BlockingError> {
    let mut analyzer = BlockAverage::new();
    if let Some(sizes) = block_sizes {
        analyzer = analyzer.block_sizes(sizes.iter().copied());
    }
    if let Some(counts) = n_blocks {
        analyzer = analyzer.n_blocks(counts.iter().copied());
    }
    analyzer.compute(x)
}
