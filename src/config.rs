//! Configuration for block-average analysis.

/// Configuration options for [`BlockAverage`](crate::BlockAverage).
///
/// Controls which candidate block sizes are evaluated and how the table is
/// assembled. Block-size selection follows a strict priority:
///
/// 1. `block_sizes`, when set, is used as-is (`n_blocks` is ignored).
/// 2. Otherwise `n_blocks`, when set, is converted to block sizes via
///    integer division by the sequence length.
/// 3. Otherwise block counts `5..=N` are synthesized and converted the
///    same way.
///
/// Values are validated against the sequence length at compute time, not
/// here, since the length is not known until then.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Explicit block sizes to evaluate. Takes priority over `n_blocks`.
    ///
    /// Each value must lie in `1..=N` for a sequence of length `N`.
    pub block_sizes: Option<Vec<usize>>,

    /// Block counts to evaluate, each converted to a block size as
    /// `floor(N / count)`.
    ///
    /// Each value must lie in `1..=N`. Ignored when `block_sizes` is set.
    pub n_blocks: Option<Vec<usize>>,

    /// Compute table rows on a rayon thread pool.
    ///
    /// Rows are independent, so this changes nothing about the output;
    /// it only helps for long sequences with many candidate block sizes.
    /// Default: false.
    pub parallel: bool,
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit block sizes.
    pub fn block_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.block_sizes = Some(sizes.into_iter().collect());
        self
    }

    /// Set the block counts.
    pub fn n_blocks(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.n_blocks = Some(counts.into_iter().collect());
        self
    }

    /// Enable or disable parallel row computation.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
