//! # block-average
//!
//! Standard-error estimation for correlated numeric sequences using the
//! block-averaging method.
//!
//! Sequential data (time series, simulation trajectories, repeated
//! measurements) is usually autocorrelated, so the naive `s / sqrt(N)`
//! standard error is too optimistic. Block averaging partitions the
//! sequence into contiguous blocks, averages within each block, and treats
//! the block means as approximately independent samples. Sweeping the
//! block size and watching where the estimate plateaus gives a defensible
//! standard error for the mean.
//!
//! This crate computes that sweep: one row per candidate block size, with
//! the number of blocks, the mean of the block means, and the estimated
//! standard error. Plotting or extrapolating the result is left to the
//! caller; see [`output::terminal`] for a ready-made text rendering.
//!
//! ## Quick start
//!
//! ```
//! use block_average::BlockAverage;
//!
//! let x: Vec<f64> = (1..=10).map(|i| i as f64).collect();
//!
//! // Evaluate explicit block sizes
//! let table = BlockAverage::new().block_sizes([2, 3]).compute(&x)?;
//! for row in &table {
//!     println!("b={} m={} mean={:.3}", row.block_size, row.num_blocks, row.mean);
//! }
//!
//! // Or let the crate sweep block counts 5..=N
//! let table = BlockAverage::new().compute(&x)?;
//! assert!(!table.is_empty());
//! # Ok::<(), block_average::BlockingError>(())
//! ```
//!
//! ## Undefined standard errors
//!
//! When a candidate block size equals the sequence length there is exactly
//! one block, and the standard error of a single block mean is undefined.
//! Such rows carry `se: None` rather than a fabricated number; the rest of
//! the table is unaffected.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod analyzer;
mod config;
mod error;
mod resolver;
mod result;

// Functional modules
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analyzer::{compute_block_average, BlockAverage};
pub use config::Config;
pub use error::BlockingError;
pub use resolver::resolve_block_sizes;
pub use result::{BlockRow, BlockTable};
