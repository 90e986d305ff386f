//! Statistical core of the block-average method.
//!
//! A correlated sequence is partitioned into contiguous blocks; the
//! block means are treated as approximately independent samples, so their
//! spread estimates the standard error of the overall mean. Evaluating
//! this across a range of block sizes shows how the estimate converges as
//! blocks grow past the correlation length.

mod blocking;

pub use blocking::block_statistics;
