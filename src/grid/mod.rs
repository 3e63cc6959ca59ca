//! Interior partitioning into stretch-classified chunks.

/// Content-uniformity check for stretching chunks.
pub mod bad_patch;
/// Axis segmentation, chunk grid and corruption flags.
pub mod chunks;
