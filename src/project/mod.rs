//! Destination geometry for rendering a chunk grid at arbitrary sizes.

pub mod projector;
