//! Border scanning: marker runs on the four edges into a [`crate::PatchModel`].

pub mod border;
