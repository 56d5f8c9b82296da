//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel pipelines.

mod rayon_pipeline;

pub use rayon_pipeline::ParallelRayonPipeline;
