//! # Songkin Core Engine
//!
//! Song matching and cluster-membership recommendation over an immutable
//! catalog snapshot, including:
//! - Catalog and Song data model
//! - Two-phase title resolution (exact match, then literal substring)
//! - Cluster expansion with self-exclusion and a fixed result cap
//! - Typed recommendation errors
//!
//! Everything here is synchronous, side-effect-free, and safe to call
//! concurrently: the catalog is never mutated after construction.

pub mod catalog;
pub mod error;
pub mod matcher;

pub use catalog::{Catalog, Song};
pub use error::RecommendError;
pub use matcher::{recommend, Recommendation, MAX_RECOMMENDATIONS};
