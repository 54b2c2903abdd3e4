//! Dictionary index and translation orchestration for Na'vi.
//!
//! This crate wires the morphology engine from `tslam-morph` to a loaded
//! dictionary:
//!
//! - [`index`] -- the exact-match dictionary index with an explicit
//!   load / reload / clear lifecycle
//! - [`dialect`] -- forest/reef spelling normalization
//! - [`multiword`] -- the idiom table (fixed multi-token dictionary senses)
//! - [`translate`] -- the per-token orchestration: lookup, reconstruction,
//!   deconjugation fallback, idiom splicing, deduplication and ordering
//! - [`handle`] -- [`handle::TslamHandle`], the owning integration point
//!
//! "No match" is an expected outcome everywhere in this crate and surfaces
//! as empty result lists; [`DictError`] is reserved for a dictionary that
//! cannot be parsed or is not loaded at all.

pub mod dialect;
pub mod handle;
pub mod index;
pub mod multiword;
pub mod translate;

/// Error type for dictionary loading and orchestration failures.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    /// The dictionary data could not be parsed.
    #[error("failed to parse dictionary data: {0}")]
    Parse(#[from] serde_json::Error),

    /// No dictionary is loaded; the whole call is aborted rather than
    /// returning partial results.
    #[error("dictionary is not loaded")]
    Unavailable,
}
