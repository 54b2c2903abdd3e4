//! Morphology engine for Na'vi: affix reconstruction and reverse search.
//!
//! Two operations make up the public surface:
//!
//! - [`reconstruct::reconstruct`] -- test whether one dictionary headword can
//!   be rewritten into one observed surface string through the language's
//!   prefixes, infixes, suffixes and word-initial lenition, and record the
//!   affix chain used.
//! - [`deconjugate::deconjugate`] -- the inverse search: from a bare surface
//!   string, enumerate every root candidate reachable by repeatedly removing
//!   one recognized morpheme.
//!
//! # Architecture
//!
//! - [`tables`] -- the fixed, hand-curated morpheme tables
//! - [`lenition`] -- word-initial consonant mutation and its inverse
//! - [`reconstruct`] -- the two-pass forward engine
//! - [`deconjugate`] -- worklist search over the morpheme-removal graph
//!
//! All operations are pure string work over read-only tables; concurrent
//! callers need no synchronization.

pub mod deconjugate;
pub mod lenition;
pub mod reconstruct;
pub mod tables;

pub use deconjugate::deconjugate;
pub use reconstruct::reconstruct;
