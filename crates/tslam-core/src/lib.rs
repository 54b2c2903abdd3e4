//! Shared data model for the tslam Na'vi morphological analyzer.
//!
//! This crate holds the value types passed between the dictionary layer and
//! the morphology engine:
//!
//! - [`entry`] -- dictionary rows ([`entry::HeadwordEntry`]) and
//!   part-of-speech classification
//! - [`affix`] -- per-analysis affix bookkeeping ([`affix::AffixRecord`],
//!   [`affix::ResolvedWord`])
//!
//! It contains no morphological logic of its own.

pub mod affix;
pub mod entry;

/// Maximum number of characters in a single query token.
///
/// Tokens longer than this are skipped before any morphological work runs;
/// the rewrite search cost grows with token length and real Na'vi words are
/// far shorter than this.
pub const MAX_TOKEN_CHARS: usize = 50;
