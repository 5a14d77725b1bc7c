//! Extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Response parsing (fence stripping, JSON decoding)
//! - Normalization into a canonical [`CardRecord`](crate::types::record::CardRecord)
//! - Merging the records of a card's two sides
//! - The "is this a card at all" check

pub mod emptiness;
pub mod extractor;
pub mod merge;
pub mod normalize;
pub mod parse;
pub mod prompts;

pub use emptiness::{is_empty_extraction, HasContent};
pub use extractor::{record_from_response, CardExtractor};
pub use merge::{company_mismatch, merge_records, merge_sides, merge_social, MergeOutcome};
pub use normalize::{
    absorb_company_quote, dedup_entries, normalize_multi, normalize_record, normalize_single,
    normalize_social,
};
pub use parse::{parse_response, strip_code_fence};
pub use prompts::CARD_EXTRACTION_PROMPT;
