//! Business Card Contact Extraction Library
//!
//! Turns the free-text answer of a vision model into one canonical contact
//! record per business card.
//!
//! # Pipeline
//!
//! - Strip markdown code fences from the model text and parse the JSON
//! - Normalize every field (lists trimmed and de-duplicated, category as a
//!   single string, social profiles per platform, `null` for anything empty)
//! - Merge the records of a card's front and back
//! - Flag cards whose sides name different companies, and photos that are
//!   not cards at all
//!
//! # Usage
//!
//! ```rust,ignore
//! use card_extraction::{CardExtractor, CardImage};
//! use card_extraction::testing::MockVision;
//!
//! let extractor = CardExtractor::new(MockVision::new());
//!
//! let front = CardImage::new(front_bytes, "image/jpeg").with_source("front.jpg");
//! let back = CardImage::new(back_bytes, "image/jpeg").with_source("back.jpg");
//!
//! let extraction = extractor.extract(&[front, back]).await?;
//! if let Some(warning) = extraction.warning_message() {
//!     println!("{warning}");
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (VisionModel, ObjectStore)
//! - [`types`] - Records, images, warnings, object locations
//! - [`pipeline`] - Parsing, normalization, merging, emptiness check
//! - [`stores`] - Object store implementations (memory, local filesystem)
//! - [`testing`] - Mock vision model for tests

pub mod error;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod ai;

// Re-export core types at crate root
pub use error::{ExtractionError, Result};
pub use traits::{store::ObjectStore, vision::VisionModel};
pub use types::{
    config::ExtractorConfig,
    extraction::{CardExtraction, CompanyMismatch, ExtractionWarning},
    image::CardImage,
    location::{ObjectLocation, RecordIds, RESULT_FILE_NAME},
    record::{CardRecord, SocialProfiles},
};

// Re-export pipeline components
pub use pipeline::{
    // Extractor
    record_from_response, CardExtractor, CARD_EXTRACTION_PROMPT,
    // Parsing and normalization
    normalize_record, parse_response, strip_code_fence,
    // Merging
    merge_records, merge_sides, MergeOutcome,
    // Emptiness
    is_empty_extraction, HasContent,
};

// Re-export stores
pub use stores::{LocalObjectStore, MemoryObjectStore};

#[cfg(feature = "openai")]
pub use ai::OpenAIVision;

// Re-export testing utilities
pub use testing::MockVision;
