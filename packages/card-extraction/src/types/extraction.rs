//! Extraction results and the advisory warnings attached to them.

use serde::{Deserialize, Serialize};

use super::record::CardRecord;

/// The outcome of extracting one card from one or two images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardExtraction {
    /// The canonical (and, for two images, merged) record
    pub record: CardRecord,

    /// Advisory warnings; none of them invalidate the record
    #[serde(default)]
    pub warnings: Vec<ExtractionWarning>,
}

impl CardExtraction {
    /// Create an extraction with no warnings.
    pub fn new(record: CardRecord) -> Self {
        Self {
            record,
            warnings: Vec::new(),
        }
    }

    /// Whether the extraction found nothing that looks like a card.
    pub fn is_not_a_card(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, ExtractionWarning::NotACard))
    }

    /// All warnings rendered as one caller-facing message.
    pub fn warning_message(&self) -> Option<String> {
        if self.warnings.is_empty() {
            return None;
        }
        Some(
            self.warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// A caller-visible advisory about an extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractionWarning {
    /// Both card sides name a company, but no name appears on both
    CompanyMismatch(CompanyMismatch),

    /// No field carries content; the images are probably not a card
    NotACard,
}

/// Company names seen on each card side, taglines removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMismatch {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl std::fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompanyMismatch(m) => write!(
                f,
                "Warning: The images show different company names ({}) and ({}). \
                 They may not be two sides of the same visiting card.",
                m.left.join(", "),
                m.right.join(", ")
            ),
            Self::NotACard => write!(
                f,
                "Warning: No visiting card information was extracted from the image(s). \
                 The uploaded image(s) may not be a visiting card."
            ),
        }
    }
}
