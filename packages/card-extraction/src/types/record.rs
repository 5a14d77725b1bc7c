//! The canonical card record.

use serde::{Deserialize, Serialize};

/// Canonical contact data extracted from one card (or one merged pair of
/// card sides).
///
/// Every multi-value field is `None` or a non-empty, deduplicated list.
/// `None` serializes as `null`, which downstream consumers read as
/// "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    /// Company names; an entry may carry a tagline after a `\n`
    pub company_name: Option<Vec<String>>,
    pub person_name: Option<Vec<String>>,
    pub contact_numbers: Option<Vec<String>>,
    pub email_addresses: Option<Vec<String>>,
    pub address: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    pub website: Option<Vec<String>>,
    /// Single business category, never a list
    pub category: Option<String>,
    pub social_media_profiles: SocialProfiles,
}

/// Social media profile URLs, grouped by platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialProfiles {
    pub facebook: Option<Vec<String>>,
    pub instagram: Option<Vec<String>>,
    pub linkedin: Option<Vec<String>>,
    pub twitter: Option<Vec<String>>,
    pub youtube: Option<Vec<String>>,
    /// Profiles on any other platform
    pub other: Option<Vec<String>>,
}

impl CardRecord {
    /// Company names with any embedded tagline removed.
    pub fn company_headlines(&self) -> Vec<String> {
        self.company_name
            .iter()
            .flatten()
            .map(|name| headline(name).to_string())
            .collect()
    }
}

/// The part of a company entry before its embedded tagline.
pub(crate) fn headline(name: &str) -> &str {
    name.split('\n').next().unwrap_or(name).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let value = serde_json::to_value(CardRecord::default()).unwrap();

        assert_eq!(value["company_name"], json!(null));
        assert_eq!(value["category"], json!(null));
        assert_eq!(value["social_media_profiles"]["other"], json!(null));
        assert!(value.get("company_quote").is_none());
    }

    #[test]
    fn test_company_headlines_drop_tagline() {
        let record = CardRecord {
            company_name: Some(vec![
                "Acme\nBest Widgets".to_string(),
                "Globex".to_string(),
            ]),
            ..Default::default()
        };

        assert_eq!(record.company_headlines(), vec!["Acme", "Globex"]);
    }
}
