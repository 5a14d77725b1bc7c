//! Emptiness check - does a record look like a real card at all?

use serde_json::Value;

use crate::types::record::{CardRecord, SocialProfiles};

/// Whether a value carries meaningful content.
///
/// `None` has none, a string has content when it is not blank, and a
/// container has content when any element does.
pub trait HasContent {
    fn has_content(&self) -> bool;
}

impl HasContent for str {
    fn has_content(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl HasContent for String {
    fn has_content(&self) -> bool {
        self.as_str().has_content()
    }
}

impl<T: HasContent> HasContent for Option<T> {
    fn has_content(&self) -> bool {
        self.as_ref().is_some_and(HasContent::has_content)
    }
}

impl<T: HasContent> HasContent for Vec<T> {
    fn has_content(&self) -> bool {
        self.iter().any(HasContent::has_content)
    }
}

impl HasContent for SocialProfiles {
    fn has_content(&self) -> bool {
        [
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.twitter,
            &self.youtube,
            &self.other,
        ]
        .into_iter()
        .any(HasContent::has_content)
    }
}

impl HasContent for CardRecord {
    fn has_content(&self) -> bool {
        [
            &self.company_name,
            &self.person_name,
            &self.contact_numbers,
            &self.email_addresses,
            &self.address,
            &self.website,
            &self.services,
        ]
        .into_iter()
        .any(HasContent::has_content)
            || self.category.has_content()
            || self.social_media_profiles.has_content()
    }
}

impl HasContent for Value {
    fn has_content(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => s.has_content(),
            Value::Array(items) => items.iter().any(HasContent::has_content),
            Value::Object(map) => map.values().any(HasContent::has_content),
            Value::Bool(b) => *b,
            Value::Number(_) => true,
        }
    }
}

/// Whether a record carries no card information at all.
pub fn is_empty_extraction(record: &CardRecord) -> bool {
    !record.has_content()
}
