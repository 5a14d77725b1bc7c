//! Normalization - turn one weakly-typed model extraction into a [`CardRecord`].
//!
//! The model returns any field as a bare string, an array, or `null`, and
//! not always the same way twice. Two total functions cover every shape:
//! [`normalize_multi`] for list fields and [`normalize_single`] for the one
//! scalar field (`category`). Unexpected shapes degrade to `None`; only a
//! non-object top level is an error.

use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::error::{ExtractionError, Result};
use crate::types::record::{CardRecord, SocialProfiles};

/// Normalize a list field.
///
/// Scalars become one-element lists. Entries are trimmed; blank entries and
/// entries that are not strings or numbers are dropped; duplicates are
/// removed case-insensitively, keeping the first occurrence. Returns `None`
/// when nothing survives.
pub fn normalize_multi(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => dedup_entries(items.iter().filter_map(entry_text)),
        other => dedup_entries(entry_text(other)),
    }
}

/// Normalize a scalar field.
///
/// A list collapses to its first entry with content. Returns `None` for
/// blank strings, empty lists, and any other shape.
pub fn normalize_single(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(entry_text),
        other => entry_text(other),
    }
}

/// Normalize the `social_media_profiles` object.
///
/// Each platform is a list field. A missing or non-object value yields a
/// record with every platform `None`.
pub fn normalize_social(value: &Value) -> SocialProfiles {
    let Some(map) = value.as_object() else {
        return SocialProfiles::default();
    };

    SocialProfiles {
        facebook: normalize_multi(field(map, "facebook")),
        instagram: normalize_multi(field(map, "instagram")),
        linkedin: normalize_multi(field(map, "linkedin")),
        twitter: normalize_multi(field(map, "twitter")),
        youtube: normalize_multi(field(map, "youtube")),
        other: normalize_multi(field(map, "other")),
    }
}

/// Normalize a parsed model extraction into a canonical record.
///
/// `company_quote` is folded into the first company name and does not
/// appear in the output.
pub fn normalize_record(value: &Value) -> Result<CardRecord> {
    let map = value
        .as_object()
        .ok_or(ExtractionError::InvalidRecordShape {
            found: json_kind(value),
        })?;

    let quote = normalize_single(field(map, "company_quote"));

    Ok(CardRecord {
        company_name: absorb_company_quote(
            normalize_multi(field(map, "company_name")),
            quote.as_deref(),
        ),
        person_name: normalize_multi(field(map, "person_name")),
        contact_numbers: normalize_multi(field(map, "contact_numbers")),
        email_addresses: normalize_multi(field(map, "email_addresses")),
        address: normalize_multi(field(map, "address")),
        services: normalize_multi(field(map, "services")),
        website: normalize_multi(field(map, "website")),
        category: normalize_single(field(map, "category")),
        social_media_profiles: normalize_social(field(map, "social_media_profiles")),
    })
}

/// Fold a company tagline into the first company name.
///
/// The quote is appended after a newline unless the first name already
/// contains it. With no company name, the quote becomes the only entry.
/// The folded list is deduplicated again.
pub fn absorb_company_quote(names: Option<Vec<String>>, quote: Option<&str>) -> Option<Vec<String>> {
    let Some(quote) = quote else {
        return names;
    };

    match names {
        Some(mut names) => {
            if let Some(first) = names.first_mut() {
                if !first.contains(quote) {
                    *first = format!("{}\n{}", first, quote);
                }
            }
            dedup_entries(names)
        }
        None => Some(vec![quote.to_string()]),
    }
}

/// Trim and deduplicate entries, case-insensitively, keeping first occurrences.
///
/// Returns `None` when no non-blank entry remains.
pub fn dedup_entries<I, S>(entries: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for entry in entries {
        let trimmed = entry.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            kept.push(trimmed.to_string());
        }
    }

    (!kept.is_empty()).then_some(kept)
}

/// Text of a content-bearing scalar: a non-blank string or a number.
fn entry_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn field<'a>(map: &'a Map<String, Value>, name: &str) -> &'a Value {
    map.get(name).unwrap_or(&Value::Null)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
