//! Merging - reconcile the records extracted from the two sides of one card.

use std::collections::HashSet;

use tracing::debug;

use super::normalize::dedup_entries;
use crate::error::{ExtractionError, Result};
use crate::types::extraction::CompanyMismatch;
use crate::types::record::{CardRecord, SocialProfiles};

/// A merged record plus the company agreement signal.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    pub record: CardRecord,

    /// Set when both sides name companies but share none
    pub company_mismatch: Option<CompanyMismatch>,
}

/// Merge two canonical records into a new one.
///
/// - list fields are concatenated (left first) and deduplicated
/// - `address` and `category` take the first side that has a value
/// - social platforms take the first side that has a value, except
///   `other`, which is concatenated like a list field
///
/// Neither input is modified.
pub fn merge_records(left: &CardRecord, right: &CardRecord) -> MergeOutcome {
    let record = CardRecord {
        company_name: union(&left.company_name, &right.company_name),
        person_name: union(&left.person_name, &right.person_name),
        contact_numbers: union(&left.contact_numbers, &right.contact_numbers),
        email_addresses: union(&left.email_addresses, &right.email_addresses),
        services: union(&left.services, &right.services),
        website: union(&left.website, &right.website),
        // One physical location, not a repeatable attribute
        address: first_present(&left.address, &right.address),
        category: first_present(&left.category, &right.category),
        social_media_profiles: merge_social(
            &left.social_media_profiles,
            &right.social_media_profiles,
        ),
    };

    let company_mismatch = company_mismatch(left, right);
    if let Some(mismatch) = &company_mismatch {
        debug!(
            left = ?mismatch.left,
            right = ?mismatch.right,
            "Card sides disagree on company name"
        );
    }

    MergeOutcome {
        record,
        company_mismatch,
    }
}

/// Merge the records of one card, one per photographed side.
///
/// Accepts exactly one or two records; a single record passes through
/// unchanged.
pub fn merge_sides(records: &[CardRecord]) -> Result<MergeOutcome> {
    match records {
        [single] => Ok(MergeOutcome {
            record: single.clone(),
            company_mismatch: None,
        }),
        [left, right] => Ok(merge_records(left, right)),
        _ => Err(ExtractionError::InvalidImageCount {
            count: records.len(),
        }),
    }
}

/// Merge social profiles platform by platform.
pub fn merge_social(left: &SocialProfiles, right: &SocialProfiles) -> SocialProfiles {
    SocialProfiles {
        facebook: first_present(&left.facebook, &right.facebook),
        instagram: first_present(&left.instagram, &right.instagram),
        linkedin: first_present(&left.linkedin, &right.linkedin),
        twitter: first_present(&left.twitter, &right.twitter),
        youtube: first_present(&left.youtube, &right.youtube),
        other: union(&left.other, &right.other),
    }
}

/// Compare the company names of two sides.
///
/// Returns the names of both sides (taglines removed) when each side has at
/// least one company name and no name, compared trimmed and lower-cased,
/// appears on both.
pub fn company_mismatch(left: &CardRecord, right: &CardRecord) -> Option<CompanyMismatch> {
    let left_keys = company_keys(left);
    let right_keys = company_keys(right);

    if left_keys.is_empty() || right_keys.is_empty() || !left_keys.is_disjoint(&right_keys) {
        return None;
    }

    Some(CompanyMismatch {
        left: left.company_headlines(),
        right: right.company_headlines(),
    })
}

fn company_keys(record: &CardRecord) -> HashSet<String> {
    record
        .company_name
        .iter()
        .flatten()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

fn union(left: &Option<Vec<String>>, right: &Option<Vec<String>>) -> Option<Vec<String>> {
    dedup_entries(left.iter().flatten().chain(right.iter().flatten()))
}

fn first_present<T: Clone>(left: &Option<T>, right: &Option<T>) -> Option<T> {
    left.as_ref().or(right.as_ref()).cloned()
}
