//! Object storage locations for card images and extraction results.
//!
//! Card images are addressed by S3-style HTTP URLs. Both addressing styles
//! are accepted:
//!
//! - path style: `https://s3.us-east-1.amazonaws.com/<bucket>/<key>`
//! - virtual-hosted style: `https://<bucket>.s3.us-east-1.amazonaws.com/<key>`

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ExtractionError, Result};

/// File name of the stored extraction result, next to the first image.
pub const RESULT_FILE_NAME: &str = "extraction_result.json";

/// A bucket and key pair in an object store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

/// Identifiers encoded in an image key of the form `.../<event_id>/<info_id>/<file>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl ObjectLocation {
    /// Create a location from a bucket and key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Resolve an S3-style HTTP URL into a bucket and key.
    pub fn parse_url(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| ExtractionError::InvalidLocation {
            url: raw.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(raw).map_err(|e| invalid(&e.to_string()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("URL must start with http or https"));
        }

        let host = parsed.host_str().ok_or_else(|| invalid("URL has no host"))?;
        if !host.contains("amazonaws.com") {
            return Err(invalid("host must be an amazonaws.com endpoint"));
        }

        let path = parsed.path().trim_start_matches('/');

        let (bucket, key) = if host.starts_with("s3.") || host.starts_with("s3-") {
            path.split_once('/')
                .ok_or_else(|| invalid("path-style URL must contain a bucket and a key"))?
        } else if let Some(idx) = host.find(".s3") {
            (&host[..idx], path)
        } else {
            return Err(invalid("could not find a bucket in the host name"));
        };

        let key = urlencoding::decode(key).map_err(|e| invalid(&e.to_string()))?;

        if bucket.is_empty() || key.is_empty() {
            return Err(invalid("URL is missing a bucket or a key"));
        }

        Ok(Self::new(bucket, key.into_owned()))
    }

    /// The key's directory, without a trailing slash.
    pub fn prefix(&self) -> Option<&str> {
        self.key.rsplit_once('/').map(|(dir, _)| dir)
    }

    /// Where the extraction result for this image is stored.
    ///
    /// One result file per directory; a later extraction overwrites it.
    pub fn result_location(&self) -> Self {
        let key = match self.prefix() {
            Some(dir) => format!("{}/{}", dir, RESULT_FILE_NAME),
            None => RESULT_FILE_NAME.to_string(),
        };
        Self::new(self.bucket.clone(), key)
    }

    /// The `info_id` and `event_id` directories above the file, if present.
    pub fn record_ids(&self) -> RecordIds {
        let parts: Vec<&str> = self.key.split('/').collect();
        let n = parts.len();

        let pick = |depth: usize| {
            (n > depth)
                .then(|| parts[n - 1 - depth])
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        RecordIds {
            info_id: pick(1),
            event_id: pick(2),
        }
    }
}

impl std::fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_virtual_hosted_url() {
        let loc = ObjectLocation::parse_url(
            "https://cards.s3.us-east-1.amazonaws.com/evt-1/info-9/front.jpg",
        )
        .unwrap();

        assert_eq!(loc.bucket, "cards");
        assert_eq!(loc.key, "evt-1/info-9/front.jpg");
    }

    #[test]
    fn test_parse_path_style_url() {
        let loc =
            ObjectLocation::parse_url("https://s3.eu-west-2.amazonaws.com/cards/a/b/back.png")
                .unwrap();

        assert_eq!(loc.bucket, "cards");
        assert_eq!(loc.key, "a/b/back.png");
    }

    #[test]
    fn test_parse_decodes_key() {
        let loc = ObjectLocation::parse_url(
            "https://cards.s3.amazonaws.com/evt/info/my%20card.jpg",
        )
        .unwrap();

        assert_eq!(loc.key, "evt/info/my card.jpg");
    }

    #[test]
    fn test_parse_rejects_foreign_host() {
        let err = ObjectLocation::parse_url("https://example.com/cards/front.jpg").unwrap_err();
        assert!(matches!(err, ExtractionError::InvalidLocation { .. }));
    }

    #[test]
    fn test_parse_rejects_non_http_scheme() {
        let err = ObjectLocation::parse_url("ftp://cards.s3.amazonaws.com/front.jpg").unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_parse_rejects_path_style_without_key() {
        assert!(ObjectLocation::parse_url("https://s3.amazonaws.com/cards").is_err());
    }

    #[test]
    fn test_result_location() {
        let loc = ObjectLocation::new("cards", "evt/info/front.jpg");
        assert_eq!(
            loc.result_location(),
            ObjectLocation::new("cards", "evt/info/extraction_result.json")
        );

        let flat = ObjectLocation::new("cards", "front.jpg");
        assert_eq!(flat.result_location().key, "extraction_result.json");
    }

    #[test]
    fn test_record_ids() {
        let ids = ObjectLocation::new("cards", "uploads/evt-7/info-3/front.jpg").record_ids();
        assert_eq!(ids.info_id.as_deref(), Some("info-3"));
        assert_eq!(ids.event_id.as_deref(), Some("evt-7"));

        let shallow = ObjectLocation::new("cards", "info-3/front.jpg").record_ids();
        assert_eq!(shallow.info_id.as_deref(), Some("info-3"));
        assert_eq!(shallow.event_id, None);

        let flat = ObjectLocation::new("cards", "front.jpg").record_ids();
        assert_eq!(flat, RecordIds::default());
    }
}
