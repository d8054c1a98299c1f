//! Blob locations addressed as `scheme://bucket/key`.

use std::fmt;
use std::str::FromStr;

const SCHEME_SEPARATOR: &str = "://";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
    #[error("Invalid storage URI '{0}': expected scheme://bucket/key")]
    MissingScheme(String),

    #[error("Invalid storage URI '{0}': bucket is empty")]
    EmptyBucket(String),

    #[error("Invalid storage URI '{0}': object key is empty")]
    EmptyKey(String),
}

/// A blob addressed by bucket and key.
///
/// The scheme is kept so that [`StorageLocator::to_uri`] reproduces the parsed
/// URI exactly. Keys keep their `/` separators; only the first separator after
/// the scheme splits bucket from key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageLocator {
    scheme: String,
    bucket: String,
    key: String,
}

impl StorageLocator {
    pub fn new(
        scheme: impl Into<String>,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, LocatorError> {
        let locator = Self {
            scheme: scheme.into(),
            bucket: bucket.into(),
            key: key.into(),
        };
        if locator.scheme.is_empty() {
            return Err(LocatorError::MissingScheme(locator.to_uri()));
        }
        if locator.bucket.is_empty() {
            return Err(LocatorError::EmptyBucket(locator.to_uri()));
        }
        if locator.key.is_empty() {
            return Err(LocatorError::EmptyKey(locator.to_uri()));
        }
        Ok(locator)
    }

    /// Parse `scheme://bucket/key...`.
    pub fn parse(uri: &str) -> Result<Self, LocatorError> {
        let uri = uri.trim();
        let (scheme, rest) = uri
            .split_once(SCHEME_SEPARATOR)
            .ok_or_else(|| LocatorError::MissingScheme(uri.to_string()))?;
        if scheme.is_empty() {
            return Err(LocatorError::MissingScheme(uri.to_string()));
        }

        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        if bucket.is_empty() {
            return Err(LocatorError::EmptyBucket(uri.to_string()));
        }
        if key.is_empty() {
            return Err(LocatorError::EmptyKey(uri.to_string()));
        }

        Ok(Self {
            scheme: scheme.to_string(),
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last path component of the key.
    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Same scheme and bucket, different key.
    pub fn with_key(&self, key: impl Into<String>) -> Result<Self, LocatorError> {
        Self::new(self.scheme.clone(), self.bucket.clone(), key)
    }

    pub fn to_uri(&self) -> String {
        format!("{}{}{}/{}", self.scheme, SCHEME_SEPARATOR, self.bucket, self.key)
    }
}

impl fmt::Display for StorageLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for StorageLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_bucket_on_first_separator() {
        let locator = StorageLocator::parse("gs://media-bucket/uploads/2024/video.mp4").unwrap();
        assert_eq!(locator.scheme(), "gs");
        assert_eq!(locator.bucket(), "media-bucket");
        assert_eq!(locator.key(), "uploads/2024/video.mp4");
        assert_eq!(locator.file_name(), "video.mp4");
    }

    #[test]
    fn round_trip_reproduces_uri() {
        for uri in [
            "gs://bucket/video.mp4",
            "s3://bucket/a/b/c/clip.final.mov",
            "gs://bucket/dir//double-slash.mp4",
            "gs://bucket/trailing/",
        ] {
            let locator = StorageLocator::parse(uri).unwrap();
            assert_eq!(locator.to_uri(), uri);
            assert_eq!(locator.to_string(), uri);
        }
    }

    #[test]
    fn rebuilt_locator_matches_parsed() {
        let parsed = StorageLocator::parse("gs://b/k/v.mp4").unwrap();
        let rebuilt = StorageLocator::new(parsed.scheme(), parsed.bucket(), parsed.key()).unwrap();
        assert_eq!(parsed, rebuilt);
    }

    #[test]
    fn rejects_malformed_uris() {
        assert!(matches!(
            StorageLocator::parse("bucket/video.mp4"),
            Err(LocatorError::MissingScheme(_))
        ));
        assert!(matches!(
            StorageLocator::parse("://bucket/video.mp4"),
            Err(LocatorError::MissingScheme(_))
        ));
        assert!(matches!(
            StorageLocator::parse("gs:///video.mp4"),
            Err(LocatorError::EmptyBucket(_))
        ));
        assert!(matches!(
            StorageLocator::parse("gs://bucket"),
            Err(LocatorError::EmptyKey(_))
        ));
        assert!(matches!(
            StorageLocator::parse("gs://bucket/"),
            Err(LocatorError::EmptyKey(_))
        ));
    }

    #[test]
    fn with_key_keeps_bucket_and_scheme() {
        let locator = StorageLocator::parse("s3://bucket/in/video.mp4").unwrap();
        let other = locator.with_key("in/video_part1.mp4").unwrap();
        assert_eq!(other.to_uri(), "s3://bucket/in/video_part1.mp4");
        assert!(locator.with_key("").is_err());
    }
}
