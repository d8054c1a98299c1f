use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Storage backend types
///
/// Selected through `STORAGE_BACKEND`. `Gcs` and `S3` are served by object_store,
/// `Local` maps buckets onto directories below a base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Gcs,
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gcs" | "gs" => Ok(StorageBackend::Gcs),
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            _ => Err(anyhow::anyhow!("Invalid storage backend: {}", s)),
        }
    }
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            StorageBackend::Gcs => write!(f, "gcs"),
            StorageBackend::S3 => write!(f, "s3"),
            StorageBackend::Local => write!(f, "local"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_backends() {
        assert_eq!("GCS".parse::<StorageBackend>().unwrap(), StorageBackend::Gcs);
        assert_eq!("gs".parse::<StorageBackend>().unwrap(), StorageBackend::Gcs);
        assert_eq!("s3".parse::<StorageBackend>().unwrap(), StorageBackend::S3);
        assert_eq!("local".parse::<StorageBackend>().unwrap(), StorageBackend::Local);
        assert!("nfs".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for backend in [StorageBackend::Gcs, StorageBackend::S3, StorageBackend::Local] {
            assert_eq!(backend.to_string().parse::<StorageBackend>().unwrap(), backend);
        }
    }
}
