/// Targets for a best-effort cleanup call. Either field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupRequest {
    pub original_uri: Option<String>,
    pub part_uris: Vec<String>,
}

impl CleanupRequest {
    pub fn new(original_uri: Option<String>, part_uris: Vec<String>) -> Self {
        Self {
            original_uri,
            part_uris,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.original_uri.is_none() && self.part_uris.is_empty()
    }

    pub fn target_count(&self) -> usize {
        self.part_uris.len() + usize::from(self.original_uri.is_some())
    }
}

/// Aggregate outcome of a cleanup call. Individual failures are only logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupResult {
    pub deleted_count: usize,
}

impl CleanupResult {
    pub fn message(&self) -> String {
        format!("Cleanup complete. Deleted {} files.", self.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_has_no_targets() {
        let request = CleanupRequest::default();
        assert!(request.is_empty());
        assert_eq!(request.target_count(), 0);
    }

    #[test]
    fn target_count_includes_original() {
        let request = CleanupRequest::new(
            Some("gs://b/v.mp4".to_string()),
            vec!["gs://b/v_part1.mp4".to_string()],
        );
        assert_eq!(request.target_count(), 2);
    }

    #[test]
    fn message_reports_count() {
        let result = CleanupResult { deleted_count: 3 };
        assert_eq!(result.message(), "Cleanup complete. Deleted 3 files.");
    }
}
