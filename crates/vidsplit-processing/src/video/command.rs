//! Validation for external binary paths handed to `tokio::process::Command`.

/// Reject executable paths containing shell metacharacters or traversal.
pub(crate) fn validate_executable(path: &str) -> Result<(), String> {
    if path.trim().is_empty() {
        return Err("executable path is empty".to_string());
    }

    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(format!("path contains dangerous characters: {}", path));
    }

    if path.contains("..") {
        return Err(format!("path contains directory traversal: {}", path));
    }

    if !path
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '\\' | ':'))
    {
        return Err(format!("path contains unsafe characters: {}", path));
    }

    Ok(())
}
