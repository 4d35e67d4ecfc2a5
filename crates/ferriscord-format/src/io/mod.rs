use crate::message::Message;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid message file {path}: {source}")]
    InvalidMessages {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Load a JSON array of messages, in file order
pub fn load_messages(path: &Path) -> Result<Vec<Message>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let messages: Vec<Message> =
        serde_json::from_str(&content).map_err(|source| IoError::InvalidMessages {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} message(s) from {}", messages.len(), path.display());
    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_messages_success() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "messages.json",
            r#"[
                {"id": "1", "content": "hi", "author": {"id": "u1", "username": "Ann"},
                 "timestamp": "2024-01-15T10:30:00Z"},
                {"id": "2", "content": "**yo**", "author": {"id": "u2", "username": "Ben"},
                 "timestamp": "2024-01-15T10:31:00Z"}
            ]"#,
        );

        let messages = load_messages(&path).unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "**yo**");
        assert!(messages[0].reactions.is_empty());
    }

    #[test]
    fn test_load_messages_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_messages(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_load_messages_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "[{\"id\": ");

        let err = load_messages(&path).unwrap_err();
        assert!(matches!(err, IoError::InvalidMessages { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
