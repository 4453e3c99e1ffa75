use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config I/O error: {0}")]
    Io(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("path error: {0}")]
    PathError(String),
}

/// Failures of the key/value persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),

    #[error("store read error for '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("store write error for '{key}': {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ParleyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid attachment: {0}")]
    Attachment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::Io("cannot write /etc/parley/config.toml".into());
        assert_eq!(
            err.to_string(),
            "config I/O error: cannot write /etc/parley/config.toml"
        );

        let err = ConfigError::ValidationError("session.context_window = 99".into());
        assert_eq!(
            err.to_string(),
            "config validation error: session.context_window = 99"
        );
    }

    #[test]
    fn store_error_display() {
        let err = StoreError::InvalidKey("../etc".into());
        assert_eq!(err.to_string(), "invalid store key: \"../etc\"");

        let err = StoreError::Write {
            key: "chat_history".into(),
            reason: "disk full".into(),
        };
        assert_eq!(
            err.to_string(),
            "store write error for 'chat_history': disk full"
        );
    }

    #[test]
    fn parley_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ParleyError = config_err.into();
        assert!(matches!(err, ParleyError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn parley_error_from_store() {
        let store_err = StoreError::Read {
            key: "chat_persona".into(),
            reason: "permission denied".into(),
        };
        let err: ParleyError = store_err.into();
        assert!(matches!(err, ParleyError::Store(_)));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn parley_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ParleyError = io_err.into();
        assert!(matches!(err, ParleyError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn parley_error_other_variants() {
        let err = ParleyError::Network("timeout".into());
        assert_eq!(err.to_string(), "network error: timeout");

        let err = ParleyError::Attachment("notes.txt is not an image".into());
        assert_eq!(err.to_string(), "invalid attachment: notes.txt is not an image");
    }
}
