use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// A presence frame that could not be turned into a message.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing field '{field}' in '{kind}' message")]
    MissingField { kind: String, field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum PresenceError {
    #[error("connection failed: {0}")]
    ConnectFailed(String),

    #[error("connection timed out after {0}s")]
    Timeout(u64),

    #[error("invalid channel url: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("draw failed: {0}")]
    DrawFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlobeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Presence(#[from] PresenceError),

    #[error(transparent)]
    Renderer(#[from] RendererError),
}
