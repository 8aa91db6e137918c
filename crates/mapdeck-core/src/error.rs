use crate::layers::{LayerId, ListKind, SubLayerId};

/// Errors raised while applying layer intents
#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("Unknown layer {0}")]
    UnknownLayer(LayerId),

    #[error("A layer named '{name}' already exists in {kind}")]
    DuplicateName { kind: ListKind, name: String },

    #[error("New order for {kind} does not match the attached layers")]
    OrderMismatch { kind: ListKind },

    #[error("Layer {layer} has no sub-layer {sub_layer}")]
    UnknownSubLayer { layer: LayerId, sub_layer: SubLayerId },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Configuration persistence errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize config: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
