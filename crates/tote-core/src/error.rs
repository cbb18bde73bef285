use thiserror::Error;

/// Errors at the runtime-checked container boundary.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("type mismatch: expected {expected}, got {value:?}")]
    TypeMismatch {
        expected: &'static str,
        value: String,
    },

    #[error("unknown element kind '{0}'")]
    UnknownKind(String),
}

/// RegistryError は GreeterRegistry の操作エラー
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("greeter '{0}' is already registered")]
    AlreadyRegistered(String),
}

#[derive(Debug, Error)]
pub enum ToteError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid greeter config: {0}")]
    Config(#[from] serde_json::Error),
}
