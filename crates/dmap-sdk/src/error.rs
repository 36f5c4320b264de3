use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid deployment pack: {0}")]
    Deployment(String),

    #[error("no signer configured; writes are unavailable")]
    NoSigner,

    #[error("registry error: {0}")]
    Registry(#[from] dmap_registry::RegistryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
