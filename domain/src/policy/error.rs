//! Policy error types

use thiserror::Error;

/// Problems with a policy file itself (not with a call it rejects)
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("docker executor requires an image")]
    DockerRequiresImage,

    #[error("invalid pattern for '{action}.{arg}': {source}")]
    InvalidPattern {
        action: String,
        arg: String,
        #[source]
        source: regex::Error,
    },
}
