//! Error types for Gazette.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Rust uses the Debug trait to show errors when they're returned from main,
                    // but thiserror renders through Display. This redirects Debug to Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

/// The single failure mode of the resolver: the requested identifier
/// matches no article. Malformed identifiers (no leading digits,
/// negative values, out-of-range values) funnel into this same error
/// rather than a distinct kind.
#[derive(Error)]
pub enum ResolveError {
    #[error("No article matches identifier `{raw_id}`")]
    ArticleNotFound { raw_id: String },
}

#[derive(Error)]
pub enum ContentError {
    #[error("Failed to read article collection from {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse article collection from {path}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum GazetteError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ResolveError, ContentError);
