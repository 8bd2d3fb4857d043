use thiserror::Error;

use crate::validation::{MarkupError, NameError};

/// Errors that can arise while presenting a user.
#[derive(Debug, Error)]
pub enum PresenterError {
    /// The render context refused to build a tag.
    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    /// A name part failed validation.
    #[error("invalid {field}: {source}")]
    InvalidName {
        field: &'static str,
        #[source]
        source: NameError,
    },
}
