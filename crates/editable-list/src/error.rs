//! Error types for the editable list element.

use thiserror::Error;

/// Primary error type for list configuration, lifecycle and DOM operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ListError {
    /// The `variant` attribute named a theme that does not exist.
    #[error("unknown list variant")]
    UnknownVariant {
        /// Attribute value provided by the host.
        value: String,
    },
    /// A list mutation was requested before the element was wired.
    #[error("list interactions are not wired yet")]
    NotWired,
    /// Instance state was already borrowed by a running handler.
    #[error("list state is busy")]
    Busy,
    /// The host element has no owner document.
    #[error("browser document unavailable")]
    MissingDocument,
    /// A control expected inside the shadow root was not found.
    #[error("missing list part")]
    MissingPart {
        /// CSS selector of the missing part.
        part: &'static str,
    },
    /// A DOM call raised a JS exception.
    #[error("dom operation failed")]
    Dom {
        /// Name of the DOM operation.
        operation: &'static str,
        /// Debug rendering of the thrown value.
        detail: String,
    },
}

impl ListError {
    /// Build a [`ListError::Dom`] from any debuggable JS failure.
    #[must_use]
    pub fn dom(operation: &'static str, detail: impl std::fmt::Debug) -> Self {
        Self::Dom {
            operation,
            detail: format!("{detail:?}"),
        }
    }
}

/// Convenience alias for list results.
pub type ListResult<T> = Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::ListError;

    #[test]
    fn dom_helper_captures_operation_and_detail() {
        let err = ListError::dom("append_child", "HierarchyRequestError");
        assert_eq!(
            err,
            ListError::Dom {
                operation: "append_child",
                detail: "\"HierarchyRequestError\"".to_string(),
            }
        );
        assert_eq!(err.to_string(), "dom operation failed");
    }
}
