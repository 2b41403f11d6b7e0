//! A2UI error types and their JSON-RPC error codes.
//!
//! Tagging and detecting A2UI parts never fails; these errors come from the
//! negotiation side of the extension: schema handling, catalog resolution
//! and the send-to-client tool.

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 error codes
// ---------------------------------------------------------------------------

/// Invalid JSON was received.
pub const PARSE_ERROR: i64 = -32700;

/// Invalid method parameter(s).
pub const INVALID_PARAMS: i64 = -32602;

/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

// ---------------------------------------------------------------------------
// A2uiError enum
// ---------------------------------------------------------------------------

/// Unified error type for the A2UI extension.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum A2uiError {
    /// The A2UI schema supplied by a provider was empty.
    #[error("A2UI schema is empty")]
    EmptySchema,

    /// The A2UI schema does not have the expected shape.
    #[error("Invalid A2UI schema: {0}")]
    InvalidSchema(String),

    /// A JSON document (schema, catalog or tool argument) failed to parse.
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A required tool argument was missing or empty.
    #[error("missing required arg {0}")]
    MissingArgument(String),

    /// An A2UI payload does not match the A2UI schema.
    #[error("A2UI payload validation failed at item {index}: {message}")]
    SchemaValidation {
        /// Index of the offending item in the payload array.
        index: usize,
        /// The schema validator's messages for that item.
        message: String,
    },

    /// No client capabilities were sent and no default catalog is configured.
    #[error("Client UI capabilities not provided")]
    MissingClientCapabilities,

    /// The client named a supported catalog and also sent an inline one.
    #[error("Cannot set both supportedCatalogIds and inlineCatalogs in ClientUiCapabilities")]
    ConflictingCatalogs,

    /// The selected catalog has no local definition.
    #[error("Local component catalog with URI {0} not found")]
    CatalogNotFound(String),

    /// None of the client's catalogs are available to this agent.
    #[error("No supported catalogs found in client UI capabilities")]
    NoSupportedCatalog,

    /// Catch-all for errors that don't fit other categories.
    #[error("{0}")]
    Other(String),
}

/// Convenience result type for A2UI operations.
pub type A2uiResult<T> = Result<T, A2uiError>;

impl A2uiError {
    /// Create an `InvalidSchema` error.
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema(message.into())
    }

    /// Create a `SchemaValidation` error for the item at `index`.
    pub fn validation(index: usize, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            index,
            message: message.into(),
        }
    }

    /// Returns the JSON-RPC error code for this error variant.
    ///
    /// Problems with what the client sent map to invalid params; problems
    /// with the agent's own configuration map to internal error.
    pub fn code(&self) -> i64 {
        match self {
            A2uiError::InvalidJson(_) => PARSE_ERROR,
            A2uiError::MissingArgument(_)
            | A2uiError::SchemaValidation { .. }
            | A2uiError::MissingClientCapabilities
            | A2uiError::ConflictingCatalogs
            | A2uiError::NoSupportedCatalog => INVALID_PARAMS,
            A2uiError::EmptySchema
            | A2uiError::InvalidSchema(_)
            | A2uiError::CatalogNotFound(_)
            | A2uiError::Other(_) => INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for A2uiError {
    fn from(err: serde_json::Error) -> Self {
        A2uiError::InvalidJson(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_match_json_rpc() {
        assert_eq!(PARSE_ERROR, -32700);
        assert_eq!(INVALID_PARAMS, -32602);
        assert_eq!(INTERNAL_ERROR, -32603);
    }

    #[test]
    fn client_side_errors_are_invalid_params() {
        assert_eq!(A2uiError::ConflictingCatalogs.code(), INVALID_PARAMS);
        assert_eq!(A2uiError::NoSupportedCatalog.code(), INVALID_PARAMS);
        assert_eq!(A2uiError::validation(0, "x").code(), INVALID_PARAMS);
    }

    #[test]
    fn agent_side_errors_are_internal() {
        assert_eq!(A2uiError::EmptySchema.code(), INTERNAL_ERROR);
        assert_eq!(
            A2uiError::CatalogNotFound("urn:c".to_string()).code(),
            INTERNAL_ERROR
        );
    }

    #[test]
    fn serde_error_maps_to_invalid_json() {
        let err: A2uiError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, A2uiError::InvalidJson(_)));
        assert_eq!(err.code(), PARSE_ERROR);
    }

    #[test]
    fn display_messages() {
        assert_eq!(A2uiError::EmptySchema.to_string(), "A2UI schema is empty");
        assert_eq!(
            A2uiError::validation(2, "expected an object").to_string(),
            "A2UI payload validation failed at item 2: expected an object"
        );
        assert_eq!(
            A2uiError::CatalogNotFound("urn:c".to_string()).to_string(),
            "Local component catalog with URI urn:c not found"
        );
    }
}
