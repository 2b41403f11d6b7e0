//! Component catalog resolution.
//!
//! An A2UI schema leaves the set of renderable components open; a catalog
//! fills it in. Which catalog to use depends on the client: it either names
//! catalogs it can render (`supportedCatalogIds`) or sends one inline
//! (`inlineCatalogs`). [`CatalogResolver`] picks the catalog for a request
//! and assembles the schema the agent's LLM is given.

use serde_json::Value;

use super::capabilities::ClientCapabilities;
use super::schema::inject_catalog;
use crate::error::{A2uiError, A2uiResult};

/// The catalog chosen for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCatalog {
    /// Catalog id, or `None` for a client inline catalog.
    pub uri: Option<String>,
    /// Catalog definition.
    pub catalog: Value,
}

/// Chooses a component catalog per request and builds the matching schema.
///
/// Local catalogs are preferred in registration order: when a client
/// supports several, the first one registered wins.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{CatalogResolver, ClientCapabilities, STANDARD_CATALOG_ID};
///
/// let schema = r#"{"properties": {"surfaceUpdate": {"properties": {"components":
///     {"items": {"properties": {"component": {"properties": {}}}}}}}}}"#;
/// let resolver = CatalogResolver::new(schema)?
///     .with_local_catalog(STANDARD_CATALOG_ID, r#"{"Text": {}}"#)?;
///
/// let caps = ClientCapabilities::with_catalog_ids([STANDARD_CATALOG_ID]);
/// let (_schema, uri) = resolver.load_a2ui_schema(Some(&caps))?;
/// assert_eq!(uri.as_deref(), Some(STANDARD_CATALOG_ID));
/// # Ok::<(), a2ui_a2a::A2uiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    a2ui_schema: Value,
    local_catalogs: Vec<(String, Value)>,
    default_catalog_uri: Option<String>,
}

impl CatalogResolver {
    /// Create a resolver around the base A2UI schema document.
    pub fn new(a2ui_schema_json: &str) -> A2uiResult<Self> {
        Ok(Self {
            a2ui_schema: serde_json::from_str(a2ui_schema_json)?,
            local_catalogs: Vec::new(),
            default_catalog_uri: None,
        })
    }

    /// Register a catalog definition available locally under `uri`.
    ///
    /// Registering the same uri again replaces its definition but keeps its
    /// place in the preference order.
    pub fn with_local_catalog(
        mut self,
        uri: impl Into<String>,
        catalog_json: &str,
    ) -> A2uiResult<Self> {
        let uri = uri.into();
        let catalog: Value = serde_json::from_str(catalog_json)?;
        match self.local_catalogs.iter_mut().find(|(u, _)| *u == uri) {
            Some(entry) => entry.1 = catalog,
            None => self.local_catalogs.push((uri, catalog)),
        }
        Ok(self)
    }

    /// Catalog to use when the client sends no capabilities at all.
    pub fn with_default_catalog(mut self, uri: impl Into<String>) -> Self {
        self.default_catalog_uri = Some(uri.into());
        self
    }

    /// Ids of the local catalogs, in preference order.
    pub fn catalog_ids(&self) -> impl Iterator<Item = &str> {
        self.local_catalogs.iter().map(|(uri, _)| uri.as_str())
    }

    fn local_catalog(&self, uri: &str) -> Option<&Value> {
        self.local_catalogs
            .iter()
            .find(|(u, _)| u == uri)
            .map(|(_, catalog)| catalog)
    }

    /// Pick the catalog for a client.
    ///
    /// # Errors
    ///
    /// - [`A2uiError::MissingClientCapabilities`]: no capabilities and no default
    /// - [`A2uiError::ConflictingCatalogs`]: a supported local catalog and an inline one
    /// - [`A2uiError::CatalogNotFound`]: the default catalog is not registered
    /// - [`A2uiError::NoSupportedCatalog`]: nothing usable
    pub fn resolve(&self, client: Option<&ClientCapabilities>) -> A2uiResult<ResolvedCatalog> {
        let (catalog_uri, inline_catalog) = match client {
            Some(caps) => {
                let uri = self
                    .catalog_ids()
                    .find(|uri| caps.supports_catalog(uri))
                    .map(str::to_string);
                (uri, caps.inline_catalog()?)
            }
            None => match &self.default_catalog_uri {
                Some(default) => {
                    tracing::info!(
                        catalog = %default,
                        "using default catalog since client UI capabilities not found"
                    );
                    (Some(default.clone()), None)
                }
                None => return Err(A2uiError::MissingClientCapabilities),
            },
        };

        match (catalog_uri, inline_catalog) {
            (Some(_), Some(_)) => Err(A2uiError::ConflictingCatalogs),
            (Some(uri), None) => {
                let catalog = self
                    .local_catalog(&uri)
                    .cloned()
                    .ok_or_else(|| A2uiError::CatalogNotFound(uri.clone()))?;
                tracing::info!(catalog = %uri, "loading local component catalog");
                Ok(ResolvedCatalog {
                    uri: Some(uri),
                    catalog,
                })
            }
            (None, Some(catalog)) => {
                tracing::info!("loading inline component catalog");
                Ok(ResolvedCatalog { uri: None, catalog })
            }
            (None, None) => Err(A2uiError::NoSupportedCatalog),
        }
    }

    /// Build the A2UI schema for a client, returning it with the catalog id used.
    pub fn load_a2ui_schema(
        &self,
        client: Option<&ClientCapabilities>,
    ) -> A2uiResult<(Value, Option<String>)> {
        let result = self.resolve(client).and_then(|resolved| {
            let mut schema = self.a2ui_schema.clone();
            inject_catalog(&mut schema, resolved.catalog)?;
            Ok((schema, resolved.uri))
        });
        if let Err(ref e) = result {
            tracing::error!(error = %e, client = ?client, "failed to load A2UI schema");
        }
        result
    }
}
