//! Extension negotiation over the `X-A2A-Extensions` header.
//!
//! A client names the extensions it wants, comma-separated, in the header;
//! the agent declares the ones it supports as `AgentExtension` entries on
//! its card. A2UI is negotiated this way, under
//! `https://a2ui.org/a2a-extension/a2ui/v0.8`.

use crate::types::{AgentCard, AgentExtension};
use std::collections::{HashMap, HashSet};

/// HTTP header for A2A extensions.
pub const HTTP_EXTENSION_HEADER: &str = "X-A2A-Extensions";

/// Collects the extension URIs named across `X-A2A-Extensions` header values.
///
/// A header may be repeated and each value may list several URIs, so every
/// value is split on commas; whitespace is trimmed and empty entries dropped.
///
/// # Example
/// ```
/// use a2ui_a2a::utils::get_requested_extensions;
///
/// let a2ui = "https://a2ui.org/a2a-extension/a2ui/v0.8";
/// let values = [format!("{}, urn:trace", a2ui), "urn:trace".to_string()];
/// let requested = get_requested_extensions(&values);
/// assert_eq!(requested.len(), 2);
/// assert!(requested.contains(a2ui));
/// ```
pub fn get_requested_extensions(values: &[String]) -> HashSet<String> {
    values
        .iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(String::from)
        .collect()
}

/// The card's declaration of the extension with this URI, if any.
///
/// # Example
/// ```
/// use a2ui_a2a::builders::AgentCardBuilder;
/// use a2ui_a2a::utils::find_extension_by_uri;
///
/// let card = AgentCardBuilder::new("Agent", "Renders UI", "1.0")
///     .with_a2ui_extension(true, &["urn:catalog"])
///     .build();
/// let a2ui = find_extension_by_uri(&card, "https://a2ui.org/a2a-extension/a2ui/v0.8").unwrap();
/// assert_eq!(a2ui.params.as_ref().unwrap()["acceptsInlineCatalogs"], true);
/// assert!(find_extension_by_uri(&card, "urn:trace").is_none());
/// ```
pub fn find_extension_by_uri<'a>(card: &'a AgentCard, uri: &str) -> Option<&'a AgentExtension> {
    card.capabilities
        .extensions
        .as_ref()?
        .iter()
        .find(|ext| ext.uri == uri)
}

/// Sets the `X-A2A-Extensions` header in HTTP kwargs.
///
/// `Some` replaces the header with the URIs joined by commas, in the order
/// given. `None` leaves any existing header alone. Other kwargs and headers
/// are kept.
///
/// # Example
/// ```
/// use a2ui_a2a::utils::{update_extension_header, HTTP_EXTENSION_HEADER};
///
/// let uris = ["urn:trace".to_string(), "https://a2ui.org/a2a-extension/a2ui/v0.8".to_string()];
/// let kwargs = update_extension_header(None, Some(&uris[..]));
/// assert_eq!(
///     kwargs["headers"][HTTP_EXTENSION_HEADER],
///     "urn:trace,https://a2ui.org/a2a-extension/a2ui/v0.8"
/// );
/// ```
pub fn update_extension_header(
    http_kwargs: Option<HashMap<String, HashMap<String, String>>>,
    extensions: Option<&[String]>,
) -> HashMap<String, HashMap<String, String>> {
    let mut kwargs = http_kwargs.unwrap_or_default();
    if let Some(uris) = extensions {
        kwargs
            .entry("headers".to_string())
            .or_default()
            .insert(HTTP_EXTENSION_HEADER.to_string(), uris.join(","));
    }
    kwargs
}
