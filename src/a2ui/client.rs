//! Client side of A2UI negotiation.
//!
//! A client opts into A2UI by naming the extension in the
//! `X-A2A-Extensions` header and telling the agent which catalogs it can
//! render through message metadata.

use std::collections::HashMap;

use super::capabilities::ClientCapabilities;
use super::extension::A2UI_EXTENSION_URI;
use crate::types::Message;
use crate::utils::{update_extension_header, HTTP_EXTENSION_HEADER};

/// Adds the A2UI extension to the `X-A2A-Extensions` header of HTTP kwargs.
///
/// Other extensions already requested in the header are kept in the order
/// they were given, without duplicates; A2UI goes last when absent.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::{request_a2ui_extension, A2UI_EXTENSION_URI};
/// use a2ui_a2a::utils::HTTP_EXTENSION_HEADER;
///
/// let kwargs = request_a2ui_extension(None);
/// assert_eq!(kwargs["headers"][HTTP_EXTENSION_HEADER], A2UI_EXTENSION_URI);
/// ```
pub fn request_a2ui_extension(
    http_kwargs: Option<HashMap<String, HashMap<String, String>>>,
) -> HashMap<String, HashMap<String, String>> {
    let requested = http_kwargs
        .as_ref()
        .and_then(|kwargs| kwargs.get("headers"))
        .and_then(|headers| headers.get(HTTP_EXTENSION_HEADER))
        .map(String::as_str)
        .unwrap_or_default();

    let mut extensions: Vec<String> = Vec::new();
    for ext in requested.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        if !extensions.iter().any(|seen| seen == ext) {
            extensions.push(ext.to_string());
        }
    }
    if !extensions.iter().any(|ext| ext == A2UI_EXTENSION_URI) {
        extensions.push(A2UI_EXTENSION_URI.to_string());
    }

    update_extension_header(http_kwargs, Some(extensions.as_slice()))
}

/// Marks a message as using A2UI and attaches the client's capabilities.
///
/// The extension URI is added to `message.extensions` once.
pub fn prepare_a2ui_message(message: &mut Message, capabilities: Option<&ClientCapabilities>) {
    let extensions = message.extensions.get_or_insert_with(Vec::new);
    if !extensions.iter().any(|ext| ext == A2UI_EXTENSION_URI) {
        extensions.push(A2UI_EXTENSION_URI.to_string());
    }
    if let Some(caps) = capabilities {
        caps.attach_to_message(message);
    }
}
