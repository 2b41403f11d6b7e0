//! Utility functions for working with A2A Part objects.

use crate::a2ui::get_a2ui_data_part;
use crate::types::{DataPart, FileContent, JsonObject, Part};

/// Extracts text content from all text Parts in a list.
///
/// # Example
///
/// ```
/// use a2ui_a2a::types::Part;
/// use a2ui_a2a::utils::get_text_parts;
///
/// let parts = vec![Part::text("Hello"), Part::text("World")];
/// let texts = get_text_parts(&parts);
/// assert_eq!(texts, vec!["Hello", "World"]);
/// ```
pub fn get_text_parts(parts: &[Part]) -> Vec<&str> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::Text(p) => Some(p.text.as_str()),
            _ => None,
        })
        .collect()
}

/// Extracts data content from all data Parts in a list, tagged or not.
///
/// # Example
///
/// ```
/// use a2ui_a2a::types::Part;
/// use a2ui_a2a::utils::get_data_parts;
/// use serde_json::json;
///
/// let data = json!({"key": "value"}).as_object().cloned().unwrap();
/// let parts = vec![Part::data(data.clone()), Part::text("ignored")];
/// assert_eq!(get_data_parts(&parts), vec![&data]);
/// ```
pub fn get_data_parts(parts: &[Part]) -> Vec<&JsonObject> {
    parts
        .iter()
        .filter_map(|part| part.as_data().map(|p| &p.data))
        .collect()
}

/// Extracts file content from all file Parts in a list.
pub fn get_file_parts(parts: &[Part]) -> Vec<&FileContent> {
    parts
        .iter()
        .filter_map(|part| match part {
            Part::File(p) => Some(&p.file),
            _ => None,
        })
        .collect()
}

/// Borrows every A2UI data part in a list, in order.
///
/// # Example
///
/// ```
/// use a2ui_a2a::a2ui::create_a2ui_part;
/// use a2ui_a2a::types::Part;
/// use a2ui_a2a::utils::get_a2ui_data_parts;
/// use serde_json::json;
///
/// let ui = json!({"deleteSurface": {"surfaceId": "s1"}}).as_object().cloned().unwrap();
/// let parts = vec![Part::text("hi"), create_a2ui_part(ui.clone())];
/// let found = get_a2ui_data_parts(&parts);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].data, ui);
/// ```
pub fn get_a2ui_data_parts(parts: &[Part]) -> Vec<&DataPart> {
    parts.iter().filter_map(get_a2ui_data_part).collect()
}
