use std::borrow::Cow;

use serde_json::Value;

use crate::Metadata;

/// Separator between the segments of a key path.
pub const KEY_PATH_SEPARATOR: char = '.';

/// Resolve a dot-separated key path such as `"gotham.hero"` against a nested
/// metadata mapping.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// `null` or not a mapping, and for malformed paths: the empty string and
/// paths with empty segments (`".a"`, `"a."`, `"a..b"`). A `null` stored at
/// the final segment is a resolved value.
///
/// ```rust
/// use metainject_core::resolve;
/// use serde_json::json;
///
/// let metadata = json!({ "gotham": { "hero": "Batman" } });
/// let metadata = metadata.as_object().unwrap();
///
/// assert_eq!(resolve("gotham.hero", metadata), Some(&json!("Batman")));
/// assert_eq!(resolve("gotham.arkham.asylum", metadata), None);
/// ```
pub fn resolve<'a>(key_path: &str, mapping: &'a Metadata) -> Option<&'a Value> {
	let mut segments = key_path.split(KEY_PATH_SEPARATOR);
	let first = segments.next().filter(|segment| !segment.is_empty())?;
	let mut current = mapping.get(first)?;

	for segment in segments {
		if segment.is_empty() {
			return None;
		}

		let Value::Object(map) = current else {
			return None;
		};
		current = map.get(segment)?;
	}

	Some(current)
}

/// The string form of a metadata value used as replacement text.
///
/// Strings are used verbatim, numbers and booleans use their display form,
/// `null` becomes `"null"` and sequences and mappings are rendered as compact
/// JSON.
pub fn replacement_text(value: &Value) -> Cow<'_, str> {
	match value {
		Value::String(text) => Cow::Borrowed(text),
		Value::Number(number) => Cow::Owned(number.to_string()),
		Value::Bool(flag) => Cow::Owned(flag.to_string()),
		Value::Null => Cow::Borrowed("null"),
		Value::Array(_) | Value::Object(_) => Cow::Owned(value.to_string()),
	}
}
