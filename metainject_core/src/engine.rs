use std::borrow::Cow;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::FileRecord;
use crate::FileValue;
use crate::replace;
use crate::replace_bytes;
use crate::replacement_text;

/// Default left marker of a placeholder token.
pub const DEFAULT_LEFT_BOUND: &str = "{{ ";
/// Default right marker of a placeholder token.
pub const DEFAULT_RIGHT_BOUND: &str = " }}";

/// The pair of markers that delimit a placeholder token.
///
/// A token is the exact concatenation `left + key + right`; no whitespace is
/// trimmed, so with the default bounds `{{ hero }}` matches but `{{hero}}`
/// does not.
///
/// ```toml
/// [metadata_key_bounds]
/// left = "<"
/// right = ">"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BoundConfig {
	pub left: String,
	pub right: String,
}

impl Default for BoundConfig {
	fn default() -> Self {
		Self {
			left: DEFAULT_LEFT_BOUND.to_string(),
			right: DEFAULT_RIGHT_BOUND.to_string(),
		}
	}
}

impl BoundConfig {
	pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
		Self {
			left: left.into(),
			right: right.into(),
		}
	}

	/// The literal token searched for when injecting `key`.
	pub fn token(&self, key: &str) -> String {
		format!("{}{key}{}", self.left, self.right)
	}
}

/// Replace the token for `meta_key` with `metadata_value` inside
/// `record[file_key]`.
///
/// `metadata_value` is the result of [`resolve`](crate::resolve) for
/// `meta_key`; when it is `None` this is a no-op. Missing file keys and values
/// that cannot hold text (numbers, booleans, `null`) are left alone.
pub fn inject_file(
	record: &mut FileRecord,
	file_key: &str,
	metadata_value: Option<&Value>,
	meta_key: &str,
	bounds: &BoundConfig,
) {
	let Some(metadata_value) = metadata_value else {
		tracing::trace!(meta_key, "metadata key did not resolve, skipping");
		return;
	};

	let Some(file_value) = record.get_mut(file_key) else {
		return;
	};

	let query = bounds.token(meta_key);
	let replacement = replacement_text(metadata_value);
	inject_value(file_value, &query, &replacement);
}

/// Replace `query` with `replacement` throughout `value`, recursing into
/// sequences and mappings.
pub fn inject_value(value: &mut FileValue, query: &str, replacement: &str) {
	match value {
		FileValue::Text(text) => {
			if let Some(replaced) = changed(replace(query, replacement, text)) {
				*text = replaced;
			}
		}
		FileValue::Bytes(bytes) => {
			if let Some(replaced) =
				changed(replace_bytes(query.as_bytes(), replacement.as_bytes(), bytes))
			{
				*bytes = replaced;
			}
		}
		FileValue::Sequence(items) => {
			for item in items {
				inject_value(item, query, replacement);
			}
		}
		FileValue::Mapping(map) => {
			for child in map.values_mut() {
				inject_value(child, query, replacement);
			}
		}
		FileValue::Number(_) | FileValue::Bool(_) | FileValue::Null => {}
	}
}

fn changed<B: ?Sized + ToOwned>(result: Cow<'_, B>) -> Option<B::Owned> {
	match result {
		Cow::Owned(owned) => Some(owned),
		Cow::Borrowed(_) => None,
	}
}
