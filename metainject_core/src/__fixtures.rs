use serde_json::Value;
use serde_json::json;

use crate::FileRecord;
use crate::FileValue;
use crate::Files;
use crate::Metadata;

pub fn metadata_from(value: Value) -> Metadata {
	match value {
		Value::Object(map) => map,
		other => panic!("expected a metadata mapping, got {other}"),
	}
}

pub fn hero_metadata() -> Metadata {
	metadata_from(json!({ "hero": "Batman", "sidekick": "Robin" }))
}

pub fn gotham_metadata() -> Metadata {
	metadata_from(json!({
		"gotham": {
			"city": { "batman": "dresses like a bat" },
			"harbor": "something is fishy",
			"hero": "Batman",
			"police": "James Gordon",
			"sidekick": "Robin",
		},
		"metropolis": "faster than a speeding bullet",
		"other": { "blüdhaven": { "hero": "Nightwing" } },
		"year": 1939,
		"active": true,
		"retired": null,
	}))
}

pub fn record(entries: Vec<(&str, FileValue)>) -> FileRecord {
	entries.into_iter().collect()
}

pub fn bytes(text: &str) -> FileValue {
	FileValue::Bytes(text.as_bytes().to_vec())
}

pub fn text(value: &str) -> FileValue {
	FileValue::Text(value.to_string())
}

/// Three frontmatter-only files used by the driver tests.
pub fn sidekick_files() -> Files {
	let mut files = Files::new();
	files.insert(
		"a".to_string(),
		record(vec![("hero", text("nightwing")), ("city", text("blüdhaven"))]),
	);
	files.insert(
		"b".to_string(),
		record(vec![("hero", text("robin")), ("police", text("gordon"))]),
	);
	files.insert("c".to_string(), record(vec![("hero", text("batgirl"))]));
	files
}

pub fn alphabet_metadata() -> Metadata {
	metadata_from(json!({ "alfa": 1, "bravo": 2, "charlie": 3 }))
}

/// A small site: markdown pages with frontmatter and byte contents plus a
/// stylesheet.
pub fn site_files() -> Files {
	let mut files = Files::new();
	files.insert(
		"index.md".to_string(),
		record(vec![
			("title", text("Gotham City needs {{ hero }}")),
			(
				"contents",
				bytes("Gotham City needs the dynamic duo,\n{{ hero }} and {{ sidekick }}!\n"),
			),
		]),
	);
	files.insert(
		"blog/robin.md".to_string(),
		record(vec![
			("title", text("All about {{ sidekick }}")),
			("contents", bytes("{{ sidekick }} helps {{ hero }}.\n")),
			("draft", FileValue::Bool(false)),
		]),
	);
	files.insert(
		"styles/site.css".to_string(),
		record(vec![("contents", bytes("/* {{ hero }} */\n"))]),
	);
	files
}
