mod common;

use metainject_core::AnyEmptyResult;
use serde_json::Value;
use serde_json::json;
use similar_asserts::assert_eq;

const BUNDLE: &str = r#"{
	"metadata": {
		"hero": "Batman",
		"sidekick": "Robin",
		"gotham": { "police": "James Gordon" }
	},
	"files": {
		"index.md": {
			"title": "{{ hero }} and {{ sidekick }}",
			"contents": "Gotham City needs the dynamic duo,\n{{ hero }} and {{ sidekick }}!\n",
			"layout": "page.hbs"
		},
		"blog/gordon.md": {
			"title": "{{ gotham.police }}",
			"contents": "<gotham.police> is the police commissioner.",
			"tags": ["{{ hero }}", 7, true, null]
		},
		"styles/site.css": {
			"contents": "/* {{ hero }} */"
		}
	}
}"#;

fn run_json(args: &[&str], input: &str) -> Result<Value, Box<dyn std::error::Error>> {
	let mut cmd = common::metainject_cmd();
	let assert = cmd.args(args).write_stdin(input).assert().success();
	Ok(serde_json::from_slice(&assert.get_output().stdout)?)
}

#[test]
fn injects_every_top_level_key_by_default() -> AnyEmptyResult {
	let output = run_json(&[], BUNDLE)?;

	assert_eq!(
		output["index.md"],
		json!({
			"title": "Batman and Robin",
			"contents": "Gotham City needs the dynamic duo,\nBatman and Robin!\n",
			"layout": "page.hbs"
		})
	);
	assert_eq!(output["blog/gordon.md"]["title"], json!("{{ gotham.police }}"));
	assert_eq!(
		output["blog/gordon.md"]["tags"],
		json!(["Batman", 7, true, null])
	);
	assert_eq!(output["styles/site.css"]["contents"], json!("/* Batman */"));

	Ok(())
}

#[test]
fn pattern_flags_select_files() -> AnyEmptyResult {
	let output = run_json(&["--pattern", "**/*.md", "--pattern", "!blog/**"], BUNDLE)?;

	assert_eq!(output["index.md"]["title"], json!("Batman and Robin"));
	assert_eq!(
		output["blog/gordon.md"]["tags"],
		json!(["{{ hero }}", 7, true, null])
	);
	assert_eq!(output["styles/site.css"]["contents"], json!("/* {{ hero }} */"));

	Ok(())
}

#[test]
fn custom_bounds_and_nested_keys() -> AnyEmptyResult {
	let output = run_json(
		&[
			"--left",
			"<",
			"--right",
			">",
			"--metadata-key",
			"gotham.police",
			"--file-key",
			"contents",
		],
		BUNDLE,
	)?;

	assert_eq!(
		output["blog/gordon.md"]["contents"],
		json!("James Gordon is the police commissioner.")
	);
	assert_eq!(output["blog/gordon.md"]["title"], json!("{{ gotham.police }}"));

	Ok(())
}

#[test]
fn inline_config_document() -> AnyEmptyResult {
	let config = r#"
pattern = "*.md"
metadata_keys = ["gotham.police", "hero"]
file_keys = "title"
"#;
	let output = run_json(&["--config", config], BUNDLE)?;

	assert_eq!(output["index.md"]["title"], json!("Batman and {{ sidekick }}"));
	assert_eq!(output["blog/gordon.md"]["title"], json!("{{ gotham.police }}"));

	Ok(())
}

#[test]
fn flags_override_inline_config() -> AnyEmptyResult {
	let output = run_json(
		&["--config", "pattern = \"*.css\"", "--pattern", "blog/*.md"],
		BUNDLE,
	)?;

	assert_eq!(output["blog/gordon.md"]["tags"][0], json!("Batman"));
	assert_eq!(output["styles/site.css"]["contents"], json!("/* {{ hero }} */"));

	Ok(())
}

#[test]
fn reads_yaml_bundles() -> AnyEmptyResult {
	let input = "metadata:\n  hero: Batman\nfiles:\n  a.md:\n    contents: \"I'm {{ hero }}\"\n";
	let output = run_json(&["--format", "yaml"], input)?;

	assert_eq!(output, json!({ "a.md": { "contents": "I'm Batman" } }));

	Ok(())
}

#[test]
fn reads_toml_bundles() -> AnyEmptyResult {
	let input = "[metadata]\nyear = 1939\n\n[files.\"a.md\"]\ntitle = \"Since {{ year }}\"\n";
	let output = run_json(&["--format", "toml"], input)?;

	assert_eq!(output, json!({ "a.md": { "title": "Since 1939" } }));

	Ok(())
}

#[test]
fn prints_summary_to_stderr() {
	let mut cmd = common::metainject_cmd();
	cmd.write_stdin(BUNDLE)
		.assert()
		.success()
		.stderr(predicates::str::contains("Processed 3 files"));
}

#[test]
fn verbose_logs_searched_files() {
	let mut cmd = common::metainject_cmd();
	cmd.arg("--verbose")
		.arg("--pattern")
		.arg("*.md")
		.write_stdin(BUNDLE)
		.assert()
		.success()
		.stderr(predicates::str::contains("searching for key matches"))
		.stderr(predicates::str::contains("Processed 1 file ("));
}

#[test]
fn invalid_bundle_fails_with_diagnostic() {
	let mut cmd = common::metainject_cmd();
	cmd.write_stdin("{ \"files\": ")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("failed to load data from `bundle`"));
}

#[test]
fn bundle_with_wrong_shape_fails() {
	let mut cmd = common::metainject_cmd();
	cmd.write_stdin("{ \"files\": [] }")
		.assert()
		.code(2)
		.stderr(predicates::str::contains("`files` must be a mapping"));
}

#[test]
fn invalid_pattern_fails_with_diagnostic() {
	let mut cmd = common::metainject_cmd();
	cmd.args(["--pattern", "src/[a-"])
		.write_stdin(BUNDLE)
		.assert()
		.code(2)
		.stderr(predicates::str::contains("invalid file pattern"));
}
