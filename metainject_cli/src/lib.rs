use clap::Parser;
use clap::ValueEnum;
use metainject_core::BoundConfig;
use metainject_core::DEFAULT_BYTE_KEYS;
use metainject_core::InjectConfig;
use metainject_core::InjectResult;

#[derive(Parser, Debug)]
#[command(
	version,
	about = "Inject metadata values into placeholder tokens across a set of file records.",
	long_about = "metainject reads a bundle of metadata and file records from stdin, replaces \
	              every `{{ key }}` token found in the selected file keys with the matching \
	              metadata value and prints the updated file records as JSON.\n\nBundle \
	              shape:\n  { \"metadata\": { \"gotham\": { \"hero\": \"Batman\" } },\n    \
	              \"files\": { \"index.md\": { \"title\": \"{{ gotham.hero }}\" } } }\n\nNested \
	              metadata is addressed with dot-separated keys such as `gotham.hero`."
)]
pub struct MetainjectCli {
	/// Format of the bundle read from stdin.
	#[arg(long, value_enum, default_value_t = InputFormat::Json)]
	pub format: InputFormat,

	/// Inline TOML options document (`pattern`, `metadata_keys`,
	/// `metadata_key_bounds`, `file_keys`). Flags override its values.
	#[arg(long)]
	pub config: Option<String>,

	/// Glob pattern selecting files to process. Repeat for multiple patterns;
	/// prefix with `!` to exclude. Defaults to `**/*`.
	#[arg(long = "pattern", value_name = "GLOB")]
	pub patterns: Vec<String>,

	/// Metadata key path to inject, e.g. `gotham.hero`. Repeat for multiple
	/// keys. Defaults to every top-level metadata key.
	#[arg(long = "metadata-key", value_name = "KEY")]
	pub metadata_keys: Vec<String>,

	/// File record key searched for tokens. Repeat for multiple keys. Defaults
	/// to every key on each record.
	#[arg(long = "file-key", value_name = "KEY")]
	pub file_keys: Vec<String>,

	/// Left marker of a token.
	#[arg(long, allow_hyphen_values = true)]
	pub left: Option<String>,

	/// Right marker of a token.
	#[arg(long, allow_hyphen_values = true)]
	pub right: Option<String>,

	/// Record key whose string value is treated as raw file contents.
	#[arg(
		long = "byte-key",
		value_name = "KEY",
		default_values_t = DEFAULT_BYTE_KEYS.map(String::from)
	)]
	pub byte_keys: Vec<String>,

	/// Enable debug logging on stderr.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl MetainjectCli {
	/// Build the injection options from `--config` and the individual flags.
	pub fn inject_config(&self) -> InjectResult<InjectConfig> {
		let mut config = match &self.config {
			Some(content) => InjectConfig::from_toml_str(content)?,
			None => InjectConfig::default(),
		};

		if !self.patterns.is_empty() {
			config = config.with_pattern(&self.patterns);
		}

		if !self.metadata_keys.is_empty() {
			config = config.with_metadata_keys(&self.metadata_keys);
		}

		if !self.file_keys.is_empty() {
			config = config.with_file_keys(&self.file_keys);
		}

		if self.left.is_some() || self.right.is_some() {
			let current = config.metadata_key_bounds.clone();
			config = config.with_bounds(BoundConfig::new(
				self.left.clone().unwrap_or(current.left),
				self.right.clone().unwrap_or(current.right),
			));
		}

		Ok(config)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
	/// A JSON document.
	Json,
	/// A YAML document.
	Yaml,
	/// A TOML document.
	Toml,
}

impl InputFormat {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Json => "json",
			Self::Yaml => "yaml",
			Self::Toml => "toml",
		}
	}
}
