use globset::Glob;
use globset::GlobBuilder;
use globset::GlobSet;
use globset::GlobSetBuilder;

use crate::Files;
use crate::InjectConfig;
use crate::InjectError;
use crate::InjectResult;
use crate::Metadata;
use crate::inject_file;
use crate::resolve;

/// Counters describing a single [`Injector::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InjectSummary {
	/// Number of files selected by the configured patterns.
	pub matched_files: usize,
	/// Number of `(file, file key, metadata key)` triples handed to
	/// [`inject_file`], including those whose metadata key did not resolve.
	pub invocations: usize,
}

/// Drives [`inject_file`] over every selected file, file key and metadata
/// key.
#[derive(Debug, Clone)]
pub struct Injector {
	config: InjectConfig,
	include_set: GlobSet,
	exclude_set: GlobSet,
}

impl Injector {
	/// Compile the configured patterns. Patterns prefixed with `!` exclude
	/// files matched by the other patterns.
	pub fn new(config: InjectConfig) -> InjectResult<Self> {
		let mut include = GlobSetBuilder::new();
		let mut exclude = GlobSetBuilder::new();

		for pattern in &config.pattern {
			match pattern.strip_prefix('!') {
				Some(negated) => exclude.add(compile_glob(pattern, negated)?),
				None => include.add(compile_glob(pattern, pattern)?),
			};
		}

		let include_set = build_glob_set(&include, &config.pattern)?;
		let exclude_set = build_glob_set(&exclude, &config.pattern)?;

		Ok(Self {
			config,
			include_set,
			exclude_set,
		})
	}

	pub fn config(&self) -> &InjectConfig {
		&self.config
	}

	/// Returns true when `file` is selected by the configured patterns.
	pub fn is_match(&self, file: &str) -> bool {
		self.include_set.is_match(file) && !self.exclude_set.is_match(file)
	}

	/// Identifiers of the files selected by the configured patterns, in key
	/// order.
	pub fn matching_files(&self, files: &Files) -> Vec<String> {
		files
			.keys()
			.filter(|file| self.is_match(file))
			.cloned()
			.collect()
	}

	/// Inject metadata into every selected file.
	///
	/// The metadata key wildcard is expanded once per run and the file key
	/// wildcard once per file. File keys that are not present on a record are
	/// skipped. Files are processed one at a time and, within a file,
	/// substitutions are applied in key order so later keys see the result of
	/// earlier ones.
	pub fn run(&self, files: &mut Files, metadata: &Metadata) -> InjectSummary {
		let matched = self.matching_files(files);
		if matched.is_empty() {
			tracing::debug!(pattern = ?self.config.pattern, "no files matched the pattern");
			return InjectSummary::default();
		}

		let meta_keys = self.config.metadata_keys.select(metadata.keys());
		let bounds = &self.config.metadata_key_bounds;
		let mut summary = InjectSummary {
			matched_files: matched.len(),
			invocations: 0,
		};

		for file in &matched {
			tracing::debug!(file = file.as_str(), "searching for key matches");
			let Some(record) = files.get_mut(file) else {
				continue;
			};

			let file_keys = self.config.file_keys.select(record.keys());
			for file_key in &file_keys {
				if !record.contains_key(file_key) {
					continue;
				}

				for meta_key in &meta_keys {
					inject_file(
						record,
						file_key,
						resolve(meta_key, metadata),
						meta_key,
						bounds,
					);
					summary.invocations += 1;
				}
			}
		}

		summary
	}
}

/// Build an [`Injector`] from `config` and run it once.
pub fn inject(
	files: &mut Files,
	metadata: &Metadata,
	config: InjectConfig,
) -> InjectResult<InjectSummary> {
	Ok(Injector::new(config)?.run(files, metadata))
}

fn compile_glob(pattern: &str, glob: &str) -> InjectResult<Glob> {
	GlobBuilder::new(glob)
		.literal_separator(true)
		.build()
		.map_err(|e| {
			InjectError::InvalidPattern {
				pattern: pattern.to_string(),
				reason: e.kind().to_string(),
			}
		})
}

fn build_glob_set(builder: &GlobSetBuilder, patterns: &[String]) -> InjectResult<GlobSet> {
	builder.build().map_err(|e| {
		InjectError::InvalidPattern {
			pattern: patterns.join(", "),
			reason: e.to_string(),
		}
	})
}
