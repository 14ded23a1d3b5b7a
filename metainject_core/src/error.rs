use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum InjectError {
	#[error(transparent)]
	#[diagnostic(code(metainject::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid file pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(metainject::invalid_pattern),
		help("patterns use glob syntax, e.g. `**/*.md`; prefix with `!` to exclude")
	)]
	InvalidPattern { pattern: String, reason: String },

	#[error("failed to parse options: {0}")]
	#[diagnostic(
		code(metainject::config_parse),
		help(
			"supported options: pattern, metadata_keys, metadata_key_bounds.left, \
			 metadata_key_bounds.right, file_keys"
		)
	)]
	ConfigParse(String),

	#[error("failed to load data from `{source_name}`: {reason}")]
	#[diagnostic(code(metainject::data_file))]
	DataFile { source_name: String, reason: String },

	#[error("unsupported data format: `{0}`")]
	#[diagnostic(
		code(metainject::unsupported_format),
		help("supported formats: text, json, toml, yaml, yml")
	)]
	UnsupportedDataFormat(String),

	#[error("unconvertible float value in `{source_name}`: {value}")]
	#[diagnostic(
		code(metainject::unconvertible_float),
		help("NaN and Infinity are not valid JSON numbers")
	)]
	UnconvertibleFloat { source_name: String, value: String },

	#[error("invalid bundle: {0}")]
	#[diagnostic(
		code(metainject::invalid_bundle),
		help("a bundle is a mapping with a `files` mapping and an optional `metadata` mapping")
	)]
	InvalidBundle(String),
}

pub type InjectResult<T> = Result<T, InjectError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
