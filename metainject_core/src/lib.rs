//! `metainject_core` replaces placeholder tokens such as `{{ hero }}` inside
//! in-memory file records with values drawn from a shared metadata mapping.
//! Nested metadata is addressed with dot-separated key paths, so
//! `{{ gotham.hero }}` reads `metadata.gotham.hero`.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Files + Metadata + InjectConfig
//!   → Injector (glob patterns select files, wildcards expand to key lists)
//!   → resolve (dot-path lookup of each metadata key)
//!   → inject_file (walks text, bytes, sequences and mappings of one file key)
//!   → replace / replace_bytes (exact, non-overlapping substring replacement)
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Options (`pattern`, `metadata_keys`, `metadata_key_bounds`,
//!   `file_keys`) and data document parsing for JSON, TOML and YAML.
//!
//! ## Key Types
//!
//! - [`FileValue`]: A value stored on a file record: text, bytes, sequence,
//!   mapping or an inert scalar.
//! - [`FileRecord`]: The mutable key/value data of one file.
//! - [`BoundConfig`]: The left/right markers delimiting a token.
//! - [`Injector`]: Applies an [`InjectConfig`] to a set of files.
//! - [`Bundle`]: Metadata and files loaded from a single document.
//!
//! ## Quick Start
//!
//! ```rust
//! use metainject_core::FileRecord;
//! use metainject_core::FileValue;
//! use metainject_core::Files;
//! use metainject_core::InjectConfig;
//! use metainject_core::Injector;
//! use serde_json::json;
//!
//! let metadata = json!({ "gotham": { "hero": "Batman" } });
//! let metadata = metadata.as_object().unwrap();
//!
//! let mut files = Files::new();
//! files.insert(
//! 	"index.md".to_string(),
//! 	FileRecord::from_iter([("contents", FileValue::from(b"I'm {{ gotham.hero }}.".to_vec()))]),
//! );
//!
//! let config = InjectConfig::default().with_metadata_keys(["gotham.hero"]);
//! let summary = Injector::new(config).unwrap().run(&mut files, metadata);
//!
//! assert_eq!(summary.matched_files, 1);
//! assert_eq!(
//! 	files["index.md"]["contents"],
//! 	FileValue::Bytes(b"I'm Batman.".to_vec())
//! );
//! ```

pub use bundle::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use injector::*;
pub use lookup::*;
pub use replace::*;
pub use value::*;

mod bundle;
pub mod config;
mod engine;
#[allow(unused_assignments)]
mod error;
mod injector;
mod lookup;
mod replace;
mod value;

#[cfg(test)]
mod __fixtures;
