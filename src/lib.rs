//! Minimal command-line option registry with persistent settings.
//!
//! Three layers, composed rather than inherited: an [`OptionRegistry`]
//! holding known options with defaults and persistence flags, an
//! [`ArgParser`] that resolves `--key` / `--key=value` tokens against it,
//! and a [`SettingsStore`] that round-trips the persist-eligible slice of
//! the registry through a flat JSON blob.

pub mod error;
pub mod parser;
pub mod registry;
pub mod settings;

pub use error::CliError;
pub use parser::{ArgParser, ParseOutcome, describe_failure};
pub use registry::{OptValue, OptionRegistry};
pub use settings::SettingsStore;
