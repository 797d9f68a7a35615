use thiserror::Error;

/// Errors surfaced by argument parsing and settings persistence.
///
/// Every variant is unrecoverable at its point of detection: there is no
/// retry or partial success. The host prints the message (plus, for the two
/// parse variants, an annotated help rendering) and exits non-zero.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    /// A bare `--name` flag whose name was never registered.
    #[error("unknown flag: --{0}")]
    UnknownFlag(String),

    /// A command-line token that does not start with the `--` prefix.
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// The settings file could not be read, was empty, or did not decode.
    #[error("failed to load settings from {path}: {reason}")]
    SettingsLoad { path: String, reason: String },

    /// The save target was empty or its directory could not be created.
    #[error("failed to save settings to {path:?}: {reason}")]
    SettingsSave { path: String, reason: String },
}
