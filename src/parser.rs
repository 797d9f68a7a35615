use std::path::Path;

use log::debug;

use crate::error::CliError;
use crate::registry::OptionRegistry;

/// What a successful parse asks the host to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// All tokens consumed; the registry holds the resolved values.
    Ready,
    /// `--help` was seen. Render help and exit successfully; any tokens
    /// after it were never examined.
    HelpRequested,
}

/// Translates raw command-line tokens into mutations on an [`OptionRegistry`].
///
/// The parser never terminates the process itself: failures come back as
/// [`CliError`] values and the host decides to print the annotated help and
/// exit. It holds no copy of the registry, only the program path (for help
/// rendering) and optional caller-supplied help text.
#[derive(Debug, Default)]
pub struct ArgParser {
    program: String,
    help_docs: Option<String>,
}

impl ArgParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptive text printed at the top of the help screen.
    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            program: String::new(),
            help_docs: Some(help.into()),
        }
    }

    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help_docs = Some(help.into());
    }

    /// Parses a raw argument list against `registry`, mutating resolved
    /// values in place.
    ///
    /// The first element is the invoked program path; it is stored for help
    /// rendering and excluded from option scanning. Remaining tokens are
    /// scanned left to right, last write wins:
    ///
    /// * `--name` — sets a registered option to `Flag(true)`; an
    ///   unregistered name is [`CliError::UnknownFlag`]. `--help` stops
    ///   scanning immediately with [`ParseOutcome::HelpRequested`].
    /// * `--name=value` — assigns the exact string, introducing the entry
    ///   if it was never registered (the value may itself contain `=`).
    /// * anything else — [`CliError::MalformedToken`].
    ///
    /// # Examples
    /// ```rust
    /// use optreg::{ArgParser, OptValue, OptionRegistry, ParseOutcome};
    ///
    /// let mut registry = OptionRegistry::new();
    /// registry.register("verbose", false, false);
    ///
    /// let mut parser = ArgParser::new();
    /// let args = vec!["tool".to_string(), "--verbose".to_string()];
    /// let outcome = parser.parse(args, &mut registry).unwrap();
    /// assert_eq!(outcome, ParseOutcome::Ready);
    /// assert_eq!(registry.get("verbose"), Some(&OptValue::Flag(true)));
    /// ```
    pub fn parse<I>(
        &mut self,
        args: I,
        registry: &mut OptionRegistry,
    ) -> Result<ParseOutcome, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        self.program = args.next().unwrap_or_default();
        debug!("parsing arguments for {}", self.program);

        for token in args {
            let Some(body) = token.strip_prefix("--") else {
                return Err(CliError::MalformedToken(token));
            };
            match body.split_once('=') {
                // --name
                None => {
                    if body == "help" {
                        return Ok(ParseOutcome::HelpRequested);
                    }
                    if !registry.is_registered(body) {
                        return Err(CliError::UnknownFlag(body.to_string()));
                    }
                    registry.set(body, true)?;
                }
                // --name=value; unknown names are introduced rather than
                // rejected, so saved settings can flow back in unchanged
                Some((name, value)) => registry.assign(name, value),
            }
        }
        Ok(ParseOutcome::Ready)
    }

    /// Base name of the invoked program, for the sample command line.
    fn program_name(&self) -> &str {
        Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program)
    }

    /// Renders the full help screen: the caller-supplied description (if
    /// any), a one-line sample command line showing every truthy option,
    /// and a table of all registered options with `off` standing in for
    /// falsy values.
    pub fn render_help(&self, registry: &OptionRegistry) -> String {
        let mut out = String::new();
        if let Some(docs) = &self.help_docs {
            out.push_str(docs);
            out.push('\n');
        }
        self.render_usage(registry, &mut out);
        out
    }

    /// Help screen annotated with the offending token, for parse failures.
    /// Mirrors [`render_help`](Self::render_help) but leads with the error
    /// and omits the caller description.
    pub fn render_invalid(&self, registry: &OptionRegistry, bad: &str) -> String {
        let mut out = format!("\nERROR: invalid argument {bad}\n");
        self.render_usage(registry, &mut out);
        out
    }

    fn render_usage(&self, registry: &OptionRegistry, out: &mut String) {
        out.push_str("\n Sample command line:\n\n");
        out.push_str(self.program_name());
        for name in registry.names() {
            if let Some(value) = registry.get(name) {
                if value.is_truthy() {
                    out.push_str(&format!(" --{}={}", name, value.display()));
                }
            }
        }
        out.push_str("\n\nCommand line options are:\n");
        for name in registry.names() {
            if let Some(value) = registry.get(name) {
                out.push_str(&format!("\t--{:<15} ( {} )\n", name, value.display()));
            }
        }
    }
}

/// Renders the help screen appropriate for `error` and returns it along
/// with the token that caused the failure.
pub fn describe_failure(
    parser: &ArgParser,
    registry: &OptionRegistry,
    error: &CliError,
) -> Option<String> {
    match error {
        CliError::UnknownFlag(name) => Some(parser.render_invalid(registry, name)),
        CliError::MalformedToken(token) => Some(parser.render_invalid(registry, token)),
        _ => None,
    }
}
