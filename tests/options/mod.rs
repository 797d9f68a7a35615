pub mod registry;

use optreg::{ArgParser, CliError, OptionRegistry, ParseOutcome, SettingsStore};

/// Builds a registry the way a typical host would: a couple of caller
/// options on top of the built-ins, with the settings actions installed.
pub fn sample_registry() -> OptionRegistry {
    let mut registry = OptionRegistry::new();
    registry.register("name", "", true);
    registry.register("color", "plain", true);
    registry.register("verbose", false, false);
    SettingsStore::install(&mut registry);
    registry
}

/// Runs a parse over `tokens` with a synthetic program path prepended.
pub fn parse_tokens(
    registry: &mut OptionRegistry,
    tokens: &[&str],
) -> Result<ParseOutcome, CliError> {
    let mut args = vec!["/usr/bin/testprog".to_string()];
    args.extend(tokens.iter().map(|t| t.to_string()));
    ArgParser::new().parse(args, registry)
}
