use anyhow::{Context, Result};
use log::{debug, info};

use optreg::{ArgParser, OptionRegistry, ParseOutcome, SettingsStore, describe_failure};

const APP_NAME: &str = "optreg";

const HELP_DOCS: &str = "optreg - demonstration host for the option registry

Registers a handful of options, parses the command line against them, and
optionally round-trips the persistable ones through a settings file:

    --load=<path>   merge a previously saved settings file over the defaults
    --save=<path>   write the persistable options to a settings file
    --print         show the resolved option table and exit

A bare --load or --save uses the per-user default settings location.
";

fn main() -> Result<()> {
    env_logger::init();

    let mut registry = OptionRegistry::new();
    registry.register("name", "", true);
    registry.register("color", "plain", true);
    registry.register("verbose", false, false);
    SettingsStore::install(&mut registry);

    let mut parser = ArgParser::with_help(HELP_DOCS);
    match parser.parse(std::env::args(), &mut registry) {
        Ok(ParseOutcome::HelpRequested) => {
            print!("{}", parser.render_help(&registry));
            return Ok(());
        }
        Ok(ParseOutcome::Ready) => {}
        Err(e) => {
            if let Some(help) = describe_failure(&parser, &registry, &e) {
                eprint!("{help}");
            }
            std::process::exit(2);
        }
    }
    info!("arguments resolved");

    // Stored values overwrite whatever the command line set, matching the
    // parse-then-load workflow: --load names the file, load wins. A bare
    // --load or --save falls back to the conventional config-dir location.
    if let Some(value) = registry.get("load").filter(|v| v.is_truthy()).cloned() {
        let path = SettingsStore::target_path(&value, APP_NAME);
        SettingsStore::load(&mut registry, &path)
            .with_context(|| format!("loading settings from {}", path.display()))?;
    }

    if registry.get("print").is_some_and(|v| v.is_truthy()) {
        print!("{}", parser.render_help(&registry));
    }

    if let Some(value) = registry.get("save").filter(|v| v.is_truthy()) {
        let path = SettingsStore::target_path(value, APP_NAME);
        SettingsStore::save(&registry, &path.display().to_string())
            .with_context(|| format!("saving settings to {}", path.display()))?;
        debug!("settings written to {}", path.display());
    }

    Ok(())
}
