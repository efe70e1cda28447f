//! `viewcfg engines` - list the engines a document may reference.

use viewcfg_core::{application::EngineCatalog, domain::EngineTypeName};

use crate::{
    cli::{EnginesArgs, EnginesFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: EnginesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let registry = super::engine_registry(&config)?;
    let engines = EngineCatalog::new(&registry).list()?;

    match args.format {
        EnginesFormat::Table => {
            output.header("Registered view engines:")?;
            for engine in &engines {
                output.field(engine.short_name(), &describe(engine))?;
            }
        }
        EnginesFormat::List => {
            for engine in &engines {
                output.data(engine.as_str())?;
            }
        }
        EnginesFormat::Json => {
            let json = serde_json::to_string_pretty(&engines)
                .with_cli_context(|| "Failed to serialise engine list")?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn describe(engine: &EngineTypeName) -> String {
    if engine.is_default() {
        format!("{engine} (default)")
    } else {
        engine.to_string()
    }
}
