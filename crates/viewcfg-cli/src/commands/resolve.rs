//! `viewcfg resolve` - resolve a document's view-engine section.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use viewcfg_adapters::{LocalFilesystem, XmlDocumentLoader};
use viewcfg_core::{
    application::{ApplicationError, ViewEngineConfigResolver},
    domain::{ConfigElement, ViewEngineConfig},
    error::ViewCfgError,
};

use crate::{
    cli::{ResolveArgs, ResolveFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if !args.file.is_file() {
        return Err(CliError::InputNotFound { path: args.file });
    }

    let document = XmlDocumentLoader::new().load(&args.file)?;

    let section_name = args.section.as_deref().or(config.resolve.section.as_deref());
    let section = select_section(&document, section_name)?;

    let base_dir = base_directory(
        args.base_dir.as_deref(),
        config.resolve.base_dir.as_deref(),
        &args.file,
    )?;
    debug!(base_dir = %base_dir.display(), section = section.name(), "resolving");

    let registry = super::engine_registry(&config)?;
    let resolver =
        ViewEngineConfigResolver::new(Box::new(registry), Box::new(LocalFilesystem::new()));
    let resolved = resolver.resolve(section, &base_dir)?;

    match args.format {
        ResolveFormat::Table => render_table(&resolved, &output)?,
        ResolveFormat::Json => {
            let json = serde_json::to_string_pretty(&resolved)
                .with_cli_context(|| "Failed to serialise resolved configuration")?;
            output.data(&json)?;
        }
        ResolveFormat::Plain => {
            for line in plain_lines(&resolved) {
                output.data(&line)?;
            }
        }
    }

    Ok(())
}

/// The root element, or the first element named `name`.
fn select_section<'a>(
    document: &'a ConfigElement,
    name: Option<&str>,
) -> CliResult<&'a ConfigElement> {
    let Some(name) = name else {
        return Ok(document);
    };
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "section name must not be empty".into(),
            source: None,
        });
    }

    document.find(name).ok_or_else(|| {
        CliError::Core(ViewCfgError::from(ApplicationError::SectionNotFound {
            name: name.to_owned(),
        }))
    })
}

/// Flag, then settings, then the document's directory; always absolute.
fn base_directory(
    flag: Option<&Path>,
    configured: Option<&Path>,
    document: &Path,
) -> CliResult<PathBuf> {
    let chosen = flag
        .or(configured)
        .or_else(|| document.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    std::path::absolute(chosen)
        .with_cli_context(|| format!("Cannot make '{}' absolute", chosen.display()))
}

fn render_table(config: &ViewEngineConfig, output: &OutputManager) -> CliResult<()> {
    output.header("View engine configuration")?;
    output.field("view root", &config.view_path_root().display().to_string())?;
    output.field("virtual root", config.virtual_path_root())?;

    output.print("")?;
    output.header("Engines")?;
    for engine in config.view_engines() {
        output.field(
            engine.engine_type().short_name(),
            &format!("{} ({})", engine.engine_type(), engine.markup()),
        )?;
    }

    if !config.assembly_sources().is_empty() || !config.path_sources().is_empty() {
        output.print("")?;
        output.header("Additional sources")?;
        for source in config.assembly_sources() {
            output.field(
                "assembly",
                &format!("{} ({})", source.assembly_name(), source.namespace()),
            )?;
        }
        for location in config.path_sources() {
            output.field("path", location)?;
        }
    }

    Ok(())
}

/// Indexed `key=value` lines, stable for scripting.
fn plain_lines(config: &ViewEngineConfig) -> Vec<String> {
    let mut lines = vec![
        format!("view_path_root={}", config.view_path_root().display()),
        format!("virtual_path_root={}", config.virtual_path_root()),
    ];

    for (i, engine) in config.view_engines().iter().enumerate() {
        lines.push(format!("engines.{i}.type={}", engine.engine_type()));
        lines.push(format!("engines.{i}.markup={}", engine.markup()));
    }
    for (i, source) in config.assembly_sources().iter().enumerate() {
        lines.push(format!("assembly_sources.{i}.name={}", source.assembly_name()));
        lines.push(format!("assembly_sources.{i}.namespace={}", source.namespace()));
    }
    for (i, location) in config.path_sources().iter().enumerate() {
        lines.push(format!("path_sources.{i}={location}"));
    }

    lines
}
