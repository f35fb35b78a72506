//! CLI entrypoint for casewalk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use casewalk_application::{
    CatalogError, LoadModuleError, LoadModuleUseCase, ModuleSession, NavigationMode, SecretSource,
    export_session_json,
};
use casewalk_domain::Section;
use casewalk_infrastructure::{ConfigLoader, EnvSecretSource, FileCatalogSource, FileContentSource};
use casewalk_presentation::{Cli, ConsoleFormatter, ModuleShell, set_color_enabled};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|err| anyhow::anyhow!("failed to load configuration: {err}"))?
    };

    if cli.no_color || !config.output.color {
        set_color_enabled(false);
    }

    // Resolve content locations: flags win over config.
    let content_dir = cli
        .content_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.content.dir));
    let catalog_path = match (&cli.catalog, &cli.content_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join("items.json"),
        (None, None) => PathBuf::from(config.content.catalog_path()),
    };

    info!(catalog = %catalog_path.display(), content = %content_dir.display(), "starting casewalk");

    // === Dependency Injection ===
    let use_case = LoadModuleUseCase::new(Arc::new(FileCatalogSource::new(&catalog_path)));
    let module = match use_case.execute() {
        Ok(module) => module,
        Err(LoadModuleError::Catalog(CatalogError::Invalid { issues })) => {
            // Fatal-load: show every validation issue, render nothing.
            eprint!("{}", ConsoleFormatter::format_issues(&issues));
            std::process::exit(1);
        }
        Err(err) => {
            return Err(err).context("unable to load the module catalog");
        }
    };

    let content = Arc::new(FileContentSource::new(&content_dir));
    let secrets = EnvSecretSource::new(config.instructor.unlock_code.clone());
    let mut session = ModuleSession::new(module, content, secrets.unlock_code());

    if cli.jump || !config.navigation.guided {
        session.set_mode(NavigationMode::Jump);
    }
    if cli.appendices || config.navigation.include_appendices {
        session.set_include_appendices(true);
    }

    // One-shot export mode
    if let Some(path) = &cli.export {
        let json = export_session_json(&session)?;
        if path.to_str() == Some("-") {
            println!("{json}");
        } else {
            std::fs::write(path, &json)
                .with_context(|| format!("could not write {}", path.display()))?;
            println!("Responses exported to {}", path.display());
        }
        return Ok(());
    }

    // One-shot section render mode
    if let Some(raw) = &cli.section {
        let section = Section::parse(raw)?;
        print!("{}", ConsoleFormatter::format_banner(session.module()));
        print!("{}", ConsoleFormatter::format_section(&session, section));
        return Ok(());
    }

    // Interactive shell
    let mut shell = ModuleShell::new(session);
    shell.run()?;

    Ok(())
}
