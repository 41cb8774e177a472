//! scenedoc CLI - Describe Godot scene files as markdown

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{batch, file};
use config::ScenedocConfig;
use scenedoc_core::SceneDocError;
use scenedoc_render::DocumentRenderer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scenedoc")]
#[command(about = "Turn Godot scene files into readable markdown", long_about = None)]
#[command(version)]
struct Cli {
    /// Scene file to convert, or a directory to convert every scene inside it
    path: PathBuf,

    /// Output markdown path (defaults to the scene's path with `.md`, or `<dir>/<dir>.md`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file to use instead of the global and project config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable log output
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            println!("{}", err.render());
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if !cli.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    if let Err(err) = run(cli) {
        println!("{}", error_message(&err));
        std::process::exit(1);
    }
}

/// A missing input path is reported bare; everything else gets an `Error:` prefix
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SceneDocError>() {
        Some(invalid @ SceneDocError::InvalidPath(_)) => invalid.to_string(),
        _ => format!("Error: {:#}", err),
    }
}

fn run(cli: Cli) -> Result<()> {
    if !cli.path.exists() {
        return Err(SceneDocError::InvalidPath(cli.path).into());
    }

    let config = match &cli.config {
        Some(path) => ScenedocConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ScenedocConfig::load().context("Failed to load config")?,
    };
    let renderer = DocumentRenderer::new(config.relevance_filter());

    if cli.path.is_dir() {
        batch::run(&cli.path, cli.output.as_deref(), &renderer, config.scene_extension())
    } else {
        file::run(&cli.path, cli.output.as_deref(), &renderer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli_for(path: PathBuf) -> Cli {
        Cli {
            path,
            output: None,
            config: None,
            quiet: true,
        }
    }

    #[test]
    fn test_missing_path_is_invalid_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.tscn");

        let err = run(cli_for(missing.clone())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SceneDocError>(),
            Some(SceneDocError::InvalidPath(p)) if *p == missing
        ));
        assert_eq!(
            error_message(&err),
            format!("Path not found: {}", missing.display())
        );
    }

    #[test]
    fn test_other_errors_are_prefixed() {
        let err = anyhow::Error::from(SceneDocError::Walk("denied".to_string()))
            .context("Failed to scan");
        assert!(error_message(&err).starts_with("Error: Failed to scan"));
    }

    #[test]
    fn test_wrong_argument_count_is_usage_error() {
        let none = Cli::try_parse_from(["scenedoc"]).err().unwrap();
        assert!(none.use_stderr());

        let two = Cli::try_parse_from(["scenedoc", "a.tscn", "b.tscn"]).err().unwrap();
        assert!(two.use_stderr());
    }

    #[test]
    fn test_single_path_parses() {
        let cli = Cli::try_parse_from(["scenedoc", "main.tscn", "-q"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("main.tscn"));
        assert!(cli.quiet);
        assert!(cli.output.is_none());
    }
}
