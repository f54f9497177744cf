mod config;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{ArgAction, Parser, Subcommand};
use marksmith_core::actions::FORMAT;
use marksmith_core::{ActionRegistry, ActionResult, EditorError, Menu, default_title};
use marksmith_format::CommonMarkFormatter;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(
    version,
    about = "marksmith - selection-aware markdown formatting commands",
    long_about = None
)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true, env = "MARKSMITH_CONFIG")]
    config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Output {
    /// Write the result back to FILE instead of stdout
    #[arg(long, short = 'i')]
    in_place: bool,

    /// Print the result even with --in-place; never write the file
    #[arg(long)]
    dry_run: bool,

    /// Print `{content, selectionStart, selectionEnd}` as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a formatting command to a document
    Apply {
        /// Command name, e.g. bold or orderedList
        action: String,

        /// Markdown file (stdin if omitted)
        file: Option<PathBuf>,

        /// Selection start, in UTF-16 code units
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Selection end, in UTF-16 code units (defaults to start)
        #[arg(long)]
        end: Option<usize>,

        /// Run `format` on the result afterwards
        #[arg(long)]
        format_after: bool,

        #[command(flatten)]
        output: Output,
    },
    /// Reformat a whole document
    Format {
        /// Markdown file (stdin if omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        output: Output,
    },
    /// List available commands, grouped as in the toolbar
    List,
}

fn main() -> Result<()> {
    init_miette()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.config.or_else(default_config_path) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    let registry =
        ActionRegistry::with_defaults(Arc::new(CommonMarkFormatter::new(config.format.clone())));
    let strict_menu = matches!(cli.command, Commands::List);
    let menu = checked_menu(config.menu, &registry, strict_menu)
        .wrap_err("config menu names a command that does not exist")?;

    match cli.command {
        Commands::Apply {
            action,
            file,
            start,
            end,
            format_after,
            output,
        } => {
            let end = end.unwrap_or(start);
            run(file.as_deref(), &output, |text| {
                transform(&registry, &action, text, start, end, format_after)
            })?;
        }
        Commands::Format { file, output } => {
            run(file.as_deref(), &output, |text| {
                registry.apply(FORMAT, text, 0, 0)
            })?;
        }
        Commands::List => {
            for group in menu.groups() {
                let line = group
                    .iter()
                    .map(|name| match default_title(name) {
                        Some(title) => format!("{name} ({title})"),
                        None => name.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// The configured menu, or the default one.
///
/// Only `list` shows the menu, so other commands just warn about unknown
/// entries instead of failing.
fn checked_menu(
    menu: Option<Menu>,
    registry: &ActionRegistry,
    strict: bool,
) -> Result<Menu, EditorError> {
    let menu = menu.unwrap_or_default();
    match menu.validate(registry) {
        Ok(()) => Ok(menu),
        Err(err) if strict => Err(err),
        Err(err) => {
            tracing::warn!(error = %err, "config menu names an unknown command");
            Ok(menu)
        }
    }
}

/// Apply `action`, then `format` if asked. Either failing fails the whole run.
fn transform(
    registry: &ActionRegistry,
    action: &str,
    text: &str,
    start: usize,
    end: usize,
    format_after: bool,
) -> Result<ActionResult, EditorError> {
    let result = registry.apply(action, text, start, end)?;
    if !format_after || action == FORMAT {
        return Ok(result);
    }
    registry.apply(
        FORMAT,
        &result.content,
        result.selection_start,
        result.selection_end,
    )
}

/// Read the input, transform it, and emit or write back the result.
///
/// The file is only written once the transform has succeeded.
fn run<F>(file: Option<&Path>, output: &Output, edit: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<ActionResult, EditorError>,
{
    let write_back = output.in_place && !output.dry_run;
    if write_back && file.is_none() {
        return Err(miette::miette!("--in-place needs a FILE argument"));
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            text
        }
    };

    let result = edit(&text)?;

    match file {
        Some(path) if write_back => {
            std::fs::write(path, &result.content)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote result");
        }
        _ if !output.json => print!("{}", result.content),
        _ => {}
    }

    if output.json {
        let json = serde_json::to_string_pretty(&result).into_diagnostic()?;
        println!("{json}");
    } else {
        eprintln!("selection: {}..{}", result.selection_start, result.selection_end);
    }
    Ok(())
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("marksmith").join("config.kdl"))
}

/// Default filter when `RUST_LOG` is unset.
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let level = log_level(verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn init_miette() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();
    Ok(())
}
