//! Command dispatch

use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::ExportService;
use crate::cli::args::{Cli, Commands, ConfigCommands, InputArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::tokenize;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::RealFileSystem;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Optimize {
            input,
            svg_dir,
            html,
            fail_on_error,
        }) => optimize(cli, input, svg_dir.as_deref(), html.as_deref(), *fail_on_error),
        Some(Commands::Tokenize { input }) => tokens(input),
        Some(Commands::Config { command }) => config(cli, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, see `exprlens --help`".to_string(),
        )),
    }
}

/// Settings from config layers plus command line overrides.
pub fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let local_dir = cli
        .config_dir
        .clone()
        .or_else(|| std::env::current_dir().ok());
    let mut settings = Settings::load(local_dir.as_deref())?;
    if let Some(server) = &cli.server {
        settings.server.base_url = server.clone();
    }
    if let Some(timeout) = cli.timeout {
        settings.server.timeout_secs = timeout;
    }
    settings.validate()?;
    Ok(settings)
}

/// Expression from a file, the positional lines, or stdin.
fn read_input(input: &InputArgs, export: &ExportService) -> CliResult<String> {
    if let Some(path) = &input.file {
        return Ok(export.read_expression(path)?);
    }
    match input.expressions.as_slice() {
        [] => read_stdin(),
        [single] if single == "-" => read_stdin(),
        lines => Ok(lines.join("\n")),
    }
}

fn read_stdin() -> CliResult<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| InfraError::io("read expression from stdin", e))?;
    Ok(buffer)
}

#[instrument(skip(cli, input))]
fn optimize(
    cli: &Cli,
    input: &InputArgs,
    svg_dir: Option<&Path>,
    html: Option<&Path>,
    fail_on_error: bool,
) -> CliResult<()> {
    let settings = load_settings(cli)?;
    debug!("optimize: server={}", settings.server.base_url);
    let container = ServiceContainer::new(settings)?;
    let export = container.export_service();
    let expression = read_input(input, &export)?;

    let mut session = container.session();
    let outcome = session.execute(&expression).map(|_| ());
    let view = session.view();
    output::view(view);

    if let Some(dir) = svg_dir {
        for path in export.write_svgs(view, dir)? {
            output::action("Wrote", &path.display());
        }
    }
    if let Some(path) = html {
        export.write_report(view, &expression, path)?;
        output::action("Wrote", &path.display());
    }

    if fail_on_error {
        // The view already carries the error line
        outcome.map_err(CliError::reported)?;
    }
    Ok(())
}

#[instrument(skip(input))]
fn tokens(input: &InputArgs) -> CliResult<()> {
    let export = ExportService::new(Arc::new(RealFileSystem));
    let expression = read_input(input, &export)?;
    output::tokens(&tokenize(&expression));
    Ok(())
}

fn config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::action("global", "unavailable"),
            }
            let local_dir = cli
                .config_dir
                .clone()
                .or_else(|| std::env::current_dir().ok());
            if let Some(dir) = local_dir {
                output::action("local", &local_config_path(&dir).display());
            }
        }
    }
    Ok(())
}
