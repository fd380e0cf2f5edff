//! Command dispatch: settings are loaded once, then each command drives the showcase.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{IoResultExt, Section, Showcase};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::{DocumentKind, TreeStyle};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => _run(cli, &[]),
        Some(Commands::Run { sections }) => _run(cli, sections),
        Some(Commands::Prototype {
            copies,
            title,
            content,
        }) => _prototype(cli, *copies, title.as_deref(), content.as_deref()),
        Some(Commands::Composite { style }) => _composite(cli, *style),
        Some(Commands::Template { kinds }) => _template(cli, kinds),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(cli),
            ConfigCommands::Path => _config_path(),
            ConfigCommands::Template => _config_template(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Load layered settings and apply global flag overrides.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn write_sections(cli: &Cli, settings: Settings, sections: &[Section]) -> CliResult<()> {
    let showcase = Showcase::new(settings).with_color(!cli.no_color);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    showcase.run(&mut handle, sections)?;
    handle.flush().with_context("flush stdout")?;
    Ok(())
}

#[instrument(skip(cli))]
fn _run(cli: &Cli, sections: &[Section]) -> CliResult<()> {
    let settings = load_settings(cli)?;
    let all = Section::ALL;
    let sections = if sections.is_empty() {
        &all[..]
    } else {
        sections
    };
    write_sections(cli, settings, sections)
}

#[instrument(skip(cli))]
fn _prototype(
    cli: &Cli,
    copies: Option<usize>,
    title: Option<&str>,
    content: Option<&str>,
) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    if let Some(copies) = copies {
        settings.prototype.copies = copies;
    }
    if let Some(title) = title {
        settings.prototype.title = Some(title.to_string());
    }
    if let Some(content) = content {
        settings.prototype.content = Some(content.to_string());
    }
    write_sections(cli, settings, &[Section::Prototype])
}

#[instrument(skip(cli))]
fn _composite(cli: &Cli, style: Option<TreeStyle>) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    if let Some(style) = style {
        settings.composite.style = style;
    }
    write_sections(cli, settings, &[Section::Composite])
}

#[instrument(skip(cli))]
fn _template(cli: &Cli, kinds: &[DocumentKind]) -> CliResult<()> {
    let mut settings = load_settings(cli)?;
    if !kinds.is_empty() {
        settings.template.kinds = kinds.to_vec();
    }
    write_sections(cli, settings, &[Section::Template])
}

fn _config_show(cli: &Cli) -> CliResult<()> {
    let settings = load_settings(cli)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            output::info(&path.display());
            if !path.exists() {
                output::warning("global config file does not exist yet");
            }
        }
        None => output::warning("no home directory; global config disabled"),
    }
    Ok(())
}

fn _config_template() -> CliResult<()> {
    output::info(&Settings::template());
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
