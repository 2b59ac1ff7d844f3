//! CLI command handling for logtable.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use logtable::config;
use logtable::ui::{self, TableOptions, TableRenderer, TermScreen};

#[derive(Parser)]
#[command(name = "logtable")]
#[command(about = "Draw a boxed welcome table in the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask a yes/no question
    Prompt {
        /// Field name reported with the answer
        name: String,
        /// Question to ask
        message: String,
        /// Print the prompt descriptor as JSON instead of asking
        #[arg(long)]
        json: bool,
    },
    /// Print the default options as TOML
    Defaults,
}

#[derive(Args, Default)]
pub struct RenderArgs {
    /// Options file (defaults to the user config file when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the title
    #[arg(long)]
    pub title: Option<String>,
    /// Override the subtitle
    #[arg(long)]
    pub subtitle: Option<String>,
    /// Override the line printed under the table
    #[arg(long)]
    pub after_text: Option<String>,
    /// Keep the current screen contents
    #[arg(long)]
    pub no_clear: bool,
}

impl RenderArgs {
    /// Apply command-line overrides on top of loaded options.
    fn apply(&self, mut options: TableOptions) -> TableOptions {
        if let Some(title) = &self.title {
            options.title.clone_from(title);
        }
        if let Some(subtitle) = &self.subtitle {
            options.subtitle.clone_from(subtitle);
        }
        if let Some(after_text) = &self.after_text {
            options.after_text.clone_from(after_text);
        }
        if self.no_clear {
            options.clear_screen = false;
        }
        options
    }
}

pub fn render(args: &RenderArgs) -> Result<()> {
    let options = args.apply(config::load(args.config.as_deref())?);
    debug!(title = %options.title, clear = options.clear_screen, "rendering table");

    let renderer = TableRenderer::new(options).context("Invalid table options")?;
    renderer.render(&mut TermScreen::stdout())?;
    Ok(())
}

pub fn prompt(name: &str, message: &str, json: bool) -> Result<()> {
    let prompt = ui::yes_no(name, message);

    if json {
        println!("{}", prompt.to_json()?);
        return Ok(());
    }

    let answer = prompt.interact()?;
    println!("{answer}");
    Ok(())
}

pub fn defaults() -> Result<()> {
    print!("{}", config::to_toml(&TableOptions::default())?);
    Ok(())
}
