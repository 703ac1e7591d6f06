use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal, Write},
    path::PathBuf,
};

mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use config::{load_settings, Settings, DEFAULT_CONFIG_PATH};
use recipe_core::{dispatch, RecipeStore};
use shared::{domain::SaveMode, error::ApiError};
use shell::{describe_event, parse_line, render_recipe, render_store, ShellAction, HELP};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "recipe_box", about = "In-memory recipe box")]
struct Args {
    /// TOML settings file; a missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print each store event as one JSON line instead of re-rendering.
    #[arg(long)]
    json: bool,
    #[arg(long, value_parser = parse_save_mode)]
    save_mode: Option<SaveMode>,
    /// Start with an empty collection.
    #[arg(long)]
    no_seed: bool,
    #[arg(long)]
    log_filter: Option<String>,
}

fn parse_save_mode(raw: &str) -> Result<SaveMode, String> {
    SaveMode::parse(raw).ok_or_else(|| format!("expected append or in_place, got '{raw}'"))
}

/// Command-line flags win over the file and environment.
fn apply_args(settings: &mut Settings, args: &Args) {
    if let Some(mode) = args.save_mode {
        settings.save_mode = mode;
    }
    if args.no_seed {
        settings.seed_sample_recipes = false;
    }
    if let Some(filter) = &args.log_filter {
        settings.log_filter = filter.clone();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the store for the session and renders it after each command.
struct App {
    store: RecipeStore,
    json: bool,
}

impl App {
    fn new(store: RecipeStore, json: bool) -> Self {
        Self { store, json }
    }

    fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let action = match parse_line(line, &self.store) {
            Ok(Some(action)) => action,
            Ok(None) => return Ok(Flow::Continue),
            Err(message) => {
                writeln!(out, "error: {message}")?;
                return Ok(Flow::Continue);
            }
        };

        match action {
            ShellAction::Dispatch(command) => match dispatch(&mut self.store, command) {
                Ok(event) if self.json => {
                    writeln!(out, "{}", serde_json::to_string(&event)?)?;
                }
                Ok(event) => {
                    writeln!(out, "{}", describe_event(&event))?;
                    render_store(out, &self.store)?;
                }
                Err(err) if self.json => {
                    let api_error = ApiError::from(err);
                    writeln!(out, "{}", serde_json::to_string(&api_error)?)?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            ShellAction::Show(index) => match self.store.get(index) {
                Some(recipe) => render_recipe(out, index, recipe)?,
                None => writeln!(out, "error: no recipe at index {index}")?,
            },
            ShellAction::Help => writeln!(out, "{HELP}")?,
            ShellAction::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn run(&mut self, input: impl BufRead, out: &mut impl Write, prompt: bool) -> Result<()> {
        if !self.json {
            render_store(out, &self.store)?;
        }
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        for line in input.lines() {
            let line = line.context("failed to read command line")?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let loaded = load_settings(&args.config);
    let mut settings = loaded.settings;
    apply_args(&mut settings, &args);

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(io::stderr)
        .init();
    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    info!(
        save_mode = ?settings.save_mode,
        seeded = settings.seed_sample_recipes,
        "starting recipe box"
    );

    let store = if settings.seed_sample_recipes {
        RecipeStore::seeded(settings.save_mode)
    } else {
        RecipeStore::new(settings.save_mode)
    };
    let mut app = App::new(store, args.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open script '{}'", path.display()))?;
            app.run(BufReader::new(file), &mut out, false)
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal() && !args.json;
            app.run(stdin.lock(), &mut out, prompt)
        }
    }
}
