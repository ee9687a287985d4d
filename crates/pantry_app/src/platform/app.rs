use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use clap::Parser;
use pantry_core::{update, AppState, Msg};
use pantry_engine::{EngineHandle, FileStore, MealDbClient};
use pantry_logging::{pantry_info, pantry_warn};

use super::config::Args;
use super::effects::{self, EffectRunner};
use super::ui::commands::{parse_command, Command, HELP, HELP_HINT};
use super::{logging, persistence, ui};

/// Everything the app loop reacts to.
pub enum AppInput {
    Command(Command),
    /// Input line that did not parse; carries the message to show.
    Rejected(String),
    Engine(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log, args.log_level());
    pantry_info!(
        "Starting pantry base_url={} cache_dir={:?} data_dir={:?}",
        args.base_url,
        args.cache_dir,
        args.data_dir
    );

    let settings = args.fetch_settings();
    let source = MealDbClient::new(settings.clone())
        .with_context(|| format!("invalid recipe API base url {:?}", args.base_url))?;
    let store = FileStore::new(args.cache_dir.clone());
    let (engine, events) = EngineHandle::spawn(
        Arc::new(source),
        Arc::new(store),
        settings.letter_concurrency,
    )
    .context("failed to start engine")?;

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    effects::spawn_event_forwarder(events, input_tx.clone())
        .context("failed to start event forwarder")?;
    spawn_stdin_reader(input_tx).context("failed to start input reader")?;

    let mut shell = Shell::new(EffectRunner::new(engine, args.data_dir.clone()));
    shell.dispatch(Msg::FavoritesRestored(persistence::load_favorites(
        &args.data_dir,
    )))?;
    shell.dispatch(Msg::CategoriesRequested)?;
    shell.dispatch(Msg::CatalogRequested)?;
    shell.print(HELP_HINT)?;

    for input in input_rx {
        match input {
            AppInput::Command(Command::Dispatch(msg)) | AppInput::Engine(msg) => {
                shell.dispatch(msg)?
            }
            AppInput::Command(Command::Help) => shell.print(HELP)?,
            AppInput::Rejected(message) => shell.print(&message)?,
            AppInput::Command(Command::Quit) | AppInput::InputClosed => break,
        }
    }

    pantry_info!("Shutting down");
    Ok(())
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<AppInput>) -> io::Result<()> {
    thread::Builder::new()
        .name("pantry-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let input = match line {
                    Ok(line) => match parse_command(&line) {
                        Ok(Some(command)) => AppInput::Command(command),
                        Ok(None) => continue,
                        Err(message) => AppInput::Rejected(message),
                    },
                    Err(err) => {
                        pantry_warn!("Failed to read input: {}", err);
                        break;
                    }
                };
                if input_tx.send(input).is_err() {
                    return;
                }
            }
            let _ = input_tx.send(AppInput::InputClosed);
        })?;
    Ok(())
}

/// Owns the state and drives update, effects and rendering.
struct Shell {
    state: AppState,
    effects: EffectRunner,
}

impl Shell {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            let text = ui::render::render(&self.state.view());
            self.print(&text)?;
        }
        Ok(())
    }

    fn print(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text.trim_end())?;
        writeln!(out)?;
        out.flush()
    }
}
