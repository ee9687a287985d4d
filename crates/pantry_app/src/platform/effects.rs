use std::io;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use pantry_core::{Effect, Msg};
use pantry_engine::{EngineEvent, EngineHandle, FetchError};
use pantry_logging::{pantry_debug, pantry_info, pantry_warn};

use super::app::AppInput;
use super::persistence;

pub struct EffectRunner {
    engine: EngineHandle,
    data_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, data_dir: PathBuf) -> Self {
        Self { engine, data_dir }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAll { token } => {
                    pantry_info!("FetchAll token={}", token);
                    self.engine.fetch_all(token);
                }
                Effect::FetchByCategory { token, category } => {
                    pantry_info!("FetchByCategory token={} category={}", token, category);
                    self.engine.fetch_by_category(token, category);
                }
                Effect::FetchCategories => {
                    self.engine.fetch_categories();
                }
                Effect::LookupRecipe { token, id } => {
                    pantry_info!("LookupRecipe token={} id={}", token, id);
                    self.engine.lookup(token, id);
                }
                Effect::ScheduleSearch { generation, delay } => {
                    pantry_debug!("ScheduleSearch generation={} delay={:?}", generation, delay);
                    self.engine.schedule_search(generation, delay);
                }
                Effect::SaveFavorites { recipes } => {
                    persistence::save_favorites(&self.data_dir, &recipes);
                }
            }
        }
    }
}

/// Forwards engine events to the app loop until either side hangs up.
pub fn spawn_event_forwarder(
    events: mpsc::Receiver<EngineEvent>,
    input_tx: mpsc::Sender<AppInput>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("pantry-events".to_string())
        .spawn(move || {
            while let Ok(event) = events.recv() {
                if input_tx.send(AppInput::Engine(event_to_msg(event))).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogFetched { token, result } => Msg::CatalogLoaded {
            token,
            result: result.map_err(|err| user_message("Failed to load recipes", &err)),
        },
        EngineEvent::RecipeLookedUp { token, result } => Msg::RecipeLookedUp {
            token,
            result: result.map_err(|err| user_message("Failed to load recipe", &err)),
        },
        EngineEvent::CategoriesFetched { result } => Msg::CategoriesLoaded(
            result.map_err(|err| user_message("Failed to load categories", &err)),
        ),
        EngineEvent::SearchDebounceElapsed { generation } => {
            Msg::SearchDebounceElapsed { generation }
        }
    }
}

fn user_message(summary: &str, err: &FetchError) -> String {
    pantry_warn!("{}: {}", summary, err);
    format!("{summary} ({})", err.kind)
}
