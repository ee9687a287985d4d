use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use pantry_core::RequestToken;
use pantry_logging::pantry_debug;

use crate::catalog::{fetch_category, load_full_catalog};
use crate::debounce::Debouncer;
use crate::source::RecipeSource;
use crate::store::KeyValueStore;
use crate::EngineEvent;

enum EngineCommand {
    Fetch(FetchJob),
    ScheduleSearch { generation: u64, delay: Duration },
}

/// Work that runs on the runtime and answers with exactly one event.
enum FetchJob {
    FetchAll { token: RequestToken },
    FetchByCategory { token: RequestToken, category: String },
    Lookup { token: RequestToken, id: String },
    FetchCategories,
}

#[derive(Clone)]
struct EngineContext {
    source: Arc<dyn RecipeSource>,
    store: Arc<dyn KeyValueStore>,
    letter_concurrency: usize,
}

/// Sends work to the engine thread; results arrive on the receiver returned by `spawn`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Starts the engine thread. It exits once every handle is dropped.
    pub fn spawn(
        source: Arc<dyn RecipeSource>,
        store: Arc<dyn KeyValueStore>,
        letter_concurrency: usize,
    ) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let context = EngineContext {
            source,
            store,
            letter_concurrency,
        };

        thread::Builder::new()
            .name("pantry-engine".to_string())
            .spawn(move || {
                let mut debouncer = Debouncer::new(runtime.handle().clone());
                while let Ok(command) = cmd_rx.recv() {
                    match command {
                        EngineCommand::ScheduleSearch { generation, delay } => {
                            let event_tx = event_tx.clone();
                            debouncer.schedule(delay, move || {
                                let _ = event_tx
                                    .send(EngineEvent::SearchDebounceElapsed { generation });
                            });
                        }
                        EngineCommand::Fetch(job) => {
                            let context = context.clone();
                            let event_tx = event_tx.clone();
                            runtime.spawn(async move {
                                run_fetch_job(&context, job, event_tx).await;
                            });
                        }
                    }
                }
                pantry_debug!("Engine command channel closed");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn fetch_all(&self, token: RequestToken) {
        self.send(EngineCommand::Fetch(FetchJob::FetchAll { token }));
    }

    pub fn fetch_by_category(&self, token: RequestToken, category: impl Into<String>) {
        self.send(EngineCommand::Fetch(FetchJob::FetchByCategory {
            token,
            category: category.into(),
        }));
    }

    pub fn lookup(&self, token: RequestToken, id: impl Into<String>) {
        self.send(EngineCommand::Fetch(FetchJob::Lookup {
            token,
            id: id.into(),
        }));
    }

    pub fn fetch_categories(&self) {
        self.send(EngineCommand::Fetch(FetchJob::FetchCategories));
    }

    pub fn schedule_search(&self, generation: u64, delay: Duration) {
        self.send(EngineCommand::ScheduleSearch { generation, delay });
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn run_fetch_job(
    context: &EngineContext,
    job: FetchJob,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match job {
        FetchJob::FetchAll { token } => EngineEvent::CatalogFetched {
            token,
            result: load_full_catalog(
                context.source.as_ref(),
                context.store.as_ref(),
                context.letter_concurrency,
            )
            .await,
        },
        FetchJob::FetchByCategory { token, category } => EngineEvent::CatalogFetched {
            token,
            result: fetch_category(context.source.as_ref(), &category).await,
        },
        FetchJob::Lookup { token, id } => EngineEvent::RecipeLookedUp {
            token,
            result: context.source.lookup(&id).await,
        },
        FetchJob::FetchCategories => EngineEvent::CategoriesFetched {
            result: context.source.list_categories().await,
        },
    };
    let _ = event_tx.send(event);
}
