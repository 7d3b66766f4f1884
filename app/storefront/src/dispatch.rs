//! Single-threaded intent dispatch.
//!
//! Every user action becomes an [`Intent`]; query intents fan out to the
//! product service off the dispatch task, and completions re-enter it
//! tagged with a sequence number. A completion renders only if nothing
//! newer has rendered already, so a superseded query can never overwrite
//! fresher results.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use storefront_commerce::{search, FilterParams, Product};
use storefront_data::{FetchError, ProductService};

use crate::intent::Intent;
use crate::panels::PanelState;
use crate::view::ProductView;

/// Outcome of one product query.
struct Completion {
    seq: u64,
    params: FilterParams,
    outcome: Result<Vec<Product>, FetchError>,
}

/// Render-facing state owned by the dispatcher.
///
/// `products` is the single displayed-result slot, overwritten atomically
/// per query.
pub struct RenderState {
    pub products: Vec<Product>,
    pub panels: PanelState,
    displayed_seq: u64,
}

pub struct Dispatcher {
    service: Arc<dyn ProductService>,
    view: Box<dyn ProductView + Send>,
    state: RenderState,
    intents_tx: mpsc::Sender<Intent>,
    intents_rx: mpsc::Receiver<Intent>,
    completions_tx: mpsc::Sender<Completion>,
    completions_rx: mpsc::Receiver<Completion>,
    renders_tx: watch::Sender<u64>,
    next_seq: u64,
    in_flight: usize,
}

impl Dispatcher {
    pub fn new(service: Arc<dyn ProductService>, view: Box<dyn ProductView + Send>) -> Self {
        let (intents_tx, intents_rx) = mpsc::channel(16);
        let (completions_tx, completions_rx) = mpsc::channel(16);
        let (renders_tx, _) = watch::channel(0u64);

        Self {
            service,
            view,
            state: RenderState {
                products: Vec::new(),
                panels: PanelState::default(),
                displayed_seq: 0,
            },
            intents_tx,
            intents_rx,
            completions_tx,
            completions_rx,
            renders_tx,
            next_seq: 0,
            in_flight: 0,
        }
    }

    /// Sender for posting intents to the running dispatcher.
    pub fn intents(&self) -> mpsc::Sender<Intent> {
        self.intents_tx.clone()
    }

    /// Watch that ticks once per render-boundary call.
    pub fn renders(&self) -> watch::Receiver<u64> {
        self.renders_tx.subscribe()
    }

    /// Process intents until shutdown, then drain in-flight queries.
    pub async fn run(mut self) {
        let mut shutting_down = false;
        loop {
            tokio::select! {
                intent = self.intents_rx.recv(), if !shutting_down => {
                    match intent {
                        Some(Intent::Shutdown) | None => shutting_down = true,
                        Some(intent) => self.handle(intent),
                    }
                }
                Some(completion) = self.completions_rx.recv() => {
                    self.apply(completion);
                }
            }
            if shutting_down && self.in_flight == 0 {
                break;
            }
        }
    }

    fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Search { text } => self.query(FilterParams::from_search_text(&text)),
            Intent::Filter { fields } => self.query(FilterParams::from_form_fields(&fields)),
            Intent::ToggleFilter => {
                self.state.panels.toggle_filter();
                self.view.panels_changed(&self.state.panels);
                self.notify_render();
            }
            Intent::ToggleChat => {
                self.state.panels.toggle_chat();
                self.view.panels_changed(&self.state.panels);
                self.notify_render();
            }
            // Consumed by the run loop.
            Intent::Shutdown => {}
        }
    }

    /// Issue one query to the product service, off the dispatch task.
    fn query(&mut self, params: FilterParams) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight += 1;

        tracing::info!(seq, browse = params.is_browse(), "query dispatched");

        let service = Arc::clone(&self.service);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = service.fetch(&params).await;
            // A closed receiver means the dispatcher is already gone.
            let _ = completions
                .send(Completion {
                    seq,
                    params,
                    outcome,
                })
                .await;
        });
    }

    /// Render a completed query, unless something newer already rendered.
    fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);

        if completion.seq < self.state.displayed_seq {
            tracing::debug!(seq = completion.seq, "dropping superseded result");
            return;
        }
        self.state.displayed_seq = completion.seq;

        match completion.outcome {
            Ok(results) => {
                let shown = search::select(&completion.params, results);
                tracing::info!(seq = completion.seq, count = shown.len(), "rendering results");
                self.view.display_products(&shown);
                self.state.products = shown;
            }
            Err(error) => {
                tracing::warn!(seq = completion.seq, %error, "product fetch failed");
                self.view.display_error("could not load products");
                self.state.products.clear();
            }
        }
        self.notify_render();
    }

    fn notify_render(&self) {
        self.renders_tx.send_modify(|n| *n += 1);
    }
}
