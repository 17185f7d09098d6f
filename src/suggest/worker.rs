//! Suggestion worker thread
//!
//! Runs lookups in the background so typing never waits on the network.
//! Receives requests via channel, runs each lookup as its own task on a
//! current-thread tokio runtime, and sends replies back to the input thread.
//! Several lookups may be in flight at once; replies come back in completion
//! order, not request order.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::SuggestionSource;
use super::types::{RequestToken, SuggestRequest, SuggestResponse};

/// Spawn the suggestion worker thread
///
/// The worker runs until `request_rx` is closed, i.e. until every sender
/// has been dropped.
pub fn spawn_worker(
    source: Arc<dyn SuggestionSource>,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::io::Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("suggest-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(source, request_rx, response_tx));
        })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    source: Arc<dyn SuggestionSource>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    let mut in_flight: HashMap<RequestToken, CancellationToken> = HashMap::new();

    while let Some(request) = request_rx.recv().await {
        // Finished lookups cancel their own token on the way out
        in_flight.retain(|_, cancel| !cancel.is_cancelled());

        match request {
            SuggestRequest::Fetch { token, query } => {
                let cancel = CancellationToken::new();
                in_flight.insert(token, cancel.clone());
                tokio::spawn(run_fetch(
                    Arc::clone(&source),
                    token,
                    query,
                    cancel,
                    response_tx.clone(),
                ));
            }
            SuggestRequest::Cancel { token } => match in_flight.remove(&token) {
                Some(cancel) => {
                    cancel.cancel();
                    log::debug!("Cancelled suggestion request {}", token);
                }
                None => {
                    log::debug!("Cancel for request {} ignored (not in flight)", token);
                }
            },
        }
    }

    for cancel in in_flight.values() {
        cancel.cancel();
    }
    log::debug!("Suggestion worker shutting down");
}

/// Run one lookup and report its outcome unless it was cancelled first
async fn run_fetch(
    source: Arc<dyn SuggestionSource>,
    token: RequestToken,
    query: String,
    cancel: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    let _done = cancel.clone().drop_guard();

    let result = tokio::select! {
        _ = cancel.cancelled() => return,
        result = source.fetch_suggestions(query.clone()) => result,
    };

    if let Err(e) = &result {
        log::debug!("Suggestion request {} for {:?} failed: {}", token, query, e);
    }

    // Input thread gone means nobody is listening
    let _ = response_tx.send(SuggestResponse {
        token,
        query,
        result,
    });
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
