#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::mpsc::{self, Sender};
    use std::time::{Duration, Instant};

    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::catalog::{Candidate, Item};
    use crate::config::SearchConfig;
    use crate::coordinator::{QueryCoordinator, SearchView};
    use crate::suggest::{FetchError, RequestToken, SuggestRequest, SuggestResponse};

    /// View that records everything the coordinator tells it
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub query: String,
        pub suggestions: Vec<Candidate>,
        pub visible: HashMap<String, bool>,
        pub suggestion_updates: usize,
    }

    impl SearchView for RecordingView {
        fn query(&self) -> String {
            self.query.clone()
        }

        fn set_query(&mut self, query: &str) {
            self.query = query.to_string();
        }

        fn set_suggestions(&mut self, suggestions: &[Candidate]) {
            self.suggestions = suggestions.to_vec();
            self.suggestion_updates += 1;
        }

        fn set_item_visible(&mut self, id: &str, visible: bool) {
            self.visible.insert(id.to_string(), visible);
        }
    }

    impl RecordingView {
        pub fn suggestion_names(&self) -> Vec<String> {
            self.suggestions.iter().map(|c| c.name.clone()).collect()
        }

        pub fn is_visible(&self, id: &str) -> bool {
            self.visible.get(id).copied().unwrap_or(false)
        }
    }

    pub fn test_items() -> Vec<Item> {
        vec![
            Item::new("1", "John"),
            Item::new("2", "Joanne"),
            Item::new("3", "Mike"),
            Item::new("4", "Arctic Monkeys"),
            Item::new("5", "Artemis"),
        ]
    }

    pub fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate::new((i + 1).to_string(), *name))
            .collect()
    }

    /// Coordinator wired to channels the test drives by hand, playing the
    /// worker's part so replies can be delivered in any order
    pub struct Harness {
        pub coordinator: QueryCoordinator<RecordingView>,
        pub requests: UnboundedReceiver<SuggestRequest>,
        pub responses: Sender<SuggestResponse>,
        pub start: Instant,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_config(&SearchConfig::default())
        }

        pub fn with_config(config: &SearchConfig) -> Self {
            let mut coordinator =
                QueryCoordinator::new(config, RecordingView::default(), test_items());
            let (request_tx, requests) = unbounded_channel();
            let (responses, response_rx) = mpsc::channel();
            coordinator.set_channels(request_tx, response_rx);

            Self {
                coordinator,
                requests,
                responses,
                start: Instant::now(),
            }
        }

        pub fn at(&self, ms: u64) -> Instant {
            self.start + Duration::from_millis(ms)
        }

        /// Simulate typing: the view's text changes, then the input event fires
        pub fn type_text(&mut self, text: &str, at_ms: u64) {
            let now = self.at(at_ms);
            self.coordinator.view_mut().query = text.to_string();
            self.coordinator.on_input(text, now);
        }

        pub fn tick(&mut self, at_ms: u64) -> bool {
            let now = self.at(at_ms);
            self.coordinator.tick(now)
        }

        /// Every request sent to the worker so far
        pub fn drain_requests(&mut self) -> Vec<SuggestRequest> {
            let mut drained = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                drained.push(request);
            }
            drained
        }

        /// Fetches sent so far, ignoring cancels
        pub fn drain_fetches(&mut self) -> Vec<(RequestToken, String)> {
            self.drain_requests()
                .into_iter()
                .filter_map(|request| match request {
                    SuggestRequest::Fetch { token, query } => Some((token, query)),
                    SuggestRequest::Cancel { .. } => None,
                })
                .collect()
        }

        /// Deliver a reply and let the coordinator poll it
        pub fn reply(
            &mut self,
            token: RequestToken,
            query: &str,
            result: Result<Vec<Candidate>, FetchError>,
        ) -> bool {
            self.responses
                .send(SuggestResponse {
                    token,
                    query: query.to_string(),
                    result,
                })
                .unwrap();
            self.coordinator.poll_responses()
        }

        pub fn view(&self) -> &RecordingView {
            self.coordinator.view()
        }
    }
}
