//! The validate → search → persist state machine behind the search box.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::time::sleep;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::matcher::RecipeMatcher;
use crate::model::Recipe;
use crate::normalizer::{normalize, InputStrength};
use crate::store::{SessionKey, SessionStore};

/// What the presentation layer should be showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Validating,
    /// A search is pending; show a busy indicator
    Loading,
    Results(Vec<Recipe>),
    /// The last search matched nothing
    Empty,
    /// Validation failed; holds the advisory text
    Error(String),
}

/// Dismissible messages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    TooFewIngredients,
    NoMatches,
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::TooFewIngredients => "Please enter at least 3 ingredients.",
            Advisory::NoMatches => "Work in Progress: No matching recipes found!",
        }
    }
}

/// How a call to [`SearchSession::search`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Number of recipes found
    Matched(usize),
    NoMatches,
    /// The input held fewer ingredients than the threshold; nothing was searched
    TooFewIngredients { found: usize },
    /// The pending search was cancelled before it completed; nothing was persisted
    Cancelled,
}

/// Cancels whichever search is pending on the session it came from.
#[derive(Debug, Clone)]
pub struct SearchCanceller {
    signal: Arc<watch::Sender<u64>>,
}

impl SearchCanceller {
    pub fn cancel(&self) {
        self.signal.send_modify(|generation| *generation += 1);
    }
}

/// One user's search session over a fixed catalog.
///
/// Searches take `&mut self`, so at most one is ever in flight per session.
pub struct SearchSession<S: SessionStore> {
    catalog: Arc<Catalog>,
    store: S,
    matcher: RecipeMatcher,
    search_delay: Duration,
    input: String,
    results: Vec<Recipe>,
    popup: Option<Advisory>,
    state: watch::Sender<SearchState>,
    cancel: Arc<watch::Sender<u64>>,
}

impl<S: SessionStore> SearchSession<S> {
    /// Start a session, picking up the input and results of the last search
    /// persisted in `store`. Unreadable persisted results are treated as none.
    pub fn restore(catalog: Arc<Catalog>, store: S, settings: &Settings) -> Self {
        let input = store.get(SessionKey::SearchInput).unwrap_or_default();
        let results = match store.get(SessionKey::SuggestedRecipes) {
            Some(json) => serde_json::from_str::<Vec<Recipe>>(&json).unwrap_or_else(|e| {
                warn!("Discarding unreadable persisted results: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };
        debug!(
            "Restored session with input {:?} and {} results",
            input,
            results.len()
        );

        let (state, _) = watch::channel(SearchState::Idle);
        let (cancel, _) = watch::channel(0);

        SearchSession {
            catalog,
            store,
            matcher: RecipeMatcher::new(settings.threshold),
            search_delay: settings.search_delay(),
            input,
            results,
            popup: None,
            state,
            cancel: Arc::new(cancel),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    /// Whether the current input has enough ingredients to search.
    pub fn input_strength(&self) -> InputStrength {
        InputStrength::of(&normalize(&self.input), self.matcher.threshold())
    }

    /// Results of the last completed search (or the restored ones).
    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// True while there is nothing to list, i.e. the default view is shown.
    pub fn shows_default_view(&self) -> bool {
        self.results.is_empty()
    }

    pub fn popup(&self) -> Option<Advisory> {
        self.popup
    }

    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Watch state transitions, including `Loading` while a search is pending.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    pub fn canceller(&self) -> SearchCanceller {
        SearchCanceller {
            signal: Arc::clone(&self.cancel),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// End the session, handing back its store (e.g. to restore after a reload).
    pub fn into_store(self) -> S {
        self.store
    }

    /// Validate the current input, wait out the search delay, then match it
    /// against the catalog and persist the outcome.
    pub async fn search(&mut self) -> SearchOutcome {
        self.popup = None;
        self.publish(SearchState::Validating);

        let query = normalize(&self.input);
        if query.len() < self.matcher.threshold() {
            debug!(
                "Rejecting search with {} of {} required ingredients",
                query.len(),
                self.matcher.threshold()
            );
            self.popup = Some(Advisory::TooFewIngredients);
            self.publish(SearchState::Error(
                Advisory::TooFewIngredients.message().to_string(),
            ));
            return SearchOutcome::TooFewIngredients { found: query.len() };
        }

        // Subscribing marks the current generation as seen, so only a cancel
        // issued from here on interrupts this search.
        let mut cancelled = self.cancel.subscribe();
        self.publish(SearchState::Loading);

        let interrupted = tokio::select! {
            _ = sleep(self.search_delay) => false,
            _ = cancelled.changed() => true,
        };
        if interrupted {
            info!("Search for {:?} cancelled", query.tokens());
            self.publish(self.display_state());
            return SearchOutcome::Cancelled;
        }

        self.results = self.matcher.find_matches(&query, self.catalog.recipes());
        self.persist();

        if self.results.is_empty() {
            info!("No recipes match {:?}", query.tokens());
            self.popup = Some(Advisory::NoMatches);
            self.publish(SearchState::Empty);
            SearchOutcome::NoMatches
        } else {
            info!("Found {} recipes for {:?}", self.results.len(), query.tokens());
            self.publish(SearchState::Results(self.results.clone()));
            SearchOutcome::Matched(self.results.len())
        }
    }

    /// Close the advisory popup. Does not search again.
    pub fn dismiss_popup(&mut self) {
        if self.popup.take().is_some() {
            self.publish(self.display_state());
        }
    }

    fn display_state(&self) -> SearchState {
        if self.results.is_empty() {
            SearchState::Idle
        } else {
            SearchState::Results(self.results.clone())
        }
    }

    fn publish(&self, state: SearchState) {
        self.state.send_replace(state);
    }

    // Write failures are logged only; the search outcome stands either way.
    fn persist(&mut self) {
        match serde_json::to_string(&self.results) {
            Ok(json) => {
                if let Err(e) = self.store.set(SessionKey::SuggestedRecipes, json) {
                    warn!("Failed to persist search results: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize search results: {}", e),
        }
        if let Err(e) = self.store.set(SessionKey::SearchInput, self.input.clone()) {
            warn!("Failed to persist search input: {}", e);
        }
    }
}
