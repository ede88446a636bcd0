use crate::domain::model::Vehicle;
use crate::domain::ports::VehicleSource;
use crate::domain::search::filter_vehicles;
use crate::utils::error::Result;

/// Presentation state of the directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Empty,
    Loaded,
    /// The fetch failed; rendered as the empty state, with the reason kept
    /// so callers can tell an outage apart from an empty inventory.
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    Reload,
    Fetched(usize),
    FetchFailed(String),
}

impl LoadState {
    pub fn on_event(self, event: &DirectoryEvent) -> LoadState {
        match (self, event) {
            (_, DirectoryEvent::Reload) => LoadState::Loading,
            (LoadState::Loading, DirectoryEvent::Fetched(0)) => LoadState::Empty,
            (LoadState::Loading, DirectoryEvent::Fetched(_)) => LoadState::Loaded,
            (LoadState::Loading, DirectoryEvent::FetchFailed(reason)) => {
                LoadState::Error(reason.clone())
            }
            // late outcome for a load that is no longer pending
            (state, _) => state,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }
}

/// View model for the vehicle listing: the fetched collection, the current
/// search query and the subset it selects.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    all: Vec<Vehicle>,
    visible: Vec<Vehicle>,
    query: String,
    state: LoadState,
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryView {
    pub fn new() -> Self {
        Self {
            all: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            state: LoadState::Loading,
        }
    }

    pub async fn load<S: VehicleSource + ?Sized>(&mut self, source: &S) {
        self.begin_load();
        let outcome = source.list_vehicles().await;
        self.apply_fetch(outcome);
    }

    pub fn begin_load(&mut self) {
        self.transition(DirectoryEvent::Reload);
    }

    /// Folds a fetch result into the view. Failures never propagate: the
    /// collection becomes empty and the state records the reason.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<Vehicle>>) {
        if self.state.is_settled() {
            tracing::debug!("Ignoring fetch result for a load that is no longer pending");
            return;
        }

        match outcome {
            Ok(vehicles) => {
                tracing::info!("Loaded {} vehicles", vehicles.len());
                let count = vehicles.len();
                self.all = vehicles;
                self.transition(DirectoryEvent::Fetched(count));
            }
            Err(e) => {
                tracing::warn!("Failed to fetch vehicles, showing empty inventory: {}", e);
                self.all.clear();
                self.transition(DirectoryEvent::FetchFailed(e.to_string()));
            }
        }
        self.refresh_visible();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_visible();
    }

    fn transition(&mut self, event: DirectoryEvent) {
        let current = std::mem::replace(&mut self.state, LoadState::Loading);
        self.state = current.on_event(&event);
    }

    fn refresh_visible(&mut self) {
        self.visible = filter_vehicles(&self.all, &self.query);
    }

    pub fn all(&self) -> &[Vehicle] {
        &self.all
    }

    pub fn visible(&self) -> &[Vehicle] {
        &self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn fetch_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }
}
