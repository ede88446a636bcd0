use crate::domain::model::Vehicle;
use crate::domain::ports::VehicleSource;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Found(Vehicle),
    NotFound,
}

impl DetailState {
    /// Any failure, including an unknown id, settles on `NotFound`.
    pub fn from_fetch(id: &str, outcome: Result<Option<Vehicle>>) -> Self {
        match outcome {
            Ok(Some(vehicle)) => DetailState::Found(vehicle),
            Ok(None) => {
                tracing::debug!("Vehicle {} not found", id);
                DetailState::NotFound
            }
            Err(e) => {
                tracing::warn!("Error fetching vehicle {}: {}", id, e);
                DetailState::NotFound
            }
        }
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        match self {
            DetailState::Found(vehicle) => Some(vehicle),
            _ => None,
        }
    }
}

/// Single-vehicle page.
#[derive(Debug, Clone)]
pub struct DetailView {
    id: String,
    state: DetailState,
}

impl DetailView {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: DetailState::Loading,
        }
    }

    pub async fn load<S: VehicleSource + ?Sized>(&mut self, source: &S) {
        if self.id.trim().is_empty() {
            self.state = DetailState::NotFound;
            return;
        }

        self.state = DetailState::Loading;
        let outcome = source.get_vehicle(&self.id).await;
        self.state = DetailState::from_fetch(&self.id, outcome);
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }
}
