use crate::domain::model::{Vehicle, VehicleForm};
use crate::domain::ports::VehicleSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Backend accepted the vehicle; callers return to the directory.
    Created(Vehicle),
    /// Rejected locally before any request was made.
    Invalid(String),
    /// Backend or transport failure, message ready for display.
    Failed(String),
}

/// Add-vehicle page state. The entered values survive every failed submit.
#[derive(Debug, Clone, Default)]
pub struct AddVehicleForm {
    pub form: VehicleForm,
    error: Option<String>,
    submitting: bool,
}

impl AddVehicleForm {
    pub fn new(form: VehicleForm) -> Self {
        Self {
            form,
            error: None,
            submitting: false,
        }
    }

    pub async fn submit<S: VehicleSource + ?Sized>(&mut self, source: &S) -> SubmitOutcome {
        self.error = None;

        if let Err(e) = self.form.validate() {
            return self.fail(SubmitOutcome::Invalid(e.to_string()));
        }

        self.submitting = true;
        let payload = self.form.to_payload();
        tracing::info!("Submitting vehicle {} {} ({})", payload.make, payload.model, payload.vin);

        let result = source.create_vehicle(&payload).await;
        self.submitting = false;

        match result {
            Ok(vehicle) => {
                tracing::info!("Vehicle created with id {}", vehicle.id);
                SubmitOutcome::Created(vehicle)
            }
            Err(e) => {
                tracing::warn!("Failed to add vehicle {}: {}", payload.vin, e);
                let message = e.to_string();
                let message = if message.is_empty() {
                    "Failed to add vehicle".to_string()
                } else {
                    message
                };
                self.fail(SubmitOutcome::Failed(message))
            }
        }
    }

    fn fail(&mut self, outcome: SubmitOutcome) -> SubmitOutcome {
        if let SubmitOutcome::Invalid(message) | SubmitOutcome::Failed(message) = &outcome {
            self.error = Some(message.clone());
        }
        outcome
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
