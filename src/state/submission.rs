//! Submission lifecycle of the facility form
//!
//! The controller is a pure transition function: it takes the current
//! session state and one event, and returns the next state together with the
//! side effects the caller must perform. Nothing here talks to the network.

use super::app_state::{bed_add_location, AppMessage};
use super::forms::{FacilityField, FormState, FormValues};
use super::validation::validate;
use serde::{Deserialize, Serialize};

/// Facility type tag sent for every facility created from this screen
pub const HOSPITAL_FACILITY_TYPE: u32 = 1;

pub const SUCCESS_MESSAGE: &str = "Facility Added Successfully";

/// Shown when the service rejects the facility, unless configured otherwise
pub const DEFAULT_FAILURE_MESSAGE: &str = "Could not create facility. Please try again.";

/// Coordinates as entered by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

/// Payload sent to the facility creation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub facility_type: u32,
    pub name: String,
    pub district: String,
    pub address: String,
    pub location: Location,
    pub phone_number: String,
}

impl SubmissionRequest {
    pub fn from_values(values: &FormValues) -> Self {
        let value = |field| values.get(field).to_string();
        Self {
            facility_type: HOSPITAL_FACILITY_TYPE,
            name: value(FacilityField::Name),
            district: value(FacilityField::District),
            address: value(FacilityField::Address),
            location: Location {
                latitude: value(FacilityField::Latitude),
                longitude: value(FacilityField::Longitude),
            },
            phone_number: value(FacilityField::PhoneNumber),
        }
    }
}

/// Body returned by the creation service
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateFacilityResponse {
    /// Created facility id; the service may send it as a number or a string
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

impl CreateFacilityResponse {
    /// The created id as a string, if the response carries a usable one
    pub fn facility_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// Result of one creation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { created_id: String },
    Failure { reason: String },
}

impl From<CreateFacilityResponse> for SubmissionOutcome {
    fn from(response: CreateFacilityResponse) -> Self {
        match response.facility_id() {
            Some(created_id) => SubmissionOutcome::Success { created_id },
            None => SubmissionOutcome::Failure {
                reason: "response did not include a facility id".to_string(),
            },
        }
    }
}

/// Where the submit lifecycle currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded { facility_id: String },
    Failed { reason: String },
}

impl SubmitPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Everything the screen owns for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub form: FormState,
    pub phase: SubmitPhase,
}

/// Inputs to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Replace one field's value
    Edit { field: FacilityField, value: String },
    FocusNext,
    FocusPrev,
    Submit,
    /// The creation call finished
    Completed(SubmissionOutcome),
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CreateFacility(SubmissionRequest),
    Notify(AppMessage),
    Navigate(String),
}

/// Next state plus the effects to perform, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn stay(state: SessionState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

/// Drives the facility form through validation and submission
#[derive(Debug, Clone)]
pub struct SubmissionController {
    failure_message: String,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new(DEFAULT_FAILURE_MESSAGE)
    }
}

impl SubmissionController {
    pub fn new(failure_message: impl Into<String>) -> Self {
        Self {
            failure_message: failure_message.into(),
        }
    }

    /// Apply one event to the session state
    pub fn transition(&self, state: SessionState, event: FormEvent) -> Transition {
        // No input is accepted while a request is in flight
        if state.phase.is_busy() && !matches!(event, FormEvent::Completed(_)) {
            tracing::debug!("Ignoring {event:?} while submitting");
            return Transition::stay(state);
        }

        match event {
            FormEvent::Edit { field, value } => {
                let mut form = state.form;
                let values = form.values().with(field, value);
                form.replace(values);
                Transition::stay(SessionState { form, ..state })
            }
            FormEvent::FocusNext => {
                let mut form = state.form;
                form.next_focus();
                Transition::stay(SessionState { form, ..state })
            }
            FormEvent::FocusPrev => {
                let mut form = state.form;
                form.prev_focus();
                Transition::stay(SessionState { form, ..state })
            }
            FormEvent::Submit => {
                tracing::debug!("Submit requested from {:?}", state.phase);
                self.validate(SessionState {
                    phase: SubmitPhase::Validating,
                    ..state
                })
            }
            FormEvent::Completed(outcome) => self.complete(state, outcome),
        }
    }

    fn validate(&self, state: SessionState) -> Transition {
        let verdict = validate(state.form.values());
        let mut form = state.form;
        form.replace_errors(verdict.errors);

        if !verdict.valid {
            tracing::debug!("Validation failed, staying idle");
            return Transition::stay(SessionState {
                form,
                phase: SubmitPhase::Idle,
            });
        }

        let request = SubmissionRequest::from_values(form.values());
        Transition {
            state: SessionState {
                form,
                phase: SubmitPhase::Submitting,
            },
            effects: vec![Effect::CreateFacility(request)],
        }
    }

    fn complete(&self, state: SessionState, outcome: SubmissionOutcome) -> Transition {
        if !state.phase.is_busy() {
            tracing::warn!("Dropping submission outcome received in {:?}", state.phase);
            return Transition::stay(state);
        }

        match outcome {
            SubmissionOutcome::Success { created_id } => {
                tracing::info!("Facility {created_id} created");
                let mut form = state.form;
                form.replace(FormValues::default());
                Transition {
                    effects: vec![
                        Effect::Notify(AppMessage::success(SUCCESS_MESSAGE)),
                        Effect::Navigate(bed_add_location(&created_id)),
                    ],
                    state: SessionState {
                        form,
                        phase: SubmitPhase::Succeeded {
                            facility_id: created_id,
                        },
                    },
                }
            }
            SubmissionOutcome::Failure { reason } => {
                tracing::warn!("Facility creation failed: {reason}");
                Transition {
                    effects: vec![Effect::Notify(AppMessage::error(format!(
                        "{} ({reason})",
                        self.failure_message
                    )))],
                    state: SessionState {
                        form: state.form,
                        phase: SubmitPhase::Failed { reason },
                    },
                }
            }
        }
    }
}
