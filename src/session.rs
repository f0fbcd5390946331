//! One facility-create session: state, effects and the service call
//!
//! Submitting is split in two so the caller can redraw between staging the
//! request and awaiting the service: [`FacilitySession::begin_submit`] runs
//! validation and stages the request, [`FacilitySession::complete_submission`]
//! performs the single creation call and feeds its outcome back.

use crate::api::FacilityServiceTrait;
use crate::state::{
    districts, AppMessage, Effect, FacilityField, FieldKind, FormEvent, Navigation, SessionState,
    SubmissionController, SubmissionOutcome, SubmissionRequest, SubmitPhase,
};

pub struct FacilitySession<S> {
    service: S,
    controller: SubmissionController,
    state: SessionState,
    pending: Option<SubmissionRequest>,
    pub message: AppMessage,
    pub navigation: Navigation,
}

impl<S: FacilityServiceTrait> FacilitySession<S> {
    pub fn new(service: S, controller: SubmissionController) -> Self {
        Self {
            service,
            controller,
            state: SessionState::default(),
            pending: None,
            message: AppMessage::hidden(),
            navigation: Navigation::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.state.phase
    }

    /// Whether a validated request is waiting to be sent
    pub fn has_pending_request(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one event through the controller and apply its effects
    pub fn dispatch(&mut self, event: FormEvent) {
        let transition = self
            .controller
            .transition(std::mem::take(&mut self.state), event);
        self.state = transition.state;

        for effect in transition.effects {
            match effect {
                Effect::CreateFacility(request) => self.pending = Some(request),
                Effect::Notify(message) => self.message = message,
                Effect::Navigate(location) => self.navigation.navigate(location),
            }
        }
    }

    pub fn dismiss_message(&mut self) {
        self.message = AppMessage::hidden();
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.state.form.focus().field() else {
            return;
        };
        if field.kind() == FieldKind::DistrictSelect {
            return;
        }

        let current = self.state.form.values().get(field);
        if let Some(max) = field.max_length() {
            if current.chars().count() >= max {
                return;
            }
        }

        let mut value = current.to_string();
        value.push(c);
        self.dispatch(FormEvent::Edit { field, value });
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(field) = self.state.form.focus().field() else {
            return;
        };

        let value = if field.kind() == FieldKind::DistrictSelect {
            String::new()
        } else {
            let mut value = self.state.form.values().get(field).to_string();
            value.pop();
            value
        };
        self.dispatch(FormEvent::Edit { field, value });
    }

    /// Move the district selection when the district field is focused
    pub fn cycle_district(&mut self, forward: bool) {
        if self.state.form.focus().field() != Some(FacilityField::District) {
            return;
        }
        let current = self.state.form.values().get(FacilityField::District);
        let value = districts::step(current, forward);
        self.dispatch(FormEvent::Edit {
            field: FacilityField::District,
            value,
        });
    }

    /// Validate and stage a request. Returns whether a request was staged.
    pub fn begin_submit(&mut self) -> bool {
        self.dispatch(FormEvent::Submit);
        self.has_pending_request()
    }

    /// Send the staged request, if any, and apply the outcome
    pub async fn complete_submission(&mut self) {
        let Some(request) = self.pending.take() else {
            return;
        };

        let outcome = match self.service.create_facility(&request).await {
            Ok(response) => SubmissionOutcome::from(response),
            Err(e) => SubmissionOutcome::Failure {
                reason: e.to_string(),
            },
        };
        self.dispatch(FormEvent::Completed(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockFacilityServiceTrait};
    use crate::state::{
        CreateFacilityResponse, FormFocus, FormValues, MessageKind, REQUIRED_MESSAGE,
        SUCCESS_MESSAGE,
    };
    use pretty_assertions::assert_eq;

    fn fill(session: &mut FacilitySession<MockFacilityServiceTrait>) {
        for (field, value) in [
            (FacilityField::Name, "General Hospital"),
            (FacilityField::District, "11"),
            (FacilityField::Address, "Mavoor Road"),
            (FacilityField::PhoneNumber, "9447012345"),
            (FacilityField::Latitude, "11.2588"),
            (FacilityField::Longitude, "75.7804"),
        ] {
            session.dispatch(FormEvent::Edit {
                field,
                value: value.to_string(),
            });
        }
    }

    fn session_with(mock: MockFacilityServiceTrait) -> FacilitySession<MockFacilityServiceTrait> {
        FacilitySession::new(mock, SubmissionController::new("Could not save"))
    }

    /// Validate, then send and await the result in one step
    async fn submit(session: &mut FacilitySession<MockFacilityServiceTrait>) {
        if session.begin_submit() {
            session.complete_submission().await;
        }
    }

    fn respond_with_id(id: serde_json::Value) -> CreateFacilityResponse {
        CreateFacilityResponse { id: Some(id) }
    }

    #[tokio::test]
    async fn test_valid_submit_calls_service_once_and_navigates() {
        let mut mock = MockFacilityServiceTrait::new();
        mock.expect_create_facility()
            .withf(|req| {
                req.facility_type == 1
                    && req.location.latitude == "11.2588"
                    && req.location.longitude == "75.7804"
                    && req.name == "General Hospital"
            })
            .times(1)
            .returning(|_| Ok(respond_with_id(serde_json::json!(42))));

        let mut session = session_with(mock);
        fill(&mut session);
        submit(&mut session).await;

        assert_eq!(session.state().form.values(), &FormValues::default());
        assert_eq!(
            session.navigation.history().to_vec(),
            vec!["/facility/42/bed/add".to_string()]
        );
        assert_eq!(session.message, AppMessage::success(SUCCESS_MESSAGE));
        assert_eq!(
            session.phase(),
            &SubmitPhase::Succeeded {
                facility_id: "42".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_submit_never_calls_service() {
        let mut mock = MockFacilityServiceTrait::new();
        mock.expect_create_facility().times(0);

        let mut session = session_with(mock);
        submit(&mut session).await;

        assert_eq!(session.phase(), &SubmitPhase::Idle);
        assert_eq!(
            session.state().form.errors().get(FacilityField::Address),
            REQUIRED_MESSAGE
        );
        assert!(session.navigation.history().is_empty());
        assert!(!session.message.show);
    }

    #[tokio::test]
    async fn test_response_without_id_keeps_values() {
        let mut mock = MockFacilityServiceTrait::new();
        mock.expect_create_facility()
            .times(1)
            .returning(|_| Ok(CreateFacilityResponse::default()));

        let mut session = session_with(mock);
        fill(&mut session);
        submit(&mut session).await;

        assert_eq!(
            session.state().form.values().get(FacilityField::Name),
            "General Hospital"
        );
        assert!(matches!(session.phase(), SubmitPhase::Failed { .. }));
        assert_eq!(session.message.kind, MessageKind::Error);
        assert!(session.message.message.starts_with("Could not save"));
        assert!(session.navigation.history().is_empty());
    }

    #[tokio::test]
    async fn test_service_error_then_successful_retry() {
        let mut mock = MockFacilityServiceTrait::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_create_facility()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(ApiError::Status {
                    status: 500,
                    body: "boom".to_string(),
                })
            });
        mock.expect_create_facility()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(respond_with_id(serde_json::json!("abc"))));

        let mut session = session_with(mock);
        fill(&mut session);

        submit(&mut session).await;
        assert!(matches!(session.phase(), SubmitPhase::Failed { .. }));
        assert!(session.message.message.contains("service returned 500"));
        assert_ne!(session.state().form.values(), &FormValues::default());

        submit(&mut session).await;
        assert_eq!(session.navigation.current(), Some("/facility/abc/bed/add"));
    }

    #[tokio::test]
    async fn test_begin_submit_stages_request_until_completed() {
        let mut mock = MockFacilityServiceTrait::new();
        mock.expect_create_facility()
            .times(1)
            .returning(|_| Ok(respond_with_id(serde_json::json!(3))));

        let mut session = session_with(mock);
        fill(&mut session);

        assert!(session.begin_submit());
        assert!(session.phase().is_busy());

        // A second submit while in flight stages nothing new
        session.dispatch(FormEvent::Submit);
        assert!(session.phase().is_busy());

        session.complete_submission().await;
        assert!(!session.has_pending_request());

        // Nothing staged, so no further call
        session.complete_submission().await;
        assert_eq!(session.navigation.history().len(), 1);
    }

    #[test]
    fn test_complete_without_staged_request_is_noop() {
        let mut mock = MockFacilityServiceTrait::new();
        mock.expect_create_facility().times(0);

        let mut session = session_with(mock);
        tokio_test::block_on(session.complete_submission());
        assert_eq!(session.phase(), &SubmitPhase::Idle);
        assert!(!session.message.show);
    }

    #[test]
    fn test_input_char_respects_phone_length_cap() {
        let mut session = session_with(MockFacilityServiceTrait::new());
        while session.state().form.focus() != FormFocus::Field(FacilityField::PhoneNumber) {
            session.dispatch(FormEvent::FocusNext);
        }
        for c in "0123456789012345".chars() {
            session.input_char(c);
        }
        assert_eq!(
            session.state().form.values().get(FacilityField::PhoneNumber),
            "0123456789012"
        );

        session.backspace();
        assert_eq!(
            session.state().form.values().get(FacilityField::PhoneNumber),
            "012345678901"
        );
    }

    #[test]
    fn test_district_is_selected_not_typed() {
        let mut session = session_with(MockFacilityServiceTrait::new());
        session.dispatch(FormEvent::FocusNext);
        assert_eq!(
            session.state().form.focus(),
            FormFocus::Field(FacilityField::District)
        );

        session.input_char('x');
        assert_eq!(session.state().form.values(), &FormValues::default());

        session.cycle_district(true);
        session.cycle_district(true);
        assert_eq!(session.state().form.values().get(FacilityField::District), "2");

        session.backspace();
        assert_eq!(session.state().form.values().get(FacilityField::District), "");
    }

    #[test]
    fn test_typing_on_save_button_does_nothing() {
        let mut session = session_with(MockFacilityServiceTrait::new());
        session.dispatch(FormEvent::FocusPrev);
        assert_eq!(session.state().form.focus(), FormFocus::SaveButton);
        session.input_char('a');
        session.backspace();
        assert_eq!(session.state().form.values(), &FormValues::default());
    }

    #[test]
    fn test_dismiss_message_hides_notification() {
        let mut session = session_with(MockFacilityServiceTrait::new());
        session.message = AppMessage::error("x");
        session.dismiss_message();
        assert_eq!(session.message, AppMessage::hidden());
    }
}
