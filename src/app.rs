//! Application state and core logic

use crate::api::{FacilityClient, FacilityServiceTrait};
use crate::config::TuiConfig;
use crate::platform::SAVE_MODIFIER;
use crate::session::FacilitySession;
use crate::state::{FacilityField, FormEvent, FormFocus, SubmissionController, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Second Ctrl+C must arrive within this window to quit
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(800);

/// Main application struct
pub struct App<S = FacilityClient> {
    /// The facility form session
    pub session: FacilitySession<S>,
    /// Current view
    pub view: View,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    last_ctrl_c: Option<Instant>,
}

impl App<FacilityClient> {
    /// Create a new App instance talking to the configured service
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let client = FacilityClient::new(config)?;
        tracing::info!("Using facility service at {}", client.base_url());
        let controller = SubmissionController::new(config.failure_message());
        Ok(Self::with_session(FacilitySession::new(client, controller)))
    }
}

impl<S: FacilityServiceTrait> App<S> {
    pub fn with_session(session: FacilitySession<S>) -> Self {
        Self {
            session,
            view: View::default(),
            quit: false,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Record a Ctrl+C press; a second press within the window quits
    pub fn handle_ctrl_c(&mut self, now: Instant) {
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= DOUBLE_CTRL_C_WINDOW => {
                self.quit = true;
            }
            _ => self.last_ctrl_c = Some(now),
        }
    }

    /// Whether the busy indicator should be shown
    pub fn is_busy(&self) -> bool {
        self.session.phase().is_busy()
    }

    /// Whether a submit was staged and is waiting to be sent
    pub fn has_pending_submission(&self) -> bool {
        self.session.has_pending_request()
    }

    /// Send the staged request and follow a navigation it produced, if any
    pub async fn complete_submission(&mut self) {
        let recorded = self.session.navigation.history().len();
        self.session.complete_submission().await;

        let navigation = &self.session.navigation;
        if navigation.history().len() == recorded {
            return;
        }
        if let Some(location) = navigation.current() {
            self.view = View::BedAdd {
                location: location.to_string(),
            };
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.session.message.show {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.session.dismiss_message();
            }
            return Ok(());
        }

        match self.view {
            View::FacilityCreate => self.handle_form_key(key),
            View::BedAdd { .. } => self.handle_bed_add_key(key),
        }
        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        if self.is_busy() {
            return;
        }

        let focus = self.session.state().form.focus();
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(SAVE_MODIFIER) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.session.dispatch(FormEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => self.session.dispatch(FormEvent::FocusPrev),
            KeyCode::Left => self.session.cycle_district(false),
            KeyCode::Right => self.session.cycle_district(true),
            KeyCode::Enter => match focus {
                FormFocus::SaveButton => self.submit(),
                FormFocus::Field(FacilityField::Address) => self.session.input_char('\n'),
                FormFocus::Field(FacilityField::District) => self.session.cycle_district(true),
                FormFocus::Field(_) => self.session.dispatch(FormEvent::FocusNext),
            },
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.session.input_char(c)
            }
            KeyCode::Backspace => self.session.backspace(),
            _ => {}
        }
    }

    fn handle_bed_add_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.view = View::FacilityCreate,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn submit(&mut self) {
        if !self.session.begin_submit() {
            tracing::debug!("Submit blocked by validation errors");
        }
    }
}
