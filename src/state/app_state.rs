//! Application-level state shared by the screen and its collaborators

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    FacilityCreate,
    /// Placeholder for the bed entry screen reached after a facility is created
    BedAdd { location: String },
}

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

/// Global notification shown over the screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppMessage {
    pub show: bool,
    pub message: String,
    pub kind: MessageKind,
}

impl AppMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            show: true,
            message: message.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            show: true,
            message: message.into(),
            kind: MessageKind::Error,
        }
    }

    /// The closed notification: hidden, with message and type cleared
    pub fn hidden() -> Self {
        Self::default()
    }
}

/// Records navigation requests made by the screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    history: Vec<String>,
}

impl Navigation {
    pub fn navigate(&mut self, location: impl Into<String>) {
        let location = location.into();
        tracing::info!("Navigating to {location}");
        self.history.push(location);
    }

    /// Most recent navigation target
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// Location of the bed entry screen for a newly created facility
pub fn bed_add_location(facility_id: &str) -> String {
    format!("/facility/{facility_id}/bed/add")
}
