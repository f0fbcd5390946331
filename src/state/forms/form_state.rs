//! Form values, form errors and the replace-only form state

use super::field::FacilityField;

const FIELD_COUNT: usize = FacilityField::ALL.len();

/// Fixed-key map from every facility field to a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldMap([String; FIELD_COUNT]);

impl FieldMap {
    fn get(&self, field: FacilityField) -> &str {
        &self.0[field.index()]
    }

    fn with(&self, field: FacilityField, value: String) -> Self {
        let mut entries = self.0.clone();
        entries[field.index()] = value;
        Self(entries)
    }

    fn iter(&self) -> impl Iterator<Item = (FacilityField, &str)> {
        FacilityField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Current value of every form field. Every field is always present and
/// defaults to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(FieldMap);

impl FormValues {
    pub fn get(&self, field: FacilityField) -> &str {
        self.0.get(field)
    }

    /// Build a new value set with one field replaced
    pub fn with(&self, field: FacilityField, value: impl Into<String>) -> Self {
        Self(self.0.with(field, value.into()))
    }

    /// Iterate fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (FacilityField, &str)> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<(FacilityField, S)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (FacilityField, S)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |values, (field, value)| values.with(field, value))
    }
}

/// Per-field error messages; an empty string means no error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(FieldMap);

impl FormErrors {
    pub fn get(&self, field: FacilityField) -> &str {
        self.0.get(field)
    }

    /// Error message for a field, or `None` when the field is fine
    pub fn message(&self, field: FacilityField) -> Option<&str> {
        Some(self.get(field)).filter(|m| !m.is_empty())
    }

    pub fn with(&self, field: FacilityField, message: impl Into<String>) -> Self {
        Self(self.0.with(field, message.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacilityField, &str)> {
        self.0.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.iter().any(|(_, m)| !m.is_empty())
    }
}

/// Which element of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FacilityField),
    SaveButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FacilityField::Name)
    }
}

impl FormFocus {
    const COUNT: usize = FIELD_COUNT + 1;

    fn index(&self) -> usize {
        match self {
            FormFocus::Field(field) => field.index(),
            FormFocus::SaveButton => FIELD_COUNT,
        }
    }

    fn from_index(index: usize) -> Self {
        FacilityField::ALL
            .get(index)
            .map(|f| FormFocus::Field(*f))
            .unwrap_or(FormFocus::SaveButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::COUNT)
    }

    pub fn prev(&self) -> Self {
        Self::from_index((self.index() + Self::COUNT - 1) % Self::COUNT)
    }

    /// The focused field, if focus is on a field
    pub fn field(&self) -> Option<FacilityField> {
        match self {
            FormFocus::Field(field) => Some(*field),
            FormFocus::SaveButton => None,
        }
    }
}

/// Values and errors of the facility form.
///
/// Both maps are only ever swapped as a whole, so every observable state is
/// one that some edit or validation pass produced in full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: FormErrors,
    focus: FormFocus,
}

impl FormState {
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Swap the entire value set
    pub fn replace(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Swap the entire error set
    pub fn replace_errors(&mut self, errors: FormErrors) {
        self.errors = errors;
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }
}
