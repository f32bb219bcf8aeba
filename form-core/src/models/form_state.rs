//! In-memory state of the personal details form.
//!
//! The state is a plain record. Every rule about who may change what lives in
//! [`crate::FormController`]; this type only stores values.

use super::{Field, FormSnapshot};

/// Everything the form screen shows, owned by a single controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub dob: String,
    pub gender: String,
    pub zip: String,
    /// Derived from `zip`.
    pub city: String,
    /// Derived from `zip`.
    pub state: String,
    pub color: String,
    pub notes: String,

    /// Set once the submit delay has elapsed; locks every editable field.
    pub submitted: bool,
    /// Number of times the submitted data has been shown.
    pub click_count: u32,
    /// True only while the simulated submit delay is pending.
    pub loading: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of `field`.
    pub fn value(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Dob => &self.dob,
            Field::Gender => &self.gender,
            Field::Zip => &self.zip,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Color => &self.color,
            Field::Notes => &self.notes,
        }
    }

    pub(crate) fn value_mut(
        &mut self,
        field: Field,
    ) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::Dob => &mut self.dob,
            Field::Gender => &mut self.gender,
            Field::Zip => &mut self.zip,
            Field::City => &mut self.city,
            Field::State => &mut self.state,
            Field::Color => &mut self.color,
            Field::Notes => &mut self.notes,
        }
    }

    /// Returns true when nothing has been entered and no action has run.
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }

    /// Copies the ten field values into an immutable snapshot.
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            dob: self.dob.clone(),
            gender: self.gender.clone(),
            zip: self.zip.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            color: self.color.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Clears every value and flag back to the freshly-mounted form.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Renders the `Label: value` lines shown by the "show data" action.
    pub fn render_lines(&self) -> String {
        Field::all()
            .iter()
            .map(|field| format!("{}: {}", field.label(), self.value(*field)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
