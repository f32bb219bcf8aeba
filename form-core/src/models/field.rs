use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the ten values collected by the personal details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Dob,
    Gender,
    Zip,
    City,
    State,
    Color,
    Notes,
}

impl Field {
    /// Every field in display order.
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Email,
            Field::Mobile,
            Field::Dob,
            Field::Gender,
            Field::Zip,
            Field::City,
            Field::State,
            Field::Color,
            Field::Notes,
        ]
    }

    /// Label used in the show-data rendering and in the encoded snapshot.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Mobile => "Mobile",
            Field::Dob => "DOB",
            Field::Gender => "Gender",
            Field::Zip => "ZIP",
            Field::City => "City",
            Field::State => "State",
            Field::Color => "Color",
            Field::Notes => "Notes",
        }
    }

    /// Hint shown in an empty input.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Mobile => "Mobile (XXXX-XXXXXX)",
            Field::Dob => "DOB (DD-MM-YYYY)",
            Field::Gender => "Select Gender",
            Field::Color => "Select Color",
            other => other.label(),
        }
    }

    /// City and state are derived from the ZIP and never typed by the user.
    pub fn is_editable(&self) -> bool {
        !matches!(self, Field::City | Field::State)
    }

    /// Parses a field name typed by the user. Case-insensitive; accepts the
    /// label as well as a few common spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Field::Name),
            "email" | "e-mail" => Some(Field::Email),
            "mobile" | "phone" => Some(Field::Mobile),
            "dob" | "birthdate" | "date-of-birth" => Some(Field::Dob),
            "gender" => Some(Field::Gender),
            "zip" | "zipcode" | "postal" => Some(Field::Zip),
            "city" => Some(Field::City),
            "state" => Some(Field::State),
            "color" | "colour" => Some(Field::Color),
            "notes" | "note" => Some(Field::Notes),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
