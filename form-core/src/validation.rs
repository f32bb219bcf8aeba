//! Field predicates for the personal details form.
//!
//! Every predicate is a pure function of one field value. Nothing here is an
//! error: a failing predicate only keeps the submit action disabled and shows
//! an advisory line under the field.
//!
//! | Field  | Rule                                   |
//! |--------|----------------------------------------|
//! | name   | uppercase ASCII letters, whitespace, `'` |
//! | email  | `local@domain.tld`, no whitespace or extra `@` |
//! | mobile | `XXXX-XXXXXX` digits                   |
//! | dob    | `DD-MM-YYYY` digits, format only       |
//! | gender | non-empty                              |
//! | color  | non-empty                              |
//!
//! The name pattern accepts the empty string. Gender and color reject it, so a
//! freshly mounted form is still invalid.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Field, FormState};

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s']*$").expect("name pattern compiles"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{6}$").expect("mobile pattern compiles"));
static DOB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("dob pattern compiles"));

pub fn validate_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

/// Checks the `DD-MM-YYYY` shape only; `99-99-0000` passes.
pub fn validate_dob(dob: &str) -> bool {
    DOB_RE.is_match(dob)
}

pub fn validate_gender(gender: &str) -> bool {
    !gender.is_empty()
}

pub fn validate_color(color: &str) -> bool {
    !color.is_empty()
}

/// Advisory text shown under a field whose predicate fails.
/// `None` for fields that are never validated.
pub fn advisory(field: Field) -> Option<&'static str> {
    match field {
        Field::Name => Some("Please enter a valid name"),
        Field::Email => Some("Please enter a valid email"),
        Field::Mobile => Some("Please enter a valid mobile number (XXXX-XXXXXX)"),
        Field::Dob => Some("Please enter a valid date of birth (DD-MM-YYYY)"),
        Field::Gender => Some("Please select a gender"),
        Field::Color => Some("Please select a color"),
        Field::Zip | Field::City | Field::State | Field::Notes => None,
    }
}

/// Result of running every predicate against one form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub name: bool,
    pub email: bool,
    pub mobile: bool,
    pub dob: bool,
    pub gender: bool,
    pub color: bool,
}

impl Validation {
    pub fn of(state: &FormState) -> Self {
        Self {
            name: validate_name(&state.name),
            email: validate_email(&state.email),
            mobile: validate_mobile(&state.mobile),
            dob: validate_dob(&state.dob),
            gender: validate_gender(&state.gender),
            color: validate_color(&state.color),
        }
    }

    /// Conjunction of the six predicates.
    pub fn is_valid(&self) -> bool {
        self.name && self.email && self.mobile && self.dob && self.gender && self.color
    }

    /// Predicate outcome for `field`, or `None` if the field is free-form.
    pub fn field(
        &self,
        field: Field,
    ) -> Option<bool> {
        match field {
            Field::Name => Some(self.name),
            Field::Email => Some(self.email),
            Field::Mobile => Some(self.mobile),
            Field::Dob => Some(self.dob),
            Field::Gender => Some(self.gender),
            Field::Color => Some(self.color),
            Field::Zip | Field::City | Field::State | Field::Notes => None,
        }
    }

    /// Failing fields with their advisory text, in display order.
    pub fn advisories(&self) -> Vec<(Field, &'static str)> {
        Field::all()
            .iter()
            .filter(|f| self.field(**f) == Some(false))
            .filter_map(|f| advisory(*f).map(|msg| (*f, msg)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // name
    // =========================================================================

    #[test]
    fn test_name_accepts_uppercase_spaces_and_apostrophes() {
        assert!(validate_name("JOHN SMITH"));
        assert!(validate_name("D'ARCY"));
        assert!(validate_name("A\tB"));
    }

    #[test]
    fn test_name_rejects_lowercase_digits_and_punctuation() {
        assert!(!validate_name("John"));
        assert!(!validate_name("JOHN2"));
        assert!(!validate_name("JOHN-SMITH"));
        assert!(!validate_name("ÉMILE"));
    }

    #[test]
    fn test_name_accepts_empty_string() {
        assert!(validate_name(""));
    }

    // =========================================================================
    // email
    // =========================================================================

    #[test]
    fn test_email_requires_local_domain_and_tld() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last@sub.example.org"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email(""));
    }

    // =========================================================================
    // mobile / dob
    // =========================================================================

    #[test]
    fn test_mobile_requires_four_dash_six_digits() {
        assert!(validate_mobile("1234-567890"));
        assert!(!validate_mobile("1234567890"));
        assert!(!validate_mobile("123-4567890"));
        assert!(!validate_mobile("1234-56789O"));
        assert!(!validate_mobile("1234-567890\n"));
    }

    #[test]
    fn test_mobile_rejects_non_ascii_digits() {
        assert!(!validate_mobile("١٢٣٤-٥٦٧٨٩٠"));
    }

    #[test]
    fn test_dob_checks_format_only() {
        assert!(validate_dob("01-01-2000"));
        assert!(validate_dob("99-99-0000"));
        assert!(!validate_dob("1-1-2000"));
        assert!(!validate_dob("01/01/2000"));
    }

    // =========================================================================
    // gender / color
    // =========================================================================

    #[test]
    fn test_selections_must_be_non_empty() {
        assert!(validate_gender("male"));
        assert!(!validate_gender(""));
        assert!(validate_color("Red"));
        assert!(!validate_color(""));
    }

    // =========================================================================
    // form-level
    // =========================================================================

    fn state_with(mask: u8) -> FormState {
        let pick = |bit: u8, good: &str, bad: &str| {
            if mask & (1 << bit) != 0 {
                good.to_string()
            } else {
                bad.to_string()
            }
        };
        FormState {
            name: pick(0, "JOHN SMITH", "john"),
            email: pick(1, "a@b.com", "nope"),
            mobile: pick(2, "1234-567890", "12"),
            dob: pick(3, "01-01-2000", "2000"),
            gender: pick(4, "male", ""),
            color: pick(5, "Red", ""),
            ..Default::default()
        }
    }

    #[test]
    fn test_form_is_valid_is_the_conjunction_of_all_predicates() {
        for mask in 0u8..64 {
            let validation = Validation::of(&state_with(mask));

            let flags = [
                validation.name,
                validation.email,
                validation.mobile,
                validation.dob,
                validation.gender,
                validation.color,
            ];
            for (bit, flag) in flags.iter().enumerate() {
                assert_eq!(*flag, mask & (1 << bit) != 0, "mask {mask:06b} bit {bit}");
            }
            assert_eq!(validation.is_valid(), mask == 0b11_1111, "mask {mask:06b}");
        }
    }

    #[test]
    fn test_empty_form_reports_every_advisory_except_name() {
        let validation = Validation::of(&FormState::new());

        let fields: Vec<_> = validation.advisories().into_iter().map(|(f, _)| f).collect();

        assert_eq!(
            fields,
            vec![Field::Email, Field::Mobile, Field::Dob, Field::Gender, Field::Color]
        );
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_free_form_fields_have_no_predicate() {
        let validation = Validation::of(&FormState::new());

        for field in [Field::Zip, Field::City, Field::State, Field::Notes] {
            assert_eq!(validation.field(field), None);
            assert_eq!(advisory(field), None);
        }
    }
}
