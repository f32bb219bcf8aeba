/// A selectable gender option: the label shown to the user and the value
/// stored in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderChoice {
    pub label: &'static str,
    pub value: &'static str,
}

const CHOICES: [GenderChoice; 3] = [
    GenderChoice {
        label: "Male",
        value: "male",
    },
    GenderChoice {
        label: "Female",
        value: "female",
    },
    GenderChoice {
        label: "Other",
        value: "other",
    },
];

impl GenderChoice {
    pub fn all() -> &'static [GenderChoice] {
        &CHOICES
    }

    /// Resolves user input against either the label or the stored value.
    pub fn parse(s: &str) -> Option<&'static GenderChoice> {
        let s = s.trim();
        CHOICES
            .iter()
            .find(|c| c.value.eq_ignore_ascii_case(s) || c.label.eq_ignore_ascii_case(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matches_label_or_value() {
        assert_eq!(GenderChoice::parse("Female").map(|c| c.value), Some("female"));
        assert_eq!(GenderChoice::parse(" other ").map(|c| c.value), Some("other"));
        assert!(GenderChoice::parse("unknown").is_none());
    }
}
