use crate::models::ZipTable;

/// Shortest ZIP input that triggers a table lookup.
pub const DEFAULT_MIN_LOOKUP_LEN: usize = 3;

/// City and state derived from a ZIP code. Both empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty()
    }
}

/// Derives the location for `zip` using the default minimum length.
pub fn derive_location(
    zip: &str,
    table: &ZipTable,
) -> Location {
    derive_location_with(zip, table, DEFAULT_MIN_LOOKUP_LEN)
}

/// Looks up `zip` exactly once it reaches `min_len` characters.
/// Shorter input, or input with no exact match, yields an empty location.
pub fn derive_location_with(
    zip: &str,
    table: &ZipTable,
    min_len: usize,
) -> Location {
    if zip.chars().count() < min_len {
        return Location::default();
    }

    table
        .find(zip)
        .map(|record| Location {
            city: record.city.clone(),
            state: record.state.clone(),
        })
        .unwrap_or_default()
}
