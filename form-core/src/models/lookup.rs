use serde::{Deserialize, Serialize};

/// One row of the postal-code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipRecord {
    pub zipcode: String,
    pub city: String,
    pub state: String,
}

impl ZipRecord {
    pub fn new(
        zipcode: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            zipcode: zipcode.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

/// Ordered, read-only postal-code table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipTable {
    records: Vec<ZipRecord>,
}

impl ZipTable {
    pub fn new(records: Vec<ZipRecord>) -> Self {
        Self { records }
    }

    /// First record whose zipcode equals `zip` exactly.
    pub fn find(
        &self,
        zip: &str,
    ) -> Option<&ZipRecord> {
        self.records.iter().find(|r| r.zipcode == zip)
    }

    pub fn records(&self) -> &[ZipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ZipRecord> for ZipTable {
    fn from_iter<I: IntoIterator<Item = ZipRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ordered color-name to color-code mapping backing the color selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    entries: Vec<(String, String)>,
}

impl ColorTable {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Color names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn code(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, code)| code.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
