use crate::columns::{ColumnMapping, Field};

/// One data row keyed by the deck's literal header strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    cells: Vec<(String, String)>,
}

impl RawRecord {
    /// First cell under `column`; duplicated headers resolve to the leftmost.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(header, _)| header == column)
            .map(|(_, value)| value.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(header, value)| (header.into(), value.into()))
                .collect(),
        }
    }
}

/// Typed read view over a [`RawRecord`].
///
/// Values come back trimmed. Unmapped fields, missing cells, blank cells and
/// the `NaN` marker left behind by spreadsheet exports all read as absent.
#[derive(Debug, Clone, Copy)]
pub struct NormalizedRecord<'a> {
    raw: &'a RawRecord,
    mapping: &'a ColumnMapping,
}

impl<'a> NormalizedRecord<'a> {
    pub fn new(raw: &'a RawRecord, mapping: &'a ColumnMapping) -> Self {
        Self { raw, mapping }
    }

    pub fn get(&self, field: Field) -> Option<&'a str> {
        let column = self.mapping.column(field)?;
        let value = self.raw.get(column)?.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            None
        } else {
            Some(value)
        }
    }

    pub fn get_or(&self, field: Field, default: &'a str) -> &'a str {
        self.get(field).unwrap_or(default)
    }
}
