use csv::ReaderBuilder;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::columns::{self, ColumnMapping};
use crate::error::DeckError;
use crate::record::{NormalizedRecord, RawRecord};

pub mod bundled;
pub mod file;

use bundled::BundledDeck;
use file::FileDeck;

/// A parsed deck: data rows and the column mapping resolved once for
/// the whole file.
#[derive(Debug, Clone)]
pub struct Deck {
    name: String,
    rows: Vec<RawRecord>,
    mapping: ColumnMapping,
}

impl Deck {
    pub fn from_csv(name: impl Into<String>, text: &str) -> Result<Self, DeckError> {
        let name = name.into();
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let mapping = columns::resolve(headers.as_slice())?;
        debug!(deck = %name, ?mapping, "resolved deck columns");

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result?;
            let raw: RawRecord = headers
                .iter()
                .map(String::as_str)
                .zip(record.iter())
                .collect();

            let blank = mapping
                .columns()
                .all(|column| raw.get(column).map_or(true, |value| value.trim().is_empty()));
            if blank {
                // +2: one for the header line, one for 1-based numbering
                warn!(deck = %name, line = index + 2, "Skipping row with no values");
                continue;
            }
            rows.push(raw);
        }

        if rows.is_empty() {
            return Err(DeckError::EmptyDeck(name));
        }

        info!(deck = %name, cards = rows.len(), fields = mapping.len(), "Loaded deck");
        Ok(Self {
            name,
            rows,
            mapping,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn record(&self, index: usize) -> Option<NormalizedRecord<'_>> {
        self.rows
            .get(index)
            .map(|raw| NormalizedRecord::new(raw, &self.mapping))
    }
}

pub trait DeckSource {
    fn name(&self) -> String;
    fn load(&self) -> Result<Deck, DeckError>;
}

pub fn get_source(path: Option<PathBuf>) -> Box<dyn DeckSource> {
    match path {
        Some(path) => Box::new(FileDeck::new(path)),
        None => Box::new(BundledDeck),
    }
}
