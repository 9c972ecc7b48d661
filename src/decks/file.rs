use std::fs;
use std::path::PathBuf;

use super::{Deck, DeckSource};
use crate::error::DeckError;

#[derive(Debug, Clone)]
pub struct FileDeck {
    path: PathBuf,
}

impl FileDeck {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DeckSource for FileDeck {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Deck, DeckError> {
        let text = fs::read_to_string(&self.path)?;
        Deck::from_csv(self.name(), &text)
    }
}
