use include_dir::{include_dir, Dir, File};

use super::{Deck, DeckSource};
use crate::error::DeckError;

static ASSETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");

const SAMPLE_DECK: &str = "sample_deck.csv";

/// Sample deck compiled into the binary, used when no file is given.
#[derive(Debug, Clone)]
pub struct BundledDeck;

impl DeckSource for BundledDeck {
    fn name(&self) -> String {
        "sample".to_string()
    }

    fn load(&self) -> Result<Deck, DeckError> {
        let file: &File = ASSETS_DIR
            .get_file(SAMPLE_DECK)
            .ok_or_else(|| DeckError::MissingAsset(SAMPLE_DECK.to_string()))?;

        let data = file
            .contents_utf8()
            .ok_or_else(|| DeckError::MissingAsset(format!("{} is not valid UTF-8", SAMPLE_DECK)))?;

        Deck::from_csv(self.name(), data)
    }
}
