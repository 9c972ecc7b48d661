use thiserror::Error;

use crate::columns::Field;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "required column(s) not found: {}",
        .0.iter().map(|field| field.as_str()).collect::<Vec<_>>().join(", ")
    )]
    MissingRequiredColumn(Vec<Field>),

    #[error("deck '{0}' contains no cards")]
    EmptyDeck(String),

    #[error("bundled deck asset not found: {0}")]
    MissingAsset(String),
}
