//! Header resolution: maps whatever column names a deck uses onto the fixed
//! set of fields the rest of the crate reads.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    GermanWord,
    KoreanMeaning,
    GermanExample,
    KoExampleTranslation,
    Pos,
    VerbCase,
    VerbPrep,
    Reflexive,
    ComplementStructure,
    AdjCase,
    AdjPrep,
    Theme,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::GermanWord,
        Field::KoreanMeaning,
        Field::GermanExample,
        Field::KoExampleTranslation,
        Field::Pos,
        Field::VerbCase,
        Field::VerbPrep,
        Field::Reflexive,
        Field::ComplementStructure,
        Field::AdjCase,
        Field::AdjPrep,
        Field::Theme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::GermanWord => "german_word",
            Field::KoreanMeaning => "korean_meaning",
            Field::GermanExample => "german_example",
            Field::KoExampleTranslation => "ko_example_translation",
            Field::Pos => "pos",
            Field::VerbCase => "verb_case",
            Field::VerbPrep => "verb_prep",
            Field::Reflexive => "reflexive",
            Field::ComplementStructure => "complement_structure",
            Field::AdjCase => "adj_case",
            Field::AdjPrep => "adj_prep",
            Field::Theme => "theme",
        }
    }

    /// Accepted header spellings, highest priority first. All lower-case.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::GermanWord => &["german_word", "german", "word", "item", "deutsch", "wort"],
            Field::KoreanMeaning => &[
                "korean_meaning",
                "korean",
                "meaning",
                "bedeutung",
                "의미",
                "뜻",
            ],
            Field::GermanExample => &[
                "german_example_de",
                "german_example",
                "example",
                "beispiel",
                "예문",
                "예시",
            ],
            Field::KoExampleTranslation => &[
                "ko_example_translation",
                "korean_example",
                "example_ko",
                "예문_번역",
                "예문해석",
            ],
            Field::Pos => &["pos", "part of speech", "wortart", "품사"],
            Field::VerbCase => &["verb_case", "kasus (verb)"],
            Field::VerbPrep => &["verb_prep", "präposition (verb)"],
            Field::Reflexive => &["reflexive", "reflexiv", "재귀"],
            Field::ComplementStructure => &["complement_structure", "struktur", "문장 구조"],
            Field::AdjCase => &["adj_case", "kasus (adjektiv)"],
            Field::AdjPrep => &["adj_prep", "präposition (adjektiv)"],
            Field::Theme => &[
                "theme",
                "type",
                "category",
                "thema",
                "kategorie",
                "테마",
                "유형",
            ],
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::GermanWord | Field::KoreanMeaning)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field -> header string exactly as it appears in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    columns: BTreeMap<Field, String>,
}

impl ColumnMapping {
    pub fn column(&self, field: Field) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

fn normalize(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Resolves a header row against every field's alias list.
///
/// Alias priority decides between competing columns, not column position.
/// Fails with [`DeckError::MissingRequiredColumn`] listing every required
/// field that could not be matched.
pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<ColumnMapping, DeckError> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize(h.as_ref())).collect();

    let mut columns = BTreeMap::new();
    for field in Field::ALL {
        let found = field.aliases().iter().find_map(|alias| {
            normalized
                .iter()
                .position(|header| header == alias)
                .map(|index| headers[index].as_ref().to_string())
        });
        if let Some(column) = found {
            columns.insert(field, column);
        }
    }

    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| field.is_required() && !columns.contains_key(field))
        .collect();
    if !missing.is_empty() {
        return Err(DeckError::MissingRequiredColumn(missing));
    }

    Ok(ColumnMapping { columns })
}
