//! Terminal text for the two faces of a card.

use crate::columns::Field;
use crate::grammar;
use crate::record::NormalizedRecord;

const NO_WORD: &str = "단어 없음";
const NO_MEANING: &str = "의미 없음";
const NO_POS: &str = "품사 미상";

/// Drops the markdown emphasis the grammar notes carry.
fn plain(text: &str) -> String {
    text.replace("**", "").replace('`', "")
}

pub fn question(record: &NormalizedRecord<'_>) -> String {
    let mut lines = vec![format!("🃏 {}", record.get_or(Field::GermanWord, NO_WORD))];
    if let Some(example) = record.get(Field::GermanExample) {
        lines.push(String::new());
        lines.push(format!("   {}", example));
    }
    lines.join("\n")
}

pub fn answer(record: &NormalizedRecord<'_>) -> String {
    let mut lines = vec![
        format!("✅ {}", record.get_or(Field::GermanWord, NO_WORD)),
        format!("   {}", record.get_or(Field::KoreanMeaning, NO_MEANING)),
        format!("   [{}]", record.get_or(Field::Pos, NO_POS)),
    ];

    if let Some(example) = record.get(Field::GermanExample) {
        lines.push(String::new());
        lines.push(format!("🔸 예문: {}", example));
        if let Some(translation) = record.get(Field::KoExampleTranslation) {
            lines.push(format!("🔹 번역: {}", translation));
        }
    }

    let notes = grammar::annotate(record);
    if !notes.is_empty() {
        lines.push(String::new());
        lines.push("📚 문법 정보".to_string());
        lines.extend(notes.iter().map(|note| format!("  - {}", plain(note))));
    }

    lines.join("\n")
}
