//! Grammar notes shown on the answer side of a card.
//!
//! Everything here is a lookup over the normalized record: substring tests on
//! the part of speech and the case/preposition columns, resolved against the
//! static tables below. Nothing in this module can fail; a field that is
//! missing or unreadable just means fewer notes.

use crate::columns::Field;
use crate::record::NormalizedRecord;

pub const REFLEXIVE_MARKER: &str = "🔄 **재귀동사 (Reflexives Verb)** - sich와 함께 사용";

const REFLEXIVE_VALUES: [&str; 3] = ["ja", "yes", "true"];

/// Case requirement detected in a free-text case or structure column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Government {
    DativeAccusative,
    Dative,
    Accusative,
    Genitive,
    Nominative,
}

impl Government {
    fn markers(self) -> &'static [&'static str] {
        match self {
            Government::DativeAccusative => &["dat", "akk"],
            Government::Dative => &["dat"],
            Government::Accusative => &["akk"],
            Government::Genitive => &["gen"],
            Government::Nominative => &["nom"],
        }
    }

    fn matches(self, lowered: &str) -> bool {
        self.markers().iter().all(|marker| lowered.contains(marker))
    }
}

/// First entry whose markers all occur in `text`. Table order is the
/// precedence order.
fn lookup<'t>(table: &'t [(Government, &'t str)], text: &str) -> Option<&'t str> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .find(|(government, _)| government.matches(&lowered))
        .map(|(_, explanation)| *explanation)
}

const STRUCTURE_EXPLANATIONS: &[(Government, &str)] = &[
    (
        Government::DativeAccusative,
        "**3격+4격 지배**: 누구에게(3격) 무엇을(4격) 주는 동사",
    ),
    (
        Government::Dative,
        "**3격 지배**: 누구에게/무엇에게를 나타내는 간접목적어",
    ),
    (
        Government::Accusative,
        "**4격 지배**: 무엇을/누구를 나타내는 직접목적어",
    ),
    (Government::Genitive, "**2격 지배**: 소유관계나 특별한 의미관계"),
];

// `{head}` is replaced with the word class the pattern belongs to.
const CASE_TEMPLATES: &[(Government, &str)] = &[
    (
        Government::DativeAccusative,
        "jemandem (Dat) + etwas (Akk) + {head}: 누구에게(3격) 무엇을(4격)",
    ),
    (
        Government::Dative,
        "jemandem/etwas (Dat) + {head}: 3격 간접목적어 (누구에게/무엇에게)",
    ),
    (
        Government::Accusative,
        "jemanden/etwas (Akk) + {head}: 4격 직접목적어 (무엇을/누구를)",
    ),
    (
        Government::Genitive,
        "jemandes/einer Sache (Gen) + {head}: 2격 소유격 (~의)",
    ),
    (
        Government::Nominative,
        "jemand/etwas (Nom) + {head}: 1격 주어 역할",
    ),
];

const FALLBACK_CASE_TEMPLATE: &str = "{case} + {head}: 격 지배 정보";

const PREPOSITIONS: &[(&str, &str)] = &[
    ("an", "접촉/위치 (3격: ~에서/~에게, 4격: ~로/~를 향해)"),
    ("auf", "표면 위 (3격: ~위에서, 4격: ~위로)"),
    ("bei", "근처/옆 (3격만: ~근처에서/~와 함께)"),
    ("für", "위해/~동안 (4격만: ~을/를 위해)"),
    ("gegen", "반대/~쪽으로 (4격만: ~에 반대하여/~쪽으로)"),
    ("in", "안/속 (3격: ~안에서, 4격: ~안으로)"),
    ("mit", "함께/수단 (3격만: ~와 함께/~로써)"),
    ("nach", "방향/시간 후 (3격만: ~후에/~로)"),
    ("über", "위/관하여 (3격: ~위에서, 4격: ~위로/~에 관하여)"),
    ("um", "주위/시간 (4격만: ~주위에/~시에)"),
    ("unter", "아래/사이 (3격: ~아래에서, 4격: ~아래로)"),
    ("von", "~로부터/~에 의해 (3격만: ~로부터/~의)"),
    ("vor", "앞/시간 전 (3격: ~앞에서/~전에, 4격: ~앞으로)"),
    ("zu", "~에게/~로 (3격만: ~에게/~로)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Head {
    Verb,
    Adjective,
}

impl Head {
    fn label(self) -> &'static str {
        match self {
            Head::Verb => "Verb",
            Head::Adjective => "Adjektiv",
        }
    }
}

/// Explanation for a single preposition, or a note naming it when it is not
/// one of the common two-way/fixed-case prepositions.
pub fn explain_preposition(prep: &str) -> String {
    let key = prep.trim().to_lowercase();
    match PREPOSITIONS.iter().find(|(name, _)| *name == key) {
        Some((name, explanation)) => format!("**{}**: {}", name, explanation),
        None => format!("전치사: {}", prep.trim()),
    }
}

fn case_pattern(case: &str, head: Head) -> String {
    let template = lookup(CASE_TEMPLATES, case).unwrap_or(FALLBACK_CASE_TEMPLATE);
    template
        .replace("{case}", case)
        .replace("{head}", head.label())
}

fn complement_annotations(structure: &str, notes: &mut Vec<String>) {
    notes.push(format!("📝 **문장 구조**: `{}`", structure));
    if let Some(explanation) = lookup(STRUCTURE_EXPLANATIONS, structure) {
        notes.push(explanation.to_string());
    }
}

fn preposition_annotations(prep: &str, case: Option<&str>, notes: &mut Vec<String>) {
    let structure = match case {
        Some(case) if !prep.to_lowercase().contains(&case.to_lowercase()) => {
            format!("{} + {}", prep, case)
        }
        _ => prep.to_string(),
    };
    notes.push(format!("🔗 **전치사 구조**: `{}`", structure));
    notes.push(explain_preposition(prep));
}

fn case_annotation(case: &str, head: Head, notes: &mut Vec<String>) {
    notes.push(format!("📋 **격 지배** ({}): {}", case, case_pattern(case, head)));
}

/// Preposition first, then bare case. Nothing is added when both are empty.
fn government_annotations(
    record: &NormalizedRecord<'_>,
    prep_field: Field,
    case_field: Field,
    head: Head,
    notes: &mut Vec<String>,
) {
    let case = record.get(case_field);
    if let Some(prep) = record.get(prep_field) {
        preposition_annotations(prep, case, notes);
    } else if let Some(case) = case {
        case_annotation(case, head, notes);
    }
}

/// Builds the grammar notes for one card, in display order:
/// reflexive marker, verb or adjective structure, theme.
pub fn annotate(record: &NormalizedRecord<'_>) -> Vec<String> {
    let mut notes = Vec::new();
    let pos = record.get(Field::Pos).unwrap_or_default().to_lowercase();
    let is_verb = pos.contains("verb");

    if is_verb {
        let reflexive = record
            .get(Field::Reflexive)
            .map(str::to_lowercase)
            .unwrap_or_default();
        if REFLEXIVE_VALUES.contains(&reflexive.as_str()) {
            notes.push(REFLEXIVE_MARKER.to_string());
        }

        if let Some(structure) = record.get(Field::ComplementStructure) {
            complement_annotations(structure, &mut notes);
        } else {
            government_annotations(record, Field::VerbPrep, Field::VerbCase, Head::Verb, &mut notes);
        }
    } else if pos.contains("adjektiv") {
        government_annotations(
            record,
            Field::AdjPrep,
            Field::AdjCase,
            Head::Adjective,
            &mut notes,
        );
    }

    if let Some(theme) = record.get(Field::Theme) {
        notes.push(format!("🏷️ **테마**: {}", theme));
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{self, ColumnMapping};
    use crate::record::RawRecord;

    fn fixture(pairs: &[(&str, &str)]) -> (RawRecord, ColumnMapping) {
        let mut headers = vec!["german_word", "korean_meaning"];
        headers.extend(pairs.iter().map(|(h, _)| *h));
        let mapping = columns::resolve(headers.as_slice()).unwrap();
        let mut cells = vec![("german_word", "Wort"), ("korean_meaning", "단어")];
        cells.extend_from_slice(pairs);
        (cells.into_iter().collect(), mapping)
    }

    fn notes_for(pairs: &[(&str, &str)]) -> Vec<String> {
        let (raw, mapping) = fixture(pairs);
        annotate(&NormalizedRecord::new(&raw, &mapping))
    }

    #[test]
    fn test_reflexive_verb() {
        let notes = notes_for(&[("pos", "Verb"), ("reflexive", "ja")]);
        assert_eq!(notes, vec![REFLEXIVE_MARKER.to_string()]);

        let notes = notes_for(&[("pos", "verb"), ("reflexive", " TRUE ")]);
        assert_eq!(notes, vec![REFLEXIVE_MARKER.to_string()]);
    }

    #[test]
    fn test_reflexive_only_for_verbs() {
        let notes = notes_for(&[("pos", "Nomen"), ("reflexive", "ja")]);
        assert!(notes.is_empty());

        let notes = notes_for(&[("pos", "Verb"), ("reflexive", "nein")]);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_complement_structure_preempts_preposition() {
        let notes = notes_for(&[
            ("pos", "Verb"),
            ("complement_structure", "jmdm. (Dat) etw. (Akk) geben"),
            ("verb_prep", "mit"),
            ("verb_case", "Dat"),
        ]);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0], "📝 **문장 구조**: `jmdm. (Dat) etw. (Akk) geben`");
        assert!(notes[1].contains("3격+4격"));
        assert!(notes.iter().all(|n| !n.contains("전치사")));
    }

    #[test]
    fn test_structure_single_cases() {
        let notes = notes_for(&[("pos", "Verb"), ("complement_structure", "jmdm. (Dat) helfen")]);
        assert_eq!(notes[1], "**3격 지배**: 누구에게/무엇에게를 나타내는 간접목적어");

        let notes = notes_for(&[("pos", "Verb"), ("complement_structure", "etw. (Akk) lesen")]);
        assert!(notes[1].starts_with("**4격 지배**"));

        let notes = notes_for(&[("pos", "Verb"), ("complement_structure", "jmds. (Gen) gedenken")]);
        assert!(notes[1].starts_with("**2격 지배**"));
    }

    #[test]
    fn test_structure_without_case_marker_is_echo_only() {
        let notes = notes_for(&[("pos", "Verb"), ("complement_structure", "es gibt + Nom")]);
        assert_eq!(notes, vec!["📝 **문장 구조**: `es gibt + Nom`".to_string()]);
    }

    #[test]
    fn test_known_preposition() {
        let notes = notes_for(&[("pos", "Verb"), ("verb_prep", "Auf"), ("verb_case", "Akk")]);
        assert_eq!(
            notes,
            vec![
                "🔗 **전치사 구조**: `Auf + Akk`".to_string(),
                "**auf**: 표면 위 (3격: ~위에서, 4격: ~위로)".to_string(),
            ]
        );
    }

    #[test]
    fn test_case_already_in_preposition_is_not_repeated() {
        let notes = notes_for(&[("pos", "Verb"), ("verb_prep", "an + dat"), ("verb_case", "Dat")]);
        assert_eq!(notes[0], "🔗 **전치사 구조**: `an + dat`");
    }

    #[test]
    fn test_unknown_preposition_fallback() {
        let notes = notes_for(&[("pos", "Verb"), ("verb_prep", "wider")]);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1], "전치사: wider");
        assert_eq!(explain_preposition("  wider "), "전치사: wider");
    }

    #[test]
    fn test_preposition_table_covers_fourteen_entries() {
        assert_eq!(PREPOSITIONS.len(), 14);
        for (name, _) in PREPOSITIONS {
            assert!(explain_preposition(&name.to_uppercase()).starts_with(&format!("**{}**", name)));
        }
    }

    #[test]
    fn test_case_only_path() {
        let notes = notes_for(&[("pos", "Verb"), ("verb_case", "Dativ + Akkusativ")]);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("누구에게(3격) 무엇을(4격)"));

        let notes = notes_for(&[("pos", "Verb"), ("verb_case", "Nom")]);
        assert!(notes[0].contains("1격 주어"));
    }

    #[test]
    fn test_case_fallback_template() {
        let notes = notes_for(&[("pos", "Verb"), ("verb_case", "Präp.")]);
        assert_eq!(notes, vec!["📋 **격 지배** (Präp.): Präp. + Verb: 격 지배 정보".to_string()]);
    }

    #[test]
    fn test_adjective_uses_adjective_columns() {
        let notes = notes_for(&[
            ("pos", "Adjektiv"),
            ("adj_prep", "stolz auf"),
            ("verb_prep", "mit"),
        ]);
        assert_eq!(notes, vec![
            "🔗 **전치사 구조**: `stolz auf`".to_string(),
            "전치사: stolz auf".to_string(),
        ]);

        let notes = notes_for(&[("pos", "adjektiv"), ("adj_case", "Dat")]);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("+ Adjektiv"));
        assert!(notes[0].contains("3격"));
    }

    #[test]
    fn test_theme_is_last() {
        let notes = notes_for(&[
            ("pos", "Verb"),
            ("reflexive", "yes"),
            ("verb_case", "Akk"),
            ("theme", "Arbeit"),
        ]);
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0], REFLEXIVE_MARKER);
        assert_eq!(notes[2], "🏷️ **테마**: Arbeit");
    }

    #[test]
    fn test_missing_pos_only_theme() {
        let notes = notes_for(&[("verb_case", "Akk"), ("theme", "Reisen")]);
        assert_eq!(notes, vec!["🏷️ **테마**: Reisen".to_string()]);
    }

    #[test]
    fn test_annotate_is_repeatable() {
        let (raw, mapping) = fixture(&[
            ("pos", "Verb"),
            ("verb_prep", "über"),
            ("verb_case", "Akk"),
            ("theme", "Alltag"),
        ]);
        let record = NormalizedRecord::new(&raw, &mapping);
        assert_eq!(annotate(&record), annotate(&record));
    }

    #[test]
    fn test_end_to_end_warten() {
        let headers = ["Deutsch", "Bedeutung", "Beispiel", "Wortart", "Kasus (Verb)"];
        let row = ["warten", "기다리다", "Ich warte auf dich.", "Verb", "Akk"];
        let mapping = columns::resolve(&headers).unwrap();
        let raw: RawRecord = headers.iter().copied().zip(row.iter().copied()).collect();

        let notes = annotate(&NormalizedRecord::new(&raw, &mapping));
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("4격"));
        assert!(notes[0].contains("직접목적어"));
        assert!(!notes.iter().any(|n| n == REFLEXIVE_MARKER));
        assert!(!notes.iter().any(|n| n.contains("테마")));
    }
}
