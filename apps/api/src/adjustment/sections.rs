//! Section headers shared by the prompt and the parser.
//!
//! The first phrase of every pattern is the canonical header that
//! `prompts::build_prompt` instructs the model to write. The remaining phrases
//! are variants the parser also accepts (accent-free spellings, singular forms,
//! English answers). Order matters inside a pattern: longer phrases come first
//! so "Diagnóstico Rápido" wins over "Diagnóstico" on the same line.

use std::sync::LazyLock;

use regex::Regex;

/// A field of the structured result that is filled from a text section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionField {
    Diagnosis,
    LoadAdjustment,
    SelfCare,
    DayPlan,
}

#[derive(Debug)]
pub struct SectionPattern {
    pub field: SectionField,
    pub headers: &'static [&'static str],
}

impl SectionPattern {
    pub fn canonical(&self) -> &'static str {
        self.headers[0]
    }
}

pub const SECTION_PATTERNS: &[SectionPattern] = &[
    SectionPattern {
        field: SectionField::Diagnosis,
        headers: &[
            "Diagnóstico Rápido",
            "Diagnostico Rapido",
            "Diagnóstico",
            "Diagnostico",
            "Quick Diagnosis",
        ],
    },
    SectionPattern {
        field: SectionField::LoadAdjustment,
        headers: &[
            "Ajuste de Carga Sugerido",
            "Ajuste de Carga",
            "Ajuste Sugerido",
            "Suggested Load Adjustment",
            "Load Adjustment",
        ],
    },
    SectionPattern {
        field: SectionField::SelfCare,
        headers: &[
            "Recomendações de Autocuidado",
            "Recomendação de Autocuidado",
            "Recomendacoes de Autocuidado",
            "Recomendacao de Autocuidado",
            "Self-Care Recommendations",
            "Self-Care Recommendation",
            "Self Care Recommendations",
        ],
    },
    SectionPattern {
        field: SectionField::DayPlan,
        headers: &["Plano do Dia", "Plano para o Dia", "Plano de Dia", "Day Plan"],
    },
];

/// Returns the pattern for `field`. Every field has exactly one entry.
pub fn pattern(field: SectionField) -> &'static SectionPattern {
    SECTION_PATTERNS
        .iter()
        .find(|p| p.field == field)
        .unwrap_or_else(|| unreachable!("no section pattern for {field:?}"))
}

/// Header regexes compiled once, in `SECTION_PATTERNS` order.
pub(crate) static COMPILED_HEADERS: LazyLock<Vec<(SectionField, Regex)>> = LazyLock::new(|| {
    SECTION_PATTERNS
        .iter()
        .map(|p| {
            let regex = Regex::new(&header_regex(p.headers)).expect("Invalid section header regex");
            (p.field, regex)
        })
        .collect()
});

/// Builds a line-anchored, case-insensitive header regex.
///
/// Accepted around the phrase: leading `#` headings, bullets, `>` quotes,
/// emoji, `1.`/`1)` numbering, `**`/`__` bold, and a trailing parenthetical
/// such as "(Se Necessário)". The header must end with a colon, a dash
/// separator (`-`, `–`, `—` followed by a space) or the end of the line;
/// the match ends where the section content begins.
fn header_regex(headers: &[&str]) -> String {
    let alternatives = headers
        .iter()
        .map(|h| {
            h.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[ \t]+")
        })
        .collect::<Vec<_>>()
        .join("|");

    format!(
        r"(?mi)^[ \t]*(?:(?:#{{1,6}}|[-*+•>\p{{Extended_Pictographic}}\x{{FE0F}}]|\d{{1,2}}[.)])[ \t]*)*(?:\*\*|__)?[ \t]*(?:{alternatives})[ \t]*(?:\([^)\n]*\))?[ \t]*(?:\*\*|__)?[ \t]*(?::|[-–—](?:[ \t]|$)|$)[ \t]*(?:\*\*|__)?"
    )
}
