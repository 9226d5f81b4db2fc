//! # Reference Index
//!
//! Alias lookup tables for the four glossary domains:
//!
//! - **exercises**: alias → canonical exercise with equipment and body-part tags
//! - **terms**: alias → structural/format term (`AMRAP`, `Superset`, ...)
//! - **equipment**: alias → canonical equipment name
//! - **body parts**: alias or muscle group → canonical body part
//!
//! Lookups are exact on the normalized key. Plural exercise aliases are
//! generated while building; nothing is fuzzy-matched.

pub mod dataset;
pub mod glossary;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use glossary::{
    ExerciseEntry, Glossary, GlossaryError, NamedEntry, TermCategory, TermEntry,
};

static DEFAULT_INDEX: LazyLock<ReferenceIndex> = LazyLock::new(ReferenceIndex::builtin);

/// Unicode quotes and dashes folded to their ASCII forms.
pub(crate) fn unify_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201F}' | '\u{2033}' => '"',
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
            | '\u{2212}' => '-',
            '\u{00D7}' => 'x',
            '\u{00A0}' => ' ',
            other => other,
        })
        .collect()
}

/// Lookup key: trimmed, lowercased, punctuation unified, whitespace collapsed.
pub fn normalize_key(s: &str) -> String {
    let unified = unify_punctuation(s).to_lowercase();
    let collapsed = unified.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| matches!(c, '.' | ',' | ':' | ';' | '!' | '?'))
        .trim()
        .to_string()
}

fn plural_of(key: &str) -> Option<String> {
    if key.is_empty() || key.ends_with('s') {
        return None;
    }
    if key.ends_with("ch") || key.ends_with("sh") || key.ends_with('x') {
        Some(format!("{key}es"))
    } else {
        Some(format!("{key}s"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TermRecord {
    pub term: String,
    pub category: TermCategory,
    pub definition: Option<String>,
}

/// Canonical exercise with its tags already resolved to canonical names.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub name: String,
    /// Canonical equipment name, e.g. `Rower` for the row.
    pub equipment: Option<String>,
    pub muscle_groups: Vec<String>,
    /// Canonical body parts derived from the muscle groups, deduplicated.
    pub body_parts: Vec<String>,
    pub units: Vec<String>,
}

/// Immutable alias tables shared by every parse call.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    terms: HashMap<String, TermRecord>,
    exercises: Vec<ExerciseRecord>,
    exercise_aliases: HashMap<String, usize>,
    equipment: HashMap<String, String>,
    body_parts: HashMap<String, String>,
}

impl ReferenceIndex {
    /// Process-wide index over the built-in glossary.
    pub fn shared() -> &'static ReferenceIndex {
        &DEFAULT_INDEX
    }

    pub fn builtin() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ReferenceIndexBuilder {
        ReferenceIndexBuilder::default()
    }

    pub fn from_glossary(glossary: &Glossary) -> Self {
        let mut index = Self::default();
        index.merge(glossary);
        index.add_plurals();
        index
    }

    pub fn exercise(&self, name: &str) -> Option<&ExerciseRecord> {
        let idx = self.exercise_aliases.get(&normalize_key(name))?;
        self.exercises.get(*idx)
    }

    pub fn term(&self, name: &str) -> Option<&TermRecord> {
        self.terms.get(&normalize_key(name))
    }

    pub fn equipment(&self, name: &str) -> Option<&str> {
        self.equipment.get(&normalize_key(name)).map(String::as_str)
    }

    pub fn body_part(&self, name: &str) -> Option<&str> {
        self.body_parts.get(&normalize_key(name)).map(String::as_str)
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn alias_count(&self) -> usize {
        self.exercise_aliases.len()
    }

    fn merge(&mut self, glossary: &Glossary) {
        // Equipment and body parts first so exercise tags resolve against them.
        for entry in &glossary.equipment {
            Self::insert_named(&mut self.equipment, entry);
        }
        for entry in &glossary.body_parts {
            Self::insert_named(&mut self.body_parts, entry);
        }

        for term in &glossary.terms {
            let record = TermRecord {
                term: term.term.clone(),
                category: term.category,
                definition: term.definition.clone(),
            };
            for alias in std::iter::once(&term.term).chain(term.aliases.iter()) {
                let key = normalize_key(alias);
                if !key.is_empty() {
                    self.terms.insert(key, record.clone());
                }
            }
        }

        for entry in &glossary.exercises {
            if entry.name.trim().is_empty() {
                log::warn!("Skipping glossary exercise without a name: {:?}", entry.aliases);
                continue;
            }
            let record = self.exercise_record(entry);
            let idx = self.exercises.len();
            self.exercises.push(record);
            for alias in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
                let key = normalize_key(alias);
                if !key.is_empty() {
                    self.exercise_aliases.insert(key, idx);
                }
            }
        }
    }

    fn insert_named(map: &mut HashMap<String, String>, entry: &NamedEntry) {
        if entry.name.trim().is_empty() {
            log::warn!("Skipping glossary entry without a name: {:?}", entry.aliases);
            return;
        }
        for alias in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
            let key = normalize_key(alias);
            if !key.is_empty() {
                map.insert(key, entry.name.clone());
            }
        }
    }

    fn exercise_record(&self, entry: &ExerciseEntry) -> ExerciseRecord {
        let equipment = entry.equipment.as_deref().map(|eq| {
            self.equipment(eq)
                .map(str::to_string)
                .unwrap_or_else(|| eq.trim().to_string())
        });

        let mut body_parts: Vec<String> = Vec::new();
        for muscle in &entry.muscle_groups {
            let part = self
                .body_part(muscle)
                .map(str::to_string)
                .unwrap_or_else(|| muscle.trim().to_string());
            if !part.is_empty() && !body_parts.contains(&part) {
                body_parts.push(part);
            }
        }

        ExerciseRecord {
            name: entry.name.trim().to_string(),
            equipment,
            muscle_groups: entry.muscle_groups.clone(),
            body_parts,
            units: entry.units.clone(),
        }
    }

    /// Explicit aliases always win over generated plurals.
    fn add_plurals(&mut self) {
        let mut plurals: Vec<(String, &String, usize)> = self
            .exercise_aliases
            .iter()
            .filter_map(|(key, idx)| plural_of(key).map(|p| (p, key, *idx)))
            .collect();
        // HashMap order is random; sort so colliding plurals resolve the same way every build.
        plurals.sort_by(|a, b| a.1.cmp(b.1));
        let plurals: Vec<(String, usize)> = plurals.into_iter().map(|(p, _, idx)| (p, idx)).collect();
        for (plural, idx) in plurals {
            self.exercise_aliases.entry(plural).or_insert(idx);
        }
    }
}

/// Builds an index from the built-in glossary plus any extensions.
/// Later glossaries win on alias collisions.
#[derive(Debug, Default)]
pub struct ReferenceIndexBuilder {
    extensions: Vec<Glossary>,
    without_builtin: bool,
}

impl ReferenceIndexBuilder {
    pub fn with_glossary(mut self, glossary: Glossary) -> Self {
        self.extensions.push(glossary);
        self
    }

    /// Index only the supplied glossaries.
    pub fn without_builtin(mut self) -> Self {
        self.without_builtin = true;
        self
    }

    pub fn build(self) -> ReferenceIndex {
        let mut index = ReferenceIndex::default();
        if !self.without_builtin {
            index.merge(&Glossary::builtin());
        }
        for glossary in &self.extensions {
            index.merge(glossary);
        }
        index.add_plurals();
        log::debug!(
            "Built reference index: {} exercises, {} aliases, {} extension glossaries",
            index.exercise_count(),
            index.alias_count(),
            self.extensions.len()
        );
        index
    }
}
