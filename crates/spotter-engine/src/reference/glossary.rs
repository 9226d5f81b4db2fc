use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("Failed to read glossary file at {glossary_path}: {source}")]
    GlossaryReadError {
        glossary_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse glossary file at {glossary_path}: {source}")]
    GlossaryParseError {
        glossary_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid glossary: {0}")]
    InvalidEntry(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Format,
    Structure,
    Technique,
    Intensity,
}

/// A structural or format term such as `AMRAP` or `Superset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermEntry {
    pub term: String,
    pub category: TermCategory,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Default equipment, by equipment alias.
    #[serde(default)]
    pub equipment: Option<String>,
    #[serde(default)]
    pub units: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Equipment or body part: a name plus its aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Raw glossary tables, before indexing.
///
/// Extension files use the same shape in TOML:
///
/// ```toml
/// [[exercises]]
/// name = "Sandbag Clean"
/// aliases = ["sb clean"]
/// muscle_groups = ["back", "glutes"]
/// equipment = "sandbag"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glossary {
    pub terms: Vec<TermEntry>,
    pub exercises: Vec<ExerciseEntry>,
    pub equipment: Vec<NamedEntry>,
    pub body_parts: Vec<NamedEntry>,
}

impl Glossary {
    /// The glossary shipped with the engine.
    pub fn builtin() -> Self {
        super::dataset::builtin()
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load<P: AsRef<Path>>(glossary_path: P) -> Result<Self, GlossaryError> {
        let glossary_path = glossary_path.as_ref();

        let content = std::fs::read_to_string(glossary_path).map_err(|source| {
            GlossaryError::GlossaryReadError {
                glossary_path: glossary_path.to_path_buf(),
                source,
            }
        })?;

        let glossary =
            Self::from_toml_str(&content).map_err(|source| GlossaryError::GlossaryParseError {
                glossary_path: glossary_path.to_path_buf(),
                source,
            })?;

        glossary.validate()?;
        Ok(glossary)
    }

    /// Rejects entries that could never be looked up.
    pub fn validate(&self) -> Result<(), GlossaryError> {
        let blank = |s: &str| s.trim().is_empty();

        if let Some(e) = self.exercises.iter().find(|e| blank(&e.name)) {
            return Err(GlossaryError::InvalidEntry(format!(
                "exercise with aliases {:?} has an empty name",
                e.aliases
            )));
        }
        if self.terms.iter().any(|t| blank(&t.term)) {
            return Err(GlossaryError::InvalidEntry("term with an empty name".into()));
        }
        if self
            .equipment
            .iter()
            .chain(self.body_parts.iter())
            .any(|n| blank(&n.name))
        {
            return Err(GlossaryError::InvalidEntry(
                "equipment or body part with an empty name".into(),
            ));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
            && self.exercises.is_empty()
            && self.equipment.is_empty()
            && self.body_parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const EXTENSION: &str = r#"
[[exercises]]
name = "Sandbag Clean"
aliases = ["sb clean", "bag clean"]
muscle_groups = ["back", "glutes"]
equipment = "sandbag"

[[terms]]
term = "Death By"
category = "format"
aliases = ["death by"]
"#;

    #[test]
    fn parses_extension_tables() {
        let glossary = Glossary::from_toml_str(EXTENSION).unwrap();

        assert_eq!(glossary.exercises.len(), 1);
        assert_eq!(glossary.exercises[0].name, "Sandbag Clean");
        assert_eq!(glossary.exercises[0].equipment.as_deref(), Some("sandbag"));
        assert_eq!(glossary.terms[0].category, TermCategory::Format);
        assert!(glossary.body_parts.is_empty());
    }

    #[test]
    fn load_reads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("extra.toml");
        fs::write(&path, EXTENSION).unwrap();

        let glossary = Glossary::load(&path).unwrap();
        assert!(!glossary.is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Glossary::load(&path).unwrap_err();
        assert!(matches!(err, GlossaryError::GlossaryReadError { .. }));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[[exercises]\nname = ").unwrap();

        let err = Glossary::load(&path).unwrap_err();
        assert!(matches!(err, GlossaryError::GlossaryParseError { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn rejects_blank_exercise_names() {
        let glossary = Glossary::from_toml_str("[[exercises]]\nname = \"  \"\n").unwrap();
        assert!(matches!(
            glossary.validate(),
            Err(GlossaryError::InvalidEntry(_))
        ));
    }
}
