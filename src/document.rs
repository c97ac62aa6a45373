//! Declarative layout documents (TOML or JSON)
//!
//! ```toml
//! views = ["root", "title", "emoji"]
//!
//! [[rules]]
//! set = "portrait"
//! view = "emoji"
//! anchors = ["top"]
//! to = "title.bottom"
//! constant = 20
//! ```

use crate::error::{LayoutError, Result};
use crate::plan::DEFAULT_SET;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub views: Vec<String>,
    #[serde(default)]
    pub rules: Vec<LayoutRule>,
}

/// One chain: `view.anchors[0].anchors[1]... == to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRule {
    pub view: String,
    /// Anchor names in selection order.
    pub anchors: Vec<String>,
    /// Either a view name or `view.anchor`.
    pub to: String,
    /// Inset for view targets, raw offset for anchor targets.
    #[serde(default)]
    pub constant: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default = "default_set")]
    pub set: String,
}

fn default_active() -> bool {
    true
}

fn default_set() -> String {
    DEFAULT_SET.to_string()
}

/// Target of a rule after splitting `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget<'a> {
    View(&'a str),
    Anchor { view: &'a str, anchor: &'a str },
}

impl LayoutRule {
    pub fn target(&self) -> RuleTarget<'_> {
        match self.to.split_once('.') {
            Some((view, anchor)) => RuleTarget::Anchor { view, anchor },
            None => RuleTarget::View(&self.to),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl LayoutDocument {
    pub fn parse(source: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Toml => toml::from_str(source).map_err(|e| {
                LayoutError::invalid_format(format!("Invalid TOML layout: {}", e))
            }),
            DocumentFormat::Json => serde_json::from_str(source).map_err(|e| {
                LayoutError::invalid_format(format!("Invalid JSON layout: {}", e))
            }),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            LayoutError::invalid_format("Layout file must be .json or .toml format")
        })?;
        let source = fs::read_to_string(path).map_err(|e| LayoutError::FileNotFound {
            path: format!("{}: {}", path.display(), e),
        })?;
        let document = Self::parse(&source, format)?;
        log::info!(
            "Loaded layout {} ({} views, {} rules)",
            path.display(),
            document.views.len(),
            document.rules.len()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TOML_LAYOUT: &str = r#"
views = ["root", "title", "emoji"]

[[rules]]
set = "portrait"
view = "emoji"
anchors = ["top"]
to = "title.bottom"
constant = 20

[[rules]]
view = "title"
anchors = ["centerX", "centerY"]
to = "root"
"#;

    #[test]
    fn test_parse_toml_with_defaults() {
        let document = LayoutDocument::parse(TOML_LAYOUT, DocumentFormat::Toml).unwrap();
        assert_eq!(document.views, vec!["root", "title", "emoji"]);
        assert_eq!(document.rules.len(), 2);

        let first = &document.rules[0];
        assert_eq!(first.set, "portrait");
        assert_eq!(first.constant, 20.0);
        assert!(first.active);
        assert_eq!(
            first.target(),
            RuleTarget::Anchor {
                view: "title",
                anchor: "bottom"
            }
        );

        let second = &document.rules[1];
        assert_eq!(second.set, DEFAULT_SET);
        assert_eq!(second.constant, 0.0);
        assert_eq!(second.target(), RuleTarget::View("root"));
    }

    #[test]
    fn test_load_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.json");
        fs::write(
            &path,
            r#"{"views": ["root", "card"], "rules": [
                {"view": "card", "anchors": ["width"], "to": "root", "constant": -32, "active": false}
            ]}"#,
        )
        .unwrap();

        let document = LayoutDocument::load(&path).unwrap();
        assert_eq!(document.rules[0].constant, -32.0);
        assert!(!document.rules[0].active);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("layout.yaml");
        fs::write(&path, "views: []").unwrap();

        assert!(matches!(
            LayoutDocument::load(&path),
            Err(LayoutError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        assert!(matches!(
            LayoutDocument::load(&path),
            Err(LayoutError::FileNotFound { .. })
        ));
    }

    #[test]
    fn test_parse_error_is_invalid_format() {
        let result = LayoutDocument::parse("[[rules]]\nview = 3", DocumentFormat::Toml);
        assert!(matches!(result, Err(LayoutError::InvalidFormat { .. })));
    }
}
