//! Raw radar document as stored on disk.
//!
//! These types mirror the JSON layout one to one and carry no guarantees;
//! entries stay untyped [`Value`]s until [`crate::validate`] checks them.

use serde::Deserialize;
use serde_json::Value;

/// Top level of a `radar.config.json` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarDocument {
    /// Narrative markdown file, relative to the document's directory.
    #[serde(default)]
    pub text_file: Option<String>,
    #[serde(default)]
    pub rings: Vec<RingSpec>,
    #[serde(default)]
    pub core: CoreSection,
    #[serde(default)]
    pub quadrants: Vec<QuadrantSection>,
}

impl RadarDocument {
    /// Parses a document from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON or does not have the
    /// document's overall shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RingSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreSection {
    #[serde(default)]
    pub entries: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuadrantSection {
    #[serde(default)]
    pub quadrant: Option<QuadrantSpec>,
    #[serde(default)]
    pub entries: Vec<Value>,
}

/// Quadrant header. `index` stays untyped so a bad value is a validation
/// error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuadrantSpec {
    #[serde(default)]
    pub index: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_document() {
        let document = RadarDocument::from_json(
            r##"{
                "textFile": "radar-text.md",
                "rings": [{ "name": "Core" }, { "name": "Adopt", "color": "#fff" }],
                "core": { "entries": [{ "Name": "x" }] },
                "quadrants": [
                    { "quadrant": { "index": 2, "name": "Tools" }, "entries": [] }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(document.text_file.as_deref(), Some("radar-text.md"));
        assert_eq!(document.rings.len(), 2);
        assert_eq!(document.rings[1].color.as_deref(), Some("#fff"));
        assert_eq!(document.core.entries.len(), 1);
        let quadrant = document.quadrants[0].quadrant.as_ref().unwrap();
        assert_eq!(quadrant.index, Some(Value::from(2)));
        assert_eq!(quadrant.name.as_deref(), Some("Tools"));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let document = RadarDocument::from_json("{}").unwrap();
        assert!(document.text_file.is_none());
        assert!(document.rings.is_empty());
        assert!(document.core.entries.is_empty());
        assert!(document.quadrants.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(RadarDocument::from_json("{ \"rings\": ").is_err());
        assert!(RadarDocument::from_json(r#"{ "rings": 3 }"#).is_err());
    }
}
