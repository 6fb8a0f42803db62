//! Per-item text overrides taken from the radar's narrative markdown.
//!
//! The narrative file may carry a `## <item name>` block for any item. The
//! block replaces the item's description and, through an optional leading
//! `linkName:` line, its link label. Everything from a `# Section` heading
//! onward is narrative only and never scanned for overrides.
//!
//! ```text
//! ## Rust
//! linkName: The Rust Book
//! A language empowering everyone to build reliable software.
//!
//! # Section
//! Free-form story text...
//! ```

use std::collections::HashMap;

use log::trace;

const LINK_NAME_PREFIX: &str = "linkname:";

/// Replacement texts for one item. Empty strings mean "no override".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextOverride {
    pub link_name: String,
    pub description: String,
}

/// Parse all item overrides in `markdown`, keyed by item name.
///
/// # Examples
///
/// ```
/// # use techradar::overrides::parse_overrides;
/// let overrides = parse_overrides("## Rust\nlinkName: Book\nFast.\n");
/// let rust = &overrides["Rust"];
/// assert_eq!(rust.link_name, "Book");
/// assert_eq!(rust.description, "Fast.");
/// ```
pub fn parse_overrides(markdown: &str) -> HashMap<String, TextOverride> {
    let normalized = markdown.replace("\r\n", "\n").replace('\r', "\n");
    let mut overrides = HashMap::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in normalized.lines() {
        if is_section_break(line) {
            break;
        }

        if let Some(name) = line.strip_prefix("## ").or_else(|| line.strip_prefix("##\t")) {
            if let Some((name, body)) = current.take() {
                overrides.insert(name, build_override(&body));
            }
            current = Some((name.trim().to_string(), Vec::new()));
            continue;
        }

        if is_heading(line) {
            // Any other heading closes the open block without starting a new one.
            if let Some((name, body)) = current.take() {
                overrides.insert(name, build_override(&body));
            }
            continue;
        }

        if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((name, body)) = current.take() {
        overrides.insert(name, build_override(&body));
    }

    overrides.retain(|name, _| !name.is_empty());
    trace!(overrides_count = overrides.len(); "Parsed text overrides");
    overrides
}

fn build_override(body: &[&str]) -> TextOverride {
    let mut lines = body
        .iter()
        .map(|line| line.trim_end())
        .filter(|line| !line.trim().is_empty())
        .peekable();

    let mut link_name = String::new();
    if let Some(first) = lines.peek() {
        let first = first.trim_start();
        if first
            .get(..LINK_NAME_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LINK_NAME_PREFIX))
        {
            link_name = first[LINK_NAME_PREFIX.len()..].trim().to_string();
            lines.next();
        }
    }

    let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    TextOverride {
        link_name,
        description,
    }
}

/// `# Section` heading, any case, surrounding whitespace ignored.
fn is_section_break(line: &str) -> bool {
    line.strip_prefix('#')
        .filter(|rest| rest.starts_with([' ', '\t']))
        .is_some_and(|rest| rest.trim().eq_ignore_ascii_case("section"))
}

/// Level-one or level-two heading.
fn is_heading(line: &str) -> bool {
    let rest = line
        .strip_prefix("##")
        .or_else(|| line.strip_prefix('#'))
        .unwrap_or(line);
    rest.len() != line.len() && rest.starts_with([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_only() {
        let overrides = parse_overrides("## GDAL\nGeospatial swiss army knife.\n");
        assert_eq!(
            overrides["GDAL"],
            TextOverride {
                link_name: String::new(),
                description: "Geospatial swiss army knife.".to_string(),
            }
        );
    }

    #[test]
    fn test_link_name_is_case_insensitive() {
        let overrides = parse_overrides("## STAC\nLINKNAME:   stacspec.org  \nCatalogs.\n");
        assert_eq!(overrides["STAC"].link_name, "stacspec.org");
        assert_eq!(overrides["STAC"].description, "Catalogs.");
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let overrides = parse_overrides("## A\n\nfirst\n\n\nsecond\n\n## B\nother\n");
        assert_eq!(overrides["A"].description, "first\nsecond");
        assert_eq!(overrides["B"].description, "other");
    }

    #[test]
    fn test_section_heading_stops_scanning() {
        let markdown = "## A\nkept\n# Section\n## B\nnarrative only\n";
        let overrides = parse_overrides(markdown);
        assert!(overrides.contains_key("A"));
        assert!(!overrides.contains_key("B"));
    }

    #[test]
    fn test_section_heading_any_case() {
        let overrides = parse_overrides("## A\nkept\n#   SECTION  \n## B\nx\n");
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_level_one_heading_closes_block() {
        let overrides = parse_overrides("## A\nkept\n# Intro\nnot part of A\n## B\nb\n");
        assert_eq!(overrides["A"].description, "kept");
        assert_eq!(overrides["B"].description, "b");
    }

    #[test]
    fn test_windows_line_endings() {
        let overrides = parse_overrides("## A\r\nlinkName: x\r\nbody\r\n");
        assert_eq!(overrides["A"].link_name, "x");
        assert_eq!(overrides["A"].description, "body");
    }

    #[test]
    fn test_deeper_headings_are_body_text() {
        let overrides = parse_overrides("## A\n### Detail\ntext\n");
        assert_eq!(overrides["A"].description, "### Detail\ntext");
    }

    #[test]
    fn test_empty_markdown() {
        assert!(parse_overrides("").is_empty());
    }
}
