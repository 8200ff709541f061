//! YAML front matter parsing.
//!
//! A document may start with a `---` fenced YAML block:
//!
//! ```text
//! ---
//! title: Button
//! status: stable
//! ---
//! # Button
//! ```
//!
//! The block is removed from the body. Known keys are typed on [`FrontMatter`],
//! everything else is kept in [`FrontMatter::extra`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Front matter fields parsed from the YAML block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Page title override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Short summary of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Editorial status (e.g. "draft", "stable").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any other keys, kept as JSON values.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl FrontMatter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.extra.is_empty()
    }
}

/// Result of splitting a document into front matter and body.
#[derive(Debug, PartialEq)]
pub struct ParsedDocument<'a> {
    pub front_matter: FrontMatter,
    /// Markdown body without the front matter block.
    pub body: &'a str,
    /// Set when a front matter block was present but not valid YAML.
    pub warning: Option<String>,
}

/// Split `text` into front matter and markdown body.
///
/// Without an opening `---` line, or without a closing one, the whole text is
/// the body. Malformed YAML still strips the block and yields a warning.
pub fn parse_front_matter(text: &str) -> ParsedDocument<'_> {
    let unchanged = ParsedDocument {
        front_matter: FrontMatter::default(),
        body: text,
        warning: None,
    };

    let Some(rest) = after_opening_fence(text) else {
        return unchanged;
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_fence(line) {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return match parse_yaml(yaml) {
                Ok(front_matter) => ParsedDocument {
                    front_matter,
                    body,
                    warning: None,
                },
                Err(e) => ParsedDocument {
                    front_matter: FrontMatter::default(),
                    body,
                    warning: Some(format!("Invalid front matter: {e}")),
                },
            };
        }
        offset += line.len();
    }

    unchanged
}

/// Return the text after the opening fence line, if the text starts with one.
fn after_opening_fence(text: &str) -> Option<&str> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let (first, rest) = text.split_once('\n')?;
    is_fence(first).then_some(rest)
}

fn is_fence(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

fn parse_yaml(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    match serde_yaml::from_str::<serde_yaml::Value>(yaml)? {
        serde_yaml::Value::Null => Ok(FrontMatter::default()),
        value => serde_yaml::from_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_front_matter() {
        let parsed = parse_front_matter("# Button\n\nText.");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, "# Button\n\nText.");
        assert!(parsed.warning.is_none());
    }

    #[test]
    fn test_known_and_extra_fields() {
        let text = "---\ntitle: Buttons\nstatus: stable\nowner: design-ops\ntags: [forms, actions]\n---\n# Button\n";
        let parsed = parse_front_matter(text);

        assert_eq!(parsed.front_matter.title.as_deref(), Some("Buttons"));
        assert_eq!(parsed.front_matter.status.as_deref(), Some("stable"));
        assert_eq!(
            parsed.front_matter.extra.get("owner"),
            Some(&serde_json::json!("design-ops"))
        );
        assert_eq!(
            parsed.front_matter.extra.get("tags"),
            Some(&serde_json::json!(["forms", "actions"]))
        );
        assert_eq!(parsed.body, "# Button\n");
    }

    #[test]
    fn test_empty_block_strips_fences() {
        let parsed = parse_front_matter("---\n---\nBody");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, "Body");
        assert!(parsed.warning.is_none());
    }

    #[test]
    fn test_comment_only_block() {
        let parsed = parse_front_matter("---\n# nothing yet\n---\nBody");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn test_unclosed_block_is_body() {
        let text = "---\ntitle: Dangling\n\nNo closing fence.";
        let parsed = parse_front_matter(text);
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, text);
    }

    #[test]
    fn test_fence_must_be_first_line() {
        let text = "Intro\n---\ntitle: x\n---\n";
        let parsed = parse_front_matter(text);
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, text);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_front_matter("---\r\ntitle: Windows\r\n---\r\nBody\r\n");
        assert_eq!(parsed.front_matter.title.as_deref(), Some("Windows"));
        assert_eq!(parsed.body, "Body\r\n");
    }

    #[test]
    fn test_invalid_yaml_warns_and_strips() {
        let parsed = parse_front_matter("---\ntitle: [unclosed\n---\nBody");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.body, "Body");
        assert!(parsed.warning.unwrap().starts_with("Invalid front matter"));
    }

    #[test]
    fn test_scalar_yaml_is_rejected() {
        let parsed = parse_front_matter("---\njust a string\n---\nBody");
        assert!(parsed.warning.is_some());
        assert_eq!(parsed.body, "Body");
    }

    #[test]
    fn test_horizontal_rule_later_in_body_is_kept() {
        let text = "---\ntitle: Rules\n---\nAbove\n\n---\n\nBelow";
        let parsed = parse_front_matter(text);
        assert_eq!(parsed.body, "Above\n\n---\n\nBelow");
    }

    #[test]
    fn test_serialize_flattens_extra() {
        let mut front_matter = FrontMatter {
            title: Some("Tabs".to_owned()),
            ..Default::default()
        };
        front_matter
            .extra
            .insert("figma".to_owned(), serde_json::json!("https://figma.com/x"));

        let json = serde_json::to_value(&front_matter).unwrap();

        assert_eq!(json["title"], "Tabs");
        assert_eq!(json["figma"], "https://figma.com/x");
        assert!(json.get("description").is_none());
    }
}
