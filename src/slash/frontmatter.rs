//! Frontmatter parsing for command files.
//!
//! A metadata block is only recognized when the document opens with a `---`
//! line (optionally after a byte-order mark) and a matching `---` line closes
//! it. Anything else, including invalid YAML, yields empty metadata and the
//! untouched document as body.

use serde::Deserialize;
use std::panic::{self, AssertUnwindSafe};

const DELIMITER: &str = "---";
const BOM: char = '\u{feff}';

/// Metadata recognized in a command file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub description: String,
    pub argument_hint: String,
    pub allowed_tools: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawFrontmatter {
    #[serde(default)]
    description: Option<String>,

    #[serde(default, rename = "argument-hint")]
    argument_hint: Option<String>,

    #[serde(default, rename = "allowed-tools")]
    allowed_tools: Option<ToolsField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ToolsField {
    List(Vec<String>),
    Single(String),
}

impl ToolsField {
    fn into_tools(self) -> Vec<String> {
        match self {
            ToolsField::Single(raw) => split_tool_list(&raw),
            ToolsField::List(list) if list.len() == 1 && list[0].contains(',') => {
                split_tool_list(&list[0])
            }
            ToolsField::List(list) => list,
        }
    }
}

fn split_tool_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tool| !tool.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a document into its metadata and body.
///
/// Never fails: degraded input is logged and returned as plain body.
pub fn parse_frontmatter(document: &str) -> (Frontmatter, String) {
    match panic::catch_unwind(AssertUnwindSafe(|| parse_document(document))) {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::error!("frontmatter parser panicked, treating document as plain body");
            (Frontmatter::default(), document.to_string())
        }
    }
}

fn parse_document(document: &str) -> (Frontmatter, String) {
    let Some((yaml, body)) = split_block(document) else {
        return (Frontmatter::default(), document.to_string());
    };

    let yaml = yaml.trim();
    if yaml.is_empty() {
        return (Frontmatter::default(), document.to_string());
    }

    let raw: RawFrontmatter = match serde_yaml::from_str(yaml) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse frontmatter YAML, ignoring metadata block");
            return (Frontmatter::default(), document.to_string());
        }
    };

    let frontmatter = Frontmatter {
        description: raw.description.unwrap_or_default(),
        argument_hint: raw.argument_hint.unwrap_or_default(),
        allowed_tools: raw
            .allowed_tools
            .map(ToolsField::into_tools)
            .unwrap_or_default(),
    };

    (frontmatter, body.trim().to_string())
}

/// Locate the metadata block. Returns `(yaml, body)` slices of the document.
fn split_block(document: &str) -> Option<(&str, &str)> {
    let text = document.strip_prefix(BOM).unwrap_or(document);
    let mut lines = text.split_inclusive('\n');

    let opening = lines.next()?;
    if opening.trim_end() != DELIMITER {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&text[yaml_start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}
