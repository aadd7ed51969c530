//! Doc comment emission and cross-reference rendering

use crate::ir::{Doc, DocLink, DocToken, ElementKind, TypeKind};
use tracing::warn;

/// Reference page for generated data objects
const DATA_OBJECTS_PAGE: &str = "../../dataobjects.html";

/// Reference page for generated enums
const ENUMS_PAGE: &str = "../../enums.html";

/// Render a `{@link ...}` reference
///
/// Data objects and enums link into their reference pages, other types and
/// their methods become TSDoc `{@link}` markers. Links to types outside the
/// generated modules render nothing.
pub fn render_link(link: &DocLink) -> Option<String> {
    let target = &link.target;
    if !target.is_generated() {
        return None;
    }

    let label = link.label.trim();
    let simple_name = target.simple_name.as_str();

    match target.kind {
        TypeKind::DataObject => Some(anchor(DATA_OBJECTS_PAGE, simple_name, label)),
        TypeKind::Enum => Some(anchor(ENUMS_PAGE, simple_name, label)),
        _ => {
            let prefix = if label.is_empty() {
                String::new()
            } else {
                format!("[{}] ", label)
            };

            match link.element.kind {
                ElementKind::Class | ElementKind::Interface => {
                    Some(format!("{}{{@link {}}}", prefix, simple_name))
                }
                ElementKind::Method => Some(format!(
                    "{}{{@link {}#{}}}",
                    prefix, simple_name, link.element.simple_name
                )),
                kind => {
                    warn!(?kind, target = %target.qualified_name, "unhandled link element kind");
                    None
                }
            }
        }
    }
}

fn anchor(page: &str, simple_name: &str, label: &str) -> String {
    let text = if label.is_empty() { simple_name } else { label };
    format!("<a href=\"{}#{}\">{}</a>", page, simple_name, text)
}

/// Flatten doc tokens into plain text
///
/// Links that render nothing fall back to their label, or the linked
/// element's name when the label is blank.
pub fn flatten_doc(doc: &Doc) -> String {
    let mut out = String::new();
    for token in &doc.tokens {
        match token {
            DocToken::Text(text) => out.push_str(text),
            DocToken::Link(link) => match render_link(link) {
                Some(rendered) => out.push_str(&rendered),
                None => {
                    let label = link.label.trim();
                    if label.is_empty() {
                        out.push_str(&link.element.simple_name);
                    } else {
                        out.push_str(label);
                    }
                }
            },
        }
    }
    out
}

/// Generate a `/** ... */` block for a doc, indented by `margin`
pub fn generate_doc(doc: Option<&Doc>, margin: &str) -> String {
    let Some(doc) = doc else {
        return String::new();
    };

    let mut output = String::new();
    output.push_str(margin);
    output.push_str("/**\n");

    let text = flatten_doc(doc);
    for line in text.trim_end().lines() {
        output.push_str(margin);
        output.push_str(" *");
        if !line.is_empty() {
            output.push(' ');
            output.push_str(line);
        }
        output.push('\n');
    }

    output.push_str(margin);
    output.push_str(" */\n");
    output
}
