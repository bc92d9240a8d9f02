//! Treeviz formatter
//!
//! One line per node, nesting drawn with box connectors, labels truncated to 30 characters:
//!
//!     ⧉ Document (2 items)
//!     ├─ ※ Guion del piloto
//!     └─ ◇ @velocista
//!       └─ ◇ @titulo
//!         └─ ◦ Hi
//!
//! Icons
//!     Document: ⧉
//!     Element: ◇
//!     Text: ◦
//!     Comment: ※

use super::registry::{FormatError, Formatter};
use crate::flashml::ast::{snapshot_from_document, AstSnapshot, Document};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Element" => "◇",
        "Text" => "◦",
        "Comment" => "※",
        _ => "○",
    }
}

fn format_snapshot(snapshot: &AstSnapshot, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(&snapshot.children, &child_prefix, output);
}

fn format_children(children: &[AstSnapshot], prefix: &str, output: &mut String) {
    for (i, child) in children.iter().enumerate() {
        format_snapshot(child, prefix, i == children.len() - 1, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );
    format_children(&snapshot.children, "", &mut output);
    output
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "ast-treeviz"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "Visual tree representation with Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flashml::testing::Sample;

    #[test]
    fn test_minimal_tree() {
        let output = to_treeviz_str(&Sample::Minimal.parse());
        insta::assert_snapshot!(output, @r###"
        ⧉ Document (1 items)
        └─ ◇ @velocista
          └─ ◇ @titulo
            └─ ◦ Hi
        "###);
    }

    #[test]
    fn test_siblings_use_branch_connector() {
        let doc = crate::flashml::parsing::parse(
            crate::flashml::lexing::tokenize("## a ## @equipo nombre=\"Team Flash\" @/equipo").unwrap(),
        )
        .unwrap();
        let output = to_treeviz_str(&doc);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[1], "├─ ※ a");
        assert_eq!(lines[2], "└─ ◇ @equipo nombre=\"Team Flash\"");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        assert_eq!(truncate("abc", 30), "abc");
        assert_eq!(truncate(&"x".repeat(31), 30), format!("{}...", "x".repeat(30)));
    }
}
