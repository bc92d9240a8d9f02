//! Property-based tests for the front end and the intermediate record
//!
//! Generated documents are balanced trees of arbitrary tag names and plain text, so they always
//! lex and parse; validation is not involved.

use flashml::flashml::formats::to_intermediate;
use flashml::flashml::lexing::{tokenize, TokenKind};
use flashml::flashml::parsing::parse;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Tree {
    Element(String, Vec<Tree>),
    Text(String),
}

impl Tree {
    fn element_count(&self) -> usize {
        match self {
            Tree::Element(_, children) => 1 + children.iter().map(Tree::element_count).sum::<usize>(),
            Tree::Text(_) => 0,
        }
    }

    fn render(&self, out: &mut String) {
        match self {
            Tree::Element(tag, children) => {
                out.push_str(&format!("@{} ", tag));
                for child in children {
                    child.render(out);
                    out.push(' ');
                }
                out.push_str(&format!("@/{} ", tag));
            }
            Tree::Text(text) => out.push_str(text),
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    let leaf = prop_oneof![
        "[a-záé ,.!]{1,12}".prop_map(Tree::Text),
        "[a-z_]{1,8}".prop_map(|tag| Tree::Element(tag, Vec::new())),
    ];
    leaf.prop_recursive(4, 48, 4, |inner| {
        ("[a-z_]{1,8}", prop::collection::vec(inner, 0..4))
            .prop_map(|(tag, children)| Tree::Element(tag, children))
    })
}

fn render_forest(trees: &[Tree]) -> String {
    let mut source = String::new();
    for tree in trees {
        tree.render(&mut source);
    }
    source
}

proptest! {
    #[test]
    fn balanced_pairs_become_elements(trees in prop::collection::vec(tree_strategy(), 0..4)) {
        let source = render_forest(&trees);
        let expected: usize = trees.iter().map(Tree::element_count).sum();

        let doc = parse(tokenize(&source).unwrap()).unwrap();
        prop_assert_eq!(doc.element_count(), expected);
    }

    #[test]
    fn intermediate_mirrors_the_ast(trees in prop::collection::vec(tree_strategy(), 0..4)) {
        let source = render_forest(&trees);
        let doc = parse(tokenize(&source).unwrap()).unwrap();
        let record = to_intermediate(&doc);

        prop_assert_eq!(record.node_count(), doc.node_count());
        prop_assert_eq!(record.depth(), doc.depth());
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,200}") {
        if let Ok(tokens) = tokenize(&source) {
            let terminators = tokens.iter().filter(|t| t.is(TokenKind::EndOfInput)).count();
            prop_assert_eq!(terminators, 1);
            let _ = parse(tokens);
        }
    }

    #[test]
    fn markup_heavy_input_never_panics(source in "[@/#=\"' a-z\n]{0,120}") {
        if let Ok(tokens) = tokenize(&source) {
            let _ = parse(tokens);
        }
    }
}
