//! Integration tests for the scanner using the sample documents
//!
//! Token streams are rendered one token per line (`kind value position`) and compared against
//! inline snapshots.

use flashml::flashml::lexing::{tokenize, Token, TokenKind};
use flashml::flashml::testing::Sample;

fn render(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{:?} {:?} {}", token.kind, token.value, token.position))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_minimal_tokenization() {
    let tokens = tokenize(&Sample::Minimal.source()).unwrap();

    insta::assert_snapshot!(render(&tokens), @r###"
    TagOpen "velocista" 1:1
    TagOpen "titulo" 1:12
    Text "Hi" 1:20
    TagClose "titulo" 1:22
    TagClose "velocista" 1:31
    EndOfInput "" 2:1
    "###);
}

#[test]
fn test_orphan_season_tokenization() {
    let tokens = tokenize(&Sample::OrphanSeason.source()).unwrap();

    insta::assert_snapshot!(render(&tokens), @r###"
    TagOpen "temporada" 1:1
    TagOpen "episodio" 1:12
    TagClose "episodio" 1:22
    TagClose "temporada" 1:33
    EndOfInput "" 2:1
    "###);
}

#[test]
fn test_all_samples_end_with_one_end_of_input() {
    for sample in Sample::all() {
        let tokens = tokenize(&sample.source()).unwrap();
        let terminators = tokens
            .iter()
            .filter(|token| token.is(TokenKind::EndOfInput))
            .count();
        assert_eq!(terminators, 1, "{}", sample.file_name());
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    }
}

#[test]
fn test_pilot_keeps_every_word_of_dialogue() {
    let tokens = tokenize(&Sample::Pilot.source()).unwrap();
    let text: String = tokens
        .iter()
        .filter(|token| token.is(TokenKind::Text))
        .map(|token| token.value.as_str())
        .collect();

    for phrase in [
        "The Flash",
        "Mi nombre es Barry Allen y soy",
        "el hombre más rápido",
        "del mundo.",
        "Corre por Central City",
        "Eobard Thawne",
    ] {
        assert!(text.contains(phrase), "missing {:?}", phrase);
    }
}

#[test]
fn test_pilot_comment_and_attributes() {
    let tokens = tokenize(&Sample::Pilot.source()).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, " Guion del piloto ");

    let attributes: Vec<_> = tokens
        .windows(2)
        .filter(|pair| pair[0].is(TokenKind::AttributeName))
        .map(|pair| (pair[0].value.as_str(), pair[1].value.as_str()))
        .collect();
    assert!(attributes.contains(&("numero", "1")));
    assert!(attributes.contains(&("nombre", "S.T.A.R. Labs")));
    assert!(attributes.contains(&("src", "flash.png")));
}
