//! End-to-end scenarios for building and scanning

use copymatch_core::text::{tokenize, NormalizationOptions};
use copymatch_core::{
    aggregate, find_matches, group_spans, scan, window_size, Automaton, Equivalence, Token,
};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing
    elit. Donec eu ornare turpis, elementum finibus arcu. Sed leo
    neque, facilisis ac ipsum at, congue dignissim elit. Integer nec
    erat accumsan, tristique dolor venenatis, vestibulum risus.
    Phasellus ornare purus non nisl interdum, eget dictum leo lacinia.
    Praesent ac libero orci. Sed dictum nulla at ante porttitor
    vehicula. Curabitur tempus, nunc ac consectetur sodales, elit ex
    mollis velit, eu auctor elit ipsum pharetra orci. Praesent et
    eleifend eros. Donec elementum vitae tortor eget aliquam. Duis
    accumsan viverra volutpat. Pellentesque ac ligula finibus,
    elementum ipsum a, tempor massa. Quisque maximus orci et vehicula
    rutrum. Donec consectetur dui nec libero egestas, ut mattis magna
    porttitor. Maecenas porta erat sapien, ut hendrerit eros sagittis
    ultrices. In felis metus, placerat nec ipsum vel, laoreet pulvinar
    ipsum. Praesent nec velit eu ex condimentum bibendum.";

fn words(text: &str) -> Vec<Token> {
    Token::sequence(text.split_whitespace())
}

fn positions<P>(matches: &[&Token<P>]) -> Vec<usize> {
    matches.iter().map(|t| t.position()).collect()
}

#[test]
fn test_literal_bigram_scenario() {
    let automaton = Automaton::build(words("hello world and goodbye"), window_size(2).unwrap());
    let matches = find_matches(
        &automaton,
        &words("this is the world and goodbye"),
        Equivalence::Exact,
    );
    assert_eq!(positions(&matches), vec![1, 2, 3]);
}

#[test]
fn test_lorem_excerpt_located() {
    let options = NormalizationOptions::default();
    let suspect = tokenize(LOREM, &options);
    let automaton = Automaton::build(suspect.clone(), window_size(6).unwrap());

    assert_eq!(suspect.len(), 136);
    assert_eq!(automaton.node(automaton.root()).branching(), 92);

    let excerpt = tokenize(
        "lorem rutrum donec consectetur dui nec libero egestas",
        &options,
    );
    let matches = find_matches(&automaton, &excerpt, Equivalence::Exact);

    let start = suspect
        .iter()
        .position(|t| t.text() == "rutrum")
        .expect("excerpt word present");
    assert_eq!(start, 99);
    assert_eq!(matches[0].position(), start);
    assert_eq!(matches.len(), 7);

    let spans = group_spans(matches.iter().copied());
    assert_eq!(spans.len(), 1);
    assert_eq!(
        spans[0].excerpt(LOREM),
        "rutrum. Donec consectetur dui nec libero egestas,"
    );
}

#[test]
fn test_repeated_window_reports_both_occurrences() {
    let automaton = Automaton::build(
        words("red fish blue fish red fish"),
        window_size(2).unwrap(),
    );
    let matches = find_matches(&automaton, &words("one red fish"), Equivalence::Exact);
    assert_eq!(positions(&matches), vec![0, 1, 4, 5]);
}

#[test]
fn test_window_larger_than_suspect() {
    let automaton = Automaton::build(words("too short"), window_size(8).unwrap());
    assert!(find_matches(&automaton, &words("too short"), Equivalence::Exact).is_empty());
}

#[test]
fn test_empty_documents() {
    let automaton = Automaton::<()>::build(Vec::new(), window_size(3).unwrap());
    assert!(scan(&automaton, &words("a b c"), Equivalence::Exact).is_empty());

    let automaton = Automaton::build(words("a b c"), window_size(3).unwrap());
    let empty: Vec<Token> = Vec::new();
    assert!(scan(&automaton, &empty, Equivalence::Exact).is_empty());
}

#[test]
fn test_fuzzy_matching_recovers_ocr_noise() {
    let options = NormalizationOptions::default();
    let suspect = tokenize(LOREM, &options);
    let automaton = Automaton::build(suspect, window_size(6).unwrap());
    let noisy = tokenize(
        "Phasellus ornare purns non nisl interdvm eget dictum",
        &options,
    );

    assert!(find_matches(&automaton, &noisy, Equivalence::Exact).is_empty());
    let matches = find_matches(&automaton, &noisy, Equivalence::BoundedEditDistance(1));
    assert_eq!(matches.len(), 8);
    assert_eq!(matches[0].text(), "phasellus");
}

#[test]
fn test_each_source_scanned_independently() {
    let automaton = Automaton::build(words("a b c d e f"), window_size(3).unwrap());
    let first = aggregate(scan(&automaton, &words("a b c"), Equivalence::Exact));
    let second = aggregate(scan(&automaton, &words("d e f"), Equivalence::Exact));
    assert_eq!(positions(&first), vec![0, 1, 2]);
    assert_eq!(positions(&second), vec![3, 4, 5]);
}
