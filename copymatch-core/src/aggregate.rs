//! Deduplication and ordering of raw scan output

use crate::token::Token;

/// Collapse raw matches into the final match list
///
/// Tokens are ordered by position and structurally equal tokens, identified
/// by `(text, position)`, appear once. Positions are unique within a
/// document, so the order is total.
pub fn aggregate<'a, P, I>(raw: I) -> Vec<&'a Token<P>>
where
    I: IntoIterator<Item = &'a Token<P>>,
    P: 'a,
{
    let mut matches: Vec<&'a Token<P>> = raw.into_iter().collect();
    matches.sort_unstable_by(|a, b| {
        a.position()
            .cmp(&b.position())
            .then_with(|| a.text().cmp(b.text()))
    });
    matches.dedup_by(|a, b| a.position() == b.position() && a.text() == b.text());
    matches
}

/// Aggregate and clone, for callers that outlive the automaton
pub fn aggregate_owned<'a, P, I>(raw: I) -> Vec<Token<P>>
where
    I: IntoIterator<Item = &'a Token<P>>,
    P: Clone + 'a,
{
    aggregate(raw).into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_and_dedups() {
        let tokens = Token::sequence(["a", "b", "c", "d"]);
        let raw = vec![&tokens[2], &tokens[0], &tokens[2], &tokens[1], &tokens[0]];
        let result = aggregate(raw);
        let positions: Vec<usize> = result.iter().map(|t| t.position()).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_structural_equality_collapses_copies() {
        let first = Token::new("same", 4);
        let copy = first.clone();
        let result = aggregate([&first, &copy]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let raw: Vec<&Token> = Vec::new();
        assert!(aggregate(raw).is_empty());
    }

    #[test]
    fn test_owned_copy() {
        let tokens = Token::sequence(["x", "y"]);
        let owned = aggregate_owned([&tokens[1], &tokens[0]]);
        assert_eq!(owned, tokens);
    }
}
