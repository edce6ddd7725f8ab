//! Breadth-first NFA simulation over byte strings.

use log::trace;

use crate::nfa::{Nfa, StateId};

/// Executes a compiled automaton against subject bytes.
///
/// The matcher only reads the automaton; working buffers are allocated per
/// call, so one `Nfa` can serve concurrent matchers on separate threads.
pub struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    /// Create a matcher for the given automaton.
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    /// Match `subject` against the pattern's alternation structure.
    ///
    /// The subject is consumed in full from its first byte; which portions a
    /// pattern accounts for is decided by its own alternation and quantifier
    /// structure, not by rescanning start offsets.
    pub fn contains(&self, subject: &[u8]) -> bool {
        self.simulate(subject)
    }

    /// Match the whole of `subject` against the pattern.
    pub fn full_match(&self, subject: &[u8]) -> bool {
        self.simulate(subject)
    }

    /// Thompson-style simulation of the active state set.
    ///
    /// Per byte: collect byte-transition targets of every active state, then
    /// expand epsilon edges. Completion is one more closure followed by the
    /// accept check, so an accept state reachable only through trailing
    /// epsilon edges is still seen. The active set never exceeds the state
    /// count, bounding total work by states times subject length.
    fn simulate(&self, subject: &[u8]) -> bool {
        let count = self.nfa.state_count();
        let mut current: Vec<StateId> = Vec::with_capacity(count);
        let mut next: Vec<StateId> = Vec::with_capacity(count);
        let mut visited = vec![false; count];

        current.push(self.nfa.start());
        self.nfa.close(&mut current, &mut visited);

        for &byte in subject {
            next.clear();
            for &id in &current {
                if let Some(target) = self.nfa.state(id).byte_transition(byte) {
                    next.push(target);
                }
            }
            visited.fill(false);
            self.nfa.close(&mut next, &mut visited);
            std::mem::swap(&mut current, &mut next);
            if current.is_empty() {
                break;
            }
        }

        visited.fill(false);
        self.nfa.close(&mut current, &mut visited);
        let matched = self.nfa.any_accepting(&current);
        trace!(
            "simulation over {} bytes ended with {} active states, matched={}",
            subject.len(),
            current.len(),
            matched
        );
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::compile;

    fn matches(pattern: &[u8], subject: &[u8]) -> bool {
        let nfa = compile(pattern).unwrap();
        Matcher::new(&nfa).full_match(subject)
    }

    #[test]
    fn test_literal_exactness() {
        assert!(matches(b"ab", b"ab"));
        assert!(!matches(b"ab", b"a"));
        assert!(!matches(b"ab", b"abc"));

        let nfa = compile(b"ab").unwrap();
        assert!(Matcher::new(&nfa).contains(b"ab"));
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_subject() {
        assert!(matches(b"", b""));
        assert!(!matches(b"", b"a"));
    }

    #[test]
    fn test_dot_matches_every_byte_value() {
        let nfa = compile(b".").unwrap();
        let matcher = Matcher::new(&nfa);
        for byte in 0..=255u8 {
            assert!(matcher.full_match(&[byte]));
        }
        assert!(!matcher.full_match(b""));
        assert!(!matcher.full_match(b"ab"));
    }

    #[test]
    fn test_dot_star_matches_anything() {
        let nfa = compile(b".*").unwrap();
        let matcher = Matcher::new(&nfa);
        assert!(matcher.full_match(b""));
        assert!(matcher.full_match(b"abc"));
        assert!(matcher.full_match(&[0, 255, 128]));
    }

    #[test]
    fn test_question_is_skip_or_take_once() {
        assert!(matches(b"ab?", b"a"));
        assert!(matches(b"ab?", b"ab"));
        assert!(!matches(b"ab?", b"abb"));
    }

    #[test]
    fn test_star_binds_to_preceding_atom() {
        assert!(matches(b"ab*", b"a"));
        assert!(matches(b"ab*", b"abbb"));
        assert!(!matches(b"ab*", b"abab"));
    }

    #[test]
    fn test_plus_requires_one_pass() {
        assert!(!matches(b"ab+", b"a"));
        assert!(matches(b"ab+", b"ab"));
        assert!(matches(b"ab+", b"abbb"));
    }

    #[test]
    fn test_class_is_single_byte_alternation() {
        assert!(matches(b"a[bd]", b"ab"));
        assert!(matches(b"a[bd]", b"ad"));
        assert!(!matches(b"a[bd]", b"ac"));
        assert!(!matches(b"a[bd]", b"abd"));
    }

    #[test]
    fn test_group_alternation() {
        assert!(matches(b"(a|b)c", b"ac"));
        assert!(matches(b"(a|b)c", b"bc"));
        assert!(!matches(b"(a|b)c", b"cc"));
        assert!(!matches(b"(a|b)c", b"c"));
    }

    #[test]
    fn test_quantifier_after_group_binds_to_group() {
        assert!(matches(b"(ab)*", b""));
        assert!(matches(b"(ab)*", b"abab"));
        assert!(!matches(b"(ab)*", b"aba"));
    }

    #[test]
    fn test_duplicate_epsilon_edges_are_harmless() {
        assert!(matches(b"a**", b""));
        assert!(matches(b"a**", b"aaa"));
        assert!(!matches(b"a**", b"ab"));
    }

    #[test]
    fn test_trailing_optional_tail_is_seen() {
        assert!(matches(b"ab(cd)?", b"ab"));
        assert!(matches(b"ab(cd)?", b"abcd"));
        assert!(!matches(b"ab(cd)?", b"abc"));
    }
}
