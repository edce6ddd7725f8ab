//! Read-only Graphviz export of a compiled automaton.
//!
//! Byte transitions sharing a destination are merged into contiguous ranges
//! so the rendered graph stays readable; epsilon edges are drawn dashed.

use std::fmt;

use crate::nfa::{Label, Nfa};

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Label::Node(n) => write!(f, "n{n}"),
            Label::GroupStart(g) => write!(f, "S(G[{g}])"),
            Label::GroupEnd(g) => write!(f, "E(G[{g}])"),
            Label::Alternative { group, alt } => write!(f, "G[{group}]{{{alt}}}"),
        }
    }
}

/// Render the automaton as a DOT `digraph`.
///
/// Each state becomes one node, `doublecircle` when accepting, annotated with
/// its diagnostic label. The graph title is the escaped source pattern.
pub fn describe(nfa: &Nfa) -> String {
    let mut out = String::new();
    out.push_str("digraph NFA {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  labelloc=\"t\";\n");
    out.push_str("  label=\"");
    for &byte in nfa.pattern() {
        push_byte(&mut out, byte);
    }
    out.push_str("\";\n");

    for (id, state) in nfa.states().enumerate() {
        let shape = if state.is_accepting() {
            "doublecircle"
        } else {
            "circle"
        };
        out.push_str(&format!(
            "  s{id} [shape={shape} label=\"{}\"];\n",
            state.label()
        ));
    }

    for (id, state) in nfa.states().enumerate() {
        // One edge per destination, covering every byte that reaches it.
        let mut emitted = [false; 256];
        for first in 0..256usize {
            if emitted[first] {
                continue;
            }
            let dst = match state.byte_transition(first as u8) {
                Some(dst) => dst,
                None => continue,
            };
            let mut used = [false; 256];
            for byte in first..256 {
                if state.byte_transition(byte as u8) == Some(dst) {
                    used[byte] = true;
                    emitted[byte] = true;
                }
            }
            out.push_str(&format!("  s{id} -> s{dst} [label=\""));
            push_ranges(&mut out, &used);
            out.push_str("\"];\n");
        }
        for &target in state.epsilon_targets() {
            out.push_str(&format!(
                "  s{id} -> s{target} [label=\"\u{03b5}\", style=dashed, color=red];\n"
            ));
        }
    }

    out.push_str("}\n");
    out
}

/// Write the marked bytes as a comma-separated list of contiguous ranges.
fn push_ranges(out: &mut String, used: &[bool; 256]) {
    let mut first = true;
    let mut byte = 0usize;
    while byte < 256 {
        if !used[byte] {
            byte += 1;
            continue;
        }
        let start = byte;
        while byte + 1 < 256 && used[byte + 1] {
            byte += 1;
        }
        if !first {
            out.push_str(", ");
        }
        push_byte(out, start as u8);
        if start != byte {
            out.push('-');
            push_byte(out, byte as u8);
        }
        first = false;
        byte += 1;
    }
}

/// Escape a byte for use inside a DOT double-quoted label.
fn push_byte(out: &mut String, byte: u8) {
    match byte {
        b'"' | b'\\' => {
            out.push('\\');
            out.push(byte as char);
        }
        0x20..=0x7e => out.push(byte as char),
        _ => out.push_str(&format!("\\x{byte:02X}")),
    }
}
