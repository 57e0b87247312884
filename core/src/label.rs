//! Interpretation of the `read` label on a transition edge.
//!
//! A label is classified into exactly one [`Shape`] in a single pass, and the
//! shape is expanded into the symbol codes the transition accepts. The rule
//! priority mirrors the format: `"any but a|b"` must never be read as a plain
//! literal, and the fixed tokens `\vln` and `\bs` must win over the generic
//! two-character escapes `\v` and `\b`.

use std::ops::RangeInclusive;

use crate::{SymbolCode, EOF};

/// Code points of the visible ASCII alphabet. Excludes the space character.
pub const VISIBLE: RangeInclusive<SymbolCode> = 33..=126;

/// A label that matched none of the recognized shapes.
///
/// The transition it came from contributes no records, but the rest of the
/// document is still converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse: {0}")]
pub struct UnrecognizedLabel(pub String);

/// The outcome of expanding one transition label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expansion {
    /// The accepted symbol codes, in the order the format defines them.
    pub codes: Vec<SymbolCode>,
    /// Set for unrecognized labels only. Malformed `any but` pieces and
    /// malformed ranges degrade silently, per the original format.
    pub warning: Option<UnrecognizedLabel>,
}

/// Expands `label` into the symbol codes its transition accepts.
///
/// Pure: equal labels always yield equal expansions.
pub fn expand(label: &str) -> Expansion {
    let mut expansion = Expansion::default();
    match Shape::classify(label) {
        Shape::Empty => {}
        Shape::Literal(c) => expansion.codes.push(c as SymbolCode),
        Shape::Escape(code) => expansion.codes.push(code),
        Shape::Eof => expansion.codes.push(EOF),
        Shape::Any => expansion.codes.extend(VISIBLE),
        Shape::AnyBut(excluded) => expansion
            .codes
            .extend(VISIBLE.filter(|code| !excluded.contains(code))),
        Shape::Range(lo, hi) => expansion
            .codes
            .extend(lo as SymbolCode..=hi as SymbolCode),
        // An "any" prefix without a valid but-clause, or a `~` without
        // exactly two one-character operands. Both expand to nothing
        // without a diagnostic.
        Shape::DanglingAny | Shape::DanglingRange => {}
        Shape::Unrecognized => expansion.warning = Some(UnrecognizedLabel(label.to_owned())),
    }
    expansion
}

/// The shape of a label. Classification order is the rule priority:
/// earlier variants win.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shape {
    Empty,
    Literal(char),
    /// Already decoded - unrecognized escapes carry the fallback code 0.
    Escape(SymbolCode),
    Eof,
    Any,
    /// `any but <set>`, holding the excluded codes.
    AnyBut(Vec<SymbolCode>),
    /// Starts with `any` but carries no valid but-clause.
    DanglingAny,
    Range(char, char),
    /// Contains `~` but is not `<char>~<char>`.
    DanglingRange,
    Unrecognized,
}

impl Shape {
    fn classify(label: &str) -> Self {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Self::Empty,
            (Some(c), None) => Self::Literal(c),
            (Some('\\'), Some(_)) => Self::Escape(decode_escape(label)),
            _ if label == "eof" => Self::Eof,
            _ if label == "any" => Self::Any,
            _ if label.starts_with("any") => match exclusions(label) {
                Some(excluded) => Self::AnyBut(excluded),
                None => Self::DanglingAny,
            },
            _ if label.contains('~') => match range_operands(label) {
                Some((lo, hi)) => Self::Range(lo, hi),
                None => Self::DanglingRange,
            },
            _ => Self::Unrecognized,
        }
    }
}

/// Decodes an escape of at least two characters starting with `\`.
///
/// The fixed tokens `\vln` (pipe) and `\bs` (space) are checked against the
/// whole string, so `\v` and `\b` still decode to the literals `v` and `b`.
/// Anything else falls back to the NUL code, not an error.
fn decode_escape(escape: &str) -> SymbolCode {
    match escape.chars().nth(1) {
        Some('\\') => '\\' as SymbolCode,
        Some('n') => '\n' as SymbolCode,
        Some('t') => '\t' as SymbolCode,
        Some('r') => '\r' as SymbolCode,
        Some('v') => match escape == r"\vln" {
            true => '|' as SymbolCode,
            false => 'v' as SymbolCode,
        },
        Some('b') => match escape == r"\bs" {
            true => ' ' as SymbolCode,
            false => 'b' as SymbolCode,
        },
        _ => 0,
    }
}

/// Parses the excluded set of an `any but a|b|...` label.
///
/// [`None`] means there is no valid but-clause at all. Individual pieces that
/// are neither a single character nor an escape are dropped silently.
fn exclusions(label: &str) -> Option<Vec<SymbolCode>> {
    let segments: Vec<&str> = label.split(' ').collect();
    if segments.len() < 3 || segments[1] != "but" {
        return None;
    }
    let mut excluded = Vec::new();
    for piece in segments[2].split('|') {
        let mut chars = piece.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => excluded.push(c as SymbolCode),
            (Some('\\'), Some(_)) => excluded.push(decode_escape(piece)),
            _ => {}
        }
    }
    Some(excluded)
}

/// Splits `x~y` into its operands. Exactly two one-character segments, or
/// nothing.
fn range_operands(label: &str) -> Option<(char, char)> {
    let segments: Vec<&str> = label.split('~').collect();
    let [lo, hi] = segments[..] else { return None };
    match (single_char(lo), single_char(hi)) {
        (Some(lo), Some(hi)) => Some((lo, hi)),
        _ => None,
    }
}

fn single_char(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
