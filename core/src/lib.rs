//! The pure conversion core for `jff2tcdf`.
//!
//! Consumes state and transition descriptors pulled out of a JFLAP document
//! and produces the ordered records of a tcdf file. No I/O happens here: the
//! `jff2tcdf` crate loads the document and writes the records out.

mod label;

use std::fmt;

pub use label::{expand, Expansion, UnrecognizedLabel, VISIBLE};

/// Integer representation of an input symbol.
///
/// Either a code point in the visible ASCII range, or [`EOF`]. Code 0 only
/// shows up as the unrecognized-escape fallback and is never a legitimate
/// symbol.
pub type SymbolCode = i32;

/// The symbol code standing for end-of-input.
pub const EOF: SymbolCode = -1;

/// One `<state>` element of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: u32,
    pub is_final: bool,
    /// At most one state per automaton should be initial. That is the
    /// author's responsibility; nothing here checks it.
    pub is_initial: bool,
}

impl State {
    /// The `def` record declaring this state.
    pub fn record(&self) -> Record {
        Record::Def {
            id: self.id,
            is_final: self.is_final,
            is_initial: self.is_initial,
        }
    }
}

/// One `<transition>` element of the source document.
///
/// `from` and `to` need not reference declared states; referential integrity
/// is left to the consumer of the tcdf file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: u32,
    pub to: u32,
    /// The raw author-facing label on the edge. See [`expand`].
    pub read: String,
}

impl Transition {
    /// One `trans` record per symbol code the label accepts, in expansion
    /// order, plus the warning for an unrecognized label.
    ///
    /// Zero records is a valid outcome, not an error: empty labels, reversed
    /// ranges and malformed clauses all expand to nothing.
    pub fn records(&self) -> (Vec<Record>, Option<UnrecognizedLabel>) {
        let Expansion { codes, warning } = expand(&self.read);
        let records = codes
            .into_iter()
            .map(|code| Record::Trans {
                from: self.from,
                to: self.to,
                code,
            })
            .collect();
        (records, warning)
    }
}

/// A single line of a tcdf file. [`fmt::Display`] renders the line, without
/// the terminating newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Def {
        id: u32,
        is_final: bool,
        is_initial: bool,
    },
    Trans {
        from: u32,
        to: u32,
        code: SymbolCode,
    },
    /// The sentinel terminating the file.
    Eof,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The tag spellings and their trailing spaces are part of the
            // format: the downstream reader splits on whitespace.
            Record::Def {
                id,
                is_final,
                is_initial,
            } => {
                write!(f, "def {} ", id)?;
                if *is_final {
                    write!(f, "final ")?;
                }
                if *is_initial {
                    write!(f, "start ")?;
                }
                if !is_final && !is_initial {
                    write!(f, "normal")?;
                }
                Ok(())
            }
            Record::Trans { from, to, code } => write!(f, "trans {} {} {}", from, to, code),
            Record::Eof => f.write_str("eof"),
        }
    }
}

/// Everything produced by one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// `def` records in state order, then `trans` records in transition
    /// order, then exactly one [`Record::Eof`].
    pub records: Vec<Record>,
    /// Unrecognized-label warnings, in encounter order.
    pub warnings: Vec<UnrecognizedLabel>,
}

/// Converts a whole document, in document order.
pub fn convert(states: &[State], transitions: &[Transition]) -> Conversion {
    let mut records = Vec::with_capacity(states.len() + transitions.len() + 1);
    let mut warnings = Vec::new();
    for state in states {
        records.push(state.record());
    }
    for transition in transitions {
        let (trans, warning) = transition.records();
        records.extend(trans);
        warnings.extend(warning);
    }
    records.push(Record::Eof);
    Conversion { records, warnings }
}
