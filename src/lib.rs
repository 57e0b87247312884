//! Converts JFLAP automaton files to the tcdf format read by the ToyCompile
//! lexer.
//!
//! The conversion itself lives in `jff2tcdf-core` and is re-exported here;
//! this crate adds the [`jff`] document loader and the line writer.

pub mod jff;

use std::io::{self, Write};

#[doc(inline)]
pub use jff2tcdf_core::{
    convert, expand, Conversion, Expansion, Record, State, SymbolCode, Transition,
    UnrecognizedLabel, EOF, VISIBLE,
};

/// Converts `document` and streams the records to `out`, one line each,
/// ending with the `eof` sentinel. Flushes `out` before returning.
///
/// Returns the unrecognized-label warnings so the caller decides where they
/// go; they never abort the run.
pub fn write_tcdf(
    document: &jff::Document,
    out: &mut impl Write,
) -> io::Result<Vec<UnrecognizedLabel>> {
    let Conversion { records, warnings } = convert(&document.states, &document.transitions);
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;
    Ok(warnings)
}
