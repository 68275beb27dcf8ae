//! # Diagnostic Output
//!
//! The line `funcNative` writes to the error stream.

use std::io::{self, Write};

/// Written once per `funcNative` call
pub const FUNC_DIAGNOSTIC: &str = "Called funcNative()";

/// Write `line` plus a newline in one call and flush.
///
/// A single `write_all` keeps concurrent lines from interleaving on a
/// locked handle.
pub fn emit_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    out.write_all(buf.as_bytes())?;
    out.flush()
}
