//! NDJSON events on stdout, one object per line

use std::io::{self, Write};

use serde_json::Value;

/// Serialize `event` onto `out` followed by a newline
pub fn write_event<W: Write>(mut out: W, event: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut out, event)?;
    writeln!(out)
}

/// Write `event` to stdout and flush so consumers see it immediately
pub fn emit(event: Value) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_event(&mut stdout, &event)?;
    stdout.flush()
}
