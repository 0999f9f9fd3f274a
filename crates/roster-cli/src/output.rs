use std::io::Write;

use roster_core::Envelope;
use serde_json::Value;

use crate::error::CliError;

pub fn render(envelope: &Envelope<Value>, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    write_envelope(&mut stdout.lock(), envelope, pretty)
}

fn write_envelope<W: Write>(
    writer: &mut W,
    envelope: &Envelope<Value>,
    pretty: bool,
) -> Result<(), CliError> {
    let payload = if pretty {
        serde_json::to_string_pretty(envelope)?
    } else {
        serde_json::to_string(envelope)?
    };
    writeln!(writer, "{payload}")?;
    Ok(())
}
