//! Encodes records as single `key=value` text lines.

use std::fmt::{self, Write as _};

use time::format_description::well_known::Iso8601;

use crate::{keys, logger::Record};

/// Encodes `record` as one line, including the trailing newline.
///
/// Fields appear as `time`, `level`, `source` (if present), `msg`, followed by the record's
/// attributes in call order.
pub(crate) fn encode(record: &Record<'_>) -> Result<String, fmt::Error> {
    let mut line = String::with_capacity(128);

    if let Ok(time) = time::UtcDateTime::now().format(&Iso8601::DEFAULT) {
        write_field(&mut line, keys::TIME, &time)?;
    }
    write_field(&mut line, keys::LEVEL, record.level().as_str())?;
    if let Some(source) = record.source() {
        write_field(&mut line, keys::SOURCE, &source.to_string())?;
    }
    write_field(&mut line, keys::MESSAGE, &record.message().to_string())?;

    for attr in record.attrs() {
        write_field(&mut line, attr.key(), &attr.value().to_string())?;
    }

    line.push('\n');
    Ok(line)
}

fn write_field(line: &mut String, key: &str, value: &str) -> fmt::Result {
    if !line.is_empty() {
        line.push(' ');
    }
    write_text(line, key)?;
    line.push('=');
    write_text(line, value)
}

fn write_text(line: &mut String, text: &str) -> fmt::Result {
    if needs_quoting(text) {
        write!(line, "{text:?}")
    } else {
        line.push_str(text);
        Ok(())
    }
}

/// Whether `text` must be quoted to stay a single, unambiguous token.
fn needs_quoting(text: &str) -> bool {
    text.is_empty()
        || text
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '=' || c == '"')
}
