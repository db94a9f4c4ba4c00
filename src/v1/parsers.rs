/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Field scanning for the 1.2.0 REST responses.
//!
//! The responses are never parsed as markup. A field is located by its literal name and the
//! value is read from the quoted text that follows it:
//!
//! ```text
//! <name>="<value>"
//! ```
//!
//! The two bytes after the name are skipped without being checked, then everything up to
//! the next `"` is the value.
use crate::v1::errors::SmugMugError;

/// Position within a response buffer where the next field search begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScanCursor(usize);

impl ScanCursor {
    /// Cursor at the beginning of a buffer
    pub fn start() -> Self {
        Self(0)
    }

    /// Byte offset into the buffer
    pub fn offset(&self) -> usize {
        self.0
    }
}

/// A value pulled out of a response and the cursor just past its closing quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub end: ScanCursor,
}

// Bytes between the end of a field name and the start of its value (`=` and `"`).
const VALUE_PREFIX_LEN: usize = 2;
const QUOTE: u8 = b'"';

/// Position of the first `name` at or after `cursor`.
pub fn find_name(buffer: &[u8], name: &str, cursor: ScanCursor) -> Option<ScanCursor> {
    let needle = name.as_bytes();
    if needle.is_empty() || cursor.0 >= buffer.len() {
        return None;
    }
    buffer[cursor.0..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|found| ScanCursor(cursor.0 + found))
}

/// Finds `name` at or after `cursor` and returns its quoted value.
///
/// `Ok(None)` means the name does not occur in the rest of the buffer. A name whose value
/// runs into the end of the buffer is reported as [`SmugMugError::ResponseMalformed`].
pub fn find_value(
    buffer: &[u8],
    name: &str,
    cursor: ScanCursor,
) -> Result<Option<Field>, SmugMugError> {
    let Some(found) = find_name(buffer, name, cursor) else {
        return Ok(None);
    };

    let value_start = found.0 + name.len() + VALUE_PREFIX_LEN;
    if value_start > buffer.len() {
        return Err(SmugMugError::ResponseMalformed(format!(
            "field `{name}` is truncated"
        )));
    }

    let value_len = buffer[value_start..]
        .iter()
        .position(|&b| b == QUOTE)
        .ok_or_else(|| {
            SmugMugError::ResponseMalformed(format!("value of field `{name}` is unterminated"))
        })?;
    let value_end = value_start + value_len;

    Ok(Some(Field {
        value: String::from_utf8_lossy(&buffer[value_start..value_end]).into_owned(),
        end: ScanCursor(value_end + 1),
    }))
}
