//! NMEA 0183 sentence helpers: start detection, field splitting, unsigned
//! field parsing and checksum verification.

use crate::error::VdmError;

/// Byte offset of the first `!` or `$` in `line`, if any.
///
/// Sentences do not always start at the beginning of a buffer; anything before
/// the marker is noise.
pub fn find_start(line: &str) -> Option<usize> {
    line.find(['!', '$'])
}

/// XOR of the bytes between the start marker and `*`.
///
/// Returns `None` when `sentence` does not start with a marker, or when the
/// checksum delimiter is missing (the run stops early at another marker).
pub fn checksum(sentence: &str) -> Option<u8> {
    let mut bytes = sentence.bytes();
    if !matches!(bytes.next(), Some(b'!' | b'$')) {
        return None;
    }
    let mut sum = 0u8;
    for b in bytes {
        match b {
            b'*' => return Some(sum),
            b'!' | b'$' => return None,
            _ => sum ^= b,
        }
    }
    None
}

/// Check the trailing `*hh` checksum of a sentence.
///
/// The hex digits may be upper or lower case; trailing CR/LF is ignored.
/// Returns the verified checksum.
pub fn verify_checksum(sentence: &str) -> Result<u8, VdmError> {
    let calculated = checksum(sentence).ok_or(VdmError::MissingChecksum)?;
    let star = sentence.find('*').ok_or(VdmError::MissingChecksum)?;
    let digits = sentence.get(star + 1..star + 3).ok_or(VdmError::MissingChecksum)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(VdmError::MissingChecksum);
    }
    let found = u8::from_str_radix(digits, 16).map_err(|_| VdmError::MissingChecksum)?;
    if found != calculated {
        return Err(VdmError::ChecksumMismatch { calculated, found });
    }
    Ok(calculated)
}

/// Comma-separated fields of a sentence body, after the start marker and
/// before the `*` checksum delimiter. The first field is the address
/// (talker + sentence type).
pub fn fields(sentence: &str) -> std::str::Split<'_, char> {
    let body = sentence.get(1..).unwrap_or_default();
    let end = body.find('*').unwrap_or(body.len());
    body[..end].split(',')
}

/// Parse an unsigned decimal field. An empty field is 0.
pub fn parse_uint(field: &str, name: &'static str) -> Result<u32, VdmError> {
    if field.is_empty() {
        return Ok(0);
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VdmError::Field(name));
    }
    field.parse().map_err(|_| VdmError::Field(name))
}
