use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Maximum number of armored characters held by one payload buffer.
/// 255 characters is a little over 5 slots of data (1530 bits).
pub const SIXBIT_LEN: usize = 255;

const POW2_MASK: [u8; 7] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F];

/// Errors raised while filling a [`SixBit`] buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SixBitError {
    /// A character outside the two 6-bit armoring bands.
    #[error("invalid 6-bit armored character {0:?}")]
    InvalidCharacter(char),
    /// Appending would grow the payload past [`SIXBIT_LEN`] characters.
    #[error("payload of {0} characters exceeds the 255 character buffer")]
    CapacityExceeded(usize),
}

/// Convert an armored ASCII character to its 6-bit binary value.
///
/// Valid input lies in `0x30..=0x57` or `0x60..=0x77`. Anything else returns `None`.
/// This is only for payload de-armoring; text fields use [`ais2ascii`].
pub fn binfrom6bit(ascii: u8) -> Option<u8> {
    match ascii {
        0x30..=0x57 => Some((ascii - 0x30) & 0x3F),
        0x60..=0x77 => Some((ascii - 0x38) & 0x3F),
        _ => None,
    }
}

/// Convert a 6-bit binary value back to its armored ASCII character.
pub fn binto6bit(value: u8) -> Option<u8> {
    match value {
        0x00..=0x27 => Some(value + 0x30),
        0x28..=0x3F => Some(value + 0x38),
        _ => None,
    }
}

/// Convert a 6-bit text value to printable ASCII (`0x20..=0x5F`).
///
/// Values below 0x20 map to `@`, `A`..`Z` and punctuation; 0 becomes `@`,
/// which AIS uses as the "not available" padding character.
pub fn ais2ascii(value: u8) -> char {
    let value = value & 0x3F;
    if value < 0x20 {
        (value + 0x40) as char
    } else {
        value as char
    }
}

/// 6-bit armored payload with a bit-level read cursor
///
/// The buffer holds ASCII characters exactly as they appear in the NMEA payload
/// field. Each character carries 6 bits. [`SixBit::get`] returns up to 32 bits at
/// a time, most significant bit first, holding any unused bits of the last
/// character as a remainder for the next call.
///
/// Reading past the end never fails: the missing low-order bits are returned as
/// zeros. Callers that care compare [`SixBit::length`] against what they need.
///
/// # Usage
///
/// ```
/// use aisparser::SixBit;
///
/// let mut six = SixBit::from_armored("15M67FC000G?ufbE`FepT@3n00Sa").unwrap();
/// assert_eq!(six.get(6), 1);      // message id
/// assert_eq!(six.get(2), 0);      // repeat indicator
/// assert_eq!(six.length(), 160);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SixBit {
    bits: Vec<u8>,
    pos: usize,
    remainder: u8,
    remainder_bits: u8,
    fill_bits: u8,
}

impl SixBit {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `armored`, with the cursor at the start
    pub fn from_armored(armored: &str) -> Result<Self, SixBitError> {
        let mut six = Self::new();
        six.append(armored)?;
        Ok(six)
    }

    /// Rewind the cursor to the start of the buffer and drop any remainder.
    /// The buffered characters are kept.
    pub fn init(&mut self) {
        self.pos = 0;
        self.remainder = 0;
        self.remainder_bits = 0;
    }

    /// Empty the buffer and rewind the cursor
    pub fn clear(&mut self) {
        self.bits.clear();
        self.fill_bits = 0;
        self.init();
    }

    /// Append armored characters to the end of the buffer.
    ///
    /// The whole slice is validated first; on error nothing is appended.
    pub fn append(&mut self, armored: &str) -> Result<(), SixBitError> {
        if let Some(bad) = armored.chars().find(|c| !c.is_ascii() || binfrom6bit(*c as u8).is_none()) {
            return Err(SixBitError::InvalidCharacter(bad));
        }
        let total = self.bits.len() + armored.len();
        if total > SIXBIT_LEN {
            return Err(SixBitError::CapacityExceeded(total));
        }
        self.bits.extend_from_slice(armored.as_bytes());
        Ok(())
    }

    /// Fetch the next `numbits` (1 to 32) bits, MSB first.
    ///
    /// Bits requested beyond the end of the buffer are zero.
    pub fn get(&mut self, numbits: u8) -> u32 {
        let mut fetch_bits = numbits.min(32);
        let mut result: u64 = 0;

        while fetch_bits > 0 {
            if self.remainder_bits > 0 {
                if self.remainder_bits <= fetch_bits {
                    result = (result << self.remainder_bits) | u64::from(self.remainder);
                    fetch_bits -= self.remainder_bits;
                    self.remainder = 0;
                    self.remainder_bits = 0;
                } else {
                    // Take the top bits of the remainder and keep the rest
                    result = (result << fetch_bits)
                        | u64::from(self.remainder >> (self.remainder_bits - fetch_bits));
                    self.remainder_bits -= fetch_bits;
                    self.remainder &= POW2_MASK[self.remainder_bits as usize];
                    return result as u32;
                }
            }

            match self.bits.get(self.pos) {
                Some(&c) => {
                    self.remainder = binfrom6bit(c).unwrap_or(0);
                    self.remainder_bits = 6;
                    self.pos += 1;
                }
                None => return (result << fetch_bits) as u32,
            }
        }
        result as u32
    }

    /// Fetch a single bit as a flag
    pub fn get_bool(&mut self) -> bool {
        self.get(1) != 0
    }

    /// Fetch `chars` 6-bit text characters and convert them to ASCII
    pub fn get_string(&mut self, chars: usize) -> String {
        (0..chars).map(|_| ais2ascii(self.get(6) as u8)).collect()
    }

    /// Number of bits still available to [`SixBit::get`]
    pub fn length(&self) -> usize {
        self.remainder_bits as usize + (self.bits.len() - self.pos) * 6
    }

    /// Armored size of the whole buffer in bits (characters x 6), regardless of
    /// the cursor position. Message layouts are validated against this value.
    pub fn payload_bits(&self) -> usize {
        self.bits.len() * 6
    }

    /// Number of padding bits at the end of the last character
    pub fn fill_bits(&self) -> u8 {
        self.fill_bits
    }

    pub fn set_fill_bits(&mut self, fill_bits: u8) {
        self.fill_bits = fill_bits.min(5);
    }

    /// Meaningful bits in the buffer: armored size minus fill bits
    pub fn bit_len(&self) -> usize {
        self.payload_bits().saturating_sub(self.fill_bits as usize)
    }

    /// Number of bits consumed so far
    pub fn bit_offset(&self) -> usize {
        self.pos * 6 - self.remainder_bits as usize
    }

    /// Number of armored characters in the buffer
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The buffered payload as it appeared in the sentence(s)
    pub fn as_str(&self) -> &str {
        // append() only accepts ASCII
        std::str::from_utf8(&self.bits).unwrap_or_default()
    }
}

impl Serialize for SixBit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SixBit", 3)?;
        state.serialize_field("payload", self.as_str())?;
        state.serialize_field("bit_offset", &self.bit_offset())?;
        state.serialize_field("fill_bits", &self.fill_bits)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binfrom6bit() {
        assert_eq!(binfrom6bit(0x35), Some(0x05));
        assert_eq!(binfrom6bit(0x6D), Some(0x35));
        assert_eq!(binfrom6bit(b'0'), Some(0));
        assert_eq!(binfrom6bit(b'w'), Some(63));
        assert_eq!(binfrom6bit(0x05), None);
        assert_eq!(binfrom6bit(0x5B), None);
        assert_eq!(binfrom6bit(0x78), None);
    }

    #[test]
    fn test_binto6bit_inverts_binfrom6bit() {
        for value in 0..64u8 {
            let c = binto6bit(value).unwrap();
            assert_eq!(binfrom6bit(c), Some(value));
        }
        assert_eq!(binto6bit(64), None);
    }

    #[test]
    fn test_ais2ascii() {
        assert_eq!(ais2ascii(0), '@');
        assert_eq!(ais2ascii(1), 'A');
        assert_eq!(ais2ascii(26), 'Z');
        assert_eq!(ais2ascii(0x20), ' ');
        assert_eq!(ais2ascii(0x30), '0');
        // Only the low 6 bits count
        assert_eq!(ais2ascii(0x41), 'A');
    }

    #[test]
    fn test_get_6bit_sequence() {
        let mut six = SixBit::from_armored("0123456789").unwrap();
        for i in 0..10 {
            assert_eq!(six.get(6), i);
        }
        assert_eq!(six.length(), 0);
    }

    #[test]
    fn test_get_across_character_boundaries() {
        // 'w' = 0b111111, '0' = 0b000000
        let mut six = SixBit::from_armored("w0w").unwrap();
        assert_eq!(six.get(4), 0b1111);
        assert_eq!(six.length(), 14);
        assert_eq!(six.get(4), 0b1100);
        assert_eq!(six.get(10), 0b0000_111111);
        assert_eq!(six.length(), 0);
    }

    #[test]
    fn test_get_32_bits() {
        let mut six = SixBit::from_armored("wwwwww").unwrap();
        assert_eq!(six.get(32), u32::MAX);
        assert_eq!(six.get(4), 0xF);
    }

    #[test]
    fn test_underrun_is_zero_filled() {
        let mut six = SixBit::from_armored("w").unwrap();
        assert_eq!(six.get(8), 0b1111_1100);
        assert_eq!(six.get(32), 0);

        let mut empty = SixBit::new();
        assert_eq!(empty.get(32), 0);
        assert_eq!(empty.length(), 0);
    }

    #[test]
    fn test_round_trip_through_armoring() {
        let payload = "55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H";
        let mut six = SixBit::from_armored(payload).unwrap();
        // 12 + 6 + 18 + 6 bit reads, repeated: always a multiple of 6
        let mut bits: Vec<(u32, u8)> = Vec::new();
        let widths = [12u8, 6, 18, 6];
        let mut i = 0;
        while six.length() > 0 {
            let width = (widths[i % widths.len()] as usize).min(six.length()) as u8;
            bits.push((six.get(width), width));
            i += 1;
        }

        let mut rebuilt = String::new();
        for (value, width) in bits {
            for shift in (0..width / 6).rev() {
                let v = ((value >> (shift * 6)) & 0x3F) as u8;
                rebuilt.push(binto6bit(v).unwrap() as char);
            }
        }
        assert_eq!(rebuilt, payload);
    }

    #[test]
    fn test_init_is_idempotent() {
        let mut six = SixBit::from_armored("19NS7Sp02wo?").unwrap();
        six.get(17);
        six.init();
        six.init();
        let fresh = SixBit::from_armored("19NS7Sp02wo?").unwrap();
        assert_eq!(six, fresh);
    }

    #[test]
    fn test_append_rejects_invalid_characters() {
        let mut six = SixBit::from_armored("123").unwrap();
        assert_eq!(six.append("45[6"), Err(SixBitError::InvalidCharacter('[')));
        assert_eq!(six.append("4,"), Err(SixBitError::InvalidCharacter(',')));
        assert_eq!(six.as_str(), "123");
    }

    #[test]
    fn test_append_capacity() {
        let mut six = SixBit::new();
        six.append(&"0".repeat(SIXBIT_LEN - 1)).unwrap();
        assert_eq!(six.append("12"), Err(SixBitError::CapacityExceeded(SIXBIT_LEN + 1)));
        assert_eq!(six.len(), SIXBIT_LEN - 1);
        six.append("1").unwrap();
        assert_eq!(six.len(), SIXBIT_LEN);
    }

    #[test]
    fn test_lengths_and_fill_bits() {
        let mut six = SixBit::from_armored("H52IRsP518Tj0l59D0000000000").unwrap();
        six.set_fill_bits(2);
        assert_eq!(six.payload_bits(), 162);
        assert_eq!(six.bit_len(), 160);
        six.get(8);
        assert_eq!(six.bit_offset(), 8);
        assert_eq!(six.length(), 154);
        assert_eq!(six.payload_bits(), 162);
    }

    #[test]
    fn test_get_string() {
        // 6-bit text for "AB @"
        let mut six = SixBit::from_armored("12P0").unwrap();
        assert_eq!(six.get_string(4), "AB @");
    }

    #[test]
    fn test_serialize() {
        let mut six = SixBit::from_armored("15M6").unwrap();
        six.get(8);
        let json = serde_json::to_string(&six).unwrap();
        assert_eq!(json, r#"{"payload":"15M6","bit_offset":8,"fill_bits":0}"#);
    }
}
