use serde::Serialize;
use std::fmt;

use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Number of bits in a packed timetag
pub const TIMETAG_BITS: usize = 20;

/// Month/day/hour/minute stamp packed into 20 bits (4 + 5 + 5 + 6).
///
/// Used for the ETA of message 5 and in the binary applications. Zero
/// values mean "not available"; nothing is range checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Timetag {
    pub month: u8,
    pub day: u8,
    pub hours: u8,
    pub minutes: u8,
}

impl Timetag {
    /// Read a timetag from the cursor
    ///
    /// # Returns
    /// `Err(DecodeError::Timetag)` when fewer than 20 bits remain
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        if six.length() < TIMETAG_BITS {
            return Err(DecodeError::Timetag(six.length()));
        }
        Ok(Self {
            month: six.get(4) as u8,
            day: six.get(5) as u8,
            hours: six.get(5) as u8,
            minutes: six.get(6) as u8,
        })
    }

    /// Split an already extracted 20-bit value
    pub fn from_packed(value: u32) -> Self {
        Self {
            month: ((value >> 16) & 0x0F) as u8,
            day: ((value >> 11) & 0x1F) as u8,
            hours: ((value >> 6) & 0x1F) as u8,
            minutes: (value & 0x3F) as u8,
        }
    }
}

impl fmt::Display for Timetag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}-{:02} {:02}:{:02}", self.month, self.day, self.hours, self.minutes)
    }
}
