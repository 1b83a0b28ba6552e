use serde::Serialize;
use std::fmt;

use super::{check_length, trim_padding};
use crate::error::DecodeError;
use crate::sixbit::SixBit;

const PART_A: u8 = 0x01;
const PART_B: u8 = 0x02;

/// Which half of a static data report a sentence carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StaticDataPart {
    A,
    B,
}

/// Class B static data report (message 24).
///
/// The two halves arrive as separate messages. [`StaticDataReport::decode_into`]
/// fills only the fields of the part it reads and never clears the others, so
/// one record can be fed both halves of the same station. `flags` records which
/// parts have been seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaticDataReport {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    // part A
    pub name: String,
    // part B
    pub ship_type: u8,
    pub vendor_id: String,
    pub callsign: String,
    pub dim_bow: u16,
    pub dim_stern: u16,
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub spare: u8,
    pub flags: u8,
}

impl StaticDataReport {
    /// Decode one part into a fresh record
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let mut report = Self::default();
        report.decode_into(six)?;
        Ok(report)
    }

    /// Decode one part into this record, keeping whatever the other part set.
    ///
    /// # Arguments
    /// * `six` - Cursor positioned after the message id
    ///
    /// # Returns
    /// The part that was decoded, or `DecodeError::StaticDataPart` for part
    /// numbers 2 and 3 (the record is left untouched)
    pub fn decode_into(&mut self, six: &mut SixBit) -> Result<StaticDataPart, DecodeError> {
        let bits = check_length(six, 24, 162, 168)?;
        if bits != 162 && bits != 168 {
            return Err(DecodeError::Length { msgid: 24, bits });
        }

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let part = match six.get(2) as u8 {
            0 => StaticDataPart::A,
            1 => StaticDataPart::B,
            n => return Err(DecodeError::StaticDataPart(n)),
        };

        self.msgid = 24;
        self.repeat = repeat;
        self.userid = userid;
        match part {
            StaticDataPart::A => {
                self.name = six.get_string(20);
                self.flags |= PART_A;
            }
            StaticDataPart::B => {
                self.ship_type = six.get(8) as u8;
                self.vendor_id = six.get_string(7);
                self.callsign = six.get_string(7);
                self.dim_bow = six.get(9) as u16;
                self.dim_stern = six.get(9) as u16;
                self.dim_port = six.get(6) as u8;
                self.dim_starboard = six.get(6) as u8;
                self.spare = six.get(6) as u8;
                self.flags |= PART_B;
            }
        }
        Ok(part)
    }

    /// Copy the parts present in `other` into this record
    pub fn merge(&mut self, other: &StaticDataReport) {
        self.msgid = 24;
        self.repeat = other.repeat;
        self.userid = other.userid;
        if other.has_part_a() {
            self.name = other.name.clone();
        }
        if other.has_part_b() {
            self.ship_type = other.ship_type;
            self.vendor_id = other.vendor_id.clone();
            self.callsign = other.callsign.clone();
            self.dim_bow = other.dim_bow;
            self.dim_stern = other.dim_stern;
            self.dim_port = other.dim_port;
            self.dim_starboard = other.dim_starboard;
            self.spare = other.spare;
        }
        self.flags |= other.flags;
    }

    pub fn has_part_a(&self) -> bool {
        self.flags & PART_A != 0
    }

    pub fn has_part_b(&self) -> bool {
        self.flags & PART_B != 0
    }

    /// Both halves have been decoded
    pub fn is_complete(&self) -> bool {
        self.flags & (PART_A | PART_B) == (PART_A | PART_B)
    }
}

impl fmt::Display for StaticDataReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "      MMSI: {}", self.userid)?;
        if self.has_part_a() {
            write!(f, " Name: {}", trim_padding(&self.name))?;
        }
        if self.has_part_b() {
            write!(
                f,
                " Type: {} Callsign: {} Size: {}x{} m",
                self.ship_type,
                trim_padding(&self.callsign),
                self.dim_bow + self.dim_stern,
                self.dim_port as u16 + self.dim_starboard as u16
            )?;
        }
        Ok(())
    }
}
