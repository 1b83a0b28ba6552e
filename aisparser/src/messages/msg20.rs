use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// One reserved slot block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotReservation {
    pub offset: u16,
    pub slots: u8,
    pub timeout: u8, // minutes
    pub increment: u16,
}

/// Data link management (message 20), one to four reservations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataLinkManagement {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare: u8,
    pub reservations: Vec<SlotReservation>,
}

impl DataLinkManagement {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 20, 72, 162)?;

        let bits = six.bit_len();
        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let spare = six.get(2) as u8;

        let count = match bits {
            b if b > 136 => 4,
            b if b > 104 => 3,
            b if b > 72 => 2,
            _ => 1,
        };
        let reservations = (0..count)
            .map(|_| SlotReservation {
                offset: six.get(12) as u16,
                slots: six.get(4) as u8,
                timeout: six.get(3) as u8,
                increment: six.get(11) as u16,
            })
            .collect();

        Ok(Self {
            msgid: 20,
            repeat,
            userid,
            spare,
            reservations,
        })
    }
}

impl fmt::Display for DataLinkManagement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "      Station: {} Reservations: {}", self.userid, self.reservations.len())
    }
}
