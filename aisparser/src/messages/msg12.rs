use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Addressed safety related message (message 12)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressedSafety {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub sequence: u8,
    pub destination: u32,
    pub retransmit: bool,
    pub spare: u8,
    pub message: String,
}

impl AddressedSafety {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let bits = check_length(six, 12, 72, 1008)?;

        Ok(Self {
            msgid: 12,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            sequence: six.get(2) as u8,
            destination: six.get(30),
            retransmit: six.get_bool(),
            spare: six.get(1) as u8,
            message: six.get_string((bits - 72) / 6),
        })
    }
}

impl fmt::Display for AddressedSafety {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      From: {} To: {} Text: {}",
            self.userid,
            self.destination,
            self.message.trim_end()
        )
    }
}
