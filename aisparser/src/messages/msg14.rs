use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Safety related broadcast (message 14)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyBroadcast {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare: u8,
    pub message: String,
}

impl SafetyBroadcast {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let bits = check_length(six, 14, 40, 1008)?;

        Ok(Self {
            msgid: 14,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            spare: six.get(2) as u8,
            message: six.get_string((bits - 40) / 6),
        })
    }
}

impl fmt::Display for SafetyBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "      From: {} Text: {}", self.userid, self.message.trim_end())
    }
}
