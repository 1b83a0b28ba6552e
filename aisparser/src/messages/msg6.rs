use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::binary::{split_app_id, BinaryApplication};
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Addressed binary message (message 6)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressedBinary {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub sequence: u8,
    pub destination: u32,
    pub retransmit: bool,
    pub spare: u8,
    pub app_id: u16,
    /// Application data following the application id
    pub data: SixBit,
}

impl AddressedBinary {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 6, 88, 1008)?;

        Ok(Self {
            msgid: 6,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            sequence: six.get(2) as u8,
            destination: six.get(30),
            retransmit: six.get_bool(),
            spare: six.get(1) as u8,
            app_id: six.get(16) as u16,
            data: six.clone(),
        })
    }

    /// Designated Area Code
    pub fn dac(&self) -> u16 {
        split_app_id(self.app_id).0
    }

    /// Function Identifier
    pub fn fi(&self) -> u8 {
        split_app_id(self.app_id).1
    }

    pub fn application(&self) -> Result<BinaryApplication, DecodeError> {
        BinaryApplication::decode(self.app_id, &self.data)
    }
}

impl fmt::Display for AddressedBinary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      From: {} To: {} DAC: {} FI: {} Data: {} bits",
            self.userid,
            self.destination,
            self.dac(),
            self.fi(),
            self.data.length()
        )
    }
}
