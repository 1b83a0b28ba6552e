use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Assigned mode command (message 16), for one or two stations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignedModeCommand {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub destid_a: u32,
    pub offset_a: u16,
    pub increment_a: u16,
    pub destid_b: u32,
    pub offset_b: u16,
    pub increment_b: u16,
    pub spare2: u8,
}

impl AssignedModeCommand {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let bits = check_length(six, 16, 96, 144)?;
        if bits != 96 && bits != 144 {
            return Err(DecodeError::Length { msgid: 16, bits });
        }

        let mut msg = Self {
            msgid: 16,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            spare1: six.get(2) as u8,
            destid_a: six.get(30),
            offset_a: six.get(12) as u16,
            increment_a: six.get(10) as u16,
            destid_b: 0,
            offset_b: 0,
            increment_b: 0,
            spare2: 0,
        };

        if bits == 144 {
            msg.destid_b = six.get(30);
            msg.offset_b = six.get(12) as u16;
            msg.increment_b = six.get(10) as u16;
        } else {
            msg.spare2 = six.get(4) as u8;
        }

        Ok(msg)
    }

    /// True when the command also addresses a second station
    pub fn has_station_b(&self) -> bool {
        self.destid_b != 0
    }
}

impl fmt::Display for AssignedModeCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      From: {} To: {} Offset: {} Increment: {}",
            self.userid, self.destid_a, self.offset_a, self.increment_a
        )?;
        if self.has_station_b() {
            write!(
                f,
                " and {} Offset: {} Increment: {}",
                self.destid_b, self.offset_b, self.increment_b
            )?;
        }
        Ok(())
    }
}
