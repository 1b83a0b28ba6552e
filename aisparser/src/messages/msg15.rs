use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Interrogation (message 15).
///
/// One station may be asked for one or two messages, and a second station for
/// one more. `num_reqs` tells how many of the request fields were present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interrogation {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub destid1: u32,
    pub msgid1_1: u8,
    pub offset1_1: u16,
    pub spare2: u8,
    pub msgid1_2: u8,
    pub offset1_2: u16,
    pub spare3: u8,
    pub destid2: u32,
    pub msgid2_1: u8,
    pub offset2_1: u16,
    pub spare4: u8,
    pub num_reqs: u8,
}

impl Interrogation {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 15, 88, 162)?;

        let bits = six.bit_len();
        let mut msg = Self {
            msgid: 15,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            spare1: six.get(2) as u8,
            destid1: six.get(30),
            msgid1_1: six.get(6) as u8,
            offset1_1: six.get(12) as u16,
            spare2: 0,
            msgid1_2: 0,
            offset1_2: 0,
            spare3: 0,
            destid2: 0,
            msgid2_1: 0,
            offset2_1: 0,
            spare4: 0,
            num_reqs: 1,
        };

        if bits > 88 {
            msg.spare2 = six.get(2) as u8;
            msg.msgid1_2 = six.get(6) as u8;
            msg.offset1_2 = six.get(12) as u16;
            msg.num_reqs = 2;
        }
        if bits >= 160 {
            msg.spare3 = six.get(2) as u8;
            msg.destid2 = six.get(30);
            msg.msgid2_1 = six.get(6) as u8;
            msg.offset2_1 = six.get(12) as u16;
            msg.spare4 = six.get(2) as u8;
            msg.num_reqs = 3;
        }

        Ok(msg)
    }
}

impl fmt::Display for Interrogation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      From: {} To: {} Requests: {} First: {}",
            self.userid, self.destid1, self.num_reqs, self.msgid1_1
        )
    }
}
