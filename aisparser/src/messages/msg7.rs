use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// One acknowledged destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub destid: u32,
    pub sequence: u8,
}

/// Binary acknowledge (message 7) and safety related acknowledge (message 13).
///
/// Carries one to four destinations. The count follows the meaningful payload
/// length, so fill bits on the cursor are taken into account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledge {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare: u8,
    pub acks: Vec<Acknowledgement>,
}

impl Acknowledge {
    pub fn from_sixbit(msgid: u8, six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, msgid, 72, 168)?;

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
        let acks = (0..count)
            .map(|_| Acknowledgement {
                destid: six.get(30),
                sequence: six.get(2) as u8,
            })
            .collect();

        Ok(Self {
            msgid,
            repeat,
            userid,
            spare,
            acks,
        })
    }
}

impl fmt::Display for Acknowledge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ids: Vec<String> = self.acks.iter().map(|a| format!("{}#{}", a.destid, a.sequence)).collect();
        write!(f, "      From: {} Ack: {}", self.userid, ids.join(", "))
    }
}
