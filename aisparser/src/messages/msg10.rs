use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// UTC and date inquiry (message 10)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtcInquiry {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub destination: u32,
    pub spare2: u8,
}

impl UtcInquiry {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 10, 72, 72)?;

        Ok(Self {
            msgid: 10,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            spare1: six.get(2) as u8,
            destination: six.get(30),
            spare2: six.get(2) as u8,
        })
    }
}

impl fmt::Display for UtcInquiry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "      UTC inquiry from: {} To: {}", self.userid, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::payload;

    #[test]
    fn test_message_10() {
        let mut six = payload(":5D2Lp1Ghfe0");
        let msg = UtcInquiry::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 356556000);
        assert_eq!(msg.destination, 368098000);
        assert_eq!(six.length(), 0);
    }

    #[test]
    fn test_wrong_length() {
        let mut six = payload(":5D2Lp1Ghfe00");
        assert_eq!(UtcInquiry::from_sixbit(&mut six), Err(DecodeError::Length { msgid: 10, bits: 78 }));
    }
}
