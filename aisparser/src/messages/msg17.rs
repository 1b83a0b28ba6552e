use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Bits per DGNSS correction word
pub const DGNSS_WORD_BITS: usize = 24;

/// GNSS broadcast binary message (message 17)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DgnssBroadcast {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub position: Position, // reference station, 1/10 minute precision
    pub spare2: u8,
    pub msg_type: u8,
    pub station_id: u16,
    pub z_count: u16,
    pub seq_num: u8,
    pub num_words: u8,
    pub health: u8,
    /// Correction words following the header
    pub data: SixBit,
}

impl DgnssBroadcast {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 17, 80, 816)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let spare1 = six.get(2) as u8;
        let longitude = six.get(18);
        let latitude = six.get(17);

        Ok(Self {
            msgid: 17,
            repeat,
            userid,
            spare1,
            position: Position::from_raw_tenths(latitude, longitude),
            spare2: six.get(5) as u8,
            msg_type: six.get(6) as u8,
            station_id: six.get(10) as u16,
            z_count: six.get(13) as u16,
            seq_num: six.get(3) as u8,
            num_words: six.get(5) as u8,
            health: six.get(3) as u8,
            data: six.clone(),
        })
    }

    /// The announced correction words that are present in the data
    pub fn words(&self) -> Vec<u32> {
        let mut data = self.data.clone();
        let mut words = Vec::new();
        while words.len() < self.num_words as usize && data.length() >= DGNSS_WORD_BITS {
            words.push(data.get(DGNSS_WORD_BITS as u8));
        }
        words
    }
}

impl fmt::Display for DgnssBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      DGNSS: {} Station: {} Type: {} Position: {} Words: {}",
            self.userid, self.station_id, self.msg_type, self.position, self.num_words
        )
    }
}
