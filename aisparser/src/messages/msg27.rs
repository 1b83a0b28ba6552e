use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Position report for long range applications (message 27)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongRangePosition {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub pos_acc: bool,
    pub raim: bool,
    pub nav_status: u8,
    pub position: Position, // 1/10 minute precision
    pub sog: u8,  // knots
    pub cog: u16, // degrees
    pub gnss: bool, // false when the position is current
    pub spare: u8,
}

impl LongRangePosition {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 27, 96, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let pos_acc = six.get_bool();
        let raim = six.get_bool();
        let nav_status = six.get(4) as u8;
        let longitude = six.get(18);
        let latitude = six.get(17);

        Ok(Self {
            msgid: 27,
            repeat,
            userid,
            pos_acc,
            raim,
            nav_status,
            position: Position::from_raw_tenths(latitude, longitude),
            sog: six.get(6) as u8,
            cog: six.get(9) as u16,
            gnss: six.get_bool(),
            spare: six.get(1) as u8,
        })
    }
}

impl fmt::Display for LongRangePosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      MMSI: {} Status: {} Position: {} SOG: {} kn COG: {}°",
            self.userid, self.nav_status, self.position, self.sog, self.cog
        )
    }
}
