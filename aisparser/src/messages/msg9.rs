use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::comm_state::CommState;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Standard SAR aircraft position report (message 9)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SarAircraftPosition {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub altitude: u16, // meters, 4095 not available
    pub sog: u16,      // knots
    pub pos_acc: bool,
    pub position: Position,
    pub cog: u16, // 1/10 degree
    pub utc_sec: u8,
    pub regional: u8,
    pub dte: bool,
    pub spare: u8,
    pub assigned: bool,
    pub raim: bool,
    pub comm_state: CommState,
}

impl SarAircraftPosition {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 9, 168, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let altitude = six.get(12) as u16;
        let sog = six.get(10) as u16;
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);

        Ok(Self {
            msgid: 9,
            repeat,
            userid,
            altitude,
            sog,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            cog: six.get(12) as u16,
            utc_sec: six.get(6) as u8,
            regional: six.get(8) as u8,
            dte: six.get_bool(),
            spare: six.get(3) as u8,
            assigned: six.get_bool(),
            raim: six.get_bool(),
            comm_state: CommState::from_sixbit(six),
        })
    }
}

impl fmt::Display for SarAircraftPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      SAR: {} Position: {} Altitude: {} m SOG: {} kn",
            self.userid, self.position, self.altitude, self.sog
        )
    }
}
