use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::comm_state::CommState;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Standard Class B equipment position report (message 18)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassBPosition {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub regional1: u8,
    pub sog: u16, // 1/10 knot
    pub pos_acc: bool,
    pub position: Position,
    pub cog: u16, // 1/10 degree
    pub true_heading: u16,
    pub utc_sec: u8,
    pub regional2: u8,
    pub unit_flag: bool,    // CS unit
    pub display_flag: bool, // has a display
    pub dsc_flag: bool,
    pub band_flag: bool, // whole marine band
    pub msg22_flag: bool,
    pub mode_flag: bool, // assigned mode
    pub raim: bool,
    pub comm_state: CommState,
}

impl ClassBPosition {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 18, 168, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let regional1 = six.get(8) as u8;
        let sog = six.get(10) as u16;
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);

        Ok(Self {
            msgid: 18,
            repeat,
            userid,
            regional1,
            sog,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            cog: six.get(12) as u16,
            true_heading: six.get(9) as u16,
            utc_sec: six.get(6) as u8,
            regional2: six.get(2) as u8,
            unit_flag: six.get_bool(),
            display_flag: six.get_bool(),
            dsc_flag: six.get_bool(),
            band_flag: six.get_bool(),
            msg22_flag: six.get_bool(),
            mode_flag: six.get_bool(),
            raim: six.get_bool(),
            comm_state: CommState::from_sixbit(six),
        })
    }
}

impl fmt::Display for ClassBPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      MMSI: {} Position: {} SOG: {:.1} kn COG: {:.1}° Heading: {}",
            self.userid,
            self.position,
            self.sog as f64 / 10.0,
            self.cog as f64 / 10.0,
            self.true_heading
        )
    }
}
