use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::comm_state::{CommState, Itdma, Sotdma};
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Class A position report (messages 1, 2 and 3).
///
/// Messages 1 and 2 carry a SOTDMA communication state, message 3 an ITDMA one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub nav_status: u8,
    pub rot: i8,      // raw rate of turn, -128 not available
    pub sog: u16,     // 1/10 knot
    pub pos_acc: bool,
    pub position: Position,
    pub cog: u16,     // 1/10 degree
    pub true_heading: u16, // degrees, 511 not available
    pub utc_sec: u8,
    pub regional: u8,
    pub spare: u8,
    pub raim: bool,
    pub comm_state: CommState,
}

impl PositionReport {
    pub fn from_sixbit(msgid: u8, six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, msgid, 168, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let nav_status = six.get(4) as u8;
        let rot = six.get(8) as u8 as i8;
        let sog = six.get(10) as u16;
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);
        let cog = six.get(12) as u16;
        let true_heading = six.get(9) as u16;
        let utc_sec = six.get(6) as u8;
        let regional = six.get(4) as u8;
        let spare = six.get(1) as u8;
        let raim = six.get_bool();
        let comm_state = if msgid == 3 {
            CommState::Itdma(Itdma::from_sixbit(six))
        } else {
            CommState::Sotdma(Sotdma::from_sixbit(six))
        };

        Ok(Self {
            msgid,
            repeat,
            userid,
            nav_status,
            rot,
            sog,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            cog,
            true_heading,
            utc_sec,
            regional,
            spare,
            raim,
            comm_state,
        })
    }
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      MMSI: {} Status: {} Position: {} SOG: {:.1} kn COG: {:.1}° Heading: {}",
            self.userid,
            self.nav_status,
            self.position,
            self.sog as f64 / 10.0,
            self.cog as f64 / 10.0,
            self.true_heading
        )
    }
}
