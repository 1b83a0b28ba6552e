//! PAWSS hydro reports and vessel procession order.
//!
//! These share the Seaway framing and are dispatched from
//! [`SeawayMessage`](super::seaway::SeawayMessage).

use serde::Serialize;

use super::read_reports;
use super::seaway::Station;
use crate::error::DecodeError;
use crate::position::{conv_sign, Position};
use crate::sixbit::SixBit;
use crate::timetag::Timetag;

pub const PROCESSION_REPORT_BITS: usize = 190;

/// 1.4 hydro/current report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentReport {
    #[serde(flatten)]
    pub station: Station,
    pub speed: u8,      // 1/10 knot
    pub direction: u16, // degrees
    pub spare: u16,
}

impl CurrentReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            speed: six.get(8) as u8,
            direction: six.get(9) as u16,
            spare: six.get(16) as u16,
        })
    }
}

/// 1.5 hydro/salinity and temperature report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalinityReport {
    #[serde(flatten)]
    pub station: Station,
    pub salinity: u16,
    pub water_temp: i16, // 1/10 C
    pub spare: u16,
}

impl SalinityReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            salinity: six.get(10) as u16,
            water_temp: conv_sign(0x200, six.get(10)) as i16,
            spare: six.get(13) as u16,
        })
    }
}

/// One vessel of a procession order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessionVessel {
    pub order: u8,
    pub vessel_name: String,
    pub position_name: String,
    pub time_hh: u8,
    pub time_mm: u8,
    pub spare: u8,
}

impl ProcessionVessel {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            order: six.get(5) as u8,
            vessel_name: six.get_string(15),
            position_name: six.get_string(13),
            time_hh: six.get(5) as u8,
            time_mm: six.get(6) as u8,
            spare: six.get(6) as u8,
        })
    }
}

/// 2.3 vessel procession order, 1 to 4 vessels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessionOrder {
    pub utc_time: Timetag,
    pub direction: String,
    pub position: Position,
    pub spare: u8,
    pub vessels: Vec<ProcessionVessel>,
}

impl ProcessionOrder {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let utc_time = Timetag::from_sixbit(six)?;
        let direction = six.get_string(16);
        let longitude = six.get(25);
        let latitude = six.get(24);
        let spare = six.get(3) as u8;
        let vessels = read_reports(six, PROCESSION_REPORT_BITS, 4, ProcessionVessel::from_sixbit)?;

        Ok(Self {
            utc_time,
            direction,
            position: Position::from_raw_milli(latitude, longitude),
            spare,
            vessels,
        })
    }
}
