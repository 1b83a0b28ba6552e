use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Group assignment command (message 23)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAssignment {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub north_east: Position, // 1/10 minute precision
    pub south_west: Position,
    pub station_type: u8,
    pub ship_type: u8,
    pub spare2: u32,
    pub txrx_mode: u8,
    pub report_interval: u8,
    pub quiet_time: u8, // minutes
    pub spare3: u8,
}

impl GroupAssignment {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 23, 160, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let spare1 = six.get(2) as u8;
        let ne_longitude = six.get(18);
        let ne_latitude = six.get(17);
        let sw_longitude = six.get(18);
        let sw_latitude = six.get(17);

        Ok(Self {
            msgid: 23,
            repeat,
            userid,
            spare1,
            north_east: Position::from_raw_tenths(ne_latitude, ne_longitude),
            south_west: Position::from_raw_tenths(sw_latitude, sw_longitude),
            station_type: six.get(4) as u8,
            ship_type: six.get(8) as u8,
            spare2: six.get(22),
            txrx_mode: six.get(2) as u8,
            report_interval: six.get(4) as u8,
            quiet_time: six.get(4) as u8,
            spare3: six.get(6) as u8,
        })
    }
}

impl fmt::Display for GroupAssignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      Station: {} Area: {} to {} Interval: {}",
            self.userid, self.north_east, self.south_west, self.report_interval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::payload;

    #[test]
    fn test_message_23() {
        let mut six = payload("G02:Kn01h0ldP35Qa1600000I00");
        let msg = GroupAssignment::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 2268120);
        assert_eq!(msg.north_east, Position::new(26980000, 1792000));
        assert_eq!(msg.south_west, Position::new(26884000, 1580000));
        assert_eq!(msg.station_type, 6);
        assert_eq!(msg.ship_type, 0);
        assert_eq!(msg.txrx_mode, 1);
        assert_eq!(msg.report_interval, 9);
        assert_eq!(msg.quiet_time, 0);
    }

    #[test]
    fn test_too_short() {
        let mut six = payload("G02:Kn01h0ldP35Qa1600000I0");
        assert_eq!(
            GroupAssignment::from_sixbit(&mut six),
            Err(DecodeError::Length { msgid: 23, bits: 156 })
        );
    }
}
