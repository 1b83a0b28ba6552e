use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::sixbit::SixBit;
use crate::timetag::Timetag;

/// Class A static and voyage related data (message 5)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticVoyageData {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub version: u8,
    pub imo: u32,
    pub callsign: String,
    pub name: String,
    pub ship_type: u8,
    pub dim_bow: u16,   // meters
    pub dim_stern: u16, // meters
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub pos_type: u8,
    pub eta: u32,     // packed month/day/hour/minute
    pub draught: u8,  // 1/10 meter
    pub destination: String,
    pub dte: bool,
    pub spare: u8,
}

impl StaticVoyageData {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 5, 426, 426)?;

        Ok(Self {
            msgid: 5,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            version: six.get(2) as u8,
            imo: six.get(30),
            callsign: six.get_string(7),
            name: six.get_string(20),
            ship_type: six.get(8) as u8,
            dim_bow: six.get(9) as u16,
            dim_stern: six.get(9) as u16,
            dim_port: six.get(6) as u8,
            dim_starboard: six.get(6) as u8,
            pos_type: six.get(4) as u8,
            eta: six.get(20),
            draught: six.get(8) as u8,
            destination: six.get_string(20),
            dte: six.get_bool(),
            spare: six.get(1) as u8,
        })
    }

    /// The ETA split into month, day, hour and minute
    pub fn eta(&self) -> Timetag {
        Timetag::from_packed(self.eta)
    }
}

impl fmt::Display for StaticVoyageData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      MMSI: {} Name: {} Callsign: {} Type: {} Destination: {} ETA: {}",
            self.userid,
            self.name.trim_end(),
            self.callsign.trim_end(),
            self.ship_type,
            self.destination.trim_end(),
            self.eta()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::payload;

    #[test]
    fn test_message_5() {
        let mut six = payload("55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H==40HtI4i@E531H1QDTVH51DSCS0");
        let msg = StaticVoyageData::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 366710810);
        assert_eq!(msg.version, 0);
        assert_eq!(msg.imo, 0);
        assert_eq!(msg.callsign, "WYX2158");
        assert_eq!(msg.name, "WALLA WALLA         ");
        assert_eq!(msg.ship_type, 60);
        assert_eq!((msg.dim_bow, msg.dim_stern, msg.dim_port, msg.dim_starboard), (32, 88, 13, 13));
        assert_eq!(msg.pos_type, 1);
        assert_eq!(msg.eta, 1596);
        assert_eq!(msg.eta(), Timetag { month: 0, day: 0, hours: 24, minutes: 60 });
        assert_eq!(msg.draught, 100);
        assert_eq!(msg.destination, "SEATTLE FERRY TERMNL");
        assert!(!msg.dte);
    }

    #[test]
    fn test_first_fragment_only() {
        let mut six = payload("55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H");
        assert_eq!(
            StaticVoyageData::from_sixbit(&mut six),
            Err(DecodeError::Length { msgid: 5, bits: 258 })
        );
    }
}
