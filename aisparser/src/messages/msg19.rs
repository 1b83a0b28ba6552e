use serde::Serialize;
use std::fmt;

use super::{check_length, trim_padding};
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Extended Class B equipment position report (message 19)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassBExtended {
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
    pub name: String,
    pub ship_type: u8,
    pub dim_bow: u16,
    pub dim_stern: u16,
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub pos_type: u8,
    pub raim: bool,
    pub dte: bool,
    pub spare: u8,
}

impl ClassBExtended {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 19, 312, 312)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let regional1 = six.get(8) as u8;
        let sog = six.get(10) as u16;
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);

        Ok(Self {
            msgid: 19,
            repeat,
            userid,
            regional1,
            sog,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            cog: six.get(12) as u16,
            true_heading: six.get(9) as u16,
            utc_sec: six.get(6) as u8,
            regional2: six.get(4) as u8,
            name: six.get_string(20),
            ship_type: six.get(8) as u8,
            dim_bow: six.get(9) as u16,
            dim_stern: six.get(9) as u16,
            dim_port: six.get(6) as u8,
            dim_starboard: six.get(6) as u8,
            pos_type: six.get(4) as u8,
            raim: six.get_bool(),
            dte: six.get_bool(),
            spare: six.get(5) as u8,
        })
    }
}

impl fmt::Display for ClassBExtended {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      MMSI: {} Name: {} Type: {} Position: {} SOG: {:.1} kn",
            self.userid,
            trim_padding(&self.name),
            self.ship_type,
            self.position,
            self.sog as f64 / 10.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::payload;

    #[test]
    fn test_message_19() {
        let mut six = payload("C5N3SRP0EnK5<14;aJSAKwo062PaLELTBJ:V00000000S0D:R220");
        let msg = ClassBExtended::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 367059850);
        assert_eq!(msg.sog, 87);
        assert_eq!(msg.position, Position::new(17540520, -52910590));
        assert_eq!(msg.cog, 3350);
        assert_eq!(msg.true_heading, 511);
        assert_eq!(msg.utc_sec, 46);
        assert_eq!(msg.name, "CAPT.J.RIMES@@@@@@@@");
        assert_eq!(msg.ship_type, 70);
        assert_eq!((msg.dim_bow, msg.dim_stern, msg.dim_port, msg.dim_starboard), (5, 21, 4, 4));
        assert_eq!(msg.pos_type, 1);
        assert!(!msg.raim);
        assert!(!msg.dte);
        assert_eq!(six.length(), 0);
        assert!(msg.to_string().contains("Name: CAPT.J.RIMES Type: 70"));
    }
}
