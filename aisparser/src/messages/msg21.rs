use serde::Serialize;
use std::fmt;

use super::{check_length, trim_padding};
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Aids-to-navigation report (message 21)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AidToNavigation {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub aton_type: u8,
    pub name: String,
    pub pos_acc: bool,
    pub position: Position,
    pub dim_bow: u16,
    pub dim_stern: u16,
    pub dim_port: u8,
    pub dim_starboard: u8,
    pub pos_type: u8,
    pub utc_sec: u8,
    pub off_position: bool,
    pub regional: u8,
    pub raim: bool,
    pub virtual_aton: bool,
    pub assigned: bool,
    pub spare1: u8,
    /// Characters of the name beyond the first 20
    pub name_ext: String,
}

impl AidToNavigation {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let bits = check_length(six, 21, 272, 360)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let aton_type = six.get(5) as u8;
        let name = six.get_string(20);
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);

        Ok(Self {
            msgid: 21,
            repeat,
            userid,
            aton_type,
            name,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            dim_bow: six.get(9) as u16,
            dim_stern: six.get(9) as u16,
            dim_port: six.get(6) as u8,
            dim_starboard: six.get(6) as u8,
            pos_type: six.get(4) as u8,
            utc_sec: six.get(6) as u8,
            off_position: six.get_bool(),
            regional: six.get(8) as u8,
            raim: six.get_bool(),
            virtual_aton: six.get_bool(),
            assigned: six.get_bool(),
            spare1: six.get(1) as u8,
            name_ext: six.get_string((bits - 272) / 6),
        })
    }

    /// Name and extension joined, with trailing padding removed
    pub fn full_name(&self) -> String {
        let name = trim_padding(&self.name);
        if name.len() < self.name.len() {
            return name.to_string();
        }
        format!("{}{}", name, trim_padding(&self.name_ext))
    }
}

impl fmt::Display for AidToNavigation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      AtoN: {} Name: {} Type: {} Position: {}{}",
            self.userid,
            self.full_name(),
            self.aton_type,
            self.position,
            if self.virtual_aton { " (virtual)" } else { "" }
        )
    }
}
