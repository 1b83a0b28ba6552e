use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Where a channel management command applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelArea {
    /// Addressed to up to two stations
    Addressed { dest_1: u32, dest_2: u32 },
    /// Broadcast to a rectangle, corners at 1/10 minute precision
    Region { north_east: Position, south_west: Position },
}

/// Channel management (message 22)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelManagement {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare1: u8,
    pub channel_a: u16,
    pub channel_b: u16,
    pub txrx_mode: u8,
    pub power: bool, // low power
    pub area: ChannelArea,
    pub bw_a: bool,
    pub bw_b: bool,
    pub tz_size: u8,
    pub spare2: u32,
}

impl ChannelManagement {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 22, 168, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let spare1 = six.get(2) as u8;
        let channel_a = six.get(12) as u16;
        let channel_b = six.get(12) as u16;
        let txrx_mode = six.get(4) as u8;
        let power = six.get_bool();
        let ne_longitude = six.get(18);
        let ne_latitude = six.get(17);
        let sw_longitude = six.get(18);
        let sw_latitude = six.get(17);
        let addressed = six.get_bool();

        let area = if addressed {
            ChannelArea::Addressed {
                dest_1: (ne_longitude << 12) | (ne_latitude >> 5),
                dest_2: (sw_longitude << 12) | (sw_latitude >> 5),
            }
        } else {
            ChannelArea::Region {
                north_east: Position::from_raw_tenths(ne_latitude, ne_longitude),
                south_west: Position::from_raw_tenths(sw_latitude, sw_longitude),
            }
        };

        Ok(Self {
            msgid: 22,
            repeat,
            userid,
            spare1,
            channel_a,
            channel_b,
            txrx_mode,
            power,
            area,
            bw_a: six.get_bool(),
            bw_b: six.get_bool(),
            tz_size: six.get(3) as u8,
            spare2: six.get(23),
        })
    }

    pub fn is_addressed(&self) -> bool {
        matches!(self.area, ChannelArea::Addressed { .. })
    }
}

impl fmt::Display for ChannelManagement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      Station: {} Channels: {}/{} ",
            self.userid, self.channel_a, self.channel_b
        )?;
        match self.area {
            ChannelArea::Addressed { dest_1, dest_2 } => write!(f, "To: {}, {}", dest_1, dest_2),
            ChannelArea::Region { north_east, south_west } => {
                write!(f, "Area: {} to {}", north_east, south_west)
            }
        }
    }
}
