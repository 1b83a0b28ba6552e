use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::binary::{split_app_id, BinaryApplication};
use crate::error::DecodeError;
use crate::sixbit::SixBit;

/// Binary broadcast message (message 8)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryBroadcast {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub spare: u8,
    pub app_id: u16,
    /// Application data following the application id
    pub data: SixBit,
}

impl BinaryBroadcast {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, 8, 56, 1008)?;

        Ok(Self {
            msgid: 8,
            repeat: six.get(2) as u8,
            userid: six.get(30),
            spare: six.get(2) as u8,
            app_id: six.get(16) as u16,
            data: six.clone(),
        })
    }

    pub fn dac(&self) -> u16 {
        split_app_id(self.app_id).0
    }

    pub fn fi(&self) -> u8 {
        split_app_id(self.app_id).1
    }

    /// Decode the application data according to DAC/FI
    pub fn application(&self) -> Result<BinaryApplication, DecodeError> {
        BinaryApplication::decode(self.app_id, &self.data)
    }
}

impl fmt::Display for BinaryBroadcast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      From: {} DAC: {} FI: {} Data: {} bits",
            self.userid,
            self.dac(),
            self.fi(),
            self.data.length()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::seaway::SeawayMessage;
    use crate::messages::payload;
    use crate::position::Position;
    use crate::timetag::Timetag;

    #[test]
    fn test_message_8_multipart() {
        let mut six = payload(concat!(
            "85MwqciKf@nWshjR1VfGGDssdvT>hncBfTwcsgGKo?t",
            "u1uBo`7b`1Oa>@cO0f2wr1mwb0=kf<tI2MwS;sVKU07",
            "8fDSaOKeP"
        ));
        six.set_fill_bits(2);
        assert_eq!(six.payload_bits(), 570);
        assert_eq!(six.bit_len(), 568);

        let msg = BinaryBroadcast::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 366999983);
        assert_eq!(msg.app_id, 23481);
        assert_eq!((msg.dac(), msg.fi()), (366, 57));
        assert_eq!(msg.data.length(), 514);
        assert_eq!(
            msg.application(),
            Err(DecodeError::UnknownApplication { dac: 366, fi: 57, id: 13 })
        );
    }

    #[test]
    fn test_seaway_water_level() {
        let mut six = payload("8030ojA?0@=DE3@?BDPA3onQiUFttP1Wh01DE3<1EJ?>0onlkUG0e01Ih00");
        let msg = BinaryBroadcast::from_sixbit(&mut six).unwrap();
        assert_eq!(msg.userid, 3160009);
        assert_eq!((msg.dac(), msg.fi()), (316, 1));
        assert_eq!(msg.data.length(), 298);

        let Ok(BinaryApplication::Seaway(SeawayMessage::WaterLevel(reports))) = msg.application() else {
            panic!("expected water level");
        };
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].station.utc_time, Timetag { month: 5, day: 8, hours: 21, minutes: 3 });
        assert_eq!(reports[0].station.station_id, "PORT QC");
        assert_eq!(reports[0].station.position, Position::new(28094650, -42719010));
        assert_eq!((reports[0].level_type, reports[0].level, reports[0].datum), (0, 103, 3));
        assert_eq!(reports[1].station.station_id, "LAUZON@");
        assert_eq!(reports[1].station.position, Position::new(28099460, -42694650));
        assert_eq!((reports[1].level, reports[1].datum), (89, 3));
    }

    #[test]
    fn test_too_short() {
        let mut six = payload("8030ojA?");
        assert_eq!(
            BinaryBroadcast::from_sixbit(&mut six),
            Err(DecodeError::Length { msgid: 8, bits: 48 })
        );
    }
}
