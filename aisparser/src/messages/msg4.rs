use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

use super::check_length;
use crate::comm_state::Sotdma;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

/// Base station report (message 4) and UTC/date response (message 11)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseStationReport {
    pub msgid: u8,
    pub repeat: u8,
    pub userid: u32,
    pub utc_year: u16,
    pub utc_month: u8,
    pub utc_day: u8,
    pub utc_hour: u8,
    pub utc_minute: u8,
    pub utc_second: u8,
    pub pos_acc: bool,
    pub position: Position,
    pub pos_type: u8,
    pub spare: u16,
    pub raim: bool,
    pub comm_state: Sotdma,
}

impl BaseStationReport {
    pub fn from_sixbit(msgid: u8, six: &mut SixBit) -> Result<Self, DecodeError> {
        check_length(six, msgid, 168, 168)?;

        let repeat = six.get(2) as u8;
        let userid = six.get(30);
        let utc_year = six.get(14) as u16;
        let utc_month = six.get(4) as u8;
        let utc_day = six.get(5) as u8;
        let utc_hour = six.get(5) as u8;
        let utc_minute = six.get(6) as u8;
        let utc_second = six.get(6) as u8;
        let pos_acc = six.get_bool();
        let longitude = six.get(28);
        let latitude = six.get(27);

        Ok(Self {
            msgid,
            repeat,
            userid,
            utc_year,
            utc_month,
            utc_day,
            utc_hour,
            utc_minute,
            utc_second,
            pos_acc,
            position: Position::from_raw(latitude, longitude),
            pos_type: six.get(4) as u8,
            spare: six.get(10) as u16,
            raim: six.get_bool(),
            comm_state: Sotdma::from_sixbit(six),
        })
    }

    /// Reported UTC time, `None` when any part is "not available" or out of range
    pub fn to_date_time(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.utc_year.into(), self.utc_month.into(), self.utc_day.into())?.and_hms_opt(
            self.utc_hour.into(),
            self.utc_minute.into(),
            self.utc_second.into(),
        )
    }
}

impl fmt::Display for BaseStationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "      Station: {} Time: {:04}-{:02}-{:02} {:02}:{:02}:{:02} Position: {}",
            self.userid,
            self.utc_year,
            self.utc_month,
            self.utc_day,
            self.utc_hour,
            self.utc_minute,
            self.utc_second,
            self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::payload;

    #[test]
    fn test_message_4() {
        let mut six = payload("403OwpiuIKl:Ro=sbvK=CG700<3b");
        let msg = BaseStationReport::from_sixbit(4, &mut six).unwrap();
        assert_eq!(msg.userid, 3669987);
        assert_eq!(msg.utc_year, 2006);
        assert_eq!(msg.utc_month, 5);
        assert_eq!(msg.utc_day, 23);
        assert_eq!(msg.utc_hour, 20);
        assert_eq!(msg.utc_minute, 10);
        assert_eq!(msg.utc_second, 34);
        assert!(msg.pos_acc);
        assert_eq!(msg.position, Position::new(28529500, -73671329));
        assert_eq!(msg.pos_type, 7);
        assert!(!msg.raim);
        assert_eq!(msg.comm_state, Sotdma { sync_state: 0, slot_timeout: 3, sub_message: 234 });

        let expected = NaiveDate::from_ymd_opt(2006, 5, 23).unwrap().and_hms_opt(20, 10, 34).unwrap();
        assert_eq!(msg.to_date_time(), Some(expected));
    }

    #[test]
    fn test_message_11() {
        let mut six = payload(";4WOL21uM<jCroP`g8B=NFQ00000");
        let msg = BaseStationReport::from_sixbit(11, &mut six).unwrap();
        assert_eq!(msg.msgid, 11);
        assert_eq!(msg.userid, 309845000);
        assert_eq!(
            (msg.utc_year, msg.utc_month, msg.utc_day, msg.utc_hour, msg.utc_minute, msg.utc_second),
            (2007, 4, 25, 18, 19, 58)
        );
        assert_eq!(msg.position, Position::new(19095130, -71219740));
        assert_eq!(msg.pos_type, 1);
    }

    #[test]
    fn test_unavailable_time() {
        let mut six = payload("403OwpiuIKl:Ro=sbvK=CG700<3b");
        let mut msg = BaseStationReport::from_sixbit(4, &mut six).unwrap();
        msg.utc_month = 0;
        assert_eq!(msg.to_date_time(), None);
    }
}
