//! St. Lawrence Seaway binary applications (DAC 316 and 366).
//!
//! Every Seaway message starts with 2 spare bits and a 6-bit message id;
//! the (FI, message id) pair selects the layout. Environmental reports repeat
//! up to a fixed count. Positions are transmitted in 1/1000 minute and are
//! returned in 1/10000 minute like everything else.

use serde::Serialize;
use std::fmt;

use super::pawss::{CurrentReport, ProcessionOrder, SalinityReport};
use super::read_reports;
use crate::error::DecodeError;
use crate::position::{conv_sign, Position};
use crate::sixbit::SixBit;
use crate::timetag::Timetag;

pub const DAC_SEAWAY: u16 = 316;
pub const DAC_PAWSS: u16 = 366;

pub const WEATHER_REPORT_BITS: usize = 192;
pub const STATION_REPORT_BITS: usize = 144;
pub const LOCK_SCHEDULE_BITS: usize = 120;

/// Time, name and position leading every station report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Station {
    pub utc_time: Timetag,
    pub station_id: String,
    pub position: Position,
}

impl Station {
    pub(crate) fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let utc_time = Timetag::from_sixbit(six)?;
        let station_id = six.get_string(7);
        let longitude = six.get(25);
        let latitude = six.get(24);
        Ok(Self {
            utc_time,
            station_id,
            position: Position::from_raw_milli(latitude, longitude),
        })
    }
}

/// 1.1 weather station report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub station: Station,
    pub speed: u16,     // knots
    pub gust: u16,      // knots
    pub direction: u16, // degrees
    pub pressure: u16,  // 1/10 hPa
    pub air_temp: i16,  // 1/10 C
    pub dew_point: i16, // 1/10 C
    pub visibility: u8, // 1/10 NM
    pub water_temp: i16, // 1/10 C
}

impl WeatherReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            speed: six.get(10) as u16,
            gust: six.get(10) as u16,
            direction: six.get(9) as u16,
            pressure: six.get(14) as u16,
            air_temp: conv_sign(0x200, six.get(10)) as i16,
            dew_point: conv_sign(0x200, six.get(10)) as i16,
            visibility: six.get(8) as u8,
            water_temp: conv_sign(0x200, six.get(10)) as i16,
        })
    }
}

/// 1.2 wind report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindReport {
    #[serde(flatten)]
    pub station: Station,
    pub speed: u16,
    pub gust: u16,
    pub direction: u16,
    pub spare: u8,
}

impl WindReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            speed: six.get(10) as u16,
            gust: six.get(10) as u16,
            direction: six.get(9) as u16,
            spare: six.get(4) as u8,
        })
    }
}

/// 1.3 water level report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterLevelReport {
    #[serde(flatten)]
    pub station: Station,
    pub level_type: u8,
    pub level: i16, // cm
    pub datum: u8,
    pub spare: u16,
}

impl WaterLevelReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            level_type: six.get(1) as u8,
            level: conv_sign(0x8000, six.get(16)) as i16,
            datum: six.get(2) as u8,
            spare: six.get(14) as u16,
        })
    }
}

/// 1.6 water flow report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaterFlowReport {
    #[serde(flatten)]
    pub station: Station,
    pub flow: u16, // m3/s
    pub spare: u32,
}

impl WaterFlowReport {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            station: Station::from_sixbit(six)?,
            flow: six.get(14) as u16,
            spare: six.get(19),
        })
    }
}

/// One vessel in a 2.1 lockage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockSchedule {
    pub name: String,
    pub direction: u8,
    pub eta: Timetag,
    pub spare: u16,
}

impl LockSchedule {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            name: six.get_string(15),
            direction: six.get(1) as u8,
            eta: Timetag::from_sixbit(six)?,
            spare: six.get(9) as u16,
        })
    }
}

/// 2.1 lockage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockOrder {
    pub utc_time: Timetag,
    pub lock_id: String,
    pub position: Position,
    pub spare: u16,
    pub schedules: Vec<LockSchedule>,
}

impl LockOrder {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let station = Station::from_sixbit(six)?;
        let spare = six.get(9) as u16;
        let schedules = read_reports(six, LOCK_SCHEDULE_BITS, 6, LockSchedule::from_sixbit)?;
        Ok(Self {
            utc_time: station.utc_time,
            lock_id: station.station_id,
            position: station.position,
            spare,
            schedules,
        })
    }
}

/// 2.2 estimated lock times
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockTimes {
    pub utc_time: Timetag,
    pub name: String,
    pub last_location: String,
    pub last_ata: Timetag,
    pub first_lock: String,
    pub first_eta: Timetag,
    pub second_lock: String,
    pub second_eta: Timetag,
    pub delay: String,
    pub spare: u8,
}

impl LockTimes {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            utc_time: Timetag::from_sixbit(six)?,
            name: six.get_string(15),
            last_location: six.get_string(7),
            last_ata: Timetag::from_sixbit(six)?,
            first_lock: six.get_string(7),
            first_eta: Timetag::from_sixbit(six)?,
            second_lock: six.get_string(7),
            second_eta: Timetag::from_sixbit(six)?,
            delay: six.get_string(7),
            spare: six.get(4) as u8,
        })
    }
}

/// 32.1 version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub spare: u8,
}

impl Version {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        Self {
            major: six.get(8) as u8,
            minor: six.get(8) as u8,
            spare: six.get(8) as u8,
        }
    }
}

/// Seaway and PAWSS messages keyed on (FI, message id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeawayMessage {
    Weather(Vec<WeatherReport>),
    Wind(Vec<WindReport>),
    WaterLevel(Vec<WaterLevelReport>),
    Current(Vec<CurrentReport>),
    Salinity(Vec<SalinityReport>),
    WaterFlow(Vec<WaterFlowReport>),
    LockOrder(LockOrder),
    LockTimes(LockTimes),
    Procession(ProcessionOrder),
    Version(Version),
}

impl SeawayMessage {
    /// Decode a Seaway/PAWSS payload starting at its spare bits
    pub fn from_sixbit(dac: u16, fi: u8, six: &mut SixBit) -> Result<Self, DecodeError> {
        let _spare = six.get(2);
        let msgid = six.get(6) as u8;

        match (fi, msgid) {
            (1, 1) => Ok(SeawayMessage::Weather(read_reports(
                six,
                WEATHER_REPORT_BITS,
                4,
                WeatherReport::from_sixbit,
            )?)),
            (1, 2) => Ok(SeawayMessage::Wind(read_reports(
                six,
                STATION_REPORT_BITS,
                6,
                WindReport::from_sixbit,
            )?)),
            (1, 3) => Ok(SeawayMessage::WaterLevel(read_reports(
                six,
                STATION_REPORT_BITS,
                6,
                WaterLevelReport::from_sixbit,
            )?)),
            (1, 4) => Ok(SeawayMessage::Current(read_reports(
                six,
                STATION_REPORT_BITS,
                6,
                CurrentReport::from_sixbit,
            )?)),
            (1, 5) => Ok(SeawayMessage::Salinity(read_reports(
                six,
                STATION_REPORT_BITS,
                6,
                SalinityReport::from_sixbit,
            )?)),
            (1, 6) => Ok(SeawayMessage::WaterFlow(read_reports(
                six,
                STATION_REPORT_BITS,
                6,
                WaterFlowReport::from_sixbit,
            )?)),
            (2, 1) => LockOrder::from_sixbit(six).map(SeawayMessage::LockOrder),
            (2, 2) => LockTimes::from_sixbit(six).map(SeawayMessage::LockTimes),
            (2, 3) => ProcessionOrder::from_sixbit(six).map(SeawayMessage::Procession),
            (32, 1) => Ok(SeawayMessage::Version(Version::from_sixbit(six))),
            _ => Err(DecodeError::UnknownApplication { dac, fi, id: msgid }),
        }
    }
}

fn station_ids<'a>(stations: impl Iterator<Item = &'a Station>) -> String {
    stations
        .map(|s| s.station_id.trim_end())
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for SeawayMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeawayMessage::Weather(r) => {
                write!(f, "      Weather: {}", station_ids(r.iter().map(|r| &r.station)))
            }
            SeawayMessage::Wind(r) => write!(f, "      Wind: {}", station_ids(r.iter().map(|r| &r.station))),
            SeawayMessage::WaterLevel(r) => {
                write!(f, "      Water level: {}", station_ids(r.iter().map(|r| &r.station)))
            }
            SeawayMessage::Current(r) => {
                write!(f, "      Current: {}", station_ids(r.iter().map(|r| &r.station)))
            }
            SeawayMessage::Salinity(r) => {
                write!(f, "      Salinity: {}", station_ids(r.iter().map(|r| &r.station)))
            }
            SeawayMessage::WaterFlow(r) => {
                write!(f, "      Water flow: {}", station_ids(r.iter().map(|r| &r.station)))
            }
            SeawayMessage::LockOrder(m) => write!(
                f,
                "      Lock order: {} at {} ({} vessels)",
                m.lock_id.trim_end(),
                m.utc_time,
                m.schedules.len()
            ),
            SeawayMessage::LockTimes(m) => write!(
                f,
                "      Lock times: {} first lock {} ETA {}",
                m.name.trim_end(),
                m.first_lock.trim_end(),
                m.first_eta
            ),
            SeawayMessage::Procession(m) => write!(
                f,
                "      Procession: {} ({} vessels)",
                m.direction.trim_end(),
                m.vessels.len()
            ),
            SeawayMessage::Version(v) => write!(f, "      Seaway version: {}.{}", v.major, v.minor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(armored: &str) -> Result<SeawayMessage, DecodeError> {
        let mut six = SixBit::from_armored(armored).unwrap();
        let dac = six.get(10) as u16;
        let fi = six.get(6) as u8;
        SeawayMessage::from_sixbit(dac, fi, &mut six)
    }

    fn test_station() -> Station {
        Station {
            utc_time: Timetag { month: 5, day: 29, hours: 0, minutes: 34 },
            station_id: "TEST1  ".to_string(),
            position: Position::new(3050000, 16250000),
        }
    }

    #[test]
    fn test_weather() {
        let msg = decode("Ch41G`8U1Dm<H80iUm09Ce0@1A9Ii3wgl2@t").unwrap();
        let SeawayMessage::Weather(reports) = msg else {
            panic!("expected weather");
        };
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.station, test_station());
        assert_eq!(report.station.position.to_degrees_minutes(), ((5, 5.0), (27, 5.0)));
        assert_eq!(report.speed, 32);
        assert_eq!(report.gust, 40);
        assert_eq!(report.direction, 293);
        assert_eq!(report.pressure, 10000);
        assert_eq!(report.air_temp, -2);
        assert_eq!(report.dew_point, -12);
        assert_eq!(report.visibility, 9);
        assert_eq!(report.water_temp, 60);
    }

    #[test]
    fn test_wind() {
        let msg = decode("Ch42G`8U1Dm<H80iUm09Ce0@1A9@").unwrap();
        assert_eq!(
            msg,
            SeawayMessage::Wind(vec![WindReport {
                station: test_station(),
                speed: 32,
                gust: 40,
                direction: 293,
                spare: 0,
            }])
        );
    }

    #[test]
    fn test_water_level() {
        let msg = decode("Ch43G`8U1Dm<H80iUm09Ce008400").unwrap();
        assert_eq!(
            msg,
            SeawayMessage::WaterLevel(vec![WaterLevelReport {
                station: test_station(),
                level_type: 0,
                level: 32,
                datum: 1,
                spare: 0,
            }])
        );
    }

    #[test]
    fn test_water_level_signed() {
        let msg = decode("Ch43H;01hEAiL<OpGf033D7wvp00H;1AhEAiL<P01u7wt604lP00").unwrap();
        let SeawayMessage::WaterLevel(reports) = msg else {
            panic!("expected water level");
        };
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].station.station_id, "GAUGE01");
        assert_eq!(reports[0].station.position, Position::new(1000000, -2500000));
        assert_eq!(reports[0].level_type, 1);
        assert_eq!(reports[0].level, -5);
        assert_eq!(reports[0].datum, 2);
        assert_eq!(reports[1].station.utc_time, Timetag { month: 6, day: 1, hours: 12, minutes: 5 });
        assert_eq!(reports[1].station.position, Position::new(-20000, 10000));
        assert_eq!(reports[1].level, 1234);
    }

    #[test]
    fn test_water_flow() {
        let msg = decode("Ch46G`8U1Dm<H80iUm09Ce400000").unwrap();
        assert_eq!(
            msg,
            SeawayMessage::WaterFlow(vec![WaterFlowReport { station: test_station(), flow: 8192, spare: 0 }])
        );
    }

    #[test]
    fn test_lock_order() {
        let msg = decode("Ch81G`8U1Dm<H80iUm09Ce00=9<;IPCD1BPPPPPcl4@0").unwrap();
        let SeawayMessage::LockOrder(order) = msg else {
            panic!("expected lock order");
        };
        assert_eq!(order.utc_time, Timetag { month: 5, day: 29, hours: 0, minutes: 34 });
        assert_eq!(order.lock_id, "TEST1  ");
        assert_eq!(order.position, Position::new(3050000, 16250000));
        assert_eq!(order.schedules.len(), 1);
        assert_eq!(order.schedules[0].name, "MILKY STAR     ");
        assert_eq!(order.schedules[0].direction, 1);
        assert_eq!(order.schedules[0].eta, Timetag { month: 5, day: 29, hours: 0, minutes: 34 });
    }

    #[test]
    fn test_lock_times() {
        let msg = decode("Ch82Gc7SBC2nH4m0D`88884k4ok<<Erl1<i=tk39NeNC<CO<hkGcP4k4ok<<@").unwrap();
        let SeawayMessage::LockTimes(times) = msg else {
            panic!("expected lock times");
        };
        assert_eq!(times.utc_time, Timetag { month: 5, day: 29, hours: 12, minutes: 30 });
        assert_eq!(times.name, "MILKY STAR     ");
        assert_eq!(times.last_location, "SLS_L01");
        assert_eq!(times.last_ata, Timetag { month: 5, day: 29, hours: 13, minutes: 0 });
        assert_eq!(times.first_lock, "SLS_L02");
        assert_eq!(times.first_eta, Timetag { month: 5, day: 29, hours: 13, minutes: 30 });
        assert_eq!(times.second_lock, "SLS_L03");
        assert_eq!(times.second_eta, Timetag { month: 5, day: 29, hours: 14, minutes: 0 });
        assert_eq!(times.delay, "SLS_L01");
    }

    #[test]
    fn test_version() {
        assert_eq!(
            decode("Cj011000").unwrap(),
            SeawayMessage::Version(Version { major: 4, minor: 0, spare: 0 })
        );
    }

    #[test]
    fn test_unknown_message() {
        assert_eq!(
            decode("Ch490000"),
            Err(DecodeError::UnknownApplication { dac: 316, fi: 1, id: 9 })
        );
    }

    #[test]
    fn test_short_timetag() {
        assert_eq!(decode("Ch4200"), Err(DecodeError::Timetag(12)));
    }

    #[test]
    fn test_display() {
        let msg = decode("Ch42G`8U1Dm<H80iUm09Ce0@1A9@").unwrap();
        assert_eq!(msg.to_string(), "      Wind: TEST1");
    }
}
