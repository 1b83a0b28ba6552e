//! IMO international binary applications (DAC 1, FI 11 to 17), as laid out
//! in IMO SN/Circ. 236.

use serde::Serialize;
use std::fmt;

use super::read_available;
use crate::error::DecodeError;
use crate::position::{conv_sign, Position};
use crate::sixbit::SixBit;
use crate::timetag::Timetag;

pub const DAC_IMO: u16 = 1;

pub const TIDAL_WINDOW_BITS: usize = 93;
pub const PSEUDO_TARGET_BITS: usize = 120;

/// 1.11 meteorological and hydrological data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeteoHydro {
    pub position: Position,
    pub timedate: u16, // DDHHMM packed
    pub wind_avg: u8,  // knots
    pub wind_gust: u8,
    pub wind_dir: u16,
    pub gust_dir: u16,
    pub air_temp: i16, // 1/10 C
    pub humidity: u8,
    pub dew_point: i16, // 1/10 C
    pub pressure: u16,  // hPa above 800
    pub tendency: u8,
    pub visibility: u8,
    pub water_level: i16, // 1/10 m
    pub water_trend: u8,
    pub surface_speed: u8,
    pub surface_dir: u16,
    pub speed_2: u8,
    pub dir_2: u16,
    pub level_2: u8,
    pub speed_3: u8,
    pub dir_3: u16,
    pub level_3: u8,
    pub wave_height: u8,
    pub wave_period: u8,
    pub wave_dir: u16,
    pub swell_height: u8,
    pub swell_period: u8,
    pub swell_dir: u16,
    pub sea_state: u8,
    pub water_temp: i16, // 1/10 C
    pub precip_type: u8,
    pub salinity: u16,
    pub ice: u8,
    pub spare: u8,
}

impl MeteoHydro {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        let latitude = six.get(24);
        let longitude = six.get(25);
        Self {
            position: Position::from_raw_milli(latitude, longitude),
            timedate: six.get(16) as u16,
            wind_avg: six.get(7) as u8,
            wind_gust: six.get(7) as u8,
            wind_dir: six.get(9) as u16,
            gust_dir: six.get(9) as u16,
            air_temp: conv_sign(0x400, six.get(11)) as i16,
            humidity: six.get(7) as u8,
            dew_point: conv_sign(0x200, six.get(10)) as i16,
            pressure: six.get(9) as u16,
            tendency: six.get(2) as u8,
            visibility: six.get(8) as u8,
            water_level: conv_sign(0x100, six.get(9)) as i16,
            water_trend: six.get(2) as u8,
            surface_speed: six.get(8) as u8,
            surface_dir: six.get(9) as u16,
            speed_2: six.get(8) as u8,
            dir_2: six.get(9) as u16,
            level_2: six.get(5) as u8,
            speed_3: six.get(8) as u8,
            dir_3: six.get(9) as u16,
            level_3: six.get(5) as u8,
            wave_height: six.get(8) as u8,
            wave_period: six.get(6) as u8,
            wave_dir: six.get(9) as u16,
            swell_height: six.get(8) as u8,
            swell_period: six.get(6) as u8,
            swell_dir: six.get(9) as u16,
            sea_state: six.get(4) as u8,
            water_temp: conv_sign(0x200, six.get(10)) as i16,
            precip_type: six.get(3) as u8,
            salinity: six.get(9) as u16,
            ice: six.get(2) as u8,
            spare: six.get(6) as u8,
        }
    }
}

/// 1.12 dangerous cargo indication
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DangerousCargo {
    pub last_port: String,
    pub atd: Timetag,
    pub next_port: String,
    pub eta: Timetag,
    pub good: String,
    pub imd: String,
    pub un_number: u16,
    pub quantity: u16,
    pub units: u8, // 1 kg, 2 tons, 3 1000 tons
    pub spare: u8,
}

impl DangerousCargo {
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        Ok(Self {
            last_port: six.get_string(5),
            atd: Timetag::from_sixbit(six)?,
            next_port: six.get_string(5),
            eta: Timetag::from_sixbit(six)?,
            good: six.get_string(20),
            imd: six.get_string(4),
            un_number: six.get(13) as u16,
            quantity: six.get(10) as u16,
            units: six.get(2) as u8,
            spare: six.get(3) as u8,
        })
    }
}

/// 1.13 fairway closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FairwayClosed {
    pub reason: String,
    pub location_from: String,
    pub location_to: String,
    pub extension: u16,
    pub units: u8,
    pub from_day: u8,
    pub from_month: u8,
    pub from_hour: u8,
    pub from_minute: u8,
    pub to_day: u8,
    pub to_month: u8,
    pub to_hour: u8,
    pub to_minute: u8,
    pub spare: u8,
}

impl FairwayClosed {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        Self {
            reason: six.get_string(20),
            location_from: six.get_string(20),
            location_to: six.get_string(20),
            extension: six.get(10) as u16,
            units: six.get(2) as u8,
            from_day: six.get(5) as u8,
            from_month: six.get(4) as u8,
            from_hour: six.get(5) as u8,
            from_minute: six.get(6) as u8,
            to_day: six.get(5) as u8,
            to_month: six.get(4) as u8,
            to_hour: six.get(5) as u8,
            to_minute: six.get(6) as u8,
            spare: six.get(4) as u8,
        }
    }
}

/// One window of a tidal window message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TidalWindowEntry {
    pub position: Position,
    pub from_hour: u8,
    pub from_minute: u8,
    pub to_hour: u8,
    pub to_minute: u8,
    pub current_dir: u16,
    pub current_speed: u8, // 1/10 knot
}

impl TidalWindowEntry {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        let latitude = six.get(27);
        let longitude = six.get(28);
        Self {
            position: Position::from_raw(latitude, longitude),
            from_hour: six.get(5) as u8,
            from_minute: six.get(6) as u8,
            to_hour: six.get(5) as u8,
            to_minute: six.get(6) as u8,
            current_dir: six.get(9) as u16,
            current_speed: six.get(7) as u8,
        }
    }
}

/// 1.14 tidal window, up to three windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TidalWindow {
    pub utc_month: u8,
    pub utc_day: u8,
    pub windows: Vec<TidalWindowEntry>,
}

impl TidalWindow {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        let utc_month = six.get(4) as u8;
        let utc_day = six.get(5) as u8;
        Self {
            utc_month,
            utc_day,
            windows: read_available(six, TIDAL_WINDOW_BITS, 3, TidalWindowEntry::from_sixbit),
        }
    }
}

/// 1.15 extended ship static and voyage data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtendedShipData {
    pub air_draught: u16, // 1/10 m
    pub spare: u8,
}

/// 1.16 number of persons on board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonsOnBoard {
    pub num_persons: u16,
    pub spare: u8,
}

/// Identity of a pseudo-AIS target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetId {
    Mmsi(u32),
    Imo(u32),
    Callsign(String),
    Other(String),
}

/// One target of a pseudo-AIS targets message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PseudoTarget {
    pub id: TargetId,
    pub spare: u8,
    pub position: Position,
    pub cog: u16,
    pub timestamp: u8,
    pub sog: u8, // knots
}

impl PseudoTarget {
    pub fn from_sixbit(six: &mut SixBit) -> Self {
        // 42 bits of identity; numeric ids are right aligned
        let id = match six.get(2) {
            0 => {
                six.get(12);
                TargetId::Mmsi(six.get(30))
            }
            1 => {
                six.get(12);
                TargetId::Imo(six.get(30))
            }
            2 => TargetId::Callsign(six.get_string(7)),
            _ => TargetId::Other(six.get_string(7)),
        };
        let spare = six.get(4) as u8;
        let latitude = six.get(24);
        let longitude = six.get(25);
        Self {
            id,
            spare,
            position: Position::from_raw_milli(latitude, longitude),
            cog: six.get(9) as u16,
            timestamp: six.get(6) as u8,
            sog: six.get(8) as u8,
        }
    }
}

/// IMO messages keyed on FI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImoMessage {
    MeteoHydro(Box<MeteoHydro>),
    DangerousCargo(DangerousCargo),
    FairwayClosed(FairwayClosed),
    TidalWindow(TidalWindow),
    ExtendedShipData(ExtendedShipData),
    PersonsOnBoard(PersonsOnBoard),
    PseudoTargets(Vec<PseudoTarget>),
}

impl ImoMessage {
    /// Decode an IMO payload starting right after the application id
    pub fn from_sixbit(fi: u8, six: &mut SixBit) -> Result<Self, DecodeError> {
        match fi {
            11 => Ok(ImoMessage::MeteoHydro(Box::new(MeteoHydro::from_sixbit(six)))),
            12 => DangerousCargo::from_sixbit(six).map(ImoMessage::DangerousCargo),
            13 => Ok(ImoMessage::FairwayClosed(FairwayClosed::from_sixbit(six))),
            14 => Ok(ImoMessage::TidalWindow(TidalWindow::from_sixbit(six))),
            15 => Ok(ImoMessage::ExtendedShipData(ExtendedShipData {
                air_draught: six.get(11) as u16,
                spare: six.get(5) as u8,
            })),
            16 => Ok(ImoMessage::PersonsOnBoard(PersonsOnBoard {
                num_persons: six.get(13) as u16,
                spare: six.get(3) as u8,
            })),
            17 => Ok(ImoMessage::PseudoTargets(read_available(
                six,
                PSEUDO_TARGET_BITS,
                4,
                PseudoTarget::from_sixbit,
            ))),
            _ => Err(DecodeError::UnknownApplication { dac: DAC_IMO, fi, id: 0 }),
        }
    }
}

impl fmt::Display for ImoMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImoMessage::MeteoHydro(m) => write!(
                f,
                "      Meteo: {} Wind: {} kn @ {}° Air: {:.1} C",
                m.position,
                m.wind_avg,
                m.wind_dir,
                m.air_temp as f64 / 10.0
            ),
            ImoMessage::DangerousCargo(m) => write!(
                f,
                "      Dangerous cargo: {} UN{} {} -> {}",
                m.good.trim_end(),
                m.un_number,
                m.last_port,
                m.next_port
            ),
            ImoMessage::FairwayClosed(m) => write!(
                f,
                "      Fairway closed: {} from {} to {}",
                m.reason.trim_end(),
                m.location_from.trim_end(),
                m.location_to.trim_end()
            ),
            ImoMessage::TidalWindow(m) => write!(f, "      Tidal windows: {}", m.windows.len()),
            ImoMessage::ExtendedShipData(m) => {
                write!(f, "      Air draught: {:.1} m", m.air_draught as f64 / 10.0)
            }
            ImoMessage::PersonsOnBoard(m) => write!(f, "      Persons on board: {}", m.num_persons),
            ImoMessage::PseudoTargets(t) => write!(f, "      Pseudo targets: {}", t.len()),
        }
    }
}
