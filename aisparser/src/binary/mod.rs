//! Binary application payloads carried by messages 6 and 8.
//!
//! The 16-bit application id splits into a 10-bit Designated Area Code and a
//! 6-bit Function Identifier. Decoders here run on the residual cursor left
//! after the id, so the caller's message keeps its own copy untouched.

pub mod imo;
pub mod pawss;
pub mod seaway;

use serde::Serialize;
use std::fmt;

use crate::error::DecodeError;
use crate::sixbit::SixBit;

pub use imo::ImoMessage;
pub use seaway::SeawayMessage;

/// Longest application payload accepted, in bits
pub const MAX_APPLICATION_BITS: usize = 1008;

/// Split an application id into (DAC, FI)
pub fn split_app_id(app_id: u16) -> (u16, u8) {
    (app_id >> 6, (app_id & 0x3F) as u8)
}

/// A decoded binary application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryApplication {
    /// St. Lawrence Seaway or PAWSS (DAC 316 / 366)
    Seaway(SeawayMessage),
    /// IMO international application (DAC 1)
    Imo(ImoMessage),
}

impl BinaryApplication {
    /// Decode the payload following `app_id`.
    ///
    /// # Arguments
    /// * `app_id` - The 16-bit application id of message 6 or 8
    /// * `data` - Cursor positioned just after the application id
    ///
    /// # Returns
    /// The decoded application, or `DecodeError::UnknownApplication` for a
    /// DAC/FI without a decoder
    pub fn decode(app_id: u16, data: &SixBit) -> Result<Self, DecodeError> {
        let mut six = data.clone();
        if six.length() > MAX_APPLICATION_BITS {
            return Err(DecodeError::ApplicationLength(six.length()));
        }

        let (dac, fi) = split_app_id(app_id);
        match dac {
            seaway::DAC_SEAWAY | seaway::DAC_PAWSS => {
                SeawayMessage::from_sixbit(dac, fi, &mut six).map(BinaryApplication::Seaway)
            }
            imo::DAC_IMO => ImoMessage::from_sixbit(fi, &mut six).map(BinaryApplication::Imo),
            _ => Err(DecodeError::UnknownApplication { dac, fi, id: 0 }),
        }
    }
}

impl fmt::Display for BinaryApplication {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryApplication::Seaway(msg) => write!(f, "{}", msg),
            BinaryApplication::Imo(msg) => write!(f, "{}", msg),
        }
    }
}

/// Read one report, then more while a whole report still fits, up to `max`.
///
/// The first report is read unconditionally so a short payload surfaces as an
/// error from `read` rather than an empty list.
pub(crate) fn read_reports<T>(
    six: &mut SixBit,
    report_bits: usize,
    max: usize,
    mut read: impl FnMut(&mut SixBit) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let mut reports = Vec::new();
    loop {
        reports.push(read(six)?);
        if reports.len() >= max || six.length() < report_bits {
            break;
        }
    }
    Ok(reports)
}

/// Read reports only while a whole report remains, up to `max`
pub(crate) fn read_available<T>(
    six: &mut SixBit,
    report_bits: usize,
    max: usize,
    mut read: impl FnMut(&mut SixBit) -> T,
) -> Vec<T> {
    let mut reports = Vec::new();
    while reports.len() < max && six.length() >= report_bits {
        reports.push(read(six));
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_app_id() {
        assert_eq!(split_app_id(20225), (316, 1));
        assert_eq!(split_app_id(23481), (366, 57));
        assert_eq!(split_app_id((1 << 6) | 11), (1, 11));
    }

    #[test]
    fn test_unknown_dac() {
        let six = SixBit::from_armored("0000").unwrap();
        assert_eq!(
            BinaryApplication::decode((235 << 6) | 10, &six),
            Err(DecodeError::UnknownApplication { dac: 235, fi: 10, id: 0 })
        );
    }

    #[test]
    fn test_application_too_long() {
        let six = SixBit::from_armored(&"0".repeat(169)).unwrap();
        assert_eq!(
            BinaryApplication::decode(20225, &six),
            Err(DecodeError::ApplicationLength(1014))
        );
    }

    #[test]
    fn test_decode_leaves_caller_cursor() {
        let mut six = SixBit::from_armored("Cj011000").unwrap();
        let app_id = six.get(16) as u16;
        let before = six.clone();
        let app = BinaryApplication::decode(app_id, &six).unwrap();
        assert_eq!(six, before);
        assert_eq!(
            app,
            BinaryApplication::Seaway(SeawayMessage::Version(seaway::Version { major: 4, minor: 0, spare: 0 }))
        );
    }

    #[test]
    fn test_read_available_stops_when_short() {
        let mut six = SixBit::from_armored("wwwww").unwrap();
        let values = read_available(&mut six, 12, 4, |s| s.get(12));
        assert_eq!(values, vec![4095, 4095]);
        assert_eq!(six.length(), 6);
    }
}
