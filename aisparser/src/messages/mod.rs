pub mod message;
pub mod msg1;
pub mod msg4;
pub mod msg5;
pub mod msg6;
pub mod msg7;
pub mod msg8;
pub mod msg9;
pub mod msg10;
pub mod msg12;
pub mod msg14;
pub mod msg15;
pub mod msg16;
pub mod msg17;
pub mod msg18;
pub mod msg19;
pub mod msg20;
pub mod msg21;
pub mod msg22;
pub mod msg23;
pub mod msg24;
pub mod msg27;

use crate::error::DecodeError;
use crate::sixbit::SixBit;

// Re-export commonly used types
pub use message::AisMessage;
pub use msg1::PositionReport;
pub use msg4::BaseStationReport;
pub use msg5::StaticVoyageData;
pub use msg6::AddressedBinary;
pub use msg7::Acknowledge;
pub use msg8::BinaryBroadcast;
pub use msg9::SarAircraftPosition;
pub use msg10::UtcInquiry;
pub use msg12::AddressedSafety;
pub use msg14::SafetyBroadcast;
pub use msg15::Interrogation;
pub use msg16::AssignedModeCommand;
pub use msg17::DgnssBroadcast;
pub use msg18::ClassBPosition;
pub use msg19::ClassBExtended;
pub use msg20::DataLinkManagement;
pub use msg21::AidToNavigation;
pub use msg22::{ChannelArea, ChannelManagement};
pub use msg23::GroupAssignment;
pub use msg24::{StaticDataPart, StaticDataReport};
pub use msg27::LongRangePosition;

/// Armored payload size of the whole message, checked against an inclusive range
pub(crate) fn check_length(six: &SixBit, msgid: u8, min: usize, max: usize) -> Result<usize, DecodeError> {
    let bits = six.payload_bits();
    if bits < min || bits > max {
        return Err(DecodeError::Length { msgid, bits });
    }
    Ok(bits)
}

/// Text field with trailing `@` (6-bit zero) and space padding removed
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == '@' || c == ' ')
}

/// Cursor over an armored test payload with the message id already consumed
#[cfg(test)]
pub(crate) fn payload(armored: &str) -> SixBit {
    let mut six = SixBit::from_armored(armored).unwrap();
    six.get(6);
    six
}
