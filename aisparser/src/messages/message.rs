use serde::Serialize;
use std::fmt;

use super::msg1::PositionReport;
use super::msg10::UtcInquiry;
use super::msg12::AddressedSafety;
use super::msg14::SafetyBroadcast;
use super::msg15::Interrogation;
use super::msg16::AssignedModeCommand;
use super::msg17::DgnssBroadcast;
use super::msg18::ClassBPosition;
use super::msg19::ClassBExtended;
use super::msg20::DataLinkManagement;
use super::msg21::AidToNavigation;
use super::msg22::ChannelManagement;
use super::msg23::GroupAssignment;
use super::msg24::StaticDataReport;
use super::msg27::LongRangePosition;
use super::msg4::BaseStationReport;
use super::msg5::StaticVoyageData;
use super::msg6::AddressedBinary;
use super::msg7::Acknowledge;
use super::msg8::BinaryBroadcast;
use super::msg9::SarAircraftPosition;
use crate::error::DecodeError;
use crate::position::Position;
use crate::sixbit::SixBit;

// Enum to hold any decoded message type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AisMessage {
    ScheduledPosition(PositionReport), // 1
    AssignedPosition(PositionReport),  // 2
    SpecialPosition(PositionReport),   // 3
    BaseStation(BaseStationReport),    // 4
    StaticVoyage(StaticVoyageData),
    AddressedBinary(AddressedBinary),
    BinaryAck(Acknowledge),
    BinaryBroadcast(BinaryBroadcast),
    SarAircraft(SarAircraftPosition),
    UtcInquiry(UtcInquiry),
    UtcResponse(BaseStationReport), // 11
    AddressedSafety(AddressedSafety),
    SafetyAck(Acknowledge), // 13
    SafetyBroadcast(SafetyBroadcast),
    Interrogation(Interrogation),
    AssignedMode(AssignedModeCommand),
    DgnssBroadcast(DgnssBroadcast),
    ClassBPosition(ClassBPosition),
    ClassBExtended(ClassBExtended),
    DataLinkManagement(DataLinkManagement),
    AidToNavigation(AidToNavigation),
    ChannelManagement(ChannelManagement),
    GroupAssignment(GroupAssignment),
    StaticData(StaticDataReport),
    LongRangePosition(LongRangePosition), // 27
}

impl AisMessage {
    /// Read the 6-bit message id and decode the rest of the payload.
    ///
    /// # Arguments
    /// * `six` - A complete payload with the cursor at its first bit
    ///
    /// # Returns
    /// The decoded message, `DecodeError::UnknownMessageType` for ids without a
    /// layout, or the decoder's error
    pub fn from_sixbit(six: &mut SixBit) -> Result<Self, DecodeError> {
        let msgid = six.get(6) as u8;
        match msgid {
            1 => PositionReport::from_sixbit(1, six).map(AisMessage::ScheduledPosition),
            2 => PositionReport::from_sixbit(2, six).map(AisMessage::AssignedPosition),
            3 => PositionReport::from_sixbit(3, six).map(AisMessage::SpecialPosition),
            4 => BaseStationReport::from_sixbit(4, six).map(AisMessage::BaseStation),
            5 => StaticVoyageData::from_sixbit(six).map(AisMessage::StaticVoyage),
            6 => AddressedBinary::from_sixbit(six).map(AisMessage::AddressedBinary),
            7 => Acknowledge::from_sixbit(7, six).map(AisMessage::BinaryAck),
            8 => BinaryBroadcast::from_sixbit(six).map(AisMessage::BinaryBroadcast),
            9 => SarAircraftPosition::from_sixbit(six).map(AisMessage::SarAircraft),
            10 => UtcInquiry::from_sixbit(six).map(AisMessage::UtcInquiry),
            11 => BaseStationReport::from_sixbit(11, six).map(AisMessage::UtcResponse),
            12 => AddressedSafety::from_sixbit(six).map(AisMessage::AddressedSafety),
            13 => Acknowledge::from_sixbit(13, six).map(AisMessage::SafetyAck),
            14 => SafetyBroadcast::from_sixbit(six).map(AisMessage::SafetyBroadcast),
            15 => Interrogation::from_sixbit(six).map(AisMessage::Interrogation),
            16 => AssignedModeCommand::from_sixbit(six).map(AisMessage::AssignedMode),
            17 => DgnssBroadcast::from_sixbit(six).map(AisMessage::DgnssBroadcast),
            18 => ClassBPosition::from_sixbit(six).map(AisMessage::ClassBPosition),
            19 => ClassBExtended::from_sixbit(six).map(AisMessage::ClassBExtended),
            20 => DataLinkManagement::from_sixbit(six).map(AisMessage::DataLinkManagement),
            21 => AidToNavigation::from_sixbit(six).map(AisMessage::AidToNavigation),
            22 => ChannelManagement::from_sixbit(six).map(AisMessage::ChannelManagement),
            23 => GroupAssignment::from_sixbit(six).map(AisMessage::GroupAssignment),
            24 => StaticDataReport::from_sixbit(six).map(AisMessage::StaticData),
            27 => LongRangePosition::from_sixbit(six).map(AisMessage::LongRangePosition),
            _ => Err(DecodeError::UnknownMessageType(msgid)),
        }
    }

    pub fn msgid(&self) -> u8 {
        match self {
            AisMessage::ScheduledPosition(m) | AisMessage::AssignedPosition(m) | AisMessage::SpecialPosition(m) => {
                m.msgid
            }
            AisMessage::BaseStation(m) | AisMessage::UtcResponse(m) => m.msgid,
            AisMessage::StaticVoyage(m) => m.msgid,
            AisMessage::AddressedBinary(m) => m.msgid,
            AisMessage::BinaryAck(m) | AisMessage::SafetyAck(m) => m.msgid,
            AisMessage::BinaryBroadcast(m) => m.msgid,
            AisMessage::SarAircraft(m) => m.msgid,
            AisMessage::UtcInquiry(m) => m.msgid,
            AisMessage::AddressedSafety(m) => m.msgid,
            AisMessage::SafetyBroadcast(m) => m.msgid,
            AisMessage::Interrogation(m) => m.msgid,
            AisMessage::AssignedMode(m) => m.msgid,
            AisMessage::DgnssBroadcast(m) => m.msgid,
            AisMessage::ClassBPosition(m) => m.msgid,
            AisMessage::ClassBExtended(m) => m.msgid,
            AisMessage::DataLinkManagement(m) => m.msgid,
            AisMessage::AidToNavigation(m) => m.msgid,
            AisMessage::ChannelManagement(m) => m.msgid,
            AisMessage::GroupAssignment(m) => m.msgid,
            AisMessage::StaticData(m) => m.msgid,
            AisMessage::LongRangePosition(m) => m.msgid,
        }
    }

    /// MMSI of the transmitting station
    pub fn userid(&self) -> u32 {
        match self {
            AisMessage::ScheduledPosition(m) | AisMessage::AssignedPosition(m) | AisMessage::SpecialPosition(m) => {
                m.userid
            }
            AisMessage::BaseStation(m) | AisMessage::UtcResponse(m) => m.userid,
            AisMessage::StaticVoyage(m) => m.userid,
            AisMessage::AddressedBinary(m) => m.userid,
            AisMessage::BinaryAck(m) | AisMessage::SafetyAck(m) => m.userid,
            AisMessage::BinaryBroadcast(m) => m.userid,
            AisMessage::SarAircraft(m) => m.userid,
            AisMessage::UtcInquiry(m) => m.userid,
            AisMessage::AddressedSafety(m) => m.userid,
            AisMessage::SafetyBroadcast(m) => m.userid,
            AisMessage::Interrogation(m) => m.userid,
            AisMessage::AssignedMode(m) => m.userid,
            AisMessage::DgnssBroadcast(m) => m.userid,
            AisMessage::ClassBPosition(m) => m.userid,
            AisMessage::ClassBExtended(m) => m.userid,
            AisMessage::DataLinkManagement(m) => m.userid,
            AisMessage::AidToNavigation(m) => m.userid,
            AisMessage::ChannelManagement(m) => m.userid,
            AisMessage::GroupAssignment(m) => m.userid,
            AisMessage::StaticData(m) => m.userid,
            AisMessage::LongRangePosition(m) => m.userid,
        }
    }

    /// Short name of the message kind, as used for the serialized variant
    pub fn name(&self) -> &'static str {
        match self {
            AisMessage::ScheduledPosition(_) => "scheduled_position",
            AisMessage::AssignedPosition(_) => "assigned_position",
            AisMessage::SpecialPosition(_) => "special_position",
            AisMessage::BaseStation(_) => "base_station",
            AisMessage::StaticVoyage(_) => "static_voyage",
            AisMessage::AddressedBinary(_) => "addressed_binary",
            AisMessage::BinaryAck(_) => "binary_ack",
            AisMessage::BinaryBroadcast(_) => "binary_broadcast",
            AisMessage::SarAircraft(_) => "sar_aircraft",
            AisMessage::UtcInquiry(_) => "utc_inquiry",
            AisMessage::UtcResponse(_) => "utc_response",
            AisMessage::AddressedSafety(_) => "addressed_safety",
            AisMessage::SafetyAck(_) => "safety_ack",
            AisMessage::SafetyBroadcast(_) => "safety_broadcast",
            AisMessage::Interrogation(_) => "interrogation",
            AisMessage::AssignedMode(_) => "assigned_mode",
            AisMessage::DgnssBroadcast(_) => "dgnss_broadcast",
            AisMessage::ClassBPosition(_) => "class_b_position",
            AisMessage::ClassBExtended(_) => "class_b_extended",
            AisMessage::DataLinkManagement(_) => "data_link_management",
            AisMessage::AidToNavigation(_) => "aid_to_navigation",
            AisMessage::ChannelManagement(_) => "channel_management",
            AisMessage::GroupAssignment(_) => "group_assignment",
            AisMessage::StaticData(_) => "static_data",
            AisMessage::LongRangePosition(_) => "long_range_position",
        }
    }

    /// Reported position, for the messages that carry one
    pub fn position(&self) -> Option<Position> {
        match self {
            AisMessage::ScheduledPosition(m) | AisMessage::AssignedPosition(m) | AisMessage::SpecialPosition(m) => {
                Some(m.position)
            }
            AisMessage::BaseStation(m) | AisMessage::UtcResponse(m) => Some(m.position),
            AisMessage::SarAircraft(m) => Some(m.position),
            AisMessage::DgnssBroadcast(m) => Some(m.position),
            AisMessage::ClassBPosition(m) => Some(m.position),
            AisMessage::ClassBExtended(m) => Some(m.position),
            AisMessage::AidToNavigation(m) => Some(m.position),
            AisMessage::LongRangePosition(m) => Some(m.position),
            _ => None,
        }
    }
}

impl fmt::Display for AisMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AisMessage::ScheduledPosition(msg)
            | AisMessage::AssignedPosition(msg)
            | AisMessage::SpecialPosition(msg) => write!(f, "{}", msg),
            AisMessage::BaseStation(msg) | AisMessage::UtcResponse(msg) => write!(f, "{}", msg),
            AisMessage::StaticVoyage(msg) => write!(f, "{}", msg),
            AisMessage::AddressedBinary(msg) => write!(f, "{}", msg),
            AisMessage::BinaryAck(msg) | AisMessage::SafetyAck(msg) => write!(f, "{}", msg),
            AisMessage::BinaryBroadcast(msg) => write!(f, "{}", msg),
            AisMessage::SarAircraft(msg) => write!(f, "{}", msg),
            AisMessage::UtcInquiry(msg) => write!(f, "{}", msg),
            AisMessage::AddressedSafety(msg) => write!(f, "{}", msg),
            AisMessage::SafetyBroadcast(msg) => write!(f, "{}", msg),
            AisMessage::Interrogation(msg) => write!(f, "{}", msg),
            AisMessage::AssignedMode(msg) => write!(f, "{}", msg),
            AisMessage::DgnssBroadcast(msg) => write!(f, "{}", msg),
            AisMessage::ClassBPosition(msg) => write!(f, "{}", msg),
            AisMessage::ClassBExtended(msg) => write!(f, "{}", msg),
            AisMessage::DataLinkManagement(msg) => write!(f, "{}", msg),
            AisMessage::AidToNavigation(msg) => write!(f, "{}", msg),
            AisMessage::ChannelManagement(msg) => write!(f, "{}", msg),
            AisMessage::GroupAssignment(msg) => write!(f, "{}", msg),
            AisMessage::StaticData(msg) => write!(f, "{}", msg),
            AisMessage::LongRangePosition(msg) => write!(f, "{}", msg),
        }
    }
}
