use thiserror::Error;

use crate::sixbit::SixBitError;

/// Errors from feeding a sentence to the reassembler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VdmError {
    /// No `!`/`$` start marker, or the sentence is not VDM/VDO.
    #[error("not an AIS VDM/VDO sentence")]
    NotAis,
    /// The sentence does not end in `*` followed by two hex digits.
    #[error("sentence has no checksum")]
    MissingChecksum,
    /// Calculated and found checksums do not match.
    #[error("checksum mismatch: calculated {calculated:02X}, found {found:02X}")]
    ChecksumMismatch { calculated: u8, found: u8 },
    /// A field is missing or not a number.
    #[error("malformed {0} field")]
    Field(&'static str),
    /// The fragment does not continue the message being assembled.
    #[error("fragment out of sequence")]
    OutOfSequence,
    /// The payload could not be added to the 6-bit buffer.
    #[error("bad payload: {0}")]
    Payload(#[from] SixBitError),
}

impl VdmError {
    /// Numeric status code of this error: 2 checksum, 3 not AIS, 4 field, 5 sequence.
    pub fn status_code(&self) -> u8 {
        match self {
            VdmError::MissingChecksum | VdmError::ChecksumMismatch { .. } => 2,
            VdmError::NotAis => 3,
            VdmError::Field(_) | VdmError::Payload(_) => 4,
            VdmError::OutOfSequence => 5,
        }
    }
}

/// Errors from decoding a complete payload into a message record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The message id has no decoder. Not fatal; the caller may skip it.
    #[error("unknown message type {0}")]
    UnknownMessageType(u8),
    /// The payload length is not valid for the message type.
    #[error("message {msgid}: invalid payload length of {bits} bits")]
    Length { msgid: u8, bits: usize },
    /// A timetag needs 20 bits but fewer remain.
    #[error("timetag needs 20 bits, {0} remaining")]
    Timetag(usize),
    /// Message 24 part number is neither A (0) nor B (1).
    #[error("message 24 part number {0} is not A or B")]
    StaticDataPart(u8),
    /// A binary application payload is longer than 1008 bits.
    #[error("binary application payload of {0} bits is too long")]
    ApplicationLength(usize),
    /// No decoder for this DAC/FI (and application message id).
    #[error("no decoder for binary application dac {dac} fi {fi} id {id}")]
    UnknownApplication { dac: u16, fi: u8, id: u8 },
}
