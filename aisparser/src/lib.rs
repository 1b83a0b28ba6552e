//! AIS Protocol Library
//!
//! Decodes AIS maritime tracking messages carried in NMEA 0183 `!AIVDM` and
//! `!AIVDO` sentences:
//! - 6-bit payload cursor with ITU armoring
//! - Multi-sentence reassembly with checksum and sequence checks
//! - Decoders for message types 1 to 24 and 27
//! - St. Lawrence Seaway, PAWSS and IMO binary applications carried by
//!   messages 6 and 8
//!
//! # Example
//!
//! ```
//! use aisparser::{AisMessage, VdmStatus, VdmStreamReader};
//!
//! let mut reader = VdmStreamReader::new();
//! let status = reader.feed("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27").unwrap();
//! assert_eq!(status, VdmStatus::Complete);
//!
//! if let Ok(AisMessage::ScheduledPosition(report)) = reader.message() {
//!     let (lat, lon) = report.position.to_degrees();
//!     println!("{} at {:.4}, {:.4}", report.userid, lat, lon);
//! }
//! ```

pub mod binary;
pub mod comm_state;
pub mod error;
pub mod message_handler;
pub mod messages;
pub mod nmea;
pub mod position;
pub mod sixbit;
pub mod stream_reader;
pub mod timetag;

// Re-export commonly used types
pub use binary::BinaryApplication;
pub use comm_state::CommState;
pub use error::{DecodeError, VdmError};
pub use message_handler::MessageHandler;
pub use messages::AisMessage;
pub use position::Position;
pub use sixbit::{SixBit, SixBitError};
pub use stream_reader::{VdmStatus, VdmStreamReader};
pub use timetag::Timetag;
