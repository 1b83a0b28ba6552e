use tracing::{debug, warn};

use crate::error::{DecodeError, VdmError};
use crate::messages::AisMessage;
use crate::nmea;
use crate::sixbit::SixBit;

/// AIS VDM/VDO Stream Reader
///
/// Stateful reassembler for `!AIVDM` / `!AIVDO` sentences. Single-sentence
/// messages complete immediately; multi-sentence messages are appended to one
/// 6-bit buffer until the last fragment arrives.
///
/// Fragments must arrive in order, with the same sequence id, channel and
/// fragment count. Anything else discards the partial message.
///
/// # Usage
///
/// ```
/// use aisparser::{VdmStatus, VdmStreamReader};
///
/// let mut reader = VdmStreamReader::new();
/// let status = reader.feed("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27\r\n").unwrap();
/// assert_eq!(status, VdmStatus::Complete);
///
/// let message = reader.message().unwrap();
/// assert_eq!(message.msgid(), 1);
/// assert_eq!(message.userid(), 636012431);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VdmStreamReader {
    six: SixBit,
    total: u32,
    num: u32,
    sequence: u32,
    channel: Option<char>,
}

/// Result of feeding one sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VdmStatus {
    /// A complete payload is available through [`VdmStreamReader::sixbit`]
    Complete,
    /// More fragments are needed
    Incomplete,
}

impl VdmStatus {
    /// 0 complete, 1 incomplete
    pub fn status_code(&self) -> u8 {
        match self {
            VdmStatus::Complete => 0,
            VdmStatus::Incomplete => 1,
        }
    }
}

impl VdmStreamReader {
    /// Create a new VDM stream reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one NMEA sentence into the reader
    ///
    /// # Arguments
    /// * `line` - A raw line; anything before the `!` or `$` marker is ignored
    ///
    /// # Returns
    /// `VdmStatus::Complete` when the payload is ready, `VdmStatus::Incomplete`
    /// when more fragments are needed, or the reason the sentence was rejected.
    /// Framing errors leave a partial message untouched.
    pub fn feed(&mut self, line: &str) -> Result<VdmStatus, VdmError> {
        let start = nmea::find_start(line).ok_or(VdmError::NotAis)?;
        let sentence = &line[start..];

        // Any talker, but only VDM or VDO
        if !matches!(sentence.get(3..6), Some("VDM") | Some("VDO")) {
            return Err(VdmError::NotAis);
        }

        if let Err(e) = nmea::verify_checksum(sentence) {
            debug!("Rejected sentence: {}", e);
            return Err(e);
        }

        let mut fields = nmea::fields(sentence).skip(1);
        let total = nmea::parse_uint(fields.next().ok_or(VdmError::Field("total"))?, "total")?;
        let num = nmea::parse_uint(fields.next().ok_or(VdmError::Field("number"))?, "number")?;
        let sequence = nmea::parse_uint(fields.next().ok_or(VdmError::Field("sequence"))?, "sequence")?;
        let channel = fields.next().ok_or(VdmError::Field("channel"))?.chars().next();
        let payload = fields.next().ok_or(VdmError::Field("payload"))?;
        let fill_bits = match fields.next() {
            Some(field) => nmea::parse_uint(field, "fill bits")?,
            None => 0,
        };

        if self.total > 0 {
            if self.sequence != sequence
                || self.channel != channel
                || self.total != total
                || num != self.num + 1
            {
                debug!(
                    "Discarding partial message: expected fragment {}/{} seq {} on {:?}, got {}/{} seq {} on {:?}",
                    self.num + 1,
                    self.total,
                    self.sequence,
                    self.channel,
                    num,
                    total,
                    sequence,
                    channel
                );
                self.reset();
                return Err(VdmError::OutOfSequence);
            }
            self.num = num;
        } else {
            // A new message must start with fragment 1
            if num != 1 {
                debug!("Fragment {}/{} without a first fragment", num, total);
                return Err(VdmError::OutOfSequence);
            }
            self.total = total;
            self.num = num;
            self.sequence = sequence;
            self.channel = channel;
            self.six.clear();
        }

        if let Err(e) = self.six.append(payload) {
            warn!("Discarding message payload: {}", e);
            self.reset();
            return Err(e.into());
        }

        if total == 0 || num == total {
            self.total = 0;
            self.num = 0;
            self.sequence = 0;
            self.channel = None;
            self.six.set_fill_bits(fill_bits.min(u32::from(u8::MAX)) as u8);
            return Ok(VdmStatus::Complete);
        }

        Ok(VdmStatus::Incomplete)
    }

    /// The assembled payload. Only meaningful after `VdmStatus::Complete`.
    pub fn sixbit(&self) -> &SixBit {
        &self.six
    }

    /// Decode the assembled payload from its start
    pub fn message(&self) -> Result<AisMessage, DecodeError> {
        let mut six = self.six.clone();
        six.init();
        AisMessage::from_sixbit(&mut six)
    }

    /// True while fragments of a multi-sentence message are pending
    pub fn in_progress(&self) -> bool {
        self.total > 0
    }

    /// Drop any partial message and the payload buffer
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(body: &str) -> String {
        let sum = body.bytes().fold(0u8, |acc, b| acc ^ b);
        format!("!{}*{:02X}\r\n", body, sum)
    }

    #[test]
    fn test_single_sentence() {
        let mut reader = VdmStreamReader::new();
        let status = reader.feed("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27\r\n");
        assert_eq!(status, Ok(VdmStatus::Complete));
        assert_eq!(reader.sixbit().as_str(), "19NS7Sp02wo?HETKA2K6mUM20<L=");
        assert_eq!(reader.sixbit().payload_bits(), 168);
        assert!(!reader.in_progress());
    }

    #[test]
    fn test_reassembly_sequence() {
        let mut reader = VdmStreamReader::new();
        let feed = |reader: &mut VdmStreamReader, line: &str| reader.feed(line);

        assert_eq!(
            feed(&mut reader, "!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27\r\n"),
            Ok(VdmStatus::Complete)
        );
        assert_eq!(reader.sixbit().as_str(), "19NS7Sp02wo?HETKA2K6mUM20<L=");

        assert_eq!(
            feed(&mut reader, "!AIVDM,2,1,9,A,55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H,0*49\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert!(reader.in_progress());
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,2,9,A,==40HtI4i@E531H1QDTVH51DSCS0,2*16\r\n"),
            Ok(VdmStatus::Complete)
        );
        assert_eq!(
            reader.sixbit().as_str(),
            "55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H==40HtI4i@E531H1QDTVH51DSCS0"
        );
        assert_eq!(reader.sixbit().fill_bits(), 2);

        // Second fragment missing
        assert_eq!(
            feed(&mut reader, "!AIVDM,3,1,4,B,53nFBv01SJ<thHp6220H4heHTf2222222222221?50:454o<`9QSlUDp,0*05\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert_eq!(
            feed(&mut reader, "!AIVDM,3,3,4,B,==40HtI4i@E531H1QDTVH51DSCS0,2*18\r\n"),
            Err(VdmError::OutOfSequence)
        );
        assert!(!reader.in_progress());

        // Sequence id changes between fragments
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,2,7,B,1@0000000000000,2*51\r\n"),
            Err(VdmError::OutOfSequence)
        );

        // No first fragment, other talker
        assert_eq!(
            feed(&mut reader, "!BSVDM,2,2,4,A,54SkDki@000,2*06\r\n"),
            Err(VdmError::OutOfSequence)
        );

        // Channel changes between fragments
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,1,9,A,55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H,0*49\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,2,9,B,==40HtI4i@E531H1QDTVH51DSCS0,2*15\r\n"),
            Err(VdmError::OutOfSequence)
        );

        // Fragment number repeats with a new sequence id
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert_eq!(
            feed(&mut reader, "!AIVDM,2,1,5,B,1@0000000000000,2*50\r\n"),
            Err(VdmError::OutOfSequence)
        );
    }

    #[test]
    fn test_total_must_match() {
        let mut reader = VdmStreamReader::new();
        assert_eq!(reader.feed(&sentence("AIVDM,2,1,1,A,55Mf@6P00001MUS,0")), Ok(VdmStatus::Incomplete));
        assert_eq!(reader.feed(&sentence("AIVDM,3,2,1,A,;7GQL4hh61L4hh,0")), Err(VdmError::OutOfSequence));
        assert!(!reader.in_progress());
    }

    #[test]
    fn test_checksum_rejection_keeps_partial_state() {
        let mut reader = VdmStreamReader::new();
        assert_eq!(
            reader.feed("!AIVDM,2,1,9,A,55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H,0*49\r\n"),
            Ok(VdmStatus::Incomplete)
        );
        assert_eq!(
            reader.feed("!AIVDM,2,2,9,A,==40HtI4i@E531H1QDTVH51DSCS0,2*17\r\n"),
            Err(VdmError::ChecksumMismatch { calculated: 0x16, found: 0x17 })
        );
        assert!(reader.in_progress());
        assert_eq!(
            reader.feed("!AIVDM,2,2,9,A,==40HtI4i@E531H1QDTVH51DSCS0,2*16\r\n"),
            Ok(VdmStatus::Complete)
        );
    }

    #[test]
    fn test_framing_errors() {
        let mut reader = VdmStreamReader::new();
        assert_eq!(reader.feed("no marker here"), Err(VdmError::NotAis));
        assert_eq!(reader.feed("$GPGGA,123519,4807.038,N*47"), Err(VdmError::NotAis));
        assert_eq!(reader.feed("!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0"), Err(VdmError::MissingChecksum));
        assert_eq!(reader.feed(&sentence("AIVDM,x,1,,B,19NS7Sp0,0")), Err(VdmError::Field("total")));
        assert_eq!(reader.feed(&sentence("AIVDM,1,1,,B")), Err(VdmError::Field("payload")));
        // Noise in front of the marker and an own-ship sentence
        assert_eq!(
            reader.feed(&format!("junk{}", sentence("AIVDO,1,1,,A,19NS7Sp02wo?HETKA2K6mUM20<L=,0"))),
            Ok(VdmStatus::Complete)
        );
        assert_eq!(VdmError::NotAis.status_code(), 3);
        assert_eq!(VdmError::OutOfSequence.status_code(), 5);
        assert_eq!(VdmStatus::Incomplete.status_code(), 1);
    }

    #[test]
    fn test_invalid_payload_discards_state() {
        let mut reader = VdmStreamReader::new();
        assert_eq!(reader.feed(&sentence("AIVDM,2,1,1,A,55Mf@6P00001MUS,0")), Ok(VdmStatus::Incomplete));
        assert_eq!(
            reader.feed(&sentence("AIVDM,2,2,1,A,;7GQ[4hh,0")),
            Err(VdmError::Payload(crate::sixbit::SixBitError::InvalidCharacter('[')))
        );
        assert!(!reader.in_progress());
        assert!(reader.sixbit().is_empty());
    }

    #[test]
    fn test_capacity_overflow() {
        let mut reader = VdmStreamReader::new();
        let chunk = "0".repeat(100);
        assert_eq!(reader.feed(&sentence(&format!("AIVDM,3,1,2,A,{},0", chunk))), Ok(VdmStatus::Incomplete));
        assert_eq!(reader.feed(&sentence(&format!("AIVDM,3,2,2,A,{},0", chunk))), Ok(VdmStatus::Incomplete));
        let result = reader.feed(&sentence(&format!("AIVDM,3,3,2,A,{},0", chunk)));
        assert_eq!(result, Err(VdmError::Payload(crate::sixbit::SixBitError::CapacityExceeded(300))));
        assert_eq!(result.unwrap_err().status_code(), 4);
        assert!(!reader.in_progress());
    }

    #[test]
    fn test_message_decodes_from_start() {
        let mut reader = VdmStreamReader::new();
        reader.feed("!AIVDM,2,1,9,A,55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H,0*49\r\n").unwrap();
        reader.feed("!AIVDM,2,2,9,A,==40HtI4i@E531H1QDTVH51DSCS0,2*16\r\n").unwrap();
        let first = reader.message().unwrap();
        let second = reader.message().unwrap();
        assert_eq!(first.msgid(), 5);
        assert_eq!(first.userid(), 366710810);
        assert_eq!(first, second);

        reader.reset();
        assert!(reader.sixbit().is_empty());
    }
}
