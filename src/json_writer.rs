use std::io::Write;
use tracing::{debug, warn};

use aisparser::{AisMessage, MessageHandler};
use chrono::Utc;
use serde::Serialize;

/// Wrapper struct for serializing AIS messages to JSON
#[derive(Debug, Serialize)]
pub struct MessageEnvelope<'a> {
    /// Message kind, e.g. "class_b_position"
    pub message_type: &'static str,
    pub msgid: u8,
    /// MMSI of the transmitting station
    pub userid: u32,
    /// Time the message was decoded, RFC 3339
    pub received_at: String,
    /// Decoded message fields
    pub data: &'a AisMessage,
}

impl<'a> MessageEnvelope<'a> {
    pub fn new(message: &'a AisMessage) -> Self {
        Self {
            message_type: message.name(),
            msgid: message.msgid(),
            userid: message.userid(),
            received_at: Utc::now().to_rfc3339(),
            data: message,
        }
    }
}

/// JSON lines writer for AIS messages
///
/// Serializes each incoming message inside a [`MessageEnvelope`] and writes
/// it as one line to the configured output.
pub struct JsonWriter<W: Write> {
    out: W,
    error_count: u64,
    message_count: u64,
}

impl<W: Write> JsonWriter<W> {
    /// Create a new JSON writer
    ///
    /// # Arguments
    /// * `out` - Destination of the JSON lines (file, stdout, buffer)
    pub fn new(out: W) -> Self {
        Self {
            out,
            error_count: 0,
            message_count: 0,
        }
    }

    /// Serialize and write one message
    fn write_message(&mut self, message: &AisMessage) {
        let envelope = MessageEnvelope::new(message);

        let json = match serde_json::to_string(&envelope) {
            Ok(j) => j,
            Err(e) => {
                if self.error_count < 10 {
                    warn!("Failed to convert message to JSON: {}", e);
                }
                self.error_count += 1;
                return;
            }
        };

        match writeln!(self.out, "{}", json) {
            Ok(()) => {
                self.message_count += 1;
                if self.message_count % 1000 == 0 {
                    debug!("Wrote {} messages", self.message_count);
                }
            }
            Err(e) => {
                if self.error_count < 10 {
                    warn!("Failed to write message: {}", e);
                }
                self.error_count += 1;
            }
        }
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    /// Returns (message_count, error_count)
    pub fn stats(&self) -> (u64, u64) {
        (self.message_count, self.error_count)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MessageHandler for JsonWriter<W> {
    fn handle_message(&mut self, message: &AisMessage) {
        self.write_message(message);
    }
}
