use std::time::{Duration, Instant};
use tracing::info;

use aisparser::{DecodeError, VdmError};

/// Application-level counters for sentence handling and message decoding
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppMetrics {
    /// Number of input lines read
    pub lines: u64,
    /// Number of sentences accepted by the reassembler
    pub sentences: u64,
    /// Number of complete payloads assembled
    pub payloads: u64,
    /// Number of messages decoded
    pub messages: u64,
    pub checksum_errors: u64,
    pub sequence_errors: u64,
    /// Not AIS, bad fields and bad payload characters
    pub framing_errors: u64,
    pub decode_errors: u64,
    pub unknown_types: u64,
    /// Messages dropped by the configured filter
    pub filtered: u64,
}

impl AppMetrics {
    /// Create a new AppMetrics instance with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all counters to zero
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count a sentence the reassembler rejected
    pub fn record_vdm_error(&mut self, error: &VdmError) {
        match error {
            VdmError::MissingChecksum | VdmError::ChecksumMismatch { .. } => self.checksum_errors += 1,
            VdmError::OutOfSequence => self.sequence_errors += 1,
            VdmError::NotAis | VdmError::Field(_) | VdmError::Payload(_) => self.framing_errors += 1,
        }
    }

    /// Count a payload that did not decode
    pub fn record_decode_error(&mut self, error: &DecodeError) {
        match error {
            DecodeError::UnknownMessageType(_) => self.unknown_types += 1,
            _ => self.decode_errors += 1,
        }
    }

    /// Total rejected sentences and payloads
    pub fn errors(&self) -> u64 {
        self.checksum_errors + self.sequence_errors + self.framing_errors + self.decode_errors
    }

    /// Log current metrics to the info log
    pub fn log(&self) {
        info!(
            "[Metrics] Lines: {}, Sentences: {}, Payloads: {}, Messages: {}, Checksum errors: {}, Sequence errors: {}, Framing errors: {}, Decode errors: {}, Unknown types: {}, Filtered: {}",
            self.lines,
            self.sentences,
            self.payloads,
            self.messages,
            self.checksum_errors,
            self.sequence_errors,
            self.framing_errors,
            self.decode_errors,
            self.unknown_types,
            self.filtered
        );
    }
}

/// Manages periodic logging of application metrics
pub struct MetricsLogger {
    last_log: Instant,
    log_interval: Duration,
}

impl MetricsLogger {
    /// Create a new MetricsLogger with the specified logging interval
    pub fn new(log_interval: Duration) -> Self {
        Self {
            last_log: Instant::now(),
            log_interval,
        }
    }

    /// Check if it's time to log metrics, and if so, log them and reset
    /// Returns true if metrics were logged
    pub fn check_and_log(&mut self, metrics: &mut AppMetrics) -> bool {
        if self.last_log.elapsed() >= self.log_interval {
            metrics.log();
            metrics.reset();
            self.last_log = Instant::now();
            true
        } else {
            false
        }
    }
}
