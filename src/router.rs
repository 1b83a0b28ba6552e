use std::io::Write;
use tracing::{debug, warn};

use aisparser::{MessageHandler, VdmStatus, VdmStreamReader};

use crate::app_metrics::AppMetrics;
use crate::config::Config;
use crate::json_writer::JsonWriter;
use crate::message_filter::should_process_message;
use crate::static_data_tracker::StaticDataTracker;

/// Only this many problems are logged at warn level, the rest at debug
const WARN_LIMIT: u64 = 10;

/// Line-by-line pipeline: reassemble, decode, filter, then hand each message
/// to the static data tracker and the JSON writer.
pub struct AisRouter<W: Write> {
    config: Config,
    reader: VdmStreamReader,
    tracker: StaticDataTracker,
    writer: JsonWriter<W>,
    pub metrics: AppMetrics,
    problems: u64,
}

impl<W: Write> AisRouter<W> {
    pub fn new(config: Config, out: W) -> Self {
        Self {
            config,
            reader: VdmStreamReader::new(),
            tracker: StaticDataTracker::new(),
            writer: JsonWriter::new(out),
            metrics: AppMetrics::new(),
            problems: 0,
        }
    }

    /// Process one input line
    pub fn process_line(&mut self, line: &str) {
        self.metrics.lines += 1;
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match self.reader.feed(line) {
            Ok(VdmStatus::Incomplete) => {
                self.metrics.sentences += 1;
            }
            Ok(VdmStatus::Complete) => {
                self.metrics.sentences += 1;
                self.metrics.payloads += 1;
                self.dispatch();
            }
            Err(e) => {
                self.metrics.record_vdm_error(&e);
                self.report(format!("Rejected sentence ({}): {} [{}]", e.status_code(), e, line));
            }
        }
    }

    fn dispatch(&mut self) {
        let message = match self.reader.message() {
            Ok(message) => message,
            Err(e) => {
                self.metrics.record_decode_error(&e);
                self.report(format!("Could not decode {}: {}", self.reader.sixbit().as_str(), e));
                return;
            }
        };
        self.metrics.messages += 1;
        debug!("Message {} from {}:\n{}", message.msgid(), message.userid(), message);

        if !should_process_message(&self.config, &message) {
            self.metrics.filtered += 1;
            return;
        }

        self.tracker.handle_message(&message);
        self.writer.handle_message(&message);
    }

    fn report(&mut self, problem: String) {
        if self.problems < WARN_LIMIT {
            warn!("{}", problem);
        } else {
            debug!("{}", problem);
        }
        self.problems += 1;
    }

    pub fn tracker(&self) -> &StaticDataTracker {
        &self.tracker
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Returns (written, write_errors) of the JSON output
    pub fn output_stats(&self) -> (u64, u64) {
        self.writer.stats()
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: [&str; 7] = [
        "!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*27",
        "!AIVDM,2,1,3,B,55Mf@6P00001MUS;7GQL4hh61L4hh6222222220t41H,0*40",
        "!AIVDM,2,2,3,B,==40HtI4i@E531H1QDTVH51DSCS0,2*1F",
        "!AIVDM,1,1,,A,H52IRsP518Tj0l59D0000000000,2*45",
        "!AIVDM,1,1,,A,H52IRsTU000000000000000@5120,0*76",
        "!AIVDM,1,1,,A,I00000,0*5F",
        "!AIVDM,1,1,,B,19NS7Sp02wo?HETKA2K6mUM20<L=,0*28",
    ];

    fn output_lines(router: AisRouter<Vec<u8>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(router.into_output()).unwrap();
        output.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
    }

    #[test]
    fn test_pipeline() {
        let mut router = AisRouter::new(Config::default(), Vec::new());
        for line in FEED {
            router.process_line(line);
        }
        router.process_line("");

        assert_eq!(router.metrics.lines, 8);
        assert_eq!(router.metrics.sentences, 6);
        assert_eq!(router.metrics.payloads, 5);
        assert_eq!(router.metrics.messages, 4);
        assert_eq!(router.metrics.unknown_types, 1);
        assert_eq!(router.metrics.checksum_errors, 1);
        assert_eq!(router.tracker().complete_count(), 1);
        assert_eq!(router.output_stats(), (4, 0));

        let lines = output_lines(router);
        let types: Vec<u64> = lines.iter().map(|v| v["msgid"].as_u64().unwrap()).collect();
        assert_eq!(types, vec![1, 5, 24, 24]);
        assert_eq!(lines[1]["data"]["static_voyage"]["name"], "WALLA WALLA         ");
    }

    #[test]
    fn test_filter() {
        let mut config = Config::default();
        config.filter.message_types.insert(24);
        let mut router = AisRouter::new(config, Vec::new());
        for line in FEED {
            router.process_line(line);
        }

        assert_eq!(router.metrics.filtered, 2);
        // filtered messages never reach the tracker
        assert_eq!(router.tracker().complete_count(), 1);
        let lines = output_lines(router);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|v| v["message_type"] == "static_data"));
    }

    #[test]
    fn test_out_of_sequence() {
        let mut router = AisRouter::new(Config::default(), Vec::new());
        router.process_line("!AIVDM,2,2,4,B,==40HtI4i@E531H1QDTVH51DSCS0,2*18");
        router.process_line("not a sentence");
        assert_eq!(router.metrics.sequence_errors, 1);
        assert_eq!(router.metrics.framing_errors, 1);
        assert_eq!(router.metrics.messages, 0);
    }
}
