use std::collections::{HashMap, HashSet};
use tracing::info;

use aisparser::messages::StaticDataReport;
use aisparser::{AisMessage, MessageHandler};

/// Joins the A and B halves of Class B static data reports per station
///
/// Each station's halves are merged into one record. The first time a station
/// has both halves, the combined record is logged.
#[derive(Debug, Default)]
pub struct StaticDataTracker {
    reports: HashMap<u32, StaticDataReport>,
    announced: HashSet<u32>,
}

impl StaticDataTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merged static data of a station, complete or not
    pub fn get(&self, userid: u32) -> Option<&StaticDataReport> {
        self.reports.get(&userid)
    }

    /// Number of stations with both halves received
    pub fn complete_count(&self) -> usize {
        self.reports.values().filter(|r| r.is_complete()).count()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    fn update(&mut self, part: &StaticDataReport) {
        let report = self.reports.entry(part.userid).or_default();
        report.merge(part);

        if report.is_complete() && self.announced.insert(part.userid) {
            info!("Static data complete: {}", report);
        }
    }
}

impl MessageHandler for StaticDataTracker {
    fn handle_message(&mut self, message: &AisMessage) {
        if let AisMessage::StaticData(part) = message {
            self.update(part);
        }
    }
}
