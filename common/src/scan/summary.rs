use serde::{Deserialize, Serialize};

use crate::scan::target::ScanTarget;

/// Descriptor written next to the scanner's XML report.
///
/// Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub scanned: ScanTarget,
    pub xml_file: String,
}

impl ScanSummary {
    pub fn new(scanned: ScanTarget, xml_file: impl Into<String>) -> Self {
        Self {
            scanned,
            xml_file: xml_file.into(),
        }
    }

    /// Two-space indented JSON without a trailing newline.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
