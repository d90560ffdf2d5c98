//! Status taxonomy: check exit codes to display labels and colors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fallback label for any code outside the taxonomy.
const UNKNOWN_LABEL: &str = "UNKNOWN";

const COLOR_OK: &str = "#33CC33";
const COLOR_WARNING: &str = "warning";
const COLOR_CRITICAL: &str = "#FF0000";
const COLOR_DEFAULT: &str = "#FF6600";

/// Mapping from status label to check exit code.
///
/// The default table covers the usual plugin exit codes plus the check
/// runner's own failure modes. It deserializes from a plain JSON object
/// (`{"OK": 0, ...}`) so a deployment can extend the taxonomy without a
/// code change. Lookup is total: a code nobody registered reads as
/// `UNKNOWN`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct StatusMap {
    labels: BTreeMap<String, i64>,
}

impl Default for StatusMap {
    fn default() -> Self {
        let mut labels = BTreeMap::new();
        labels.insert("OK".to_string(), 0);
        labels.insert("WARNING".to_string(), 1);
        labels.insert("CRITICAL".to_string(), 2);
        labels.insert("UNKNOWN".to_string(), 3);
        labels.insert("PERMISSION DENIED".to_string(), 126);
        labels.insert("CONFIG ERROR".to_string(), 127);
        Self { labels }
    }
}

impl StatusMap {
    /// Adds or replaces one label/code pair.
    pub fn insert(&mut self, label: impl Into<String>, code: i64) {
        self.labels.insert(label.into(), code);
    }

    /// The display label for a status code.
    ///
    /// Codes outside the taxonomy degrade to `UNKNOWN`; that is the normal
    /// steady state for plugins with exotic exit codes, not an error.
    #[must_use]
    pub fn label_for(&self, code: i64) -> &str {
        match self.labels.iter().find(|(_, &c)| c == code) {
            Some((label, _)) => label.as_str(),
            None => {
                #[cfg(feature = "telemetry")]
                tracing::warn!(code, "status code outside the taxonomy");
                UNKNOWN_LABEL
            }
        }
    }
}

/// The attachment color for a status code, as understood by chat sinks.
///
/// Everything that is neither OK, WARNING nor CRITICAL renders in the
/// default orange, including codes a [`StatusMap`] extension added.
#[must_use]
pub fn status_color(code: i64) -> &'static str {
    match code {
        0 => COLOR_OK,
        1 => COLOR_WARNING,
        2 => COLOR_CRITICAL,
        _ => COLOR_DEFAULT,
    }
}
