#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Alert field derivation.
//!
//! This crate turns a raw [`CheckEvent`] plus static [`EnvironmentInfo`]
//! into the presentation fields that alert renderers, log emitters and
//! dashboards consume: event names, status labels and colors, threshold
//! summaries, playbook links and dashboard URLs. It follows the principle:
//! **every function is pure and total over its input domain**. Unknown
//! status codes and missing optional fields resolve to documented fallback
//! labels, never to an error. The only fatal conditions in the whole
//! pipeline are the upstream decode failures in `heimwache-core`.

pub mod status;

pub use status::{status_color, StatusMap};

use heimwache_core::{CheckEvent, EnvironmentInfo, THRESHOLD_UNSET};
use serde::Serialize;

/// Stable event identifier for logging and search indexing: `client_check`.
///
/// Plain concatenation, no escaping; callers own the uniqueness of the
/// inputs.
#[must_use]
pub fn event_name(client: &str, check: &str) -> String {
    format!("{client}_{check}")
}

/// Rewrites a check name into a dotted hierarchy for search-engine field
/// indexing, e.g. `disk-usage-root` → `disk.usage.root`.
///
/// Lossy when the original name already contained periods.
#[must_use]
pub fn dotted_check_name(check: &str) -> String {
    check.replace('-', ".")
}

/// Shortens plugin output to the summary before the first `:`.
///
/// Relies on the `summary: details` convention of check plugins; output
/// without a colon passes through unchanged.
#[must_use]
pub fn clean_output(output: &str) -> &str {
    output.split(':').next().unwrap_or(output)
}

/// The device actually being monitored.
///
/// For SNMP trap collection, containers and appliance checks the host
/// running the agent is not the monitored entity; a non-empty
/// `check.source` takes priority over the reporting client.
#[must_use]
pub fn monitored_instance(event: &CheckEvent) -> &str {
    if event.check.source.is_empty() {
        &event.client.name
    } else {
        &event.check.source
    }
}

/// Display prefix for a deployment tier tag.
#[must_use]
pub fn environment_prefix(environment: &str) -> &'static str {
    match environment {
        "prd" => "Prod ",
        "dev" => "Dev ",
        "stg" => "Stg ",
        "vagrant" => "Vagrant ",
        _ => "Test ",
    }
}

/// Human-readable description of the configured thresholds, conditioned on
/// the current status.
///
/// For an OK result *both* thresholds must be configured before they are
/// reported; a warning threshold without a critical one still reads
/// `"No thresholds set"`. Downstream dashboards match on these exact
/// strings.
#[must_use]
pub fn threshold_summary(event: &CheckEvent) -> String {
    let warning = event.check.thresholds.warning;
    let critical = event.check.thresholds.critical;
    match event.check.status {
        0 => {
            if warning != THRESHOLD_UNSET && critical != THRESHOLD_UNSET {
                format!("Warning Threshold: {warning} Critical Threshold: {critical}")
            } else {
                "No thresholds set".to_string()
            }
        }
        1 => {
            if warning != THRESHOLD_UNSET {
                format!("Warning Threshold: {warning}")
            } else {
                "No WARNING threshold set".to_string()
            }
        }
        2 => {
            if critical != THRESHOLD_UNSET {
                format!("Critical Threshold: {critical}")
            } else {
                "No CRITICAL threshold set".to_string()
            }
        }
        3 => "No UNKNOWN threshold set".to_string(),
        _ => "No threshold information".to_string(),
    }
}

/// Link to the playbook for this check, in the `<url|label>` form chat
/// sinks render, or a fallback note when none is configured.
#[must_use]
pub fn playbook_link(event: &CheckEvent) -> String {
    if event.check.playbook.is_empty() {
        "No playbook is available".to_string()
    } else {
        format!("<{}|{} playbook>", event.check.playbook, event.check.name)
    }
}

/// Deep link into the per-datacenter Uchiwa dashboard for one host/check
/// pair, rendered as a `<url|display>` pair.
///
/// Component values are interpolated as-is; callers must pass URL-safe
/// values.
#[must_use]
pub fn dashboard_link(env: &EnvironmentInfo, host: &str, check: &str) -> String {
    let tags = &env.consul.tags;
    let datacenter = &env.consul.datacenter;
    format!(
        "<http://uchiwa.{tags}.service.{datacenter}.consul/#/client/{datacenter}/{host}?check={check}|{host}>"
    )
}

/// The full set of presentation fields derived from one check result.
///
/// This is the record alert renderers and log emitters consume. Deriving
/// it reads the event and the environment metadata, it never rewrites
/// them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlertFields {
    /// Stable `client_check` identifier.
    pub event_name: String,
    /// Dotted check name for field indexing.
    pub check_name: String,
    /// Status label resolved through the taxonomy.
    pub status: String,
    /// Attachment color for chat sinks.
    pub color: String,
    /// Deployment tier display prefix.
    pub environment: String,
    /// The monitored device (source override or reporting client).
    pub instance: String,
    /// Plugin output shortened to its summary.
    pub output: String,
    /// Threshold description for the current status.
    pub thresholds: String,
    /// Playbook link or fallback note.
    pub playbook: String,
    /// Uchiwa dashboard deep link.
    pub dashboard: String,
}

impl AlertFields {
    /// Derives every presentation field from one event.
    #[must_use]
    pub fn derive(event: &CheckEvent, env: &EnvironmentInfo, statuses: &StatusMap) -> Self {
        let instance = monitored_instance(event).to_string();
        Self {
            event_name: event_name(&event.client.name, &event.check.name),
            check_name: dotted_check_name(&event.check.name),
            status: statuses.label_for(event.check.status).to_string(),
            color: status_color(event.check.status).to_string(),
            environment: environment_prefix(&env.environment).to_string(),
            output: clean_output(&event.check.output).to_string(),
            thresholds: threshold_summary(event),
            playbook: playbook_link(event),
            dashboard: dashboard_link(env, &instance, &event.check.name),
            instance,
        }
    }
}
