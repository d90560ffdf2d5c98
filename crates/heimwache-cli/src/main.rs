//! CLI for heimwache.
//!
//! Reads one check result from stdin (or a file), loads the host's environment
//! metadata, and prints the derived alert fields as JSON or as a chat-style
//! text block. Delivering the result to a chat or log sink is the job of
//! whatever invoked this binary; one event in, one record out, then exit.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use heimwache_alerts::{AlertFields, StatusMap};
use heimwache_core::{CheckEvent, EnvironmentInfo, DEFAULT_ENVIRONMENT_FILE};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the environment metadata file
    #[arg(long, default_value = DEFAULT_ENVIRONMENT_FILE)]
    env_file: PathBuf,

    /// Read the check result from a file instead of stdin (simulation mode)
    #[arg(long)]
    input: Option<PathBuf>,

    /// JSON object overriding the status taxonomy (label -> code)
    #[arg(long)]
    status_map: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Append color and normalized check name to the text block
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutputFormat {
    Json,
    Text,
}

fn load_status_map(path: &Path) -> Result<StatusMap> {
    let file = File::open(path).with_context(|| format!("Failed to open status map {path:?}"))?;
    let statuses =
        serde_json::from_reader(file).with_context(|| format!("Failed to decode status map {path:?}"))?;
    Ok(statuses)
}

/// Renders the chat-style text block. `debug` is threaded through from the
/// command line; it appends the fields a human rarely needs but an operator
/// debugging a renderer does.
fn render_text(fields: &AlertFields, debug: bool) -> String {
    let mut lines = vec![
        format!(
            "{}{} - {}",
            fields.environment, fields.status, fields.event_name
        ),
        format!("Instance: {}", fields.instance),
        format!("Output: {}", fields.output),
        fields.thresholds.clone(),
        fields.playbook.clone(),
        fields.dashboard.clone(),
    ];
    if debug {
        lines.push(format!("Color: {}", fields.color));
        lines.push(format!("Check: {}", fields.check_name));
    }
    let mut block = lines.join("\n");
    block.push('\n');
    block
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env = EnvironmentInfo::from_file(&cli.env_file)
        .with_context(|| format!("Failed to load environment metadata from {:?}", cli.env_file))?;

    let statuses = match &cli.status_map {
        Some(path) => load_status_map(path)?,
        None => StatusMap::default(),
    };

    let event = match &cli.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file {path:?}"))?;
            CheckEvent::from_reader(file)
        }
        None => CheckEvent::from_stdin(),
    }
    .context("Failed to decode check result")?;

    let fields = AlertFields::derive(&event, &env, &statuses);

    match cli.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&fields).context("Failed to encode alert fields")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", render_text(&fields, cli.debug)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heimwache_core::{Check, Client, Thresholds};

    fn sample_fields() -> AlertFields {
        let event = CheckEvent {
            client: Client {
                name: "db1".to_string(),
            },
            check: Check {
                name: "disk-space".to_string(),
                source: String::new(),
                status: 2,
                output: "CheckDisk CRITICAL: / is 96% full".to_string(),
                thresholds: Thresholds {
                    warning: 80,
                    critical: 95,
                },
                playbook: String::new(),
            },
        };
        let env = EnvironmentInfo {
            environment: "prd".to_string(),
            consul: heimwache_core::ConsulInfo {
                tags: "ops".to_string(),
                datacenter: "dc1".to_string(),
            },
        };
        AlertFields::derive(&event, &env, &StatusMap::default())
    }

    #[test]
    fn test_render_text_block() {
        let block = render_text(&sample_fields(), false);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "Prod CRITICAL - db1_disk-space");
        assert_eq!(lines[1], "Instance: db1");
        assert_eq!(lines[2], "Output: CheckDisk CRITICAL");
        assert_eq!(lines[3], "Critical Threshold: 95");
        assert_eq!(lines[4], "No playbook is available");
        assert!(lines[5].contains("uchiwa.ops.service.dc1.consul"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_render_text_debug_appends_color_and_check() {
        let block = render_text(&sample_fields(), true);

        assert!(block.contains("Color: #FF0000"));
        assert!(block.contains("Check: disk.space"));
    }

    #[test]
    fn test_load_status_map_missing_file() {
        let res = load_status_map(Path::new("/nonexistent/status-map.json"));
        assert!(res.is_err());
    }
}
