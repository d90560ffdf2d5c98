//! Datenstrukturen für Check-Ergebnisse, wie sie ein host-basierter
//! Check-Runner meldet.
//!
//! Dieses Modul definiert das [`CheckEvent`], das als standardisiertes
//! Austauschformat für Monitoring-Ergebnisse dient. Ein Event wird genau
//! einmal pro Aufruf gelesen (üblicherweise von stdin) und ist danach
//! unveränderlich; alle Ableitungen erzeugen neue Werte, statt das Event
//! umzuschreiben.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Sentinel für "kein Schwellwert konfiguriert".
pub const THRESHOLD_UNSET: i64 = -1;

/// Das Ergebnis einer einzelnen Check-Ausführung: der meldende Client plus
/// das Resultat der Check-Definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckEvent {
    /// Der Agent, der den Check ausgeführt und gemeldet hat.
    pub client: Client,
    /// Resultat und Metadaten der Check-Definition.
    pub check: Check,
}

/// Der meldende Host bzw. Agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    /// Name der Maschine, auf der der Check lief.
    pub name: String,
}

/// Resultat einer Check-Definition inklusive Schwellwerten und Runbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Check {
    /// Name der Check-Definition (z. B. "disk-usage-root").
    pub name: String,
    /// Das tatsächlich überwachte Gerät, falls es vom meldenden Client
    /// abweicht (SNMP-Traps, Container, Appliances). Leer, wenn identisch.
    #[serde(default)]
    pub source: String,
    /// Exit-Code des Checks. Codes außerhalb der Taxonomie werden
    /// downstream als UNKNOWN dargestellt, nie als Fehler.
    pub status: i64,
    /// Freitext-Ausgabe des Check-Plugins, üblicherweise in der Form
    /// "Zusammenfassung: Details".
    #[serde(default)]
    pub output: String,
    /// Konfigurierte Schwellwerte; `-1` bedeutet "nicht gesetzt".
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Optionaler Verweis auf die Runbook-Dokumentation.
    #[serde(default)]
    pub playbook: String,
}

/// Warn- und Kritisch-Schwellwerte eines Checks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Thresholds {
    /// Warn-Schwellwert oder [`THRESHOLD_UNSET`].
    #[serde(default = "unset")]
    pub warning: i64,
    /// Kritisch-Schwellwert oder [`THRESHOLD_UNSET`].
    #[serde(default = "unset")]
    pub critical: i64,
}

fn unset() -> i64 {
    THRESHOLD_UNSET
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: THRESHOLD_UNSET,
            critical: THRESHOLD_UNSET,
        }
    }
}

impl CheckEvent {
    /// Dekodiert ein Event aus einem JSON-Dokument.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Liest einen Reader vollständig und dekodiert das JSON-Dokument.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(serde_json::from_str(&buf)?)
    }

    /// Liest genau ein Event von stdin.
    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(std::io::stdin().lock())
    }
}
