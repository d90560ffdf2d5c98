//! Statische Umgebungs-Metadaten des Hosts.
//!
//! Die [`EnvironmentInfo`] wird genau einmal beim Prozessstart aus einer
//! JSON-Datei mit festem Pfad geladen und danach nur noch gelesen. Eine
//! fehlende oder defekte Datei ist ein fataler Startfehler; fehlende
//! einzelne Felder sind dagegen normal und dekodieren zu leeren Strings.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Standardpfad der Umgebungs-Datei, wie sie das Provisioning ablegt.
pub const DEFAULT_ENVIRONMENT_FILE: &str = "/etc/heimwache/environment.json";

/// Beschreibung der Umgebung, in der der meldende Host läuft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EnvironmentInfo {
    /// Deployment-Stufe: "prd", "dev", "stg", "vagrant" oder anderes.
    #[serde(default)]
    pub environment: String,
    /// Service-Discovery-Metadaten für Dashboard-Links.
    #[serde(default)]
    pub consul: ConsulInfo,
}

/// Consul-Metadaten des Hosts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConsulInfo {
    /// Tag-Segment des Dashboard-Hostnamens.
    #[serde(default)]
    pub tags: String,
    /// Datacenter, in dem der Host registriert ist.
    #[serde(default)]
    pub datacenter: String,
}

impl EnvironmentInfo {
    /// Dekodiert Umgebungs-Metadaten aus einem JSON-Dokument.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Lädt die Metadaten aus einer Datei.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Self::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn environment_info_from_json_fixture() {
        let json_data = json!({
            "environment": "prd",
            "consul": {"tags": "ops", "datacenter": "dc1"}
        });

        let env: EnvironmentInfo =
            serde_json::from_value(json_data).expect("Deserialization failed");
        assert_eq!(env.environment, "prd");
        assert_eq!(env.consul.tags, "ops");
        assert_eq!(env.consul.datacenter, "dc1");
    }

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let env = EnvironmentInfo::from_slice(b"{}").expect("decode failed");
        assert_eq!(env.environment, "");
        assert_eq!(env.consul.tags, "");
        assert_eq!(env.consul.datacenter, "");
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = EnvironmentInfo::from_file("/nonexistent/heimwache-env.json");
        assert!(err.is_err());
    }
}
