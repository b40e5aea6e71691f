//! The release record data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a release record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Unknown,
    Deployed,
    Superseded,
    Failed,
    Uninstalled,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Unknown => "unknown",
            Status::Deployed => "deployed",
            Status::Superseded => "superseded",
            Status::Failed => "failed",
            Status::Uninstalled => "uninstalled",
        };
        write!(f, "{}", s)
    }
}

/// Status, description, and deployment timestamps of a release record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_deployed: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_deployed: Option<DateTime<Utc>>,
}

/// ReleaseRecord is a named, versioned snapshot of a deployed application's
/// manifest and status.
///
/// `version` is a positive integer, monotonically increasing per release
/// name. A patch replaces the `manifest` string in place; the version number
/// does not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    pub version: u32,

    /// Chart reference recorded at install or adoption time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<String>,

    #[serde(default)]
    pub manifest: String,

    #[serde(default)]
    pub info: ReleaseInfo,
}

impl ReleaseRecord {
    /// Creates a record with an empty manifest and status `Unknown`.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, version: u32) -> Self {
        ReleaseRecord {
            name: name.into(),
            namespace: namespace.into(),
            version,
            chart: None,
            manifest: String::new(),
            info: ReleaseInfo::default(),
        }
    }

    /// Sets the status and description, stamping the deployment timestamps.
    pub fn set_status(&mut self, status: Status, description: impl Into<String>) {
        let now = Utc::now();
        if self.info.first_deployed.is_none() {
            self.info.first_deployed = Some(now);
        }
        self.info.last_deployed = Some(now);
        self.info.status = status;
        self.info.description = description.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_record_defaults() {
        let rec = ReleaseRecord::new("app", "default", 1);
        assert_eq!(rec.info.status, Status::Unknown);
        assert_eq!(rec.manifest, "");
        assert_eq!(rec.info.first_deployed, None);
    }

    #[test]
    fn test_set_status_stamps_timestamps() {
        let mut rec = ReleaseRecord::new("app", "default", 1);
        rec.set_status(Status::Deployed, "Adoption complete");
        assert_eq!(rec.info.status, Status::Deployed);
        assert_eq!(rec.info.description, "Adoption complete");
        assert!(rec.info.first_deployed.is_some());
        assert_eq!(rec.info.first_deployed, rec.info.last_deployed);

        let first = rec.info.first_deployed;
        rec.set_status(Status::Superseded, "upgraded");
        assert_eq!(rec.info.first_deployed, first);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut rec = ReleaseRecord::new("app", "prod", 3);
        rec.chart = Some("app-1.2.0".into());
        rec.manifest = "---\nkind: Service\n".into();
        rec.set_status(Status::Deployed, "install complete");

        let yaml = serde_yaml::to_string(&rec).unwrap();
        let parsed: ReleaseRecord = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(rec, parsed);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let yaml = serde_yaml::to_string(&Status::Deployed).unwrap();
        assert_eq!(yaml.trim(), "deployed");
    }
}
