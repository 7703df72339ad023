//! Security advisory model and trait implementations.

use serde::{Deserialize, Serialize};

use crate::models::keys::AdvisoryKey;
use crate::path;
use crate::traits::Get;

/// A security advisory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    /// The OSV identifier of the advisory.
    #[serde(default)]
    pub advisory_key: AdvisoryKey,

    /// The URL of the advisory.
    #[serde(default)]
    pub url: String,

    /// A brief human-readable description.
    #[serde(default)]
    pub title: String,

    /// Other identifiers for the same vulnerability, e.g. CVE ids.
    #[serde(default)]
    pub aliases: Vec<String>,

    /// The CVSS v3 base score in `[0, 10]`.
    #[serde(default)]
    pub cvss3_score: f64,

    /// The CVSS v3 vector string.
    #[serde(default)]
    pub cvss3_vector: String,
}

/// Qualitative severity rating of a CVSS v3 base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::None => "NONE",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

impl Advisory {
    /// CVSS v3 severity band of the base score.
    pub fn severity(&self) -> Severity {
        match self.cvss3_score {
            s if s >= 9.0 => Severity::Critical,
            s if s >= 7.0 => Severity::High,
            s if s >= 4.0 => Severity::Medium,
            s if s > 0.0 => Severity::Low,
            _ => Severity::None,
        }
    }

    /// The CVE alias, if the advisory has one.
    pub fn cve(&self) -> Option<&str> {
        self.aliases
            .iter()
            .map(String::as_str)
            .find(|a| a.starts_with("CVE-"))
    }
}

impl Get for Advisory {
    type Id = AdvisoryKey;

    fn path(id: &AdvisoryKey) -> String {
        path::advisory(id)
    }
}
