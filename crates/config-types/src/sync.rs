use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Why a reconciliation pass is happening for a pod.
///
/// A one-shot label chosen per pass for observability; it carries no state
/// and has no transitions. The rendered vocabulary is stable across readers
/// and writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncPodType {
    /// The pod is synced to ensure desired state.
    Sync,
    /// The pod is being updated from its source.
    Update,
    /// The pod is being created from its source.
    Create,
    /// The pod should have no running containers. A pod stopped this way
    /// may be restarted later by a configuration change.
    Kill,
    /// A label this reader does not recognize, written by a newer agent.
    Unknown,
}

impl SyncPodType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Update => "update",
            Self::Create => "create",
            Self::Kill => "kill",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SyncPodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unrecognized labels fall back to `Unknown` rather than failing, so a
// reader keeps working on label vocabularies written by newer agents.
impl<'de> Deserialize<'de> for SyncPodType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(match label.as_str() {
            "sync" => Self::Sync,
            "update" => Self::Update,
            "create" => Self::Create,
            "kill" => Self::Kill,
            _ => Self::Unknown,
        })
    }
}
