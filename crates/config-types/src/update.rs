use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;
use serde::Serialize;

/// What change a configuration source is reporting for its pods.
///
/// A single [`PodUpdate`] carries exactly one operation; the reconciliation
/// loop interprets it against the desired-state set attributed to the
/// update's source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PodOperation {
    /// Replace the entire desired-state set attributed to the source.
    Set,
    /// Pods that are new to this source.
    Add,
    /// Pods the source wants gracefully terminated.
    Delete,
    /// Pods dropped from desired state immediately.
    Remove,
    /// Pods whose configuration changed in this source.
    Update,
    /// The source believes live status diverged from what it expects and
    /// asks the consumer to re-derive status, not desired spec.
    Reconcile,
}

/// A configuration change reported by a single source.
///
/// `pods` is always a concrete vector, never an absent value: "no pods" is
/// the empty vector. Consumers compare updates structurally to detect real
/// changes, so an uninitialized pod list must be unrepresentable. To clear
/// the desired state for a source, send an empty `pods` with
/// [`PodOperation::Set`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodUpdate {
    pub pods: Vec<Pod>,
    pub op: PodOperation,
    pub source: String,
}

impl PodUpdate {
    pub fn new(pods: Vec<Pod>, op: PodOperation, source: impl Into<String>) -> Self {
        Self {
            pods,
            op,
            source: source.into(),
        }
    }

    /// Replace the source's entire desired-state set with `pods`.
    pub fn set(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Set, source)
    }

    /// Merge `pods` into the source's desired-state set as new entries.
    pub fn add(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Add, source)
    }

    /// Mark `pods` for graceful termination.
    pub fn delete(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Delete, source)
    }

    /// Drop `pods` from the source's desired state immediately.
    pub fn remove(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Remove, source)
    }

    /// Merge updated entries for `pods` into the source's desired state.
    pub fn update(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Update, source)
    }

    /// Ask the consumer to re-derive status for `pods`.
    pub fn reconcile(source: impl Into<String>, pods: Vec<Pod>) -> Self {
        Self::new(pods, PodOperation::Reconcile, source)
    }
}
