use config_types::is_mirror_pod;
use config_types::is_static_pod;
use k8s_openapi::api::core::v1::Container;
use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// Priority at or above which a pod counts as system-critical.
pub const SYSTEM_CRITICAL_PRIORITY: i32 = 2_000_000_000;

/// Priority class for pods that must keep running on their node.
pub const SYSTEM_NODE_CRITICAL: &str = "system-node-critical";

/// Restart policy value marking an init container as restartable.
const CONTAINER_RESTART_POLICY_ALWAYS: &str = "Always";

/// Criticality thresholds consulted by eviction and preemption decisions.
///
/// Injected into callers at construction rather than read from a
/// process-wide global, so deployments and tests can vary the thresholds.
/// [`PriorityPolicy::default`] matches the cluster scheduling constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityPolicy {
    /// Priority at or above which a pod is critical.
    #[serde(default = "default_system_critical_priority")]
    system_critical_priority: i32,
    /// Priority class name marking node-critical pods.
    #[serde(default = "default_node_critical_class")]
    node_critical_class: String,
}

fn default_system_critical_priority() -> i32 {
    SYSTEM_CRITICAL_PRIORITY
}

fn default_node_critical_class() -> String {
    SYSTEM_NODE_CRITICAL.to_string()
}

impl Default for PriorityPolicy {
    fn default() -> Self {
        Self {
            system_critical_priority: SYSTEM_CRITICAL_PRIORITY,
            node_critical_class: SYSTEM_NODE_CRITICAL.to_string(),
        }
    }
}

impl PriorityPolicy {
    pub fn new(system_critical_priority: i32, node_critical_class: impl Into<String>) -> Self {
        Self {
            system_critical_priority,
            node_critical_class: node_critical_class.into(),
        }
    }

    /// Whether a declared priority alone makes a pod critical.
    pub const fn is_critical_based_on_priority(&self, priority: i32) -> bool {
        priority >= self.system_critical_priority
    }

    /// Whether the pod is exempt from preemption under resource pressure.
    ///
    /// Static pods, mirror pods, and pods with a declared priority at or
    /// above the critical threshold are all critical. The checks run
    /// cheapest first and short-circuit.
    pub fn is_critical_pod(&self, pod: &Pod) -> bool {
        if is_static_pod(pod) {
            return true;
        }
        if is_mirror_pod(pod) {
            return true;
        }
        matches!(priority_of(pod), Some(priority) if self.is_critical_based_on_priority(priority))
    }

    /// Whether the pod is critical and carries the node-critical priority
    /// class.
    pub fn is_node_critical_pod(&self, pod: &Pod) -> bool {
        self.is_critical_pod(pod)
            && priority_class_of(pod) == Some(self.node_critical_class.as_str())
    }

    /// Whether `preemptor` may preempt `preemptee`.
    ///
    /// A critical pod may always preempt a non-critical one, regardless of
    /// numeric priority. Otherwise both pods must declare a numeric
    /// priority and the preemptor's must be strictly greater. Missing
    /// priority information never grants preemption rights.
    pub fn preemptable(&self, preemptor: &Pod, preemptee: &Pod) -> bool {
        if self.is_critical_pod(preemptor) && !self.is_critical_pod(preemptee) {
            debug!(
                preemptor = preemptor.metadata.name.as_deref().unwrap_or_default(),
                preemptee = preemptee.metadata.name.as_deref().unwrap_or_default(),
                "critical pod may preempt non-critical pod"
            );
            return true;
        }
        match (priority_of(preemptor), priority_of(preemptee)) {
            (Some(preemptor_priority), Some(preemptee_priority)) => {
                preemptor_priority > preemptee_priority
            }
            _ => false,
        }
    }
}

fn priority_of(pod: &Pod) -> Option<i32> {
    pod.spec.as_ref().and_then(|spec| spec.priority)
}

fn priority_class_of(pod: &Pod) -> Option<&str> {
    pod.spec
        .as_ref()
        .and_then(|spec| spec.priority_class_name.as_deref())
}

/// Whether an init container keeps restarting for the pod's lifetime (a
/// sidecar) rather than running to completion once. An absent restart
/// policy means not restartable.
pub fn is_restartable_init_container(init_container: &Container) -> bool {
    init_container
        .restart_policy
        .as_deref()
        .is_some_and(|policy| policy == CONTAINER_RESTART_POLICY_ALWAYS)
}
