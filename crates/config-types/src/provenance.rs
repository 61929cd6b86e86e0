use error_stack::Report;
use k8s_openapi::api::core::v1::Pod;

use crate::error::ConfigError;
use crate::source::API_SERVER_SOURCE;

/// Annotation recording which source a pod's configuration came from.
///
/// External writers stamping provenance must use these keys verbatim, or
/// classification stops working.
pub const CONFIG_SOURCE_ANNOTATION_KEY: &str = "kubernetes.io/config.source";
/// Annotation marking a pod as the API-visible mirror of a static pod.
pub const CONFIG_MIRROR_ANNOTATION_KEY: &str = "kubernetes.io/config.mirror";
/// Annotation recording when the agent first saw the pod's configuration.
pub const CONFIG_FIRST_SEEN_ANNOTATION_KEY: &str = "kubernetes.io/config.seen";
/// Annotation recording the hash of the pod configuration as last applied.
pub const CONFIG_HASH_ANNOTATION_KEY: &str = "kubernetes.io/config.hash";

fn annotation<'a>(pod: &'a Pod, key: &str) -> Option<&'a str> {
    pod.metadata
        .annotations
        .as_ref()
        .and_then(|annotations| annotations.get(key))
        .map(String::as_str)
}

/// Source of the pod's configuration, read from the provenance annotation.
///
/// # Errors
///
/// - [`ConfigError::SourceUnknown`] if the pod carries no source annotation
pub fn pod_source(pod: &Pod) -> Result<&str, Report<ConfigError>> {
    annotation(pod, CONFIG_SOURCE_ANNOTATION_KEY).ok_or_else(|| {
        Report::new(ConfigError::SourceUnknown {
            uid: pod.metadata.uid.clone().unwrap_or_default(),
        })
    })
}

/// Whether the pod is a mirror pod.
///
/// Presence of the mirror annotation is what matters; its value is ignored.
pub fn is_mirror_pod(pod: &Pod) -> bool {
    annotation(pod, CONFIG_MIRROR_ANNOTATION_KEY).is_some()
}

/// Whether the pod's configuration originates from a local source rather
/// than the cluster API server.
///
/// A pod whose source cannot be determined is never static. Callers that
/// need to distinguish "no provenance recorded" from a real non-static
/// classification should call [`pod_source`] and inspect the error state.
pub fn is_static_pod(pod: &Pod) -> bool {
    pod_source(pod).is_ok_and(|source| source != API_SERVER_SOURCE)
}

/// When the agent first saw this pod's configuration, if recorded.
pub fn pod_first_seen(pod: &Pod) -> Option<&str> {
    annotation(pod, CONFIG_FIRST_SEEN_ANNOTATION_KEY)
}

/// Hash of the pod configuration as last applied, if recorded.
pub fn pod_config_hash(pod: &Pod) -> Option<&str> {
    annotation(pod, CONFIG_HASH_ANNOTATION_KEY)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    use super::*;
    use crate::source::FILE_SOURCE;

    fn annotated_pod(annotations: &[(&str, &str)]) -> Pod {
        let annotations: BTreeMap<String, String> = annotations
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Pod {
            metadata: ObjectMeta {
                uid: Some("pod-uid-1".to_string()),
                annotations: Some(annotations),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn pod_source_reads_the_annotation() {
        let pod = annotated_pod(&[(CONFIG_SOURCE_ANNOTATION_KEY, FILE_SOURCE)]);
        assert_eq!(pod_source(&pod).unwrap(), FILE_SOURCE);
    }

    #[test]
    fn pod_source_fails_without_the_annotation() {
        let report = pod_source(&annotated_pod(&[])).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::SourceUnknown { uid } if uid == "pod-uid-1"
        ));
    }

    #[test]
    fn pod_source_fails_with_absent_annotation_map() {
        let pod = Pod::default();
        let report = pod_source(&pod).unwrap_err();
        assert!(matches!(
            report.current_context(),
            ConfigError::SourceUnknown { uid } if uid.is_empty()
        ));
    }

    #[test]
    fn mirror_annotation_presence_alone_marks_a_mirror_pod() {
        assert!(is_mirror_pod(&annotated_pod(&[(
            CONFIG_MIRROR_ANNOTATION_KEY,
            ""
        )])));
        assert!(is_mirror_pod(&annotated_pod(&[(
            CONFIG_MIRROR_ANNOTATION_KEY,
            "any value"
        )])));
        assert!(!is_mirror_pod(&annotated_pod(&[])));
        assert!(!is_mirror_pod(&Pod::default()));
    }

    #[test]
    fn local_sources_are_static() {
        let file = annotated_pod(&[(CONFIG_SOURCE_ANNOTATION_KEY, "file")]);
        let http = annotated_pod(&[(CONFIG_SOURCE_ANNOTATION_KEY, "http")]);
        assert!(is_static_pod(&file));
        assert!(is_static_pod(&http));
    }

    #[test]
    fn api_server_pods_are_not_static() {
        let pod = annotated_pod(&[(CONFIG_SOURCE_ANNOTATION_KEY, "api")]);
        assert!(!is_static_pod(&pod));
    }

    #[test]
    fn unknown_provenance_is_not_static() {
        assert!(!is_static_pod(&annotated_pod(&[])));
    }

    #[test]
    fn bookkeeping_annotations_are_optional() {
        let pod = annotated_pod(&[
            (CONFIG_FIRST_SEEN_ANNOTATION_KEY, "2024-01-01T00:00:00Z"),
            (CONFIG_HASH_ANNOTATION_KEY, "abc123"),
        ]);
        assert_eq!(pod_first_seen(&pod), Some("2024-01-01T00:00:00Z"));
        assert_eq!(pod_config_hash(&pod), Some("abc123"));

        assert_eq!(pod_first_seen(&Pod::default()), None);
        assert_eq!(pod_config_hash(&Pod::default()), None);
    }
}
