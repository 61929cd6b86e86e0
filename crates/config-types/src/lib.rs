//! Shared pod-configuration vocabulary for the node agent.
//!
//! Every configuration source (static manifest files, HTTP manifest
//! endpoints, the cluster API server) reports changes with the same message
//! contract, and every consumer classifies pods with the same derived
//! accessors.
//!
//! The main pieces are:
//! - [`PodUpdate`] and [`PodOperation`]: the change-operation stream contract
//! - [`validated_sources`]: validation of the source names a deployment declares
//! - [`pod_source`], [`is_mirror_pod`], [`is_static_pod`]: provenance classification
//! - [`SyncPodType`]: the per-pass sync intent label

pub mod error;
pub mod provenance;
pub mod source;
pub mod sync;
pub mod update;

pub use error::ConfigError;
pub use provenance::is_mirror_pod;
pub use provenance::is_static_pod;
pub use provenance::pod_config_hash;
pub use provenance::pod_first_seen;
pub use provenance::pod_source;
pub use provenance::CONFIG_FIRST_SEEN_ANNOTATION_KEY;
pub use provenance::CONFIG_HASH_ANNOTATION_KEY;
pub use provenance::CONFIG_MIRROR_ANNOTATION_KEY;
pub use provenance::CONFIG_SOURCE_ANNOTATION_KEY;
pub use source::validated_sources;
pub use source::ALL_SOURCE;
pub use source::API_SERVER_SOURCE;
pub use source::FILE_SOURCE;
pub use source::HTTP_SOURCE;
pub use sync::SyncPodType;
pub use update::PodOperation;
pub use update::PodUpdate;
