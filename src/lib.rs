//! PKI registry aggregation engine.
//!
//! Ingests independently gathered snapshots of cluster TLS certificate and
//! CA-bundle metadata, merges them into a single registry keyed by resource
//! location while rejecting conflicting observations, and exports the result
//! fully sorted so serialization is byte-stable and diffable against the
//! embedded baseline.

pub mod api;
pub mod app;
pub mod lookup;
pub mod registry;
pub mod report;
pub mod snapshot;
pub mod sources;

pub use api::{
    CaBundleEntry, CaBundleInfo, CertIdentifier, CertKeyInfo, CertKeyPairEntry, CertMetadata,
    ConfigMapLocation, InClusterResourceData, LogicalCaBundle, LogicalCaBundleList,
    LogicalCaBundleSpec, PkiRegistry, PkiSnapshot, SecretLocation,
};
pub use lookup::{locate_ca_bundle, locate_cert_key_pair};
pub use registry::{ConflictError, RegistryBuilder};
pub use report::{
    artifact_filename, compare_snapshot, prune_system_trust, ComparisonReport, SYNTHETIC_PROXY_CA,
    SYSTEM_TRUST_PRUNE_THRESHOLD,
};
pub use snapshot::{decode_snapshot, DecodeError};
pub use sources::{
    registry_from_dir, registry_from_embedded, registry_from_sources, DecodePolicy, SourceError,
};
