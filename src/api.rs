use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Storage location of a certificate/key pair inside the cluster.
///
/// The derived ordering (namespace first, then name) is the canonical sort
/// order of the exported registry.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct SecretLocation {
    pub namespace: String,
    pub name: String,
}

impl SecretLocation {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for SecretLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Storage location of a CA bundle inside the cluster.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapLocation {
    pub namespace: String,
    pub name: String,
}

impl ConfigMapLocation {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ConfigMapLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Opaque metadata describing a certificate/key pair.
///
/// Fields beyond the known ones are retained verbatim so documents produced
/// by newer collaborator schemas survive a decode/encode round trip. The
/// merge invariant only requires full structural equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertKeyInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owning_component: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Opaque metadata describing a CA bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaBundleInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owning_component: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One certificate/secret record, as observed in a snapshot and as exported
/// in the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertKeyPairEntry {
    pub secret_location: SecretLocation,
    #[serde(default)]
    pub cert_key_info: CertKeyInfo,
}

/// One CA-bundle/configmap record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaBundleEntry {
    pub config_map_location: ConfigMapLocation,
    #[serde(default)]
    pub ca_bundle_info: CaBundleInfo,
}

/// The registry-relevant payload of one snapshot document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InClusterResourceData {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cert_key_pairs: Vec<CertKeyPairEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_authority_bundles: Vec<CaBundleEntry>,
}

/// Identifies one certificate within a logical bundle's metadata list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertIdentifier {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub common_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub serial_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Box<CertIdentifier>>,
}

/// Per-certificate metadata carried by a logical CA bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertMetadata {
    #[serde(default)]
    pub cert_identifier: CertIdentifier,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalCaBundleSpec {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_metadata: Vec<CertMetadata>,
}

/// A logical CA bundle as gathered by the upstream cert-graph collaborator.
/// Only consumed by the artifact-pruning path; the registry itself is built
/// from [`InClusterResourceData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalCaBundle {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub logical_name: String,
    #[serde(default)]
    pub spec: LogicalCaBundleSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalCaBundleList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LogicalCaBundle>,
}

impl LogicalCaBundleList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One decoded snapshot document. Field order within the record lists is
/// preserved from the document but carries no semantic weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkiSnapshot {
    #[serde(default)]
    pub in_cluster_resource_data: InClusterResourceData,
    #[serde(default, skip_serializing_if = "LogicalCaBundleList::is_empty")]
    pub certificate_authority_bundles: LogicalCaBundleList,
}

/// The merge result: both record lists sorted by (namespace, name), with no
/// duplicate locations. Immutable once produced; serializes byte-stably for
/// any ingestion order of the same snapshot set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PkiRegistry {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cert_key_pairs: Vec<CertKeyPairEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub certificate_authority_bundles: Vec<CaBundleEntry>,
}
