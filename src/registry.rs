use crate::api::{
    CaBundleEntry, CaBundleInfo, CertKeyInfo, CertKeyPairEntry, ConfigMapLocation, PkiRegistry,
    PkiSnapshot, SecretLocation,
};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use thiserror::Error;

/// Two snapshots assigned structurally different metadata to one location.
///
/// This is a correctness signal: either the collector produced inconsistent
/// data, or two unrelated resources were mapped to the same location key.
#[derive(Debug, Error)]
pub enum ConflictError {
    #[error("conflicting certificate metadata for secret {location}")]
    CertKeyPair {
        location: SecretLocation,
        existing: CertKeyInfo,
        incoming: CertKeyInfo,
    },
    #[error("conflicting CA bundle metadata for configmap {location}")]
    CaBundle {
        location: ConfigMapLocation,
        existing: CaBundleInfo,
        incoming: CaBundleInfo,
    },
}

/// Accumulator owned by a single merge run.
///
/// Created empty, fed one snapshot at a time, then consumed by
/// [`RegistryBuilder::build`]. The ordered maps make the export sort a
/// property of construction rather than a separate pass, so two runs over
/// any permutation of the same snapshot set export identically.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    certs: BTreeMap<SecretLocation, CertKeyInfo>,
    ca_bundles: BTreeMap<ConfigMapLocation, CaBundleInfo>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one snapshot's records into the accumulated mappings.
    ///
    /// Insert-if-absent, compare-if-present: a structurally equal repeat
    /// observation is absorbed, a differing one fails with the offending
    /// location and both values. Merging is therefore idempotent, and
    /// commutative over non-conflicting snapshots.
    pub fn merge_snapshot(&mut self, snapshot: &PkiSnapshot) -> Result<(), ConflictError> {
        for record in &snapshot.in_cluster_resource_data.cert_key_pairs {
            match self.certs.entry(record.secret_location.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record.cert_key_info.clone());
                }
                Entry::Occupied(slot) => {
                    if slot.get() != &record.cert_key_info {
                        return Err(ConflictError::CertKeyPair {
                            location: record.secret_location.clone(),
                            existing: slot.get().clone(),
                            incoming: record.cert_key_info.clone(),
                        });
                    }
                }
            }
        }
        for record in &snapshot.in_cluster_resource_data.certificate_authority_bundles {
            match self.ca_bundles.entry(record.config_map_location.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(record.ca_bundle_info.clone());
                }
                Entry::Occupied(slot) => {
                    if slot.get() != &record.ca_bundle_info {
                        return Err(ConflictError::CaBundle {
                            location: record.config_map_location.clone(),
                            existing: slot.get().clone(),
                            incoming: record.ca_bundle_info.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Exports the final registry. Pure and total: the mappings are
    /// well-formed by construction and iterate in (namespace, name) order.
    pub fn build(self) -> PkiRegistry {
        PkiRegistry {
            cert_key_pairs: self
                .certs
                .into_iter()
                .map(|(secret_location, cert_key_info)| CertKeyPairEntry {
                    secret_location,
                    cert_key_info,
                })
                .collect(),
            certificate_authority_bundles: self
                .ca_bundles
                .into_iter()
                .map(|(config_map_location, ca_bundle_info)| CaBundleEntry {
                    config_map_location,
                    ca_bundle_info,
                })
                .collect(),
        }
    }
}
