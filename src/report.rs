use crate::api::{
    CertIdentifier, CertMetadata, ConfigMapLocation, PkiRegistry, PkiSnapshot, SecretLocation,
};
use crate::lookup::{locate_ca_bundle, locate_cert_key_pair};

/// Logical bundles with more metadata entries than this get collapsed by
/// [`prune_system_trust`].
pub const SYSTEM_TRUST_PRUNE_THRESHOLD: usize = 10;

/// Common name of the placeholder entry left behind by pruning.
pub const SYNTHETIC_PROXY_CA: &str = "synthetic-proxy-ca";

/// Findings from comparing a live snapshot against a baseline registry.
///
/// Findings accumulate rather than failing fast, so one run surfaces the
/// complete set of discrepancies. Whether any finding is fatal is the
/// caller's policy decision.
#[derive(Debug, Clone, Default)]
pub struct ComparisonReport {
    pub mismatches: Vec<String>,
    pub unregistered_secrets: Vec<SecretLocation>,
    pub unregistered_config_maps: Vec<ConfigMapLocation>,
}

impl ComparisonReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
            && self.unregistered_secrets.is_empty()
            && self.unregistered_config_maps.is_empty()
    }

    /// Renders every finding as one newline-joined human-readable block.
    pub fn render(&self) -> String {
        let mut lines = self.mismatches.clone();
        for location in &self.unregistered_secrets {
            lines.push(format!(
                "Unregistered TLS artifact: --namespace={}, secret/{}",
                location.namespace, location.name
            ));
        }
        for location in &self.unregistered_config_maps {
            lines.push(format!(
                "Unregistered TLS artifact: --namespace={}, configmap/{}",
                location.namespace, location.name
            ));
        }
        lines.join("\n")
    }
}

/// Checks every live record against the baseline registry.
///
/// A location missing from the baseline is an unregistered artifact (soft
/// finding); a present location whose metadata differs structurally is a
/// mismatch.
pub fn compare_snapshot(live: &PkiSnapshot, baseline: &PkiRegistry) -> ComparisonReport {
    let mut report = ComparisonReport::default();

    for record in &live.in_cluster_resource_data.cert_key_pairs {
        let location = &record.secret_location;
        match locate_cert_key_pair(location, &baseline.cert_key_pairs) {
            None => report.unregistered_secrets.push(location.clone()),
            Some(registered) if registered.cert_key_info != record.cert_key_info => {
                report.mismatches.push(format!(
                    "--namespace={}, secret/{}: certificate metadata differs from the registered baseline",
                    location.namespace, location.name
                ));
            }
            Some(_) => {}
        }
    }

    for record in &live.in_cluster_resource_data.certificate_authority_bundles {
        let location = &record.config_map_location;
        match locate_ca_bundle(location, &baseline.certificate_authority_bundles) {
            None => report.unregistered_config_maps.push(location.clone()),
            Some(registered) if registered.ca_bundle_info != record.ca_bundle_info => {
                report.mismatches.push(format!(
                    "--namespace={}, configmap/{}: CA bundle metadata differs from the registered baseline",
                    location.namespace, location.name
                ));
            }
            Some(_) => {}
        }
    }

    report
}

/// Collapses an oversized `proxy-ca` logical bundle down to one synthetic
/// placeholder entry. The system trust store carries hundreds of third-party
/// roots that drown out the cluster's own certificates in serialized
/// artifacts.
pub fn prune_system_trust(snapshot: &mut PkiSnapshot) {
    for bundle in &mut snapshot.certificate_authority_bundles.items {
        if bundle.logical_name != "proxy-ca" {
            continue;
        }
        if bundle.spec.certificate_metadata.len() <= SYSTEM_TRUST_PRUNE_THRESHOLD {
            continue;
        }
        bundle.name = "proxy-ca".to_string();
        bundle.spec.certificate_metadata = vec![CertMetadata {
            cert_identifier: CertIdentifier {
                common_name: SYNTHETIC_PROXY_CA.to_string(),
                serial_number: "0".to_string(),
                issuer: None,
            },
            ..CertMetadata::default()
        }];
        return;
    }
}

/// Per-run artifact file name, keyed by cluster topology, architecture,
/// platform, and network type.
pub fn artifact_filename(
    topology: &str,
    architecture: &str,
    platform: &str,
    network: &str,
) -> String {
    format!("raw-tls-artifacts-{topology}-{architecture}-{platform}-{network}.json")
}
