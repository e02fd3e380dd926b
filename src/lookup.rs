use crate::api::{CaBundleEntry, CertKeyPairEntry, ConfigMapLocation, SecretLocation};

/// Locates a certificate/key pair by location in a registry's sorted
/// certificate list. Binary search; only meaningful over the sorted slices
/// exported by [`crate::registry::RegistryBuilder::build`].
pub fn locate_cert_key_pair<'a>(
    location: &SecretLocation,
    entries: &'a [CertKeyPairEntry],
) -> Option<&'a CertKeyPairEntry> {
    entries
        .binary_search_by(|entry| entry.secret_location.cmp(location))
        .ok()
        .map(|idx| &entries[idx])
}

/// Locates a CA bundle by location in a registry's sorted bundle list.
pub fn locate_ca_bundle<'a>(
    location: &ConfigMapLocation,
    entries: &'a [CaBundleEntry],
) -> Option<&'a CaBundleEntry> {
    entries
        .binary_search_by(|entry| entry.config_map_location.cmp(location))
        .ok()
        .map(|idx| &entries[idx])
}
