use pkiregistry::{decode_snapshot, DecodeError};

const FULL_DOCUMENT: &str = r#"{
  "inClusterResourceData": {
    "certKeyPairs": [
      {
        "secretLocation": {"namespace": "ns2", "name": "serving-cert"},
        "certKeyInfo": {"owningComponent": "apiserver", "description": "serving"}
      },
      {
        "secretLocation": {"namespace": "ns1", "name": "signer"},
        "certKeyInfo": {"owningComponent": "controller-manager"}
      }
    ],
    "certificateAuthorityBundles": [
      {
        "configMapLocation": {"namespace": "ns1", "name": "trust-bundle"},
        "caBundleInfo": {"owningComponent": "network", "description": "trust roots"}
      }
    ]
  }
}"#;

#[test]
fn decodes_full_document_preserving_record_order() {
    let snapshot = decode_snapshot(FULL_DOCUMENT.as_bytes()).expect("decode full document");
    let certs = &snapshot.in_cluster_resource_data.cert_key_pairs;
    assert_eq!(certs.len(), 2);
    assert_eq!(certs[0].secret_location.namespace, "ns2");
    assert_eq!(certs[0].secret_location.name, "serving-cert");
    assert_eq!(certs[0].cert_key_info.owning_component, "apiserver");
    assert_eq!(certs[1].secret_location.namespace, "ns1");

    let bundles = &snapshot.in_cluster_resource_data.certificate_authority_bundles;
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].config_map_location.name, "trust-bundle");
    assert_eq!(bundles[0].ca_bundle_info.description, "trust roots");
}

#[test]
fn minimal_document_decodes_to_empty_snapshot() {
    let snapshot = decode_snapshot(b"{}").expect("decode empty document");
    assert!(snapshot.in_cluster_resource_data.cert_key_pairs.is_empty());
    assert!(snapshot
        .in_cluster_resource_data
        .certificate_authority_bundles
        .is_empty());
}

#[test]
fn malformed_document_fails() {
    let err = decode_snapshot(b"{ not json").expect_err("truncated document must fail");
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn type_mismatch_fails_without_partial_result() {
    let doc = br#"{"inClusterResourceData": {"certKeyPairs": {"namespace": "ns1"}}}"#;
    let err = decode_snapshot(doc).expect_err("object in place of list must fail");
    assert!(matches!(err, DecodeError::Malformed(_)));
}

#[test]
fn unknown_metadata_fields_survive_round_trip() {
    let doc = r#"{
      "inClusterResourceData": {
        "certKeyPairs": [
          {
            "secretLocation": {"namespace": "ns1", "name": "serving-cert"},
            "certKeyInfo": {
              "owningComponent": "apiserver",
              "autoRegenerateAfterOfflineExpiry": "https://example.invalid/policy"
            }
          }
        ]
      }
    }"#;
    let snapshot = decode_snapshot(doc.as_bytes()).expect("decode document with extra fields");
    let info = &snapshot.in_cluster_resource_data.cert_key_pairs[0].cert_key_info;
    assert!(info.extra.contains_key("autoRegenerateAfterOfflineExpiry"));

    let encoded = serde_json::to_string(&snapshot).expect("re-encode snapshot");
    assert!(encoded.contains("autoRegenerateAfterOfflineExpiry"));
}
