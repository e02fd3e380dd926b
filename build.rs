use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct BaselineDocument {
    #[serde(default)]
    in_cluster_resource_data: serde_json::Map<String, serde_json::Value>,
}

// The baseline set is curated by hand; catch a malformed document at build
// time instead of silently skipping it when the embedded enumerator runs.
fn main() -> Result<(), Box<dyn Error>> {
    let baseline_dir = PathBuf::from("baseline");
    println!("cargo:rerun-if-changed={}", baseline_dir.display());

    for entry in fs::read_dir(&baseline_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        println!("cargo:rerun-if-changed={}", path.display());
        let payload = fs::read_to_string(&path)?;
        serde_json::from_str::<BaselineDocument>(&payload)
            .map_err(|err| format!("baseline document {} is malformed: {err}", path.display()))?;
    }

    Ok(())
}
