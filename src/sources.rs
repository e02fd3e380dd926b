use crate::api::PkiRegistry;
use crate::registry::{ConflictError, RegistryBuilder};
use crate::snapshot::{decode_snapshot, DecodeError};
use include_dir::{include_dir, Dir};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Baseline snapshot documents baked into the binary at build time, one per
/// historical cluster configuration profile.
static BASELINE_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/baseline");

/// Errors surfaced while enumerating and folding snapshot sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to walk snapshot directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode snapshot {path}: {source}")]
    Decode { path: PathBuf, source: DecodeError },
    #[error(transparent)]
    Conflict(#[from] ConflictError),
}

/// How the fold reacts to a snapshot that fails to decode.
///
/// Conflicts abort the run under either policy; leniency only ever applies
/// to per-source decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Abort the run on the first undecodable source.
    Strict,
    /// Log and skip undecodable sources; used for the build-curated
    /// embedded set, where one bad entry should not block baseline loading.
    SkipMalformed,
}

/// Folds a finite, pre-enumerated set of labelled snapshot buffers through
/// decode and merge, then exports the registry.
pub fn registry_from_sources<I, B>(
    sources: I,
    policy: DecodePolicy,
) -> Result<PkiRegistry, SourceError>
where
    I: IntoIterator<Item = (String, B)>,
    B: AsRef<[u8]>,
{
    let mut builder = RegistryBuilder::new();
    for (label, bytes) in sources {
        let snapshot = match decode_snapshot(bytes.as_ref()) {
            Ok(snapshot) => snapshot,
            Err(source) => match policy {
                DecodePolicy::Strict => {
                    return Err(SourceError::Decode {
                        path: PathBuf::from(label),
                        source,
                    })
                }
                DecodePolicy::SkipMalformed => {
                    log::warn!("skipping undecodable snapshot {label}: {source}");
                    continue;
                }
            },
        };
        builder.merge_snapshot(&snapshot)?;
        log::debug!("merged snapshot {label}");
    }
    Ok(builder.build())
}

/// Aggregates every regular file under `dir` into a registry.
///
/// Strict: the first read, decode, or conflict failure aborts the run and
/// no partial registry is returned.
pub fn registry_from_dir(dir: impl AsRef<Path>) -> Result<PkiRegistry, SourceError> {
    let mut buffers = Vec::new();
    for entry in WalkDir::new(dir.as_ref()) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = fs::read(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        buffers.push((path.display().to_string(), bytes));
    }
    registry_from_sources(buffers, DecodePolicy::Strict)
}

/// Aggregates the embedded baseline set into a registry.
///
/// Lenient on decode (the set is curated at build time), still strict on
/// conflicts.
pub fn registry_from_embedded() -> Result<PkiRegistry, SourceError> {
    let files = BASELINE_DIR
        .files()
        .map(|file| (file.path().display().to_string(), file.contents()));
    registry_from_sources(files, DecodePolicy::SkipMalformed)
}
