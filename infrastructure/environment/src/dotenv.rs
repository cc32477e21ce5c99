use std::path::{Path, PathBuf};

const ENV_FILE: &str = ".env";

/// Loads the nearest `.env` found in `dir` or one of its ancestors.
///
/// Variables already present in the process win over file values. A missing
/// file is not an error; a malformed one is logged and skipped.
pub fn load_dotenv(dir: &Path) -> Option<PathBuf> {
    let path = dir
        .ancestors()
        .map(|ancestor| ancestor.join(ENV_FILE))
        .find(|candidate| candidate.is_file())?;

    match dotenvy::from_path(&path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded environment file");
            Some(path)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not load environment file");
            None
        }
    }
}
