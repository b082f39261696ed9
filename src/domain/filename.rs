//! Auto-generated output filenames.

use std::path::Path;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use sha2::{Digest, Sha256};

use crate::domain::paths::PathError;

/// Number of hash characters in a generated filename.
const HASH_LEN: usize = 12;

/// Collision retries before giving up.
const MAX_ATTEMPTS: u32 = 16;

/// Generates collision-free `{yyyymmdd}_{hash}.md` output filenames.
#[derive(Debug, Default)]
pub struct FilenameHashGenerator;

impl FilenameHashGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a filename that does not already exist in `dir`.
    ///
    /// A collision with an existing file is retried with fresh hash material;
    /// duplicates are never accepted silently. Exhausting the retries is
    /// fatal. `dir` may not exist yet, in which case no collision is possible.
    pub fn generate(&self, dir: &Path) -> Result<String, PathError> {
        let date = Local::now().format("%Y%m%d");
        for attempt in 0..MAX_ATTEMPTS {
            let name = format!("{date}_{}.md", hash_fragment(attempt));
            if !dir.join(&name).exists() {
                return Ok(name);
            }
        }
        Err(PathError::FilenameCollisionExhausted {
            dir: dir.display().to_string(),
            attempts: MAX_ATTEMPTS,
        })
    }
}

fn hash_fragment(attempt: u32) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default();
    let seed = format!("{nanos}-{}-{attempt}", process::id());
    let digest = Sha256::digest(seed.as_bytes());
    format!("{digest:x}")[..HASH_LEN].to_string()
}
