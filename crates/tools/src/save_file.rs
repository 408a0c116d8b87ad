use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use seedworld::SavedSession;

use crate::APP_NAME;

pub const SAVE_FORMAT_VERSION: u32 = 1;

/// On-disk form of a saved session: the four persisted facts plus bookkeeping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    pub format_version: u32,
    #[serde(flatten)]
    pub session: SavedSession,
    /// Informational only; a load never trusts it.
    pub snapshot_hash_hex: String,
}

impl SaveFile {
    pub fn new(session: SavedSession, snapshot_hash: u64) -> Self {
        Self {
            format_version: SAVE_FORMAT_VERSION,
            session,
            snapshot_hash_hex: format!("0x{snapshot_hash:016x}"),
        }
    }

    pub fn get_default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("savefile.json");
            path
        })
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let save: Self = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        if save.format_version != SAVE_FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported save format version {}", save.format_version),
            ));
        }
        Ok(save)
    }

    /// `Ok(None)` when no save exists yet.
    pub fn load_if_present(path: &Path) -> io::Result<Option<Self>> {
        match Self::load(path) {
            Ok(save) => Ok(Some(save)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
