use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::NamedTempFile;
use uuid::Uuid;

use super::SessionStore;
use crate::api::{ApiError, ApiResult};
use crate::session::Session;

/// One pretty-printed JSON file per session, written through a temp file and renamed
/// into place. Writers and deletes within a process are serialized by `write_lock`;
/// clones share it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn open(dir: impl Into<PathBuf>) -> ApiResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Only UUIDs map to files, so an id can never escape the store directory.
    fn path_for(&self, id: &str) -> ApiResult<PathBuf> {
        let uuid = Uuid::parse_str(id).map_err(|_| ApiError::NotFound(id.to_string()))?;
        Ok(self.dir.join(format!("{}.json", uuid.hyphenated())))
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| ApiError::Store("session store lock poisoned".to_string()))
    }

    fn read(&self, id: &str, path: &Path) -> ApiResult<Session> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ApiError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, session: &Session, path: &Path) -> ApiResult<()> {
        let tmp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, session)?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| ApiError::from(e.error))?;
        tracing::debug!(id = %session.id, path = %path.display(), "session saved");
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn save(&self, session: &Session) -> ApiResult<()> {
        let path = self.path_for(&session.id)?;
        let _guard = self.lock()?;
        self.write(session, &path)
    }

    fn load(&self, id: &str) -> ApiResult<Session> {
        let path = self.path_for(id)?;
        self.read(id, &path)
    }

    fn update(&self, id: &str, apply: &mut dyn FnMut(&mut Session)) -> ApiResult<Session> {
        let path = self.path_for(id)?;
        let _guard = self.lock()?;
        let mut session = self.read(id, &path)?;
        apply(&mut session);
        self.write(&session, &path)?;
        Ok(session)
    }

    fn delete(&self, id: &str) -> ApiResult<()> {
        let path = self.path_for(id)?;
        let _guard = self.lock()?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(id, "session deleted");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ApiError::NotFound(id.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}
