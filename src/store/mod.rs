//! Session persistence. Stores replace and remove whole sessions, so a read racing a
//! delete sees either the complete session or `NotFound`. Changes to an existing session go
//! through `update`, which never writes a session back once it has been deleted.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::api::ApiResult;
use crate::session::Session;

pub trait SessionStore: Send + Sync {
    fn save(&self, session: &Session) -> ApiResult<()>;

    /// Returns `ApiError::NotFound` for unknown ids.
    fn load(&self, id: &str) -> ApiResult<Session>;

    /// Applies `apply` to the stored session and writes the result in one step with respect
    /// to `delete`. Unknown or already deleted ids are `NotFound` and nothing is written.
    fn update(&self, id: &str, apply: &mut dyn FnMut(&mut Session)) -> ApiResult<Session>;

    /// Erases a session and everything derived from it. Unknown ids are `NotFound`.
    fn delete(&self, id: &str) -> ApiResult<()>;
}
