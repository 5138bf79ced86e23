//! TodoStore port - abstraction for saving and loading todo lists
//!
//! Keeps storage out of [`TodoList`]; the infrastructure layer provides
//! implementations.

use crate::domain::entities::TodoList;
use crate::error::SolidResult;

pub trait TodoStore: Send + Sync {
    /// Save `list` under `name`, replacing any previous list with that name
    fn save(&self, name: &str, list: &TodoList) -> SolidResult<()>;

    /// Load the list saved under `name`, or `None` if there is none
    fn load(&self, name: &str) -> SolidResult<Option<TodoList>>;
}
