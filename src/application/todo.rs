//! Todo Use Case
//!
//! Edits a [`TodoList`] and hands it to a [`TodoStore`]; neither knows
//! about the other.

use tracing::debug;

use crate::domain::entities::TodoList;
use crate::domain::ports::TodoStore;
use crate::error::SolidResult;

#[derive(Debug, Clone, Default)]
pub struct TodoOptions {
    /// List name in the store
    pub name: String,
    /// Items to append
    pub add: Vec<String>,
    /// Indices to remove after adding, applied highest first
    pub remove: Vec<usize>,
}

pub struct TodoUseCase<S>
where
    S: TodoStore,
{
    store: S,
}

impl<S> TodoUseCase<S>
where
    S: TodoStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load (or start) the named list, apply edits, save it and return the
    /// list as stored.
    pub fn execute(&self, options: &TodoOptions) -> SolidResult<TodoList> {
        let mut list = self.store.load(&options.name)?.unwrap_or_default();

        for item in &options.add {
            list.add_item(item.clone());
        }

        let mut remove = options.remove.clone();
        remove.sort_unstable_by(|a, b| b.cmp(a));
        remove.dedup();
        for index in remove {
            if list.remove_item(index).is_none() {
                debug!(index, "todo index out of range; ignored");
            }
        }

        self.store.save(&options.name, &list)?;
        Ok(self.store.load(&options.name)?.unwrap_or_default())
    }
}
