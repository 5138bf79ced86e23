//! In-memory Todo Store
//!
//! Keeps named lists in a process-local map. Nothing outlives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::entities::TodoList;
use crate::domain::ports::TodoStore;
use crate::error::{SolidError, SolidResult};

#[derive(Default)]
pub struct InMemoryTodoStore {
    lists: Mutex<HashMap<String, TodoList>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lists.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> SolidError {
    SolidError::invalid_input("todo store lock poisoned")
}

impl TodoStore for InMemoryTodoStore {
    fn save(&self, name: &str, list: &TodoList) -> SolidResult<()> {
        if name.trim().is_empty() {
            return Err(SolidError::invalid_input("list name must not be empty"));
        }
        let mut lists = self.lists.lock().map_err(|_| poisoned())?;
        debug!(name, items = list.len(), "saving todo list");
        lists.insert(name.to_string(), list.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> SolidResult<Option<TodoList>> {
        let lists = self.lists.lock().map_err(|_| poisoned())?;
        Ok(lists.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let store = InMemoryTodoStore::new();
        let list: TodoList = ["write", "test"].into_iter().collect();

        store.save("work", &list).unwrap();

        assert_eq!(store.load("work").unwrap(), Some(list));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_missing_is_none() {
        let store = InMemoryTodoStore::new();
        assert_eq!(store.load("nope").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn save_replaces_existing() {
        let store = InMemoryTodoStore::new();
        store.save("l", &["a"].into_iter().collect()).unwrap();
        store.save("l", &["b"].into_iter().collect()).unwrap();
        assert_eq!(store.load("l").unwrap().unwrap().items(), ["b"]);
    }

    #[test]
    fn empty_name_rejected() {
        let store = InMemoryTodoStore::new();
        assert!(matches!(
            store.save(" ", &TodoList::new()),
            Err(SolidError::InvalidInput { .. })
        ));
    }
}
