//! Vector-backed to-do list repository.

use std::collections::HashMap;

use crate::todo::{
    domain::{TodoId, TodoItem, TodoName},
    ports::{TodoListError, TodoListRepository, TodoListResult},
};

/// Insertion-ordered in-memory to-do list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoList {
    items: Vec<TodoItem>,
    name_index: HashMap<TodoName, TodoId>,
}

impl InMemoryTodoList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl TodoListRepository for InMemoryTodoList {
    fn insert(&mut self, item: TodoItem) -> TodoListResult<()> {
        if self.position(item.id()).is_some() {
            return Err(TodoListError::DuplicateId(item.id()));
        }

        if self.name_index.contains_key(item.name()) {
            return Err(TodoListError::DuplicateName(item.name().clone()));
        }

        self.name_index.insert(item.name().clone(), item.id());
        self.items.push(item);
        Ok(())
    }

    fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.name_index.remove(removed.name());
        Some(removed)
    }

    fn find_by_id(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn find_by_name(&self, name: &TodoName) -> Option<&TodoItem> {
        self.name_index
            .get(name)
            .and_then(|id| self.find_by_id(*id))
    }

    fn items(&self) -> &[TodoItem] {
        &self.items
    }
}
