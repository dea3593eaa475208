//! Shared world state for to-do list BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::todo::{
    adapters::memory::InMemoryTodoList,
    domain::TodoItem,
    services::{AddTodoRequest, TodoListManager, TodoListServiceError},
    view::{TodoListConfig, TodoListView, TodoView},
};

/// Manager type used by the BDD world.
pub type TestTodoManager = TodoListManager<InMemoryTodoList, DefaultClock>;

/// Scenario world for to-do list behaviour tests.
pub struct TodoWorld {
    /// The manager under test.
    pub manager: TestTodoManager,
    /// View subscribed to the manager, as a UI would hold it.
    pub view: TodoView<DefaultClock>,
    /// Result of the last add attempt.
    pub last_add_result: Option<Result<TodoItem, TodoListServiceError>>,
}

impl TodoWorld {
    /// Creates a world around an empty list.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let view = TodoView::new(Arc::clone(&clock), TodoListConfig::default());
        let mut manager = TodoListManager::new(InMemoryTodoList::new(), clock);
        manager.subscribe(view.clone());
        Self {
            manager,
            view,
            last_add_result: None,
        }
    }

    /// Submits an add request and records its result.
    pub fn submit(&mut self, request: AddTodoRequest) {
        self.last_add_result = Some(self.manager.add(request));
    }

    /// Renders the list as the UI would draw it now.
    #[must_use]
    pub fn rendered(&self) -> TodoListView {
        self.view.current()
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}
