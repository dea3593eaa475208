//! Observer that keeps the latest list state for a UI to redraw from.

use super::{TodoListConfig, TodoListView};
use crate::todo::ports::{TodoListObserver, TodoListSnapshot};
use mockable::Clock;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Shared handle to the latest list snapshot.
///
/// Subscribe one clone to the manager and keep another for drawing. Only
/// the snapshot is retained; overdue flags are evaluated again on every
/// call to [`TodoView::current`].
pub struct TodoView<C>
where
    C: Clock,
{
    latest: Rc<RefCell<TodoListSnapshot>>,
    clock: Arc<C>,
    config: Rc<TodoListConfig>,
}

impl<C> TodoView<C>
where
    C: Clock,
{
    /// Creates a view over an empty list.
    #[must_use]
    pub fn new(clock: Arc<C>, config: TodoListConfig) -> Self {
        Self {
            latest: Rc::new(RefCell::new(TodoListSnapshot::default())),
            clock,
            config: Rc::new(config),
        }
    }

    /// Renders the latest snapshot against the clock's current date.
    #[must_use]
    pub fn current(&self) -> TodoListView {
        let entries = self.latest.borrow().entries(&*self.clock);
        TodoListView::render(&entries, &self.config)
    }
}

impl<C> Clone for TodoView<C>
where
    C: Clock,
{
    fn clone(&self) -> Self {
        Self {
            latest: Rc::clone(&self.latest),
            clock: Arc::clone(&self.clock),
            config: Rc::clone(&self.config),
        }
    }
}

impl<C> TodoListObserver for TodoView<C>
where
    C: Clock,
{
    fn on_change(&mut self, snapshot: &TodoListSnapshot) {
        self.latest.replace(snapshot.clone());
    }
}
