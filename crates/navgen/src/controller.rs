/// Navigation controller
///
/// A cheap, clonable handle over one back stack. Clones share state, so a
/// screen can capture the controller and navigate from inside its content.
/// Content stored in the graph must capture a [`WeakNavController`]: the
/// graph lives inside the controller's state.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::NavigationError;
use crate::graph::{BackStackEntry, Content, NavGraph};

#[derive(Default)]
struct ControllerState {
    graph: Option<Rc<NavGraph>>,
    back_stack: Vec<(BackStackEntry, Content)>,
}

#[derive(Clone, Default)]
pub struct NavController {
    state: Rc<RefCell<ControllerState>>,
}

/// Non-owning handle to a [`NavController`], for capture by graph content.
#[derive(Clone, Default)]
pub struct WeakNavController {
    state: Weak<RefCell<ControllerState>>,
}

impl WeakNavController {
    /// `None` once every strong handle is gone.
    pub fn upgrade(&self) -> Option<NavController> {
        self.state.upgrade().map(|state| NavController { state })
    }
}

impl fmt::Debug for WeakNavController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakNavController")
            .field("alive", &(self.state.strong_count() > 0))
            .finish()
    }
}

impl NavController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downgrade(&self) -> WeakNavController {
        WeakNavController {
            state: Rc::downgrade(&self.state),
        }
    }

    /// Attaches `graph`, clearing the back stack. When the graph names a
    /// start destination the controller navigates to it.
    pub fn set_graph(&self, graph: NavGraph) -> Result<(), NavigationError> {
        let start = graph.start_destination().map(str::to_string);
        {
            let mut state = self.state.borrow_mut();
            state.graph = Some(Rc::new(graph));
            state.back_stack.clear();
        }

        match start {
            Some(route) => self.navigate(&route),
            None => Ok(()),
        }
    }

    /// Resolves `route`, pushes it and shows its content.
    pub fn navigate(&self, route: &str) -> Result<(), NavigationError> {
        let graph = self
            .state
            .borrow()
            .graph
            .clone()
            .ok_or(NavigationError::GraphNotSet)?;

        let (entry, content) = graph.find(route)?;
        tracing::debug!(route, pattern = entry.pattern(), "navigate");

        self.state
            .borrow_mut()
            .back_stack
            .push((entry.clone(), Rc::clone(&content)));

        // Content may navigate again; no borrow is held here
        content(&entry);
        Ok(())
    }

    /// Pops the top entry and re-shows the one below it.
    ///
    /// Returns `false` when the stack was already empty.
    pub fn pop_back_stack(&self) -> bool {
        let top = {
            let mut state = self.state.borrow_mut();
            if state.back_stack.pop().is_none() {
                return false;
            }
            state.back_stack.last().cloned()
        };

        if let Some((entry, content)) = top {
            tracing::debug!(route = entry.route(), "pop back stack");
            content(&entry);
        }
        true
    }

    pub fn current_route(&self) -> Option<String> {
        self.current_entry().map(|entry| entry.route().to_string())
    }

    pub fn current_entry(&self) -> Option<BackStackEntry> {
        self.state
            .borrow()
            .back_stack
            .last()
            .map(|(entry, _)| entry.clone())
    }

    pub fn back_stack_len(&self) -> usize {
        self.state.borrow().back_stack.len()
    }
}

impl fmt::Debug for NavController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("NavController")
            .field("graph", &state.graph)
            .field(
                "back_stack",
                &state.back_stack.iter().map(|(e, _)| e.route()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
