//! Navigation controller owning the route stack.

use std::sync::Mutex;

use log::debug;

use rf_core::navigation::{NavCommand, Route, RouteStack};
use rf_core::ports::NavigatorPort;

/// Holds the live route stack and applies navigation commands to it.
///
/// The stack is seeded for a first run until `start` replaces it with the
/// entry point matching the resolved session.
pub struct NavigationController {
    stack: Mutex<RouteStack>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            stack: Mutex::new(RouteStack::initial(false)),
        }
    }

    /// Seed the stack once, after session resolution, and return the
    /// initial route.
    pub fn start(&self, session_present: bool) -> Route {
        let mut stack = self.stack.lock().unwrap();
        *stack = RouteStack::initial(session_present);
        stack.current().clone()
    }

    pub fn current_route(&self) -> Route {
        self.stack.lock().unwrap().current().clone()
    }

    pub fn depth(&self) -> usize {
        self.stack.lock().unwrap().depth()
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorPort for NavigationController {
    fn dispatch(&self, command: NavCommand) {
        debug!("navigation: {:?}", command);
        self.stack.lock().unwrap().apply(command);
    }
}
