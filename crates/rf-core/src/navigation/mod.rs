//! Navigation route table.
//!
//! Defines the named screens of the app and a pure stack state machine that
//! moves between them. Side effects live in the application layer; this
//! module only computes stack contents.

use serde::{Deserialize, Serialize};

/// Tabs of the post-consultation area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosConsultTab {
    Guide,
    BankProducts,
    Faqs,
}

/// Named screens of the fixed navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// First-run entry point.
    Welcome,
    /// Reachable only as the deep-link failure target; the forward flow
    /// goes directly from Welcome to GovBrRequirements.
    GovBrLogin { error_message: Option<String> },
    /// Gov.br account level and 2FA instructions.
    GovBrRequirements,
    /// Hand-off to the Banco Central consultation site.
    SvrConsult,
    /// Post-consultation tabs; returning-user entry point.
    PosConsult { tab: PosConsultTab },
    Settings,
}

impl Route {
    /// Post-consultation entry, opening on the guide tab.
    pub fn pos_consult() -> Self {
        Self::PosConsult {
            tab: PosConsultTab::Guide,
        }
    }

    /// Whether two routes show the same screen, ignoring parameters.
    pub fn same_screen(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Commands a navigator applies to the route stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavCommand {
    /// Go to a screen without destroying history: pushes, or updates the
    /// current entry in place when it already shows the same screen.
    Navigate(Route),
    /// Swap the current entry for the target.
    Replace(Route),
    /// Destructive: the target becomes the only entry.
    Reset(Route),
    /// Remove the current entry, unless it is the only one.
    Pop,
    /// Drop everything above the root entry.
    PopToTop,
}

/// The navigation back stack.
///
/// Never empty: construction seeds a root entry and no command removes the
/// last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteStack {
    routes: Vec<Route>,
}

impl RouteStack {
    /// Initial stack, chosen once after session resolution: returning users
    /// land on the post-consultation tabs, first runs on Welcome.
    pub fn initial(session_present: bool) -> Self {
        let root = if session_present {
            Route::pos_consult()
        } else {
            Route::Welcome
        };
        Self { routes: vec![root] }
    }

    pub fn current(&self) -> &Route {
        self.routes.last().expect("route stack is never empty")
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Navigate(route) => {
                if self.current().same_screen(&route) {
                    self.swap_current(route);
                } else {
                    self.routes.push(route);
                }
            }
            NavCommand::Replace(route) => self.swap_current(route),
            NavCommand::Reset(route) => {
                self.routes.clear();
                self.routes.push(route);
            }
            NavCommand::Pop => {
                if self.routes.len() > 1 {
                    self.routes.pop();
                }
            }
            NavCommand::PopToTop => self.routes.truncate(1),
        }
    }

    fn swap_current(&mut self, route: Route) {
        *self.routes.last_mut().expect("route stack is never empty") = route;
    }
}
