use crate::navigation::NavCommand;

/// Sink for navigation side effects.
///
/// Implemented by the navigation controller; tests substitute a recording
/// fake to count dispatches.
pub trait NavigatorPort: Send + Sync {
    fn dispatch(&self, command: NavCommand);
}
