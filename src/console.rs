//! Terminal implementations of the UI ports.

use std::sync::Mutex;

use pa_core::ports::{NavigatorPort, Notice, NotifierPort};
use pa_core::Route;
use tracing::debug;

/// Prints notices: errors to stderr, confirmations to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("error: {notice}");
        } else {
            println!("{notice}");
        }
    }
}

/// There is no screen stack in a terminal; the navigator only remembers
/// where the view models asked to go.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: Mutex<Option<Route>>,
}

impl ConsoleNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl NavigatorPort for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "Navigation requested");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}
