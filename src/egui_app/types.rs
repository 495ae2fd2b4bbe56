/**
 * Shared Types Module
 *
 * Defines the routes, the navigation stack and the alert payload used by
 * the views.
 */

/// Screen the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Welcome screen with the "Begin Your Journey" button
    Landing,
    /// Sign-in form
    Login,
    /// Account creation form
    Register,
    /// Picture of the day and galaxy feed
    Home,
}

impl Route {
    /// Route name as used in navigation logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Landing => "landing",
            Route::Login => "login",
            Route::Register => "register",
            Route::Home => "home",
        }
    }
}

/// Stack of visited routes; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> Route {
        // The stack always holds at least the initial route
        *self.stack.last().unwrap_or(&Route::Landing)
    }

    /// Open `route` on top of the current screen
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Swap the current screen for `route`
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        self.stack.push(route);
    }

    /// Go back to `route` if it is already on the stack, otherwise push it
    pub fn navigate(&mut self, route: Route) {
        match self.stack.iter().rposition(|r| *r == route) {
            Some(index) => self.stack.truncate(index + 1),
            None => self.stack.push(route),
        }
    }

    /// Return to the previous screen; false when already at the root
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Modal message with a single "Continue" button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    /// Route pushed when the alert is dismissed
    pub then: Option<Route>,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            then: None,
        }
    }

    pub fn success(message: impl Into<String>, then: Route) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            then: Some(then),
        }
    }
}
