/**
 * Client Routes
 *
 * Maps the client route strings to app views. The root route redirects
 * to home.
 */

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Home screen shown after login
    Home,
    /// Login form
    Login,
    /// Registration form
    Register,
    /// Password recovery form
    ForgotPassword,
}

impl AppView {
    /// Resolve a route path to a view; `/` redirects to home.
    /// Unknown paths fall back to the login form.
    pub fn from_route(path: &str) -> Self {
        match path {
            "/" | "/home" => AppView::Home,
            "/login" => AppView::Login,
            "/register" => AppView::Register,
            "/forgotpassword" => AppView::ForgotPassword,
            _ => AppView::Login,
        }
    }

    /// Canonical route string for this view
    pub fn route(&self) -> &'static str {
        match self {
            AppView::Home => "/home",
            AppView::Login => "/login",
            AppView::Register => "/register",
            AppView::ForgotPassword => "/forgotpassword",
        }
    }
}
