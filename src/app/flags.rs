use crate::core::route::Route;

/// Startup options handed to [`crate::app::App`].
#[derive(Clone, Debug)]
pub struct Flags {
    pub initial_route: Route,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            initial_route: Route::Sales,
        }
    }
}
