// Application state for HTTP handlers
use crate::application::view_service::ViewService;

#[derive(Clone)]
pub struct AppState {
    pub view_service: ViewService,
    /// Brotli-encode responses for clients that accept it
    pub compress: bool,
}
