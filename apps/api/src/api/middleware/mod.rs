// Cross-cutting request handling

pub mod logging;
pub mod panic;

pub use logging::log_requests;
pub use panic::handle_panic;
