pub mod error;
pub mod extract;
pub mod routes;
pub mod service;
pub mod state;

pub use routes::router;
pub use state::{AppState, AppStateInner};
