//! Application services sitting between the HTTP layer and the domain.

pub mod session;

pub use session::{SessionService, SessionView, StorageWarning};
