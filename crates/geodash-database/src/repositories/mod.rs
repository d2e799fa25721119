//! Repository implementations for all GeoDash entities.

pub mod auth_session;
pub mod session;
pub mod user;

pub use auth_session::AuthSessionRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
