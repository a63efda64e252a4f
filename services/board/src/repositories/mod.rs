//! Repositories for record-store operations

pub mod post;
pub mod session;
pub mod user;

pub use post::PostRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
