//! Client library for the Noticeboard API
//!
//! The single-page client of the board, minus the rendering: a typed HTTP
//! client for every endpoint, the in-memory session state that decides
//! which views are reachable, and the client-side post search.

pub mod api;
pub mod models;
pub mod search;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use models::{Identity, LoginResponse, Post, UserSummary};
pub use search::filter_posts;
pub use session::{ClientSession, View};
