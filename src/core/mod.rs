//! Core module - fundamental types and utilities

pub mod catalog;
pub mod config;
pub mod desk;
pub mod identity;
pub mod session;

pub use config::Config;
pub use desk::{Desk, DeskError};
pub use identity::{IdParseError, RecordId, RecordPrefix};
pub use session::{Session, SessionError};
