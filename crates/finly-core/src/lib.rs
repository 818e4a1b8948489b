//! finly-core
//!
//! Business logic and services for Finly.
//! Depends on finly-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod card_service;
pub mod error;
pub mod schedule_service;
pub mod storage;
pub mod summary_service;
pub mod time;

pub use card_service::*;
pub use error::CoreError;
pub use schedule_service::*;
pub use summary_service::*;
pub use time::*;
