//! finly-domain
//!
//! Pure domain models (Purchase, Card, Income, Debt, Category, etc.).
//! No I/O, no services, no storage. Only data types and core enums.

pub mod card;
pub mod category;
pub mod common;
pub mod debt;
pub mod income;
pub mod period;
pub mod purchase;

pub use card::*;
pub use category::*;
pub use common::*;
pub use debt::*;
pub use income::*;
pub use period::*;
pub use purchase::*;
