//! Compass Module - Mock Career Guidance Core
//!
//! Everything the HTTP layer serves lives here.
//!
//! Architecture:
//! - Auth: username-as-token login stub over a fixed user table
//! - Quiz: majority-rule personality classifier
//! - Catalog: static recommendations, trends and scenario
//! - Mock Data: read-only JSON document for trends and persona timelines

pub mod auth;
pub mod catalog;
pub mod mock_data;
pub mod quiz;
pub mod types;

pub use auth::*;
pub use catalog::*;
pub use mock_data::*;
pub use quiz::*;
pub use types::*;
