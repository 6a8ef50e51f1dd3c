//! Career Compass Backend
//!
//! A mock career guidance API with:
//! - Username-as-token login stub
//! - Personality quiz classification
//! - Static career recommendations, trends and workplace scenarios
//! - Persona timelines and metric trends served from a mock JSON document

pub mod api;
pub mod compass;
pub mod config;
pub mod error;

pub use api::*;
pub use compass::*;
pub use config::ServerConfig;
pub use error::{ApiError, LoadError};
