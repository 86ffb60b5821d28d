//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod blog;
pub mod category;
pub mod user;

pub use blog::*;
pub use category::*;
pub use user::*;
