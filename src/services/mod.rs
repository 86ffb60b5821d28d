//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod blog_service;
pub mod category_service;
pub mod engagement_service;
pub mod token_service;
pub mod user_service;

pub use admin_service::{AdminService, PlatformStats};
pub use auth_service::{AuthService, Registration};
pub use blog_service::{Actor, BlogService};
pub use category_service::CategoryService;
pub use engagement_service::EngagementService;
pub use token_service::{Claims, IssuedToken, TokenService};
pub use user_service::{AccountUpdate, ProfileUpdate, UserService};
