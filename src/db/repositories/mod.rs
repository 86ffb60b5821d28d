//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod blog_repo;
pub mod category_repo;
pub mod user_repo;

pub use blog_repo::{BlogChanges, BlogRepository, NewBlog};
pub use category_repo::CategoryRepository;
pub use user_repo::{NewUser, ProfileChanges, UserRepository};
