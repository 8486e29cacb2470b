pub mod auth_components;
pub mod context;

pub use auth_components::*;
pub use context::*;
