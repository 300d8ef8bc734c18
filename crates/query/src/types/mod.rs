mod auth;
mod component;

pub use auth::{AuthConfig, AuthConfigs};
pub use component::ComponentType;
