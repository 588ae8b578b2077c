pub mod auth;
pub mod skin;
pub mod textures;
