//! Verificación de texturas firmadas y render 2D de skins.
//!
//! Flujo: la propiedad `textures` del perfil se verifica con la clave del servidor de
//! sesión (SHA1withRSA), se decodifica a un mapa de texturas, el bitmap de la skin se
//! obtiene fuera del motor y se compone en una cabeza de 8x8 o un modelo de 16x32.
//!
//! ```no_run
//! use skin_engine::{
//!     app::TextureService,
//!     domain::auth::GameProfile,
//!     infrastructure::{filesystem::config::RenderConfig, http::HttpSkinSource},
//! };
//!
//! # fn run(profile: GameProfile) -> skin_engine::shared::result::AppResult<()> {
//! let config = RenderConfig::default();
//! let service = TextureService::new(config.clone())?;
//! let source = HttpSkinSource::new(&config)?;
//! let renders = service.render_profile(
//!     &profile,
//!     &source,
//!     service.head_options(),
//!     service.model_options(),
//! )?;
//! assert_eq!(renders.head.dimensions(), (64, 64));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod commands;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use shared::result::{AppResult, TextureError};
