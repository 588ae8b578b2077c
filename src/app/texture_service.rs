use std::{collections::HashMap, sync::Arc};

use crate::{
    domain::{
        auth::{profile::GameProfile, property::TEXTURES_PROPERTY},
        skin::{
            compositor::{composite_head, composite_model},
            layout::require_layout,
            pixel_grid::PixelGrid,
            resize::scale,
        },
        textures::{
            payload::decode_textures,
            texture::{ProfileTexture, TextureType},
        },
    },
    infrastructure::{
        codec::image_codec::decode_skin_bytes,
        filesystem::config::RenderConfig,
        http::texture_client::SkinSource,
        signature::session_key::SessionPublicKey,
    },
    shared::result::{AppResult, TextureError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub zoom: i64,
    pub include_overlay: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinRenders {
    pub head: PixelGrid,
    pub model: PixelGrid,
}

/// Punto de entrada: verifica propiedades firmadas y produce los renders de la skin.
///
/// La clave de sesión se carga una sola vez y se comparte sin mutación.
#[derive(Debug, Clone)]
pub struct TextureService {
    key: Arc<SessionPublicKey>,
    config: RenderConfig,
}

impl TextureService {
    pub fn new(config: RenderConfig) -> AppResult<Self> {
        let key = match config.session_public_key_path.as_deref() {
            Some(path) => SessionPublicKey::from_file(path)?,
            None => SessionPublicKey::embedded()?,
        };
        Ok(Self::with_key(Arc::new(key), config))
    }

    pub fn with_key(key: Arc<SessionPublicKey>, config: RenderConfig) -> Self {
        Self { key, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn head_options(&self) -> RenderOptions {
        RenderOptions {
            zoom: i64::from(self.config.head_zoom),
            include_overlay: self.config.include_overlay,
        }
    }

    pub fn model_options(&self) -> RenderOptions {
        RenderOptions {
            zoom: i64::from(self.config.model_zoom),
            include_overlay: self.config.include_overlay,
        }
    }

    /// Texturas del perfil, solo si la propiedad `textures` está firmada y la firma es válida.
    ///
    /// Un perfil sin esa propiedad no tiene texturas y devuelve un mapa vacío.
    pub fn profile_textures(
        &self,
        profile: &GameProfile,
    ) -> AppResult<HashMap<TextureType, ProfileTexture>> {
        let Some(property) = profile.property(TEXTURES_PROPERTY) else {
            return Ok(HashMap::new());
        };

        property.validate_signature(&self.key)?;
        let textures = decode_textures(property.value())?;
        log::debug!(
            "Perfil '{}': {} texturas verificadas",
            profile.name,
            textures.len()
        );
        Ok(textures)
    }

    pub fn fill_profile_textures(&self, profile: &mut GameProfile) -> AppResult<()> {
        let textures = self.profile_textures(profile)?;
        profile.textures.extend(textures);
        Ok(())
    }

    /// Skin verificada del perfil. Siempre vuelve a validar la firma de `textures`.
    pub fn skin_texture(&self, profile: &GameProfile) -> AppResult<ProfileTexture> {
        self.profile_textures(profile)?
            .remove(&TextureType::Skin)
            .ok_or(TextureError::SkinNotFound)
    }

    pub fn render_head(&self, skin: &PixelGrid, options: RenderOptions) -> AppResult<PixelGrid> {
        let head = composite_head(skin, options.include_overlay)?;
        scale(&head, self.config.normalize_zoom(options.zoom))
    }

    pub fn render_model(&self, skin: &PixelGrid, options: RenderOptions) -> AppResult<PixelGrid> {
        let layout = require_layout(skin)?;
        let model = composite_model(skin, layout, options.include_overlay)?;
        scale(&model, self.config.normalize_zoom(options.zoom))
    }

    /// Descarga la skin una sola vez y genera cabeza y modelo.
    pub fn render_profile(
        &self,
        profile: &GameProfile,
        source: &dyn SkinSource,
        head: RenderOptions,
        model: RenderOptions,
    ) -> AppResult<SkinRenders> {
        let texture = self.skin_texture(profile)?;
        let bytes = source.fetch(&texture)?;
        let skin = decode_skin_bytes(&bytes)?;

        Ok(SkinRenders {
            head: self.render_head(&skin, head)?,
            model: self.render_model(&skin, model)?,
        })
    }
}
