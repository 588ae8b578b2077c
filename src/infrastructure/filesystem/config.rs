use std::{fs, path::Path, path::PathBuf};

use crate::shared::result::{AppResult, TextureError};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub head_zoom: u32,
    pub model_zoom: u32,
    pub include_overlay: bool,
    pub max_zoom: u32,
    pub session_public_key_path: Option<PathBuf>,
    pub texture_hosts: Vec<String>,
    pub fetch_timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            head_zoom: 8,
            model_zoom: 2,
            include_overlay: true,
            max_zoom: 64,
            session_public_key_path: None,
            texture_hosts: vec!["textures.minecraft.net".to_string()],
            fetch_timeout_secs: 25,
        }
    }
}

impl RenderConfig {
    /// `<= 0` se trata como 1; por encima de `max_zoom` se recorta.
    pub fn normalize_zoom(&self, requested: i64) -> u32 {
        let max_zoom = i64::from(self.max_zoom.max(1));
        requested.clamp(1, max_zoom) as u32
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(zoom) = env_u32("SKIN_ENGINE_HEAD_ZOOM") {
            self.head_zoom = zoom;
        }
        if let Some(zoom) = env_u32("SKIN_ENGINE_MODEL_ZOOM") {
            self.model_zoom = zoom;
        }
        if let Some(timeout) = std::env::var("SKIN_ENGINE_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
        {
            self.fetch_timeout_secs = timeout.max(1);
        }
    }
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
}

pub fn load_render_config(path: &Path) -> AppResult<RenderConfig> {
    if !path.exists() {
        return Ok(RenderConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|err| {
        TextureError::Config(format!(
            "No se pudo leer {}: {err}",
            path.display()
        ))
    })?;

    serde_json::from_str::<RenderConfig>(&raw).map_err(|err| {
        TextureError::Config(format!(
            "No se pudo parsear {}: {err}",
            path.display()
        ))
    })
}

pub fn save_render_config(path: &Path, config: &RenderConfig) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            TextureError::Config(format!(
                "No se pudo crear directorio para {}: {err}",
                parent.display()
            ))
        })?;
    }

    let raw = serde_json::to_string_pretty(config)
        .map_err(|err| TextureError::Config(format!("No se pudo serializar la configuración: {err}")))?;

    fs::write(path, raw).map_err(|err| {
        TextureError::Config(format!(
            "No se pudo guardar {}: {err}",
            path.display()
        ))
    })
}
