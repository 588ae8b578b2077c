use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    domain::textures::texture::ProfileTexture,
    infrastructure::filesystem::config::RenderConfig,
    shared::result::{AppResult, TextureError},
};

pub const USER_AGENT: &str = concat!("skin-engine/", env!("CARGO_PKG_VERSION"));

/// Colaborador externo que entrega los bytes del bitmap referenciado por una textura.
pub trait SkinSource {
    fn fetch(&self, texture: &ProfileTexture) -> AppResult<Vec<u8>>;
}

/// Descarga bloqueante, sin reintentos, limitada a los hosts de texturas configurados.
pub struct HttpSkinSource {
    client: Client,
    allowed_hosts: Vec<String>,
}

impl HttpSkinSource {
    pub fn new(config: &RenderConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.fetch_timeout_secs.max(1));
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| TextureError::TextureFetch(format!("No se pudo crear cliente HTTP: {err}")))?;

        Ok(Self {
            client,
            allowed_hosts: config.texture_hosts.clone(),
        })
    }

    fn ensure_allowed_host(&self, url: &str) -> AppResult<()> {
        ensure_texture_host(url, &self.allowed_hosts)
    }
}

pub fn ensure_texture_host(url: &str, allowed_hosts: &[String]) -> AppResult<()> {
    let parsed = reqwest::Url::parse(url)
        .map_err(|err| TextureError::TextureFetch(format!("URL de textura inválida: {url}. Error: {err}")))?;
    let host = parsed.host_str().unwrap_or_default();

    if !allowed_hosts.iter().any(|allowed| allowed.eq_ignore_ascii_case(host)) {
        return Err(TextureError::TextureFetch(format!(
            "Host de texturas no permitido: {host}. URL: {url}"
        )));
    }

    Ok(())
}

impl SkinSource for HttpSkinSource {
    fn fetch(&self, texture: &ProfileTexture) -> AppResult<Vec<u8>> {
        self.ensure_allowed_host(texture.url())?;

        let bytes = self
            .client
            .get(texture.url())
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.bytes())
            .map_err(|err| {
                log::warn!("Fallo al descargar textura {}: {err}", texture.hash());
                TextureError::TextureFetch(format!("{}: {err}", texture.url()))
            })?;

        log::debug!("Textura {} descargada ({} bytes)", texture.hash(), bytes.len());
        Ok(bytes.to_vec())
    }
}
