use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::texture::{ProfileTexture, TextureType};
use crate::domain::auth::profile::undashed_uuid;
use crate::shared::result::{AppResult, TextureError};

/// Contenido decodificado de la propiedad `textures`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturesPayload {
    pub timestamp: i64,
    pub profile_id: Option<Uuid>,
    pub profile_name: Option<String>,
    pub is_public: bool,
    pub textures: HashMap<TextureType, ProfileTexture>,
}

impl TexturesPayload {
    /// Momento en que el servidor emitió el payload (milisegundos desde epoch).
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTexturesPayload {
    #[serde(default)]
    timestamp: i64,
    #[serde(default, with = "undashed_uuid")]
    profile_id: Option<Uuid>,
    #[serde(default)]
    profile_name: Option<String>,
    #[serde(default)]
    is_public: bool,
    // Valores sin tipar: un slot desconocido con otra forma no debe tumbar el resto.
    #[serde(default)]
    textures: Option<HashMap<String, Value>>,
}

/// Decodifica el `value` base64 de la propiedad y su JSON.
///
/// Las claves de textura desconocidas se ignoran y las entradas sin URL se descartan.
pub fn decode_textures_payload(value: &str) -> AppResult<TexturesPayload> {
    let bytes = STANDARD
        .decode(value.trim())
        .map_err(|err| TextureError::PayloadDecode(format!("base64 inválido: {err}")))?;
    let raw = serde_json::from_slice::<RawTexturesPayload>(&bytes)
        .map_err(|err| TextureError::PayloadDecode(format!("JSON inválido: {err}")))?;

    let mut textures = HashMap::new();
    for (slot, entry) in raw.textures.unwrap_or_default() {
        let Ok(kind) = slot.parse::<TextureType>() else {
            log::debug!("Ignorando textura desconocida '{slot}'");
            continue;
        };
        let texture = serde_json::from_value::<ProfileTexture>(entry).map_err(|err| {
            TextureError::PayloadDecode(format!("Textura {kind} inválida: {err}"))
        })?;
        if texture.url().trim().is_empty() {
            log::warn!("Textura {kind} sin URL, se descarta");
            continue;
        }
        textures.insert(kind, texture);
    }

    Ok(TexturesPayload {
        timestamp: raw.timestamp,
        profile_id: raw.profile_id,
        profile_name: raw.profile_name,
        is_public: raw.is_public,
        textures,
    })
}

pub fn decode_textures(value: &str) -> AppResult<HashMap<TextureType, ProfileTexture>> {
    decode_textures_payload(value).map(|payload| payload.textures)
}

/// Operación inversa, útil para generar propiedades de prueba o reenviarlas firmadas.
pub fn encode_textures_payload(payload: &TexturesPayload) -> AppResult<String> {
    let serialize_error =
        |err: serde_json::Error| TextureError::PayloadDecode(format!("No se pudo serializar: {err}"));

    let mut textures = HashMap::with_capacity(payload.textures.len());
    for (kind, texture) in &payload.textures {
        textures.insert(
            kind.to_string(),
            serde_json::to_value(texture).map_err(serialize_error)?,
        );
    }
    let raw = RawTexturesPayload {
        timestamp: payload.timestamp,
        profile_id: payload.profile_id,
        profile_name: payload.profile_name.clone(),
        is_public: payload.is_public,
        textures: Some(textures),
    };
    let json = serde_json::to_vec(&raw).map_err(serialize_error)?;
    Ok(STANDARD.encode(json))
}
