use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::property::SignedProperty;
use crate::domain::textures::texture::{ProfileTexture, TextureType};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    #[serde(default, with = "undashed_uuid")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<SignedProperty>,
    #[serde(default)]
    pub legacy: bool,
    // Solo se llena con texturas ya verificadas; nunca viaja en JSON.
    #[serde(skip)]
    pub(crate) textures: HashMap<TextureType, ProfileTexture>,
}

impl GameProfile {
    pub fn new(id: Option<Uuid>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn property(&self, name: &str) -> Option<&SignedProperty> {
        self.properties.iter().find(|property| property.name() == name)
    }

    pub fn texture(&self, kind: TextureType) -> Option<&ProfileTexture> {
        self.textures.get(&kind)
    }

    pub fn textures(&self) -> &HashMap<TextureType, ProfileTexture> {
        &self.textures
    }
}

/// Identificadores de Mojang: 32 hex sin guiones al serializar, ambos formatos al leer.
pub mod undashed_uuid {
    use serde::{Deserialize, Deserializer, Serializer};
    use uuid::Uuid;

    pub fn serialize<S: Serializer>(id: &Option<Uuid>, serializer: S) -> Result<S::Ok, S::Error> {
        match id {
            Some(id) => serializer.serialize_str(&id.as_simple().to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Uuid>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Uuid::try_parse(value)
                .map(Some)
                .map_err(|err| serde::de::Error::custom(format!("UUID inválido '{value}': {err}"))),
        }
    }
}
