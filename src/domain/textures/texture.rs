use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TextureType {
    Skin,
    Cape,
}

impl FromStr for TextureType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "SKIN" => Ok(Self::Skin),
            "CAPE" => Ok(Self::Cape),
            other => Err(format!("Tipo de textura desconocido: {other}")),
        }
    }
}

impl fmt::Display for TextureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Skin => "SKIN",
            Self::Cape => "CAPE",
        })
    }
}

/// Modelo de brazos anunciado en los metadatos de la skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkinModel {
    Classic,
    Slim,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileTexture {
    url: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    metadata: HashMap<String, String>,
}

impl ProfileTexture {
    pub fn new(url: impl Into<String>, metadata: HashMap<String, String>) -> Self {
        Self {
            url: url.into(),
            metadata,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn metadata_map(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Identificador de contenido que el servidor incrusta en la URL: el último segmento
    /// sin `/` final, cortado en el primer `.` que aparezca.
    pub fn hash(&self) -> &str {
        let url = self.url.strip_suffix('/').unwrap_or(self.url.as_str());
        let segment = url.rsplit_once('/').map_or(url, |(_, last)| last);
        segment.split_once('.').map_or(segment, |(stem, _)| stem)
    }

    pub fn skin_model(&self) -> SkinModel {
        match self.metadata("model") {
            Some("slim") => SkinModel::Slim,
            _ => SkinModel::Classic,
        }
    }
}
