use serde::{Deserialize, Serialize};

use crate::infrastructure::signature::{session_key::SessionPublicKey, verifier::verify_signature};
use crate::shared::result::{AppResult, TextureError};

pub const TEXTURES_PROPERTY: &str = "textures";

/// Propiedad de perfil emitida por el servidor de sesión (`name`, `value`, `signature`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedProperty {
    name: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
}

impl SignedProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            signature: None,
        }
    }

    pub fn signed(
        name: impl Into<String>,
        value: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            signature: Some(signature.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub fn has_signature(&self) -> bool {
        self.signature.is_some()
    }

    /// Comprueba la firma SHA1withRSA sobre los bytes UTF-8 de `value`.
    pub fn validate_signature(&self, key: &SessionPublicKey) -> AppResult<()> {
        let signature = self
            .signature
            .as_deref()
            .ok_or(TextureError::MissingSignature)?;
        if verify_signature(self.value.as_bytes(), signature, key)? {
            Ok(())
        } else {
            log::warn!("Firma rechazada para la propiedad '{}'", self.name);
            Err(TextureError::InvalidSignature)
        }
    }
}
