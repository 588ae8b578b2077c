use std::{fs, path::Path};

use rsa::{
    pkcs1::DecodeRsaPublicKey, pkcs1v15::VerifyingKey, pkcs8::DecodePublicKey,
    traits::PublicKeyParts, RsaPublicKey,
};
use sha1::Sha1;

use crate::shared::result::{AppResult, TextureError};

// SubjectPublicKeyInfo DER, el mismo formato que distribuye el servidor de sesión.
const EMBEDDED_SESSION_KEY: &[u8] = include_bytes!("../../../resources/yggdrasil_session_pubkey.der");
const MIN_KEY_BITS: usize = 1024;

/// Clave pública RSA con la que el servidor de sesión firma las propiedades (SHA1withRSA).
#[derive(Debug, Clone)]
pub struct SessionPublicKey {
    public_key: RsaPublicKey,
    bits: usize,
}

impl SessionPublicKey {
    pub fn embedded() -> AppResult<Self> {
        Self::from_der(EMBEDDED_SESSION_KEY)
    }

    pub fn from_der(der: &[u8]) -> AppResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der)
            .map_err(|err| TextureError::InvalidPublicKey(format!("DER inválido: {err}")))?;
        Self::from_rsa(key)
    }

    /// Acepta `BEGIN PUBLIC KEY` (SPKI) y `BEGIN RSA PUBLIC KEY` (PKCS#1).
    pub fn from_pem(pem: &str) -> AppResult<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|err| TextureError::InvalidPublicKey(format!("PEM inválido: {err}")))?;
        Self::from_rsa(key)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path).map_err(|err| {
            TextureError::InvalidPublicKey(format!(
                "No se pudo leer la clave {}: {err}",
                path.display()
            ))
        })?;

        let key = if bytes.starts_with(b"-----BEGIN") {
            let pem = String::from_utf8(bytes).map_err(|err| {
                TextureError::InvalidPublicKey(format!("PEM no es UTF-8 en {}: {err}", path.display()))
            })?;
            Self::from_pem(&pem)?
        } else {
            Self::from_der(&bytes)?
        };

        log::info!(
            "Clave de sesión cargada desde {} ({} bits)",
            path.display(),
            key.bits
        );
        Ok(key)
    }

    pub fn from_rsa(key: RsaPublicKey) -> AppResult<Self> {
        let bits = key.size() * 8;
        if bits < MIN_KEY_BITS {
            return Err(TextureError::InvalidPublicKey(format!(
                "La clave tiene {bits} bits; se requieren al menos {MIN_KEY_BITS}"
            )));
        }
        Ok(Self {
            public_key: key,
            bits,
        })
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub(crate) fn verifying_key(&self) -> VerifyingKey<Sha1> {
        VerifyingKey::new(self.public_key.clone())
    }
}
