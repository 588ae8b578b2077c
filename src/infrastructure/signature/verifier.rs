use base64::{engine::general_purpose::STANDARD, Engine as _};
use rsa::{pkcs1v15::Signature, signature::Verifier};

use super::session_key::SessionPublicKey;
use crate::shared::result::{AppResult, TextureError};

/// SHA-1 + PKCS#1 v1.5 sobre `value` tal cual llega.
///
/// `Ok(false)` si la firma no coincide; `MalformedSignature` si ni siquiera se puede decodificar.
pub fn verify_signature(
    value: &[u8],
    signature_base64: &str,
    key: &SessionPublicKey,
) -> AppResult<bool> {
    let raw = STANDARD
        .decode(signature_base64.trim())
        .map_err(|err| TextureError::MalformedSignature(format!("base64 inválido: {err}")))?;
    let signature = Signature::try_from(raw.as_slice())
        .map_err(|err| TextureError::MalformedSignature(err.to_string()))?;

    let valid = key.verifying_key().verify(value, &signature).is_ok();
    if valid {
        log::debug!("Firma SHA1withRSA válida ({} bytes firmados)", value.len());
    }
    Ok(valid)
}
