use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pretty_assertions::assert_eq;
use skin_engine::{
    app::TextureService,
    domain::{
        auth::{GameProfile, SignedProperty},
        textures::{decode_textures_payload, SkinModel, TextureType},
    },
    infrastructure::{
        filesystem::config::RenderConfig,
        signature::{verify_signature, SessionPublicKey},
    },
    TextureError,
};

// Firmado con `openssl dgst -sha1 -sign` sobre el valor base64 tal cual.
const TEXTURES_VALUE: &str = include_str!("fixtures/textures_value.txt");
const TEXTURES_SIGNATURE: &str = include_str!("fixtures/textures_signature.txt");

fn service() -> TextureService {
    TextureService::with_key(
        Arc::new(SessionPublicKey::embedded().unwrap()),
        RenderConfig::default(),
    )
}

fn signed_profile(value: &str, signature: &str) -> GameProfile {
    let json = format!(
        r#"{{"id":"069a79f444e94726a5befca90e38aaf5","name":"Notch","properties":[{{"name":"textures","value":"{value}","signature":"{signature}"}}]}}"#,
        value = value.trim(),
        signature = signature.trim()
    );
    serde_json::from_str(&json).unwrap()
}

#[test]
fn openssl_signature_matches_verifier() {
    let key = SessionPublicKey::embedded().unwrap();
    assert!(verify_signature(TEXTURES_VALUE.trim().as_bytes(), TEXTURES_SIGNATURE, &key).unwrap());
}

#[test]
fn every_flipped_signature_byte_is_rejected() {
    let key = SessionPublicKey::embedded().unwrap();
    let signature = STANDARD.decode(TEXTURES_SIGNATURE.trim()).unwrap();

    for index in (0..signature.len()).step_by(17) {
        let mut tampered = signature.clone();
        tampered[index] ^= 0x01;
        assert!(
            !verify_signature(TEXTURES_VALUE.trim().as_bytes(), &STANDARD.encode(&tampered), &key)
                .unwrap(),
            "byte {index}"
        );
    }
}

#[test]
fn verified_profile_resolves_known_slots() {
    let profile = signed_profile(TEXTURES_VALUE, TEXTURES_SIGNATURE);
    let textures = service().profile_textures(&profile).unwrap();

    assert_eq!(textures.len(), 2);
    let skin = &textures[&TextureType::Skin];
    assert_eq!(
        skin.hash(),
        "292009a4925b58f02c77dadc3ecef07ea4c7472f64e0fdc32ce5522489362680"
    );
    assert_eq!(skin.skin_model(), SkinModel::Slim);
    assert_eq!(
        textures[&TextureType::Cape].hash(),
        "3f688e0e699b3d9fe448b5bb50a3a288f9c589762b3dae8308842122dcb81"
    );
}

#[test]
fn payload_metadata_is_exposed() {
    let payload = decode_textures_payload(TEXTURES_VALUE).unwrap();
    assert_eq!(payload.profile_name.as_deref(), Some("Notch"));
    assert!(payload.is_public);
    assert_eq!(payload.timestamp, 1508241045832);
}

#[test]
fn missing_signature_never_reaches_textures() {
    let mut profile = GameProfile::new(None, "Notch");
    profile
        .properties
        .push(SignedProperty::new("textures", TEXTURES_VALUE.trim()));

    let err = service().fill_profile_textures(&mut profile).unwrap_err();
    assert!(matches!(err, TextureError::MissingSignature));
    assert!(profile.textures().is_empty());
}

#[test]
fn signature_for_other_value_is_invalid() {
    let other = STANDARD.encode(r#"{"textures":{"SKIN":{"url":"http://textures.minecraft.net/texture/evil"}}}"#);
    let profile = signed_profile(&other, TEXTURES_SIGNATURE);

    let err = service().profile_textures(&profile).unwrap_err();
    assert!(matches!(err, TextureError::InvalidSignature));
    assert!(err.is_trust_failure());
}

#[test]
fn garbled_signature_is_malformed() {
    let profile = signed_profile(TEXTURES_VALUE, "@@not-base64@@");
    let err = service().profile_textures(&profile).unwrap_err();
    assert!(matches!(err, TextureError::MalformedSignature(_)));
}

#[test]
fn valid_signature_over_garbage_payload_is_a_decode_error() {
    use rsa::{
        pkcs1v15::SigningKey,
        pkcs8::DecodePrivateKey,
        signature::{SignatureEncoding, Signer},
        RsaPrivateKey,
    };
    use sha1::Sha1;

    let private =
        RsaPrivateKey::from_pkcs8_pem(include_str!("fixtures/session_signing_key.pem")).unwrap();
    let value = STANDARD.encode("not json at all");
    let signature = STANDARD.encode(SigningKey::<Sha1>::new(private).sign(value.as_bytes()).to_vec());
    let profile = signed_profile(&value, &signature);

    let err = service().profile_textures(&profile).unwrap_err();
    assert!(matches!(err, TextureError::PayloadDecode(_)));
}
