use thiserror::Error;

pub type AppResult<T> = Result<T, TextureError>;

/// Errores del motor de texturas: firma, payload, dimensiones y colaboradores externos.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("La propiedad de texturas no tiene firma.")]
    MissingSignature,

    #[error("La firma de la propiedad de texturas no es válida.")]
    InvalidSignature,

    #[error("Firma de texturas mal formada: {0}")]
    MalformedSignature(String),

    #[error("No se pudo decodificar el payload de texturas: {0}")]
    PayloadDecode(String),

    #[error("Dimensiones de skin no soportadas {width}x{height}. Usa 64x64 o 64x32")]
    UnsupportedSkinDimensions { width: u32, height: u32 },

    #[error("Clave pública de sesión inválida: {0}")]
    InvalidPublicKey(String),

    #[error("El perfil no tiene textura de skin.")]
    SkinNotFound,

    #[error("Buffer de píxeles inválido: se esperaban {expected} píxeles, llegaron {actual}")]
    InvalidPixelBuffer { expected: usize, actual: usize },

    #[error("No se puede escalar {width}x{height} por {factor}: el lienzo resultante es demasiado grande")]
    ScaleOverflow { width: u32, height: u32, factor: u32 },

    #[error("No se pudo procesar la imagen: {0}")]
    Image(String),

    #[error("No se pudo descargar la textura: {0}")]
    TextureFetch(String),

    #[error("Configuración inválida: {0}")]
    Config(String),
}

impl TextureError {
    /// Errores que invalidan la confianza en la propiedad firmada.
    pub fn is_trust_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingSignature | Self::InvalidSignature | Self::MalformedSignature(_)
        )
    }
}

impl From<image::ImageError> for TextureError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}
