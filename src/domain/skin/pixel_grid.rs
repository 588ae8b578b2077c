use image::{imageops, Rgba, RgbaImage};

use crate::shared::result::{AppResult, TextureError};

/// Píxel empaquetado como `0xAARRGGBB` (alfa sin premultiplicar).
pub type Argb = u32;

pub const TRANSPARENT: Argb = 0x0000_0000;

pub const fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Argb {
    ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

pub fn channels(pixel: Argb) -> (u8, u8, u8, u8) {
    (
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Lienzo RGBA8 sobre `image::RgbaImage`, origen arriba a la izquierda.
///
/// La API pública habla en `Argb`; las dimensiones no cambian después de construirlo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    /// Lienzo completamente transparente.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn filled(width: u32, height: u32, pixel: Argb) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, to_rgba(pixel)),
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Argb>) -> AppResult<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TextureError::InvalidPixelBuffer {
                expected,
                actual: pixels.len(),
            });
        }
        let rgba = pixels.into_iter().flat_map(|pixel| to_rgba(pixel).0).collect();
        Self::from_rgba_vec(width, height, rgba)
    }

    /// Copia bytes RGBA8 (como los entrega `image`) en un lienzo nuevo.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> AppResult<Self> {
        Self::from_rgba_vec(width, height, rgba.to_vec())
    }

    fn from_rgba_vec(width: u32, height: u32, rgba: Vec<u8>) -> AppResult<Self> {
        let actual = rgba.len() / 4;
        RgbaImage::from_raw(width, height, rgba)
            .map(Self::from_image)
            .ok_or(TextureError::InvalidPixelBuffer {
                expected: width as usize * height as usize,
                actual,
            })
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        self.image.as_raw().clone()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Píxeles en orden de filas.
    pub fn pixels(&self) -> impl Iterator<Item = Argb> + '_ {
        self.image.pixels().map(to_argb)
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Argb> {
        self.contains(x, y).then(|| to_argb(self.image.get_pixel(x, y)))
    }

    /// Escribe un píxel. Fuera de rango no tiene efecto y devuelve `false`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Argb) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.image.put_pixel(x, y, to_rgba(pixel));
        true
    }

    /// Copia un rectángulo a un lienzo nuevo; lo que cae fuera de `self` queda transparente.
    pub fn crop(&self, rect: Rect) -> PixelGrid {
        let mut region = PixelGrid::new(rect.width, rect.height);
        let visible =
            imageops::crop_imm(&self.image, rect.x, rect.y, rect.width, rect.height).to_image();
        imageops::replace(&mut region.image, &visible, 0, 0);
        region
    }

    /// Copia opaca de `block` en `(x, y)`, recortada a los límites del lienzo.
    pub fn put(&mut self, x: u32, y: u32, block: &PixelGrid) {
        imageops::replace(&mut self.image, &block.image, i64::from(x), i64::from(y));
    }

    /// Copia `block` en `(x, y)` saltando los píxeles de relleno negro o blanco.
    ///
    /// Los píxeles que sí se copian reemplazan al destino, alfa incluido; no hay mezcla.
    pub fn overlay(&mut self, x: u32, y: u32, block: &PixelGrid) {
        for (bx, by, pixel) in block.image.enumerate_pixels() {
            let pixel = to_argb(pixel);
            if is_placeholder(pixel) {
                continue;
            }
            if let (Some(dx), Some(dy)) = (x.checked_add(bx), y.checked_add(by)) {
                self.set(dx, dy, pixel);
            }
        }
    }
}

fn to_rgba(pixel: Argb) -> Rgba<u8> {
    let (alpha, red, green, blue) = channels(pixel);
    Rgba([red, green, blue, alpha])
}

fn to_argb(pixel: &Rgba<u8>) -> Argb {
    let [red, green, blue, alpha] = pixel.0;
    argb(alpha, red, green, blue)
}

/// Negro puro o blanco puro, con cualquier alfa: la capa exterior no tiene contenido ahí.
pub fn is_placeholder(pixel: Argb) -> bool {
    let rgb = pixel & 0x00FF_FFFF;
    rgb == 0x0000_0000 || rgb == 0x00FF_FFFF
}
