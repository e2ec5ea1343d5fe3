//! RGBA8 color field buffer

/// A 2D RGBA8 buffer: equirectangular for body surfaces, flat square for
/// ring textures.
///
/// Never mutated after synthesis; consumers read rows or the raw byte
/// slice for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorField {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ColorField {
    /// # Panics
    /// Panics if either dimension is zero.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "ColorField dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major from the top row
    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA of the pixel at (x, y)
    ///
    /// # Panics
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub(crate) fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }
}
