/// Buffer de pixeles 0xAARRGGBB, uno por pixel de pantalla.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: u32) {
        self.pixels[y * self.width + x] = color;
    }

    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    // Recorta el rectangulo a la pantalla
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        let (fw, fh) = (self.width as i32, self.height as i32);
        for yy in y.max(0)..(y + h).min(fh) {
            for xx in x.max(0)..(x + w).min(fw) {
                self.pixels[(yy * fw + xx) as usize] = color;
            }
        }
    }

    /// Copia al formato RGBA8 de la superficie de `pixels`.
    pub fn copy_to_rgba(&self, frame: &mut [u8]) {
        for (dst, &c) in frame.chunks_exact_mut(4).zip(self.pixels.iter()) {
            dst.copy_from_slice(&[(c >> 16) as u8, (c >> 8) as u8, c as u8, (c >> 24) as u8]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_byte_order() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.set(1, 0, 0xFF11_2233);
        let mut out = [0u8; 8];
        fb.copy_to_rgba(&mut out);
        assert_eq!(out, [0, 0, 0, 0, 0x11, 0x22, 0x33, 0xFF]);
    }

    #[test]
    fn fill_rect_clips() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(-2, 2, 10, 10, 7);
        assert_eq!(fb.pixels().iter().filter(|&&p| p == 7).count(), 8);
    }
}
