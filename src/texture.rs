use crate::config::TEXTURE_SIZE;

// Colores empaquetados 0xAARRGGBB

#[inline]
pub fn alpha(c: u32) -> u32 {
    c >> 24
}

/// Escala los canales RGB por `factor`; el alfa queda igual.
pub fn shade(c: u32, factor: f32) -> u32 {
    let ch = |shift: u32| (((c >> shift) & 0xFF) as f32 * factor) as u32 & 0xFF;
    (c & 0xFF00_0000) | (ch(16) << 16) | (ch(8) << 8) | ch(0)
}

/// `src` sobre `dst` segun el alfa de `src`. El resultado es opaco.
pub fn blend(src: u32, dst: u32) -> u32 {
    let a = alpha(src);
    match a {
        0 => dst,
        255 => src,
        _ => {
            let mix = |shift: u32| {
                let s = (src >> shift) & 0xFF;
                let d = (dst >> shift) & 0xFF;
                (s * a + d * (255 - a)) / 255
            };
            0xFF00_0000 | (mix(16) << 16) | (mix(8) << 8) | mix(0)
        }
    }
}

/// Textura cuadrada generada por codigo.
#[derive(Clone, Debug)]
pub struct Texture {
    size: usize,
    texels: Vec<u32>,
}

impl Texture {
    pub fn from_fn(size: usize, f: impl Fn(usize, usize) -> u32) -> Self {
        let mut texels = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                texels.push(f(x, y));
            }
        }
        Self { size, texels }
    }

    pub fn solid(size: usize, color: u32) -> Self {
        Self::from_fn(size, |_, _| color)
    }

    // Damero de 8px azul/gris
    pub fn wall() -> Self {
        Self::from_fn(TEXTURE_SIZE, |x, y| {
            if (x / 8 + y / 8) % 2 == 1 {
                0xFF00_00FF
            } else {
                0xFF88_8888
            }
        })
    }

    pub fn floor() -> Self {
        Self::from_fn(TEXTURE_SIZE, |x, y| {
            if (x / 16 + y / 16) % 2 == 1 {
                0xFF00_5500
            } else {
                0xFF00_3300
            }
        })
    }

    /// Disco rojo: opaco en el centro, semitransparente en el anillo, vacio afuera.
    pub fn enemy() -> Self {
        let half = (TEXTURE_SIZE / 2) as f32;
        Self::from_fn(TEXTURE_SIZE, |x, y| {
            let dx = x as f32 - half;
            let dy = y as f32 - half;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < TEXTURE_SIZE as f32 / 3.0 {
                0xFFFF_0000
            } else if dist < half {
                0x88FF_0000
            } else {
                0
            }
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    // Coordenadas fuera de rango se recortan al borde
    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> u32 {
        let x = x.min(self.size - 1);
        let y = y.min(self.size - 1);
        self.texels[y * self.size + x]
    }
}

/// Las tres texturas del juego.
pub struct TextureSet {
    pub wall: Texture,
    pub floor: Texture,
    pub enemy: Texture,
}

impl TextureSet {
    pub fn new() -> Self {
        Self {
            wall: Texture::wall(),
            floor: Texture::floor(),
            enemy: Texture::enemy(),
        }
    }
}

impl Default for TextureSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_keeps_alpha() {
        assert_eq!(shade(0xFF64_C8FF, 0.5), 0xFF32_647F);
        assert_eq!(alpha(shade(0x1234_5678, 0.7)), 0x12);
    }

    #[test]
    fn blend_edges() {
        assert_eq!(blend(0, 0xFF12_3456), 0xFF12_3456);
        assert_eq!(blend(0xFFAA_BBCC, 0xFF12_3456), 0xFFAA_BBCC);
        let half = blend(0x80FF_0000, 0xFF00_0000);
        assert_eq!(alpha(half), 0xFF);
        assert_eq!((half >> 16) & 0xFF, 0x80);
    }

    #[test]
    fn enemy_corners_are_transparent() {
        let t = Texture::enemy();
        assert_eq!(alpha(t.sample(0, 0)), 0);
        assert_eq!(t.sample(TEXTURE_SIZE / 2, TEXTURE_SIZE / 2), 0xFFFF_0000);
        assert_eq!(t.sample(999, 999), t.sample(TEXTURE_SIZE - 1, TEXTURE_SIZE - 1));
    }
}
