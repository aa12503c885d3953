use crate::frame::FrameBuffer;
use crate::game::Game;
use crate::raycaster::{render_walls, DepthBuffer};
use crate::sprites::render_sprites;
use crate::texture::TextureSet;
use anyhow::ensure;

/// Duenio del frame buffer, el depth buffer y las texturas.
pub struct Renderer {
    frame: FrameBuffer,
    depth: DepthBuffer,
    textures: TextureSet,
    ray_columns: usize,
}

impl Renderer {
    pub fn new(width: usize, height: usize, ray_columns: usize) -> anyhow::Result<Self> {
        ensure!(width > 0 && height > 0, "screen extents must be non-zero, got {width}x{height}");
        ensure!(
            ray_columns > 0 && ray_columns <= width,
            "ray columns must be in 1..={width}, got {ray_columns}"
        );
        Ok(Self {
            frame: FrameBuffer::new(width, height),
            depth: DepthBuffer::new(width),
            textures: TextureSet::new(),
            ray_columns,
        })
    }

    /// Dibuja un frame completo: paredes/techo/piso y luego sprites contra la
    /// profundidad de ese mismo pase.
    pub fn render(&mut self, game: &Game) -> &FrameBuffer {
        self.depth.reset();
        render_walls(
            &mut self.frame,
            &mut self.depth,
            self.ray_columns,
            &game.grid,
            &game.player,
            &self.textures,
        );
        render_sprites(&mut self.frame, &self.depth, &game.player, &game.actors, &self.textures.enemy);
        &self.frame
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    // Para el HUD, que dibuja encima despues del render
    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }
}
