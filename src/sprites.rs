use crate::actor::Actor;
use crate::config::{SPRITE_CULL_DIST2, SPRITE_MAX_SCALE, SPRITE_NEAR, SPRITE_STRIDE};
use crate::frame::FrameBuffer;
use crate::player::Player;
use crate::raycaster::DepthBuffer;
use crate::texture::{alpha, blend, Texture};
use crate::vec2::Vec2;

const DET_EPS: f32 = 1e-6;

/// Sprite ya proyectado a pantalla.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpriteProjection {
    /// Profundidad sobre el eje de vista (transformY).
    pub depth: f32,
    pub screen_x: i32,
    pub width: i32,
    pub height: i32,
}

/// Indices de los enemigos vivos dentro del radio de dibujo, de lejano a cercano.
pub fn sort_visible(player: &Player, actors: &[Actor]) -> Vec<usize> {
    let mut order: Vec<(usize, f32)> = actors
        .iter()
        .enumerate()
        .filter(|(_, a)| !a.is_dead)
        .map(|(i, a)| (i, (a.position - player.position).length_squared()))
        .filter(|&(_, d2)| d2 <= SPRITE_CULL_DIST2)
        .collect();
    order.sort_by(|a, b| b.1.total_cmp(&a.1));
    order.into_iter().map(|(i, _)| i).collect()
}

/// Pasa `pos` a espacio de camara con la inversa de [plane | direction] y lo
/// proyecta. `None` si queda detras (o casi encima) de la camara.
pub fn project(player: &Player, pos: Vec2, screen_w: i32, screen_h: i32) -> Option<SpriteProjection> {
    let (dir, plane) = (player.direction, player.plane);
    let det = plane.x * dir.y - dir.x * plane.y;
    if det.abs() < DET_EPS {
        log::debug!("degenerate camera: direction {dir:?} parallel to plane {plane:?}");
        return None;
    }
    let inv_det = 1.0 / det;
    let rel = pos - player.position;
    let transform_x = inv_det * (dir.y * rel.x - dir.x * rel.y);
    let transform_y = inv_det * (-plane.y * rel.x + plane.x * rel.y);

    if transform_y <= SPRITE_NEAR {
        return None;
    }

    let screen_x = (screen_w as f32 / 2.0 * (1.0 + transform_x / transform_y)) as i32;
    let size = (screen_h as f32 / transform_y).abs() as i32;
    Some(SpriteProjection {
        depth: transform_y,
        screen_x,
        width: size.min(screen_w * SPRITE_MAX_SCALE),
        height: size.min(screen_h * SPRITE_MAX_SCALE),
    })
}

pub fn draw_sprite(frame: &mut FrameBuffer, depth: &DepthBuffer, sprite: &SpriteProjection, texture: &Texture) {
    if sprite.width <= 0 || sprite.height <= 0 {
        return;
    }
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    let size = texture.size() as i32;

    let left = sprite.screen_x - sprite.width / 2;
    let top = h / 2 - sprite.height / 2;
    let (x0, x1) = (left.max(0), (left + sprite.width).min(w));
    let (y0, y1) = (top.max(0), (top + sprite.height).min(h));
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    // Sprites grandes: muestrear cada `step` pixeles y replicar en el bloque
    let step = if sprite.height > h / 2 { SPRITE_STRIDE } else { 1 };

    for x in (x0..x1).step_by(step as usize) {
        let tex_x = ((x - left) * size / sprite.width) as usize;
        for y in (y0..y1).step_by(step as usize) {
            let tex_y = ((y - top) * size / sprite.height) as usize;
            let texel = texture.sample(tex_x, tex_y);
            if alpha(texel) == 0 {
                continue;
            }
            for px in x..(x + step).min(x1) {
                // Tapado por una pared mas cercana
                if sprite.depth > depth.get(px as usize) {
                    continue;
                }
                for py in y..(y + step).min(y1) {
                    let (px, py) = (px as usize, py as usize);
                    frame.set(px, py, blend(texel, frame.get(px, py)));
                }
            }
        }
    }
}

pub fn render_sprites(
    frame: &mut FrameBuffer,
    depth: &DepthBuffer,
    player: &Player,
    actors: &[Actor],
    texture: &Texture,
) {
    let (w, h) = (frame.width() as i32, frame.height() as i32);
    for i in sort_visible(player, actors) {
        if let Some(sprite) = project(player, actors[i].position, w, h) {
            draw_sprite(frame, depth, &sprite, texture);
        }
    }
}
