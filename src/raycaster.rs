use crate::config::{CEILING_COLOR, MAX_WALL_HEIGHT_FACTOR, MIN_WALL_DIST, Y_SIDE_SHADE};
use crate::frame::FrameBuffer;
use crate::level::Grid;
use crate::player::Player;
use crate::texture::{shade, TextureSet};
use crate::vec2::Vec2;
use std::ops::Range;

// Delta "infinito" para rayos paralelos a un eje
const PARALLEL_DELTA: f32 = 1e30;

// Profundidad por columna
pub struct DepthBuffer {
    cols: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize) -> Self {
        Self { cols: vec![f32::INFINITY; width] }
    }

    pub fn reset(&mut self) {
        self.cols.fill(f32::INFINITY);
    }

    pub fn len(&self) -> usize {
        self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    #[inline]
    pub fn get(&self, x: usize) -> f32 {
        self.cols[x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, dist: f32) {
        self.cols[x] = dist;
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cols
    }
}

/// Cara de la celda que cruzo el rayo al pegar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Linea vertical de la rejilla (el paso fue en x).
    X,
    /// Linea horizontal (paso en y); se dibuja mas oscura.
    Y,
}

#[derive(Copy, Clone, Debug)]
pub struct RayHit {
    pub map_x: i32,
    pub map_y: i32,
    pub side: Side,
    /// Distancia perpendicular al plano de camara, ya con el minimo aplicado.
    pub perp_dist: f32,
    pub ray_dir: Vec2,
    pub tex_x: usize,
    /// Pasos DDA hasta el impacto.
    pub steps: usize,
}

/// Columna de rayo -> desplazamiento en espacio de camara, en [-1, 1).
pub fn camera_x(column: usize, columns: usize) -> f32 {
    2.0 * column as f32 / columns as f32 - 1.0
}

pub fn cast_ray(player: &Player, grid: &Grid, camera_x: f32, tex_size: usize) -> RayHit {
    let pos = player.position;
    let ray_dir = player.direction + player.plane * camera_x;

    let mut map_x = pos.x.floor() as i32;
    let mut map_y = pos.y.floor() as i32;

    let delta_dist_x = if ray_dir.x == 0.0 { PARALLEL_DELTA } else { (1.0 / ray_dir.x).abs() };
    let delta_dist_y = if ray_dir.y == 0.0 { PARALLEL_DELTA } else { (1.0 / ray_dir.y).abs() };

    let (step_x, mut side_dist_x) = if ray_dir.x < 0.0 {
        (-1, (pos.x - map_x as f32) * delta_dist_x)
    } else {
        (1, (map_x as f32 + 1.0 - pos.x) * delta_dist_x)
    };
    let (step_y, mut side_dist_y) = if ray_dir.y < 0.0 {
        (-1, (pos.y - map_y as f32) * delta_dist_y)
    } else {
        (1, (map_y as f32 + 1.0 - pos.y) * delta_dist_y)
    };

    // El borde es pared, asi que el rayo pega antes de salir; fuera de rango
    // tambien corta el bucle
    let mut steps = 0;
    let side = loop {
        let side = if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            Side::X
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            Side::Y
        };
        steps += 1;
        if grid.is_wall(map_x, map_y) {
            break side;
        }
    };

    let raw_dist = match side {
        Side::X => side_dist_x - delta_dist_x,
        Side::Y => side_dist_y - delta_dist_y,
    };
    let perp_dist = raw_dist.max(MIN_WALL_DIST);

    let mut wall_x = match side {
        Side::X => pos.y + raw_dist * ray_dir.y,
        Side::Y => pos.x + raw_dist * ray_dir.x,
    };
    wall_x -= wall_x.floor();

    let mut tex_x = ((wall_x * tex_size as f32) as usize).min(tex_size - 1);
    let mirrored = match side {
        Side::X => ray_dir.x > 0.0,
        Side::Y => ray_dir.y < 0.0,
    };
    if mirrored {
        tex_x = tex_size - tex_x - 1;
    }

    RayHit {
        map_x,
        map_y,
        side,
        perp_dist,
        ray_dir,
        tex_x,
        steps,
    }
}

/// Franja vertical de pared proyectada. `top` no esta recortado; las filas
/// visibles son `draw_start..draw_end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WallSlice {
    pub line_height: i32,
    pub top: i32,
    pub draw_start: i32,
    pub draw_end: i32,
}

pub fn wall_slice(perp_dist: f32, screen_h: i32) -> WallSlice {
    let line_height = ((screen_h as f32 / perp_dist) as i32).min(screen_h * MAX_WALL_HEIGHT_FACTOR);
    let top = screen_h / 2 - line_height / 2;
    WallSlice {
        line_height,
        top,
        draw_start: top.max(0),
        draw_end: (top + line_height).clamp(0, screen_h),
    }
}

/// Columnas de pantalla que cubre el rayo `column`. Las bandas son contiguas
/// y cubren `0..width` exactamente una vez.
pub fn band(column: usize, columns: usize, width: usize) -> Range<usize> {
    column * width / columns..(column + 1) * width / columns
}

/// Pinta techo, pared y piso de una columna en `out` (alto de pantalla).
fn shade_column(out: &mut [u32], hit: &RayHit, player: &Player, textures: &TextureSet) {
    let h = out.len() as i32;
    let slice = wall_slice(hit.perp_dist, h);
    let tex = &textures.wall;
    let size = tex.size() as i32;

    for px in &mut out[..slice.draw_start as usize] {
        *px = CEILING_COLOR;
    }

    for y in slice.draw_start..slice.draw_end {
        let tex_y = ((y - slice.top) * size / slice.line_height.max(1)) as usize;
        let texel = tex.sample(hit.tex_x, tex_y);
        out[y as usize] = match hit.side {
            Side::X => texel,
            Side::Y => shade(texel, Y_SIDE_SHADE),
        };
    }

    // Piso: proyectar cada fila de vuelta al plano del suelo por este rayo
    let floor = &textures.floor;
    let fsize = floor.size() as f32;
    for y in slice.draw_end..h {
        let row_dist = h as f32 / (2 * y + 1 - h) as f32;
        let p = player.position + hit.ray_dir * row_dist;
        let fx = ((p.x - p.x.floor()) * fsize) as usize;
        let fy = ((p.y - p.y.floor()) * fsize) as usize;
        out[y as usize] = floor.sample(fx, fy);
    }
}

/// Paso de paredes: `ray_columns` rayos, cada resultado replicado en su banda
/// de pantalla. Escribe todas las columnas de `depth` y todos los pixeles de `frame`.
pub fn render_walls(
    frame: &mut FrameBuffer,
    depth: &mut DepthBuffer,
    ray_columns: usize,
    grid: &Grid,
    player: &Player,
    textures: &TextureSet,
) {
    let (w, h) = (frame.width(), frame.height());
    let mut column = vec![0u32; h];

    for x in 0..ray_columns {
        let hit = cast_ray(player, grid, camera_x(x, ray_columns), textures.wall.size());
        shade_column(&mut column, &hit, player, textures);

        for screen_x in band(x, ray_columns, w) {
            depth.set(screen_x, hit.perp_dist);
            for (y, &c) in column.iter().enumerate() {
                frame.set(screen_x, y, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TEXTURE_SIZE;
    use crate::level::Cell;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y))
    }

    #[test]
    fn center_ray_hits_west_border() {
        let grid = Grid::bordered(24, 24).unwrap();
        let p = player_at(5.0, 5.0);
        let hit = cast_ray(&p, &grid, 0.0, TEXTURE_SIZE);
        assert_eq!((hit.map_x, hit.map_y), (0, 5));
        assert_eq!(hit.side, Side::X);
        // cara este de la celda 0 esta en x = 1
        assert!((hit.perp_dist - 4.0).abs() < 1e-4, "{}", hit.perp_dist);
    }

    #[test]
    fn dda_terminates_within_grid_extent() {
        let grid = Grid::bordered(24, 24).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2000 {
            let mut p = player_at(rng.gen_range(1.01..22.99), rng.gen_range(1.01..22.99));
            let a: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
            p.direction = Vec2::new(a.cos(), a.sin());
            p.plane = Vec2::new(-a.sin(), a.cos()) * 0.66;
            let hit = cast_ray(&p, &grid, rng.gen_range(-1.0..1.0), TEXTURE_SIZE);
            assert!(hit.steps <= 48, "{} steps", hit.steps);
            assert!(grid.is_wall(hit.map_x, hit.map_y));
            assert!(hit.perp_dist >= MIN_WALL_DIST);
            assert!(hit.tex_x < TEXTURE_SIZE);
        }
    }

    #[test]
    fn flush_against_wall_is_clamped() {
        let grid = Grid::bordered(8, 8).unwrap();
        let p = player_at(1.0001, 4.5);
        let hit = cast_ray(&p, &grid, 0.0, TEXTURE_SIZE);
        assert_eq!(hit.map_x, 0);
        assert_eq!(hit.perp_dist, MIN_WALL_DIST);
        let slice = wall_slice(hit.perp_dist, 600);
        assert!(slice.line_height <= 600 * MAX_WALL_HEIGHT_FACTOR);
        assert_eq!((slice.draw_start, slice.draw_end), (0, 600));
    }

    #[test]
    fn texture_mirrors_by_approach_side() {
        // mismo punto de pared visto desde lados opuestos
        let mut cells = vec![Cell::Empty; 9 * 3];
        for (i, c) in cells.iter_mut().enumerate() {
            let (x, y) = (i % 9, i / 9);
            if x == 0 || y == 0 || x == 8 || y == 2 || x == 4 {
                *c = Cell::Wall;
            }
        }
        let grid = Grid::new(9, 3, cells).unwrap();
        let mut west = player_at(2.5, 1.25);
        west.direction = Vec2::new(1.0, 0.0);
        west.plane = Vec2::new(0.0, -0.66);
        let mut east = player_at(6.5, 1.25);
        east.direction = Vec2::new(-1.0, 0.0);
        east.plane = Vec2::new(0.0, 0.66);
        let a = cast_ray(&west, &grid, 0.0, TEXTURE_SIZE);
        let b = cast_ray(&east, &grid, 0.0, TEXTURE_SIZE);
        assert_eq!(a.map_x, 4);
        assert_eq!(b.map_x, 4);
        assert_eq!(a.tex_x, TEXTURE_SIZE - 1 - TEXTURE_SIZE / 4);
        assert_eq!(b.tex_x, TEXTURE_SIZE / 4);
    }

    #[test]
    fn bands_cover_every_column_once() {
        let mut seen = vec![0; 803];
        for x in 0..200 {
            for s in band(x, 200, 803) {
                seen[s] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn full_pass_writes_every_depth_and_pixel() {
        let grid = Grid::bordered(24, 24).unwrap();
        let p = player_at(5.5, 7.25);
        let textures = TextureSet::new();
        let mut frame = FrameBuffer::new(320, 200);
        frame.fill(0x0000_0000);
        let mut depth = DepthBuffer::new(320);
        render_walls(&mut frame, &mut depth, 80, &grid, &p, &textures);
        assert!(depth.as_slice().iter().all(|d| d.is_finite()));
        // todo lo pintado es opaco, nada quedo en el valor previo
        assert!(frame.pixels().iter().all(|&c| c >> 24 == 0xFF));
    }

    #[test]
    fn y_side_is_darker() {
        let grid = Grid::bordered(10, 10).unwrap();
        let mut p = player_at(5.5, 5.5);
        p.direction = Vec2::new(0.0, 1.0);
        p.plane = Vec2::new(-0.66, 0.0);
        let textures = TextureSet::new();
        let hit = cast_ray(&p, &grid, 0.0, TEXTURE_SIZE);
        assert_eq!(hit.side, Side::Y);
        let mut col = vec![0u32; 100];
        shade_column(&mut col, &hit, &p, &textures);
        let texel = textures.wall.sample(hit.tex_x, TEXTURE_SIZE / 2);
        assert_eq!(col[50], shade(texel, Y_SIDE_SHADE));
    }
}
