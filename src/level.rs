use crate::actor::Actor;
use crate::config::{
    ACTOR_COUNT, ACTOR_PLACEMENT_TRIES, ACTOR_SPAWN_CLEARING, INTERIOR_WALL_ATTEMPTS, MAP_HEIGHT,
    MAP_WIDTH, PLAYER_SPAWN, SPAWN_CLEARING,
};
use crate::vec2::Vec2;
use anyhow::ensure;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Wall,
}

/// Rejilla fija `width x height`; el borde siempre es pared.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> anyhow::Result<Self> {
        ensure!(width > 0 && height > 0, "grid extents must be non-zero, got {width}x{height}");
        ensure!(
            cells.len() == width * height,
            "grid {width}x{height} needs {} cells, got {}",
            width * height,
            cells.len()
        );
        let grid = Self { width, height, cells };
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                ensure!(
                    !border || grid.cells[y * width + x] == Cell::Wall,
                    "border cell ({x}, {y}) is not a wall"
                );
            }
        }
        Ok(grid)
    }

    /// Rejilla vacia con solo el borde de paredes.
    pub fn bordered(width: usize, height: usize) -> anyhow::Result<Self> {
        Self::new(width, height, bordered_cells(width, height))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width + x as usize])
    }

    // Fuera de la rejilla cuenta como pared
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).map_or(true, |c| c == Cell::Wall)
    }

    pub fn is_wall_at(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || y < 0.0 {
            return true;
        }
        self.is_wall(x as i32, y as i32)
    }

    /// Mueve `from` por `delta` eje por eje, dejando `clearance` hacia donde se
    /// avanza. Si solo un eje choca, el otro se aplica igual (deslizar por la pared).
    pub fn slide(&self, from: Vec2, delta: Vec2, clearance: f32) -> Vec2 {
        let mut pos = from;
        let new_x = pos.x + delta.x;
        if !self.is_wall_at(new_x + clearance * delta.x.signum(), pos.y) {
            pos.x = new_x;
        }
        let new_y = pos.y + delta.y;
        if !self.is_wall_at(pos.x, new_y + clearance * delta.y.signum()) {
            pos.y = new_y;
        }
        pos
    }
}

fn bordered_cells(width: usize, height: usize) -> Vec<Cell> {
    let mut cells = vec![Cell::Empty; width * height];
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
                cells[y * width + x] = Cell::Wall;
            }
        }
    }
    cells
}

/// Mundo inicial: la rejilla y los enemigos colocados lejos del spawn.
pub struct World {
    pub grid: Grid,
    pub actors: Vec<Actor>,
}

fn chebyshev(ax: i32, ay: i32, bx: i32, by: i32) -> i32 {
    (ax - bx).abs().max((ay - by).abs())
}

pub fn generate<R: Rng>(rng: &mut R) -> anyhow::Result<World> {
    let (w, h) = (MAP_WIDTH, MAP_HEIGHT);
    let spawn = (PLAYER_SPAWN.0 as i32, PLAYER_SPAWN.1 as i32);
    let mut cells = bordered_cells(w, h);

    let mut walls = 0;
    for _ in 0..INTERIOR_WALL_ATTEMPTS {
        let x = rng.gen_range(1..w as i32 - 1);
        let y = rng.gen_range(1..h as i32 - 1);
        if chebyshev(x, y, spawn.0, spawn.1) > SPAWN_CLEARING {
            cells[y as usize * w + x as usize] = Cell::Wall;
            walls += 1;
        }
    }
    let grid = Grid::new(w, h, cells)?;

    let mut actors = Vec::with_capacity(ACTOR_COUNT);
    for _ in 0..ACTOR_COUNT {
        let placed = (0..ACTOR_PLACEMENT_TRIES).find_map(|_| {
            let x = rng.gen_range(2..w as i32 - 2);
            let y = rng.gen_range(2..h as i32 - 2);
            let clear = chebyshev(x, y, spawn.0, spawn.1) > ACTOR_SPAWN_CLEARING;
            (clear && !grid.is_wall(x, y)).then(|| Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
        });
        match placed {
            Some(pos) => actors.push(Actor::new(pos)),
            None => log::warn!("no free cell found for actor after {ACTOR_PLACEMENT_TRIES} tries"),
        }
    }

    log::info!("world generated: {walls} interior walls, {} actors", actors.len());
    Ok(World { grid, actors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_open_border() {
        let mut cells = bordered_cells(4, 4);
        cells[1] = Cell::Empty;
        assert!(Grid::new(4, 4, cells).is_err());
    }

    #[test]
    fn rejects_wrong_cell_count() {
        assert!(Grid::new(4, 4, vec![Cell::Wall; 15]).is_err());
        assert!(Grid::new(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn out_of_range_is_reported() {
        let g = Grid::bordered(5, 5).unwrap();
        assert_eq!(g.cell(-1, 2), None);
        assert_eq!(g.cell(5, 0), None);
        assert_eq!(g.cell(2, 2), Some(Cell::Empty));
        assert!(g.is_wall(99, 99));
    }

    #[test]
    fn slide_keeps_free_axis() {
        let g = Grid::bordered(6, 6).unwrap();
        // pegado a la pared oeste: x bloqueado, y libre
        let from = Vec2::new(1.05, 3.0);
        let to = g.slide(from, Vec2::new(-0.1, 0.2), 0.1);
        assert_eq!(to.x, from.x);
        assert!((to.y - 3.2).abs() < 1e-6);
    }

    #[test]
    fn generated_world_respects_clearings() {
        let mut rng = StdRng::seed_from_u64(7);
        let world = generate(&mut rng).unwrap();
        let g = &world.grid;
        for y in 2..=8 {
            for x in 2..=8 {
                assert!(!g.is_wall(x, y), "wall inside spawn clearing at ({x}, {y})");
            }
        }
        assert!(!world.actors.is_empty());
        for a in &world.actors {
            let (ax, ay) = (a.position.x as i32, a.position.y as i32);
            assert!(chebyshev(ax, ay, 5, 5) > ACTOR_SPAWN_CLEARING);
            assert!(!g.is_wall(ax, ay));
        }
    }
}
