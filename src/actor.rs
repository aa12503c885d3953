use crate::config::{ACTOR_HEALTH, ACTOR_MIN_DISTANCE, ACTOR_SPEED, WALL_CLEARANCE};
use crate::level::Grid;
use crate::vec2::Vec2;

/// Enemigo. La muerte es logica: queda en la coleccion con `is_dead = true`.
#[derive(Clone, Debug)]
pub struct Actor {
    pub position: Vec2,
    pub speed: f32,
    pub health: i32,
    pub is_dead: bool,
}

impl Actor {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            speed: ACTOR_SPEED,
            health: ACTOR_HEALTH,
            is_dead: false,
        }
    }

    /// Avanza directo hacia `target` si esta mas lejos que la distancia minima.
    pub fn update(&mut self, target: Vec2, grid: &Grid) {
        if self.is_dead {
            return;
        }
        let to_target = target - self.position;
        if to_target.length() > ACTOR_MIN_DISTANCE {
            let step = to_target.normalize() * self.speed;
            self.position = grid.slide(self.position, step, WALL_CLEARANCE);
        }
    }

    /// Resta `amount` de vida; devuelve true si este golpe lo mato.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_dead {
            return false;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.is_dead = true;
            return true;
        }
        false
    }
}
