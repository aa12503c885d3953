use crate::config::{CAMERA_PLANE, MOVE_SPEED, PLAYER_HEALTH, ROT_SPEED, WALL_CLEARANCE};
use crate::level::Grid;
use crate::trig::TrigTable;
use crate::vec2::Vec2;

/// Camara/jugador. `plane` es perpendicular a `direction`; su largo fija el FOV.
#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vec2,
    pub direction: Vec2,
    pub plane: Vec2,
    pub move_speed: f32,
    pub rot_speed: f32,
    pub health: i32,
    pub has_weapon: bool,
}

impl Player {
    /// Mirando hacia -x, con el plano de camara en +y.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            direction: Vec2::new(-1.0, 0.0),
            plane: Vec2::new(0.0, CAMERA_PLANE),
            move_speed: MOVE_SPEED,
            rot_speed: ROT_SPEED,
            health: PLAYER_HEALTH,
            has_weapon: true,
        }
    }

    // Misma matriz de rotacion para direccion y plano
    pub fn rotate(&mut self, angle: f32, trig: &TrigTable) {
        let (s, c) = (trig.sin(angle), trig.cos(angle));
        let d = self.direction;
        self.direction = Vec2::new(d.x * c - d.y * s, d.x * s + d.y * c);
        let p = self.plane;
        self.plane = Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c);
    }

    /// Desplazamiento pedido por la entrada, sin colisiones.
    pub fn movement(&self, forward: f32, strafe: f32) -> Vec2 {
        self.direction * (forward * self.move_speed) + self.direction.perp() * (strafe * self.move_speed)
    }

    pub fn try_move(&mut self, forward: f32, strafe: f32, grid: &Grid) {
        let delta = self.movement(forward, strafe);
        self.position = grid.slide(self.position, delta, WALL_CLEARANCE);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
