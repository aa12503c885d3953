use crate::actor::Actor;
use crate::config::{
    AI_UPDATE_INTERVAL, CONTACT_DAMAGE, CONTACT_RADIUS, HITSCAN_DAMAGE, HITSCAN_HALF_ANGLE,
    HITSCAN_RANGE, MOUSE_SENSITIVITY, PLAYER_SPAWN,
};
use crate::input::InputState;
use crate::level::{generate, Grid};
use crate::player::Player;
use crate::trig::TrigTable;
use crate::vec2::Vec2;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Playing,
    GameOver,
}

pub struct Game {
    mode: Mode,
    pub grid: Grid,
    pub player: Player,
    pub actors: Vec<Actor>,
    trig: TrigTable,
    ticks: u64,
}

impl Game {
    pub fn new(grid: Grid, player: Player, actors: Vec<Actor>) -> Self {
        Self {
            mode: Mode::Playing,
            grid,
            player,
            actors,
            trig: TrigTable::new(),
            ticks: 0,
        }
    }

    /// Mundo aleatorio con el jugador en el spawn.
    pub fn generate<R: Rng>(rng: &mut R) -> anyhow::Result<Self> {
        let world = generate(rng)?;
        let player = Player::new(Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1));
        Ok(Self::new(world.grid, player, world.actors))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_over(&self) -> bool {
        self.mode == Mode::GameOver
    }

    /// Un paso de simulacion. En GameOver no hace nada.
    pub fn tick(&mut self, input: &InputState) {
        if self.mode == Mode::GameOver {
            return;
        }
        if self.check_game_over() {
            return;
        }

        self.player.try_move(input.forward, input.strafe, &self.grid);

        let angle = -input.rotation * MOUSE_SENSITIVITY + input.turn * self.player.rot_speed;
        if angle != 0.0 {
            self.player.rotate(angle, &self.trig);
        }

        self.ticks += 1;
        if self.ticks % AI_UPDATE_INTERVAL == 0 {
            self.update_actors();
        }

        if input.fire && self.player.has_weapon {
            self.fire();
        }

        self.check_game_over();
    }

    fn update_actors(&mut self) {
        let target = self.player.position;
        for actor in self.actors.iter_mut().filter(|a| !a.is_dead) {
            actor.update(target, &self.grid);
            if (target - actor.position).length() < CONTACT_RADIUS {
                self.player.take_damage(CONTACT_DAMAGE);
            }
        }
    }

    /// Hit-scan: el primer enemigo vivo (en orden de indice) dentro del cono y
    /// del alcance recibe el danio. Devuelve su indice.
    pub fn fire(&mut self) -> Option<usize> {
        let origin = self.player.position;
        let facing = self.player.direction.normalize();

        for (i, actor) in self.actors.iter_mut().enumerate() {
            if actor.is_dead {
                continue;
            }
            let to_actor = actor.position - origin;
            let dist = to_actor.length();
            // A quemarropa cuenta como de frente
            let angle = if dist > 1e-4 {
                facing.dot(to_actor.normalize()).clamp(-1.0, 1.0).acos()
            } else {
                0.0
            };
            if angle < HITSCAN_HALF_ANGLE && dist < HITSCAN_RANGE {
                if actor.take_damage(HITSCAN_DAMAGE) {
                    log::debug!("actor {i} killed");
                } else {
                    log::debug!("actor {i} hit, health {}", actor.health);
                }
                return Some(i);
            }
        }
        log::debug!("shot missed");
        None
    }

    fn check_game_over(&mut self) -> bool {
        if !self.player.is_alive() {
            self.mode = Mode::GameOver;
            log::info!("game over after {} ticks", self.ticks);
            return true;
        }
        false
    }
}
