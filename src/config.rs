// Pantalla y resolucion de rayos
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 600;
// Rayos por frame; cada uno cubre una banda de SCREEN_WIDTH / RAY_COLUMNS columnas
pub const RAY_COLUMNS: usize = SCREEN_WIDTH as usize / 4;

pub const MAP_WIDTH: usize = 24;
pub const MAP_HEIGHT: usize = 24;
pub const TEXTURE_SIZE: usize = 64;

pub const TICK_RATE: u32 = 60;
pub const TRIG_TABLE_SIZE: usize = 1024;

// Raycaster
pub const MIN_WALL_DIST: f32 = 0.05;
pub const MAX_WALL_HEIGHT_FACTOR: i32 = 10;
pub const Y_SIDE_SHADE: f32 = 0.7;
pub const CEILING_COLOR: u32 = 0xFF33_3333;

// Sprites
pub const SPRITE_NEAR: f32 = 0.1;
pub const SPRITE_CULL_DIST2: f32 = 400.0;
pub const SPRITE_MAX_SCALE: i32 = 2;
pub const SPRITE_STRIDE: i32 = 2;

// Jugador
pub const PLAYER_SPAWN: (f32, f32) = (5.0, 5.0);
pub const PLAYER_HEALTH: i32 = 100;
pub const MOVE_SPEED: f32 = 0.1;
pub const ROT_SPEED: f32 = 0.05;
pub const CAMERA_PLANE: f32 = 0.66;
pub const MOUSE_SENSITIVITY: f32 = 0.01;
pub const WALL_CLEARANCE: f32 = 0.1;

// Enemigos
pub const ACTOR_HEALTH: i32 = 50;
pub const ACTOR_SPEED: f32 = 0.03;
pub const ACTOR_MIN_DISTANCE: f32 = 0.5;
pub const AI_UPDATE_INTERVAL: u64 = 2;
pub const CONTACT_RADIUS: f32 = 0.5;
pub const CONTACT_DAMAGE: i32 = 1;

// Disparo
pub const HITSCAN_HALF_ANGLE: f32 = 0.26;
pub const HITSCAN_RANGE: f32 = 8.0;
pub const HITSCAN_DAMAGE: i32 = 10;

// Generacion del mundo
pub const INTERIOR_WALL_ATTEMPTS: usize = 50;
pub const SPAWN_CLEARING: i32 = 3;
pub const ACTOR_COUNT: usize = 5;
pub const ACTOR_SPAWN_CLEARING: i32 = 5;
pub const ACTOR_PLACEMENT_TRIES: usize = 200;
pub const SEED_ENV: &str = "DOOMCAST_SEED";
