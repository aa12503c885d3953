use crate::config::PLAYER_HEALTH;
use crate::frame::FrameBuffer;
use crate::game::Game;

const BAR_W: i32 = 200;
const BAR_H: i32 = 20;
const BAR_BG: u32 = 0xFF22_2222;
const BAR_FILL: u32 = 0xFF00_FF00;
const CROSSHAIR: i32 = 10;
const WHITE: u32 = 0xFFFF_FFFF;
const GAME_OVER: u32 = 0xFFFF_0000;

/// HUD encima del frame ya renderizado.
pub fn draw_hud(frame: &mut FrameBuffer, game: &Game) {
    let (w, h) = (frame.width() as i32, frame.height() as i32);

    // Barra de vida abajo a la izquierda
    let (bx, by) = (20, h - 40);
    frame.fill_rect(bx, by, BAR_W, BAR_H, BAR_BG);
    let fill = game.player.health.clamp(0, PLAYER_HEALTH) * BAR_W / PLAYER_HEALTH;
    frame.fill_rect(bx, by, fill, BAR_H, BAR_FILL);

    if game.player.has_weapon {
        let (cx, cy) = (w / 2, h / 2);
        frame.fill_rect(cx - CROSSHAIR, cy, 2 * CROSSHAIR + 1, 1, WHITE);
        frame.fill_rect(cx, cy - CROSSHAIR, 1, 2 * CROSSHAIR + 1, WHITE);
    }

    if game.is_over() {
        let banner_w = 9 * 20;
        frame.fill_rect((w - banner_w) / 2, h / 2, banner_w, 40, GAME_OVER);
    }
}
