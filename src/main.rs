use anyhow::Context;
use doomcast::config::{RAY_COLUMNS, SCREEN_HEIGHT, SCREEN_WIDTH, SEED_ENV, TICK_RATE};
use doomcast::game::Game;
use doomcast::hud::draw_hud;
use doomcast::input::InputCollector;
use doomcast::renderer::Renderer;
use pixels::{Pixels, SurfaceTexture};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{CursorGrabMode, WindowBuilder},
};

fn world_seed() -> u64 {
    std::env::var(SEED_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::thread_rng().gen())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = world_seed();
    log::info!("world seed {seed} (set {SEED_ENV} to replay it)");
    let mut game = Game::generate(&mut StdRng::seed_from_u64(seed))?;
    let mut renderer = Renderer::new(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize, RAY_COLUMNS)?;
    let mut controls = InputCollector::new();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("doomcast")
        .with_inner_size(LogicalSize::new(SCREEN_WIDTH as f64, SCREEN_HEIGHT as f64))
        .with_resizable(false)
        .build(&event_loop)
        .context("creating window")?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let mut pixels =
        Pixels::new(SCREEN_WIDTH, SCREEN_HEIGHT, surface_texture).context("creating pixel surface")?;

    // Capturar el cursor para rotar con el mouse
    if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
        log::warn!("cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);

    let tick = Duration::from_secs_f64(1.0 / TICK_RATE as f64);
    let mut next_tick = Instant::now();
    let mut fps_count = 0u32;
    let mut fps_since = Instant::now();

    event_loop.run(move |event, _, control_flow| match event {
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta: (dx, _dy) },
            ..
        } => controls.on_mouse_delta(dx as f32),
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(keycode),
                        ..
                    },
                ..
            } => {
                if state == ElementState::Pressed && keycode == VirtualKeyCode::Escape {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                controls.on_key(keycode, state);
            }
            WindowEvent::MouseInput { state, button, .. } => controls.on_mouse_button(button, state),
            _ => {}
        },
        Event::MainEventsCleared => {
            let now = Instant::now();
            if now < next_tick {
                *control_flow = ControlFlow::WaitUntil(next_tick);
                return;
            }

            game.tick(&controls.take());
            renderer.render(&game);
            draw_hud(renderer.frame_mut(), &game);
            renderer.frame().copy_to_rgba(pixels.frame_mut());
            if let Err(e) = pixels.render() {
                log::error!("present failed: {e}");
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Sin recuperar ticks perdidos
            next_tick += tick;
            if next_tick < now {
                next_tick = now + tick;
            }
            *control_flow = ControlFlow::WaitUntil(next_tick);

            fps_count += 1;
            let elapsed = now.duration_since(fps_since).as_secs_f32();
            if elapsed >= 1.0 {
                log::debug!("fps {:.0}", fps_count as f32 / elapsed);
                fps_count = 0;
                fps_since = now;
            }
        }
        _ => {}
    });
}
