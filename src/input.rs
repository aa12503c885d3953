use winit::event::{ElementState, MouseButton, VirtualKeyCode};

/// Entrada de un tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InputState {
    /// +1 adelante, -1 atras.
    pub forward: f32,
    /// +1 derecha, -1 izquierda.
    pub strafe: f32,
    /// Movimiento del mouse (pixeles) desde el tick anterior.
    pub rotation: f32,
    /// Giro por teclado, +1 izquierda.
    pub turn: f32,
    pub fire: bool,
}

/// Junta eventos de teclado y mouse entre ticks.
pub struct InputCollector {
    pressed: [bool; 256],
    mouse_dx: f32,
    fire_queued: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self {
            pressed: [false; 256],
            mouse_dx: 0.0,
            fire_queued: false,
        }
    }

    pub fn on_key(&mut self, key: VirtualKeyCode, state: ElementState) {
        let idx = key as usize;
        if idx < self.pressed.len() {
            self.pressed[idx] = state == ElementState::Pressed;
        }
    }

    pub fn on_mouse_delta(&mut self, dx: f32) {
        self.mouse_dx += dx;
    }

    // Un disparo por click
    pub fn on_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left && state == ElementState::Pressed {
            self.fire_queued = true;
        }
    }

    fn is_down(&self, key: VirtualKeyCode) -> bool {
        self.pressed[key as usize]
    }

    fn axis(&self, pos: &[VirtualKeyCode], neg: &[VirtualKeyCode]) -> f32 {
        let any = |keys: &[VirtualKeyCode]| keys.iter().any(|&k| self.is_down(k));
        match (any(pos), any(neg)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Estado del tick; vacia lo acumulado del mouse y el disparo.
    pub fn take(&mut self) -> InputState {
        use VirtualKeyCode::*;
        let state = InputState {
            forward: self.axis(&[W, Up], &[S, Down]),
            strafe: self.axis(&[D], &[A]),
            rotation: self.mouse_dx,
            turn: self.axis(&[Q, Left], &[E, Right]),
            fire: self.fire_queued,
        };
        self.mouse_dx = 0.0;
        self.fire_queued = false;
        state
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}
