use crate::config::TRIG_TABLE_SIZE;
use std::f32::consts::TAU;

/// Tablas de seno/coseno cuantizadas a `TRIG_TABLE_SIZE` pasos por vuelta.
///
/// Se construye una sola vez y se pasa por referencia. El indice se trunca,
/// asi que el error queda por debajo de un paso angular (2pi/1024, ~0.35 grados).
pub struct TrigTable {
    sin: Vec<f32>,
    cos: Vec<f32>,
}

impl TrigTable {
    pub fn new() -> Self {
        let (sin, cos): (Vec<f32>, Vec<f32>) = (0..TRIG_TABLE_SIZE)
            .map(|i| {
                let angle = TAU * i as f32 / TRIG_TABLE_SIZE as f32;
                (angle.sin(), angle.cos())
            })
            .unzip();
        Self { sin, cos }
    }

    fn index(angle: f32) -> usize {
        let n = TRIG_TABLE_SIZE as i64;
        // truncar hacia cero y luego envolver negativos a [0, n)
        let raw = (angle * TRIG_TABLE_SIZE as f32 / TAU) as i64;
        raw.rem_euclid(n) as usize
    }

    pub fn sin(&self, angle: f32) -> f32 {
        self.sin[Self::index(angle)]
    }

    pub fn cos(&self, angle: f32) -> f32 {
        self.cos[Self::index(angle)]
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = TAU / TRIG_TABLE_SIZE as f32;

    #[test]
    fn exact_at_table_points() {
        let t = TrigTable::new();
        assert_eq!(t.sin(0.0), 0.0);
        assert_eq!(t.cos(0.0), 1.0);
        assert!((t.sin(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn error_bounded_by_one_step() {
        let t = TrigTable::new();
        let mut a = -7.0f32;
        while a < 7.0 {
            assert!((t.sin(a) - a.sin()).abs() <= STEP, "sin({a})");
            assert!((t.cos(a) - a.cos()).abs() <= STEP, "cos({a})");
            a += 0.013;
        }
    }

    #[test]
    fn negative_angles_wrap() {
        let t = TrigTable::new();
        let a = 0.5f32;
        assert!((t.sin(-a) + t.sin(a)).abs() < 1e-6);
        assert!((t.cos(-a) - t.cos(a)).abs() < 1e-6);
        assert!((t.sin(-TAU - a) + t.sin(a)).abs() < 1e-2);
    }
}
