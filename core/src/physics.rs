// core/src/physics.rs
// Unit conversions and per-variant formula coefficients. Nothing here changes at runtime.

pub const M_IN_KM: f64 = 1000.0;   // meters per kilometer
pub const MIN_IN_H: f64 = 60.0;    // minutes per hour

/// Step length (m) for running and walking.
pub const LEN_STEP: f64 = 0.65;
/// Stroke length (m) for swimming.
pub const SWIM_LEN_STEP: f64 = 1.38;

pub const RUN_CAL_SPEED_MULT: f64 = 18.0;
pub const RUN_CAL_SPEED_SHIFT: f64 = 20.0;

pub const WLK_CAL_WEIGHT_MULT: f64 = 0.035;
pub const WLK_CAL_SPEED_HEIGHT_MULT: f64 = 0.029;

pub const SWM_CAL_SPEED_SHIFT: f64 = 1.1;
pub const SWM_CAL_WEIGHT_MULT: f64 = 2.0;

// --- RoundTo trait (public, used by report.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Action count (steps or strokes) to kilometers.
#[inline]
pub fn distance_km(action: u32, len_step_m: f64) -> f64 {
    action as f64 * len_step_m / M_IN_KM
}

/// km/h. Caller guarantees `duration_h > 0`.
#[inline]
pub fn speed_kmh(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Floor division on floats, `a // b` for positive operands.
#[inline]
pub fn floor_div(a: f64, b: f64) -> f64 {
    (a / b).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_three_places() {
        assert_eq!(0.99360001.round_to(3), 0.994);
        assert_eq!(699.7499.round_to(0), 700.0);
    }

    #[test]
    fn floor_div_drops_fraction() {
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(400.0, 180.0), 2.0);
    }
}
