// core/src/registry.rs
use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;

use crate::error::{Result, WorkoutError};
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Builder for one variant. `params` already has the right length.
type BuildFn = fn(&[f64]) -> Result<Workout>;

#[derive(Clone, Copy)]
pub struct VariantSpec {
    pub kind: WorkoutKind,
    /// Number of positional parameters, base fields included.
    pub arity: usize,
    build: BuildFn,
}

static VARIANTS: Lazy<HashMap<&'static str, VariantSpec>> = Lazy::new(|| {
    let specs = [
        VariantSpec { kind: WorkoutKind::Swimming, arity: 5, build: build_swimming },
        VariantSpec { kind: WorkoutKind::Running, arity: 3, build: build_running },
        VariantSpec { kind: WorkoutKind::SportsWalking, arity: 4, build: build_walking },
    ];
    specs.into_iter().map(|s| (s.kind.code(), s)).collect()
});

/// Resolve a sensor package: code + positional parameters
/// `(action, duration_h, weight_kg[, extra1][, extra2])`.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let spec = VARIANTS
        .get(workout_type)
        .ok_or_else(|| WorkoutError::unknown(workout_type))?;

    if data.len() != spec.arity {
        return Err(WorkoutError::arity(workout_type, spec.arity, data.len()));
    }

    let workout = (spec.build)(data)?;
    debug!("resolved {} -> {:?}", workout_type, workout);
    Ok(workout)
}

pub fn variant_spec(workout_type: &str) -> Option<&'static VariantSpec> {
    VARIANTS.get(workout_type)
}

pub fn arity_of(workout_type: &str) -> Option<usize> {
    variant_spec(workout_type).map(|s| s.arity)
}

/// Known codes, sorted.
pub fn known_codes() -> Vec<&'static str> {
    let mut codes: Vec<_> = VARIANTS.keys().copied().collect();
    codes.sort_unstable();
    codes
}

// ----- parameter checks -----

fn count(field: &'static str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidParameter { field, value })
    }
}

fn base_fields(p: &[f64]) -> Result<(u32, f64, f64)> {
    Ok((
        count("action", p[0])?,
        positive("duration_h", p[1])?,
        positive("weight_kg", p[2])?,
    ))
}

fn build_running(p: &[f64]) -> Result<Workout> {
    let (action, duration_h, weight_kg) = base_fields(p)?;
    Ok(Running::new(action, duration_h, weight_kg).into())
}

fn build_walking(p: &[f64]) -> Result<Workout> {
    let (action, duration_h, weight_kg) = base_fields(p)?;
    let height_cm = positive("height_cm", p[3])?;
    Ok(SportsWalking::new(action, duration_h, weight_kg, height_cm).into())
}

fn build_swimming(p: &[f64]) -> Result<Workout> {
    let (action, duration_h, weight_kg) = base_fields(p)?;
    let length_pool_m = positive("length_pool_m", p[3])?;
    let count_pool = count("count_pool", p[4])?;
    Ok(Swimming::new(action, duration_h, weight_kg, length_pool_m, count_pool).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_kinds() {
        assert_eq!(known_codes(), vec!["RUN", "SWM", "WLK"]);
        assert_eq!(arity_of("RUN"), Some(3));
        assert_eq!(arity_of("WLK"), Some(4));
        assert_eq!(arity_of("SWM"), Some(5));
        assert_eq!(arity_of("run"), None);
    }

    #[test]
    fn count_rejects_fractions() {
        assert!(count("action", 1.5).is_err());
        assert!(count("action", -1.0).is_err());
        assert_eq!(count("action", 720.0).unwrap(), 720);
    }
}
