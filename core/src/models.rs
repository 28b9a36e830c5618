use serde::{Deserialize, Serialize};

/// Variant discriminant. `label()` is the display name used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Sensor code used in packages.
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }
}

/// Fields every workout carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    pub action: u32,      // steps or strokes
    pub duration_h: f64,  // hours
    pub weight_kg: f64,   // kg
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: WorkoutBase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: WorkoutBase,
    pub height_cm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: WorkoutBase,
    pub length_pool_m: f64,
    pub count_pool: u32,
}

/// One resolved workout. Built by `registry::read_package`, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl WorkoutBase {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { action, duration_h, weight_kg }
    }
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { base: WorkoutBase::new(action, duration_h, weight_kg) }
    }
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}
