// core/src/training.rs
use crate::models::{Running, SportsWalking, Swimming, Workout, WorkoutBase, WorkoutKind};
use crate::physics::{
    distance_km, floor_div, speed_kmh, LEN_STEP, MIN_IN_H, M_IN_KM, RUN_CAL_SPEED_MULT,
    RUN_CAL_SPEED_SHIFT, SWIM_LEN_STEP, SWM_CAL_SPEED_SHIFT, SWM_CAL_WEIGHT_MULT,
    WLK_CAL_SPEED_HEIGHT_MULT, WLK_CAL_WEIGHT_MULT,
};
use crate::types::InfoMessage;

/// Shared workout formulas. Every variant must supply `spent_calories`;
/// distance and mean speed have defaults a variant may override.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn base(&self) -> &WorkoutBase;

    /// Step or stroke length in meters.
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in km.
    fn distance(&self) -> f64 {
        distance_km(self.base().action, self.len_step())
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        speed_kmh(self.distance(), self.base().duration_h)
    }

    /// kcal
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().label().to_string(),
            duration: self.base().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn spent_calories(&self) -> f64 {
        (RUN_CAL_SPEED_MULT * self.mean_speed() - RUN_CAL_SPEED_SHIFT)
            * self.base.weight_kg
            / M_IN_KM
            * (self.base.duration_h * MIN_IN_H)
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    // speed²/height is floor-divided, so the second term is 0 at realistic walking paces.
    fn spent_calories(&self) -> f64 {
        let w = self.base.weight_kg;
        (WLK_CAL_WEIGHT_MULT * w
            + floor_div(self.mean_speed().powi(2), self.height_cm) * WLK_CAL_SPEED_HEIGHT_MULT * w)
            * (self.base.duration_h * MIN_IN_H)
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STEP
    }

    /// Pool based, independent of the stroke count.
    fn mean_speed(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.base.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWM_CAL_SPEED_SHIFT) * SWM_CAL_WEIGHT_MULT * self.base.weight_kg
    }
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.inner().kind()
    }

    fn base(&self) -> &WorkoutBase {
        self.inner().base()
    }

    fn len_step(&self) -> f64 {
        self.inner().len_step()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.inner().spent_calories()
    }

    fn show_training_info(&self) -> InfoMessage {
        self.inner().show_training_info()
    }
}
