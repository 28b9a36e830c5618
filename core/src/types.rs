use std::fmt;

use serde::{Deserialize, Serialize};

use crate::physics::RoundTo;

/// Summary of one finished workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64, // h
    pub distance: f64, // km
    pub speed: f64,    // km/h
    pub calories: f64, // kcal
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// Same message, numbers rounded to the 3 places the text shows. Used for JSON output.
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: self.duration.round_to(3),
            distance: self.distance.round_to(3),
            speed: self.speed.round_to(3),
            calories: self.calories.round_to(3),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}
