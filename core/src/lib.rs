pub mod cli;
pub mod error;
pub mod models;
pub mod physics;
pub mod registry;
pub mod storage;
pub mod training;
pub mod types;

pub use cli::{print_training_report, process_packages, render_report, OutputFormat};
pub use error::{Result, WorkoutError};
pub use models::{Running, SportsWalking, Swimming, Workout, WorkoutBase, WorkoutKind};
pub use registry::{arity_of, known_codes, read_package};
pub use storage::{load_packages, parse_packages, sample_packages, save_packages, Package};
pub use training::Training;
pub use types::InfoMessage;
