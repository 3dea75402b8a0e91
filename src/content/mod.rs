//! Content domain: data-driven tuning loaded from RON at startup.

mod loader;
mod validation;

pub use loader::{
    ContentLoadError, DEFAULT_TUNING_PATH, TuningFile, load_tuning, parse_tuning,
};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

/// Loads the tuning file and inserts its resources before any character spawns.
pub struct ContentPlugin {
    pub path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TUNING_PATH),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = match load_tuning(&self.path) {
            Ok(tuning) => {
                let errors = validate_tuning(&tuning);
                if errors.is_empty() {
                    info!("Loaded tuning from {}", self.path.display());
                    tuning
                } else {
                    for error in &errors {
                        warn!("Invalid tuning: {}", error);
                    }
                    warn!("Using default tuning");
                    TuningFile::default()
                }
            }
            Err(e) => {
                warn!("{}; using default tuning", e);
                TuningFile::default()
            }
        };

        app.insert_resource(tuning.traversal)
            .insert_resource(tuning.weapon);
    }
}
