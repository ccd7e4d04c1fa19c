use std::env;
use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::info;

use crate::approximationerror::Result;

/// Startup configuration. The environment label is informational only
/// and never affects numeric results; reading it is an explicit call,
/// not a construction side effect.
#[derive(Deserialize)]
pub struct Configuration {
    environment: Option<String>,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration { environment: None }
    }

    /// Reads the `ENVIRONMENT` variable.
    pub fn from_env() -> Configuration {
        Configuration {
            environment: env::var("ENVIRONMENT").ok(),
        }
    }

    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    /// I/O or JSON parse errors from opening and reading the file.
    pub fn from_reader(file_path: String) -> Result<Configuration> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn log_environment(&self) {
        match &self.environment {
            Some(label) => info!(environment = label.as_str(), "calculation module configured"),
            None => info!("calculation module configured, no environment label"),
        }
    }
}
