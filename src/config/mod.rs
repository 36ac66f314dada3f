//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering defaults, file, and flags in [`settings`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use flash_doctor::config::Settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("flash-doctor.yml"), "minimum_python: \"3.10\"").unwrap();
//!
//! let settings = Settings::load(None, temp.path(), Some("python3.12"), None).unwrap();
//! assert_eq!(settings.python, "python3.12");
//! assert_eq!(settings.minimum_python.to_string(), "3.10");
//! ```

pub mod loader;
pub mod schema;
pub mod settings;
pub mod validator;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{DoctorConfig, LibraryConfig};
pub use settings::{default_tools, Settings, DEFAULT_IMPORT_TIMEOUT, DEFAULT_TOOL_TIMEOUT};
pub use validator::{validate, validate_settings};
