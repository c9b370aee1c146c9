// Security module for output path validation
//
// The export tools write artifacts to caller-chosen paths. This module keeps
// those writes inside an optional configured root directory.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_output_path};
