//! Driver errors and exit codes.

/// Exit codes reported by the driver binary.
#[allow(dead_code)]
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A regression fingerprint did not match.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

/// Errors surfaced by the driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// A fingerprint regression failed.
    #[error("fingerprint mismatch at {digits} digits: got {got}, expected {expected}")]
    Mismatch {
        digits: usize,
        got: String,
        expected: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Map a driver error to its exit code.
pub fn handle_error(error: &DriverError) -> i32 {
    match error {
        DriverError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        DriverError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}
