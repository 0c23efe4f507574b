// src/exit.rs
//! Standardized process exit codes for `campusroute`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RouteExit {
    /// Query answered with a route (or a listing/render completed).
    Success = 0,
    /// Generic error (unreadable file, refused overwrite).
    Error = 1,
    /// Input validation failed (malformed data file, unknown building, bad vertex).
    InvalidInput = 2,
    /// The destination cannot be reached from the start building.
    NoPath = 3,
}

impl RouteExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for RouteExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
