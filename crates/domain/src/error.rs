//! Common error types used across the workspace.
//!
//! Each layer produces one of the typed errors below and converts into
//! [`NightlampError`] via `#[from]` at the boundary. No `String` variants.

/// Top-level error for the nightlamp workspace.
#[derive(Debug, thiserror::Error)]
pub enum NightlampError {
    /// A value failed domain validation (e.g. a malformed `HH:MM` string).
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    /// The caller lacks the capability required for the operation.
    #[error("Forbidden")]
    Forbidden(#[from] ForbiddenError),

    /// The schedule record could not be read or written.
    #[error("Storage error")]
    Storage(#[from] StorageError),

    /// The output device rejected a pin operation.
    #[error("Device error")]
    Device(#[from] DeviceError),
}

/// A domain invariant was violated.
#[derive(Debug, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub reason: String,
}

impl ValidationError {
    /// Build a validation error for `field`.
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// The caller is authenticated but not an admin.
#[derive(Debug, thiserror::Error)]
#[error("admin privileges required")]
pub struct ForbiddenError;

/// Failure in the durable schedule store.
///
/// A *missing* or *malformed* record is not an error at all — repositories
/// silently default it (see the `ScheduleRepository` port). These variants
/// cover genuine IO and encoding failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying filesystem failure.
    #[error("schedule store IO failure")]
    Io(#[from] std::io::Error),

    /// The schedule could not be serialized for writing.
    #[error("failed to encode schedule record")]
    Encode(#[source] serde_json::Error),
}

/// Failure reported by the output device driver.
#[derive(Debug, thiserror::Error)]
#[error("light device failure: {message}")]
pub struct DeviceError {
    /// Driver-specific description.
    pub message: String,
}

impl DeviceError {
    /// Build a device error from any driver-specific failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_field_and_reason() {
        let err = ValidationError::new("time_on", "hour out of range");
        assert_eq!(err.to_string(), "invalid time_on: hour out of range");
    }

    #[test]
    fn should_convert_validation_error_into_top_level() {
        let err: NightlampError = ValidationError::new("time_off", "bad").into();
        assert!(matches!(err, NightlampError::Validation(_)));
    }

    #[test]
    fn should_convert_io_error_into_storage_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: NightlampError = StorageError::from(io).into();
        assert!(matches!(err, NightlampError::Storage(StorageError::Io(_))));
    }
}
