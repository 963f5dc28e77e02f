//! Service result type
//!
//! Write-path services return a `ServiceResult` carrying either the
//! persisted document or the validation errors the contract collected,
//! mirroring the success/failure envelope the API serializes.

use crate::error::{NestorError, ValidationErrors};

/// What a write-path service call produces: an infrastructure error on the
/// outside, a domain validation outcome on the inside.
pub type ServiceOutcome<T> = Result<ServiceResult<T>, NestorError>;

/// Result of a service call
#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
    /// Optional human-readable message
    pub message: Option<String>,
}

impl<T> ServiceResult<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
            message: None,
        }
    }

    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
            message: None,
        }
    }

    pub fn failure_with_result(result: T, errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: Some(result),
            errors,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn take_result(self) -> Option<T> {
        self.result
    }

    /// Map the successful value, keeping errors and message intact
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ServiceResult<U> {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
            message: self.message,
        }
    }

    /// Convert into a plain `Result`, dropping the partial value on failure
    pub fn into_result(self) -> Result<T, ValidationErrors> {
        if self.success {
            match self.result {
                Some(value) => Ok(value),
                None => Err(ValidationErrors::new()),
            }
        } else {
            Err(self.errors)
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for ServiceResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(errors) => ServiceResult::failure(errors),
        }
    }
}
