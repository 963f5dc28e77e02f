//! Core error types for NESTOR eco
//!
//! Covers validation-error collection on the write path and the error
//! taxonomy surfaced by the store, services, and API layers. The metrics
//! core deliberately has no error cases of its own.

use std::collections::HashMap;
use thiserror::Error;

/// Core error type for all NESTOR operations
#[derive(Error, Debug)]
pub enum NestorError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Contract violation: {0}")]
    Contract(#[from] ContractError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },
}

impl NestorError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            NestorError::NotFound { .. } => 404,
            NestorError::Validation(_) | NestorError::Contract(_) => 422,
            NestorError::Conflict { .. } => 409,
            NestorError::Store(_) | NestorError::Internal(_) | NestorError::Config(_) => 500,
            NestorError::ExternalService { .. } => 502,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            NestorError::NotFound { .. } => "not_found",
            NestorError::Validation(_) => "validation_failed",
            NestorError::Contract(_) => "contract_violated",
            NestorError::Store(_) => "store_error",
            NestorError::Internal(_) => "internal_error",
            NestorError::Config(_) => "configuration_error",
            NestorError::ExternalService { .. } => "external_service_error",
            NestorError::Conflict { .. } => "conflict",
        }
    }
}

/// Validation errors collection, keyed by document field
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation errors: {errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: HashMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{} {}", field, msg));
            }
        }
        messages
    }

    /// Convert into an `Err` when any error was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Bridge from `validator`'s derive output to the field-keyed collection
/// used everywhere else. Nested struct and list errors flatten into
/// dotted/indexed paths ("items[2].unit_price").
impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(source: validator::ValidationErrors) -> Self {
        let mut errors = ValidationErrors::new();
        flatten_validator_errors("", &source, &mut errors);
        errors
    }
}

fn flatten_validator_errors(
    prefix: &str,
    source: &validator::ValidationErrors,
    out: &mut ValidationErrors,
) {
    use validator::ValidationErrorsKind;

    for (field, kind) in source.errors() {
        let path = if prefix.is_empty() {
            (*field).to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("is invalid ({})", err.code));
                    out.add(path.clone(), message);
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validator_errors(&path, nested, out);
            }
            ValidationErrorsKind::List(list) => {
                for (index, nested) in list {
                    flatten_validator_errors(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

/// Contract validation error
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Attribute {attribute} is invalid: {message}")]
    AttributeInvalid { attribute: String, message: String },

    #[error("Base contract error: {message}")]
    Base { message: String },

    #[error("Multiple contract errors")]
    Multiple { errors: ValidationErrors },
}

impl From<ContractError> for ValidationErrors {
    fn from(err: ContractError) -> Self {
        let mut errors = ValidationErrors::new();
        match err {
            ContractError::AttributeInvalid { attribute, message } => {
                errors.add(attribute, message);
            }
            ContractError::Base { message } => {
                errors.add_base(message);
            }
            ContractError::Multiple { errors: e } => {
                return e;
            }
        }
        errors
    }
}
