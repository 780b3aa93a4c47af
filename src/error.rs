//! Error types for the contact store.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Database failures are classified by SQLSTATE so callers can tell a natural-key
//! conflict from a blocked delete without inspecting driver internals.

use crate::store::ValueKind;
use sqlx::postgres::PgDatabaseError;
use thiserror::Error;

/// Errors surfaced by repositories and the stores underneath them.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The owning record does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    /// A unique constraint on a natural key was violated
    #[error("Duplicate entry ({constraint}): {detail}")]
    Conflict { constraint: String, detail: String },

    /// The same value was linked to the same owner twice
    #[error("Contact value already linked to this owner ({constraint}): {detail}")]
    DuplicateAssociation { constraint: String, detail: String },

    /// A foreign key blocked the write or points at a missing row
    #[error("Referential integrity violation ({constraint}): {detail}")]
    ReferentialIntegrity { constraint: String, detail: String },

    /// The database rejected a value (missing required field, bad format)
    #[error("Validation failed: {0}")]
    ValidationFailure(String),

    /// Anything unclassified, e.g. connection failure
    #[error("Database error: {0}")]
    Internal(#[source] sqlx::Error),
}

impl ContactError {
    /// Build a `NotFound` for the given entity name.
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    /// HTTP status an upstream layer should render this error with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::DuplicateAssociation { .. }
            | Self::ReferentialIntegrity { .. }
            | Self::ValidationFailure(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Map a constraint violation reported by Postgres onto the taxonomy.
    ///
    /// Returns `None` when the SQLSTATE is not one we classify.
    pub(crate) fn from_violation(
        code: &str,
        constraint: Option<&str>,
        message: &str,
        detail: Option<&str>,
    ) -> Option<Self> {
        let constraint = constraint.unwrap_or("unknown").to_string();
        let detail = detail.unwrap_or(message).to_string();

        match code {
            // unique_violation
            "23505" => {
                let is_link = ValueKind::ALL
                    .iter()
                    .any(|kind| kind.link_constraint() == constraint);
                if is_link {
                    Some(Self::DuplicateAssociation { constraint, detail })
                } else {
                    Some(Self::Conflict { constraint, detail })
                }
            }
            // foreign_key_violation
            "23503" => Some(Self::ReferentialIntegrity { constraint, detail }),
            // not_null_violation, check_violation, invalid_text_representation, string_data_right_truncation
            "23502" | "23514" | "22P02" | "22001" => Some(Self::ValidationFailure(detail)),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for ContactError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                let detail = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.detail());
                if let Some(classified) =
                    Self::from_violation(&code, db_err.constraint(), db_err.message(), detail)
                {
                    tracing::warn!(
                        code = %code,
                        constraint = db_err.constraint().unwrap_or("unknown"),
                        "Database constraint violation"
                    );
                    return classified;
                }
            }
        }
        Self::Internal(err)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// A .env file exists but could not be read
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
