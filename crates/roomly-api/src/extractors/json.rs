//! `ValidatedJson` extractor — deserializes a JSON body and runs its
//! `validator` rules, rejecting with the field-error envelope.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use roomly_core::error::{AppError, FieldErrors};

/// A JSON body that passed both deserialization and field validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))?;

        value.validate().map_err(map_validation_errors)?;

        Ok(ValidatedJson(value))
    }
}

/// Flattens `validator` errors into the per-field message map.
fn map_validation_errors(errors: ValidationErrors) -> AppError {
    let mut fields = FieldErrors::new();

    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    AppError::field_validations(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "name must be at least 2 characters long"))]
        name: String,
    }

    #[test]
    fn test_messages_are_collected_per_field() {
        let probe = Probe {
            name: "x".to_string(),
        };
        let err = map_validation_errors(probe.validate().unwrap_err());

        let fields = err.fields.expect("field errors");
        assert_eq!(
            fields.get("name").unwrap(),
            &vec!["name must be at least 2 characters long".to_string()]
        );
    }
}
