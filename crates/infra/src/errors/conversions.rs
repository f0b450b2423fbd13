//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use saucerest_domain::SauceRestError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SauceRestError);

impl From<InfraError> for SauceRestError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SauceRestError> for InfraError {
    fn from(value: SauceRestError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSauceRestError {
    fn into_sauce(self) -> SauceRestError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SauceRestError */
/* -------------------------------------------------------------------------- */

impl IntoSauceRestError for HttpError {
    fn into_sauce(self) -> SauceRestError {
        let url = self.url().map(ToString::to_string).unwrap_or_else(|| "<unknown>".into());

        if self.is_timeout() {
            return SauceRestError::Timeout(format!("HTTP request to {url} timed out"));
        }

        if self.is_builder() {
            return SauceRestError::InvalidUrl(self.to_string());
        }

        if self.is_connect() {
            return SauceRestError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return SauceRestError::Status { status: status.as_u16(), url };
        }

        if self.is_decode() || self.is_body() {
            return SauceRestError::Network(format!("Failed to read response body: {self}"));
        }

        SauceRestError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sauce())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → SauceRestError */
/* -------------------------------------------------------------------------- */

impl IntoSauceRestError for JsonError {
    fn into_sauce(self) -> SauceRestError {
        SauceRestError::Serialization(self.to_string())
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_sauce())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → SauceRestError */
/* -------------------------------------------------------------------------- */

impl IntoSauceRestError for std::io::Error {
    fn into_sauce(self) -> SauceRestError {
        SauceRestError::Io(self.to_string())
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_sauce())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
