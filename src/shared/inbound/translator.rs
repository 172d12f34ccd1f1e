// Request translator: envelope in, store call, status and body out.
//
// Purpose
// - Be the only place that knows about the request envelope and problem bodies.
//
// Responsibilities
// - Validate the envelope shape before the store is called.
// - Resolve the identity for update and delete.
// - Map every store outcome to a status and body, and log each terminal outcome once.
//
// Boundaries
// - No business rules. Those belong to the records and the store.
// - Transport agnostic. The HTTP binding lives in shared::inbound::http.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

use crate::shared::core::record::{Editable, RecordKey};
use crate::shared::core::validation::ValidationErrors;
use crate::shared::inbound::envelope::RequestEnvelope;
use crate::shared::inbound::problem::ProblemDetails;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};

/// Transport shape of a record type.
pub trait RecordPayload<R>: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Shape validation. Field names in the errors are payload field names.
    fn into_record(self) -> Result<R, ValidationErrors>;
    fn from_record(record: R) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrudOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl CrudOperation {
    pub fn verb(&self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Read => "read",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CrudOperation::Create => "Create",
            CrudOperation::Read => "Read",
            CrudOperation::Update => "Update",
            CrudOperation::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    BadRequestValidation,
    Conflict,
    NotFound,
    InternalError,
}

impl ResponseStatus {
    pub fn status_code(&self) -> u16 {
        match self {
            ResponseStatus::Success => 200,
            ResponseStatus::BadRequestValidation => 400,
            ResponseStatus::Conflict => 409,
            ResponseStatus::NotFound => 404,
            ResponseStatus::InternalError => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Success => "success",
            ResponseStatus::BadRequestValidation => "bad_request_validation",
            ResponseStatus::Conflict => "conflict",
            ResponseStatus::NotFound => "not_found",
            ResponseStatus::InternalError => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedResponse {
    pub status: ResponseStatus,
    pub body: Value,
}

impl TranslatedResponse {
    fn problem(status: ResponseStatus, problem: ProblemDetails) -> Self {
        let body = serde_json::to_value(problem).unwrap_or_else(|_| json!({}));
        Self { status, body }
    }
}

struct KeyField<'a>(Option<&'a RecordKey>);

impl fmt::Display for KeyField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, "{key}"),
            None => f.write_str("-"),
        }
    }
}

pub struct RecordTranslator<R: Editable> {
    store: Arc<dyn RecordStore<R>>,
}

impl<R: Editable> Clone for RecordTranslator<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<R: Editable> RecordTranslator<R> {
    pub fn new(store: Arc<dyn RecordStore<R>>) -> Self {
        Self { store }
    }

    pub async fn create<P: RecordPayload<R>>(
        &self,
        envelope: RequestEnvelope<P>,
    ) -> TranslatedResponse {
        let operation = CrudOperation::Create;
        let record = match Self::record_from(envelope.value) {
            Ok(record) => record,
            Err(errors) => return self.rejected(operation, None, errors),
        };
        match self.store.create(record).await {
            Ok(created) => {
                let key = created.key().cloned();
                self.succeeded(operation, key.as_ref(), &P::from_record(created))
            }
            Err(error) => self.failed(operation, None, error),
        }
    }

    pub async fn update<P: RecordPayload<R>>(
        &self,
        envelope: RequestEnvelope<P>,
    ) -> TranslatedResponse {
        let operation = CrudOperation::Update;
        let key = match envelope.resolve_key() {
            Ok(Some(key)) => key,
            Ok(None) => return self.missing_key(operation),
            Err(errors) => return self.rejected(operation, None, errors),
        };
        let mut record = match Self::record_from(envelope.value) {
            Ok(record) => record,
            Err(errors) => return self.rejected(operation, Some(&key), errors),
        };
        match record.key() {
            Some(own) if *own != key => {
                let errors = ValidationErrors::single(
                    format!("Value.{}", key.column()),
                    "The record identity does not match the key.",
                );
                return self.rejected(operation, Some(&key), errors);
            }
            Some(_) => {}
            None => record.set_key(key.clone()),
        }
        match self.store.update(record).await {
            Ok(updated) => self.succeeded(operation, Some(&key), &P::from_record(updated)),
            Err(error) => self.failed(operation, Some(&key), error),
        }
    }

    /// Deleting a key that does not exist succeeds without changes.
    /// Only the key is read; `value` is echoed back untouched.
    pub async fn delete(&self, envelope: RequestEnvelope<Value>) -> TranslatedResponse {
        let operation = CrudOperation::Delete;
        let key = match envelope.resolve_key() {
            Ok(Some(key)) => key,
            Ok(None) => return self.missing_key(operation),
            Err(errors) => return self.rejected(operation, None, errors),
        };
        match self.store.delete(&key).await {
            Ok(removed) => self.respond(operation, Some(&key), &envelope, Some(removed)),
            Err(error) => self.failed(operation, Some(&key), error),
        }
    }

    pub async fn get<P: RecordPayload<R>>(&self, key: RecordKey) -> TranslatedResponse {
        let operation = CrudOperation::Read;
        match self.store.get(&key).await {
            Ok(Some(record)) => self.succeeded(operation, Some(&key), &P::from_record(record)),
            Ok(None) => {
                let error = StoreError::NotFound {
                    key: Some(key.clone()),
                };
                self.failed(operation, Some(&key), error)
            }
            Err(error) => self.failed(operation, Some(&key), error),
        }
    }

    pub async fn list<P: RecordPayload<R>>(&self) -> TranslatedResponse {
        let operation = CrudOperation::Read;
        match self.store.list().await {
            Ok(records) => {
                let payloads: Vec<P> = records.into_iter().map(P::from_record).collect();
                self.succeeded(operation, None, &payloads)
            }
            Err(error) => self.failed(operation, None, error),
        }
    }

    pub async fn count(&self) -> TranslatedResponse {
        let operation = CrudOperation::Read;
        match self.store.count().await {
            Ok(count) => self.succeeded(operation, None, &json!({ "count": count })),
            Err(error) => self.failed(operation, None, error),
        }
    }

    /// The request body could not be decoded into an envelope.
    pub fn malformed(&self, operation: CrudOperation, reason: &str) -> TranslatedResponse {
        self.rejected(operation, None, ValidationErrors::single("$", reason))
    }

    fn record_from<P: RecordPayload<R>>(value: Option<P>) -> Result<R, ValidationErrors> {
        let value = value.ok_or_else(|| ValidationErrors::required("Value"))?;
        value.into_record().map_err(|errors| errors.prefixed("Value"))
    }

    fn succeeded<T: Serialize>(
        &self,
        operation: CrudOperation,
        key: Option<&RecordKey>,
        body: &T,
    ) -> TranslatedResponse {
        self.respond(operation, key, body, None)
    }

    fn respond<T: Serialize>(
        &self,
        operation: CrudOperation,
        key: Option<&RecordKey>,
        body: &T,
        removed: Option<bool>,
    ) -> TranslatedResponse {
        match serde_json::to_value(body) {
            Ok(body) => self.finish(
                operation,
                key,
                TranslatedResponse {
                    status: ResponseStatus::Success,
                    body,
                },
                None,
                removed,
            ),
            Err(error) => self.failed(operation, key, StoreError::Unexpected(error.to_string())),
        }
    }

    fn rejected(
        &self,
        operation: CrudOperation,
        key: Option<&RecordKey>,
        errors: ValidationErrors,
    ) -> TranslatedResponse {
        let cause = errors.to_string();
        let response = TranslatedResponse::problem(
            ResponseStatus::BadRequestValidation,
            ProblemDetails::validation(errors),
        );
        self.finish(operation, key, response, Some(&cause), None)
    }

    fn missing_key(&self, operation: CrudOperation) -> TranslatedResponse {
        let response = TranslatedResponse::problem(
            ResponseStatus::NotFound,
            ProblemDetails::missing_key(R::TYPE_NAME, operation),
        );
        self.finish(operation, None, response, Some("no key provided"), None)
    }

    fn failed(
        &self,
        operation: CrudOperation,
        key: Option<&RecordKey>,
        error: StoreError,
    ) -> TranslatedResponse {
        let cause = error.to_string();
        let (status, problem) = match error {
            StoreError::Validation(errors) => (
                ResponseStatus::BadRequestValidation,
                ProblemDetails::validation(errors),
            ),
            StoreError::StaleWrite { .. } => (
                ResponseStatus::Conflict,
                ProblemDetails::stale_write(R::TYPE_NAME, operation),
            ),
            StoreError::NotFound { .. } => (
                ResponseStatus::NotFound,
                ProblemDetails::not_found(R::TYPE_NAME, operation),
            ),
            StoreError::DeleteConflict { .. } => (
                ResponseStatus::Conflict,
                ProblemDetails::delete_conflict(R::TYPE_NAME, operation),
            ),
            StoreError::Unexpected(_) => (
                ResponseStatus::InternalError,
                ProblemDetails::unexpected(operation),
            ),
        };
        self.finish(
            operation,
            key,
            TranslatedResponse::problem(status, problem),
            Some(&cause),
            None,
        )
    }

    fn finish(
        &self,
        operation: CrudOperation,
        key: Option<&RecordKey>,
        response: TranslatedResponse,
        cause: Option<&str>,
        removed: Option<bool>,
    ) -> TranslatedResponse {
        let outcome = response.status.as_str();
        let key = KeyField(key);
        let cause = cause.unwrap_or_default();
        match response.status {
            ResponseStatus::Success => tracing::info!(
                outcome,
                record_type = R::TYPE_NAME,
                operation = operation.verb(),
                key = %key,
                removed,
                "{} {} succeeded",
                operation.verb(),
                R::TYPE_NAME
            ),
            ResponseStatus::InternalError => tracing::error!(
                outcome,
                record_type = R::TYPE_NAME,
                operation = operation.verb(),
                key = %key,
                cause,
                "failed to {} the {}",
                operation.verb(),
                R::TYPE_NAME
            ),
            _ => tracing::warn!(
                outcome,
                record_type = R::TYPE_NAME,
                operation = operation.verb(),
                key = %key,
                cause,
                "failed to {} the {}",
                operation.verb(),
                R::TYPE_NAME
            ),
        }
        response
    }
}
