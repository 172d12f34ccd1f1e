// Problem bodies returned for failed requests.
//
// Mirrors the problem details shape browsers and grid widgets already understand:
// `title`, `status`, `detail` and, for validation failures, `errors`.

use serde::{Deserialize, Serialize};

use crate::shared::core::validation::ValidationErrors;
use crate::shared::inbound::translator::CrudOperation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl ProblemDetails {
    pub fn validation(errors: ValidationErrors) -> Self {
        Self {
            title: Some("One or more validation errors occurred.".into()),
            status: 400,
            detail: None,
            errors: Some(errors),
        }
    }

    pub fn stale_write(type_name: &str, operation: CrudOperation) -> Self {
        Self {
            title: Some(format!("{type_name} {} Error - Data Conflict", operation.title())),
            status: 409,
            detail: Some(format!(
                "The submitted {type_name} data was detected to be out of date; please refresh the page and try again."
            )),
            errors: None,
        }
    }

    pub fn delete_conflict(type_name: &str, operation: CrudOperation) -> Self {
        Self {
            title: Some(format!("{type_name} {} Error - Data Conflict", operation.title())),
            status: 409,
            detail: Some("The record has a dependency that prevents it from being deleted.".into()),
            errors: None,
        }
    }

    pub fn not_found(type_name: &str, operation: CrudOperation) -> Self {
        Self {
            title: Some(format!("{type_name} {} Error - Not Found", operation.title())),
            status: 404,
            detail: Some(format!(
                "The {type_name} record was not found; please refresh the page because another user may have deleted it."
            )),
            errors: None,
        }
    }

    pub fn missing_key(type_name: &str, operation: CrudOperation) -> Self {
        Self {
            title: Some(format!("{type_name} {} Error - Not Found", operation.title())),
            status: 404,
            detail: Some("The record could not be found because a key was not provided.".into()),
            errors: None,
        }
    }

    pub fn unexpected(operation: CrudOperation) -> Self {
        Self {
            title: Some("An error occurred while processing your request.".into()),
            status: 500,
            detail: Some(format!(
                "Failed to {} the record because of an error on the server.",
                operation.verb()
            )),
            errors: None,
        }
    }
}

#[cfg(test)]
mod problem_details_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn it_should_describe_a_stale_update() {
        let problem = ProblemDetails::stale_write("WorkOrder", CrudOperation::Update);
        assert_eq!(
            problem.title.as_deref(),
            Some("WorkOrder Update Error - Data Conflict")
        );
        assert_eq!(
            problem.detail.as_deref(),
            Some("The submitted WorkOrder data was detected to be out of date; please refresh the page and try again.")
        );
    }

    #[rstest]
    fn it_should_describe_a_missing_record() {
        let problem = ProblemDetails::not_found("WorkOrder", CrudOperation::Update);
        assert_eq!(problem.title.as_deref(), Some("WorkOrder Update Error - Not Found"));
        assert_eq!(
            problem.detail.as_deref(),
            Some("The WorkOrder record was not found; please refresh the page because another user may have deleted it.")
        );
    }

    #[rstest]
    #[case(CrudOperation::Create, "Failed to create the record because of an error on the server.")]
    #[case(CrudOperation::Update, "Failed to update the record because of an error on the server.")]
    #[case(CrudOperation::Delete, "Failed to delete the record because of an error on the server.")]
    fn it_should_hide_unexpected_causes(#[case] operation: CrudOperation, #[case] detail: &str) {
        let problem = ProblemDetails::unexpected(operation);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.detail.as_deref(), Some(detail));
    }

    #[rstest]
    fn it_should_omit_absent_fields() {
        let problem = ProblemDetails::missing_key("WorkOrder", CrudOperation::Delete);
        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "WorkOrder Delete Error - Not Found",
                "status": 404,
                "detail": "The record could not be found because a key was not provided."
            })
        );
    }
}
