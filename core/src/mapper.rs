//! Mapping of raw list responses into [`PaginatedResult`].
//!
//! # Design
//! The server contract for list responses has two generations: the current
//! envelope format (`{"data": [...], "items": N, ...}`) and the legacy
//! format (a bare JSON array with the total in an `X-Total-Count` header).
//! Both are handled behind this single seam, selected by inspecting the body
//! shape, so a contract change never touches the store. Malformed or absent
//! bodies degrade to an empty result rather than an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::HttpResponse;
use crate::types::PaginatedResult;

const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Convert a raw list response into a `PaginatedResult`. Never fails.
pub fn to_paginated_result<T: DeserializeOwned>(response: &HttpResponse) -> PaginatedResult<T> {
    let Ok(body) = serde_json::from_str::<Value>(&response.body) else {
        return PaginatedResult::empty();
    };

    match body {
        // Envelope format: data array plus an `items` total-count field.
        Value::Object(mut envelope) => {
            let Some(Value::Array(raw_items)) = envelope.remove("data") else {
                return PaginatedResult::empty();
            };
            let total_count = envelope.get("items").and_then(Value::as_u64).unwrap_or(0);
            PaginatedResult {
                items: parse_items(raw_items),
                total_count,
            }
        }
        // Legacy format: bare array, total count in a response header.
        Value::Array(raw_items) => PaginatedResult {
            items: parse_items(raw_items),
            total_count: header_total_count(response),
        },
        _ => PaginatedResult::empty(),
    }
}

fn parse_items<T: DeserializeOwned>(raw_items: Vec<Value>) -> Vec<T> {
    serde_json::from_value(Value::Array(raw_items)).unwrap_or_default()
}

fn header_total_count(response: &HttpResponse) -> u64 {
    response
        .header(TOTAL_COUNT_HEADER)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    fn response(status: u16, headers: Vec<(String, String)>, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers,
            body: body.to_string(),
        }
    }

    #[test]
    fn envelope_body_yields_items_and_total() {
        let body = r#"{
            "data": [
                {"id": 1, "title": "One", "description": "", "completed": false},
                {"id": 2, "title": "Two", "description": "", "completed": true}
            ],
            "items": 17,
            "pages": 2
        }"#;
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, Vec::new(), body));
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].id, 1);
        assert_eq!(result.items[1].title, "Two");
        assert_eq!(result.total_count, 17);
    }

    #[test]
    fn bare_array_reads_total_from_header() {
        let body = r#"[{"id": 5, "title": "Legacy", "description": "", "completed": false}]"#;
        let headers = vec![("x-total-count".to_string(), "9".to_string())];
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, headers, body));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_count, 9);
    }

    #[test]
    fn bare_array_without_header_defaults_total_to_zero() {
        let body = r#"[{"id": 5, "title": "Legacy", "description": "", "completed": false}]"#;
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, Vec::new(), body));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_count, 0);
    }

    #[test]
    fn empty_body_degrades_to_empty_result() {
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, Vec::new(), ""));
        assert_eq!(result, PaginatedResult::empty());
    }

    #[test]
    fn null_body_degrades_to_empty_result() {
        let result: PaginatedResult<Task> =
            to_paginated_result(&response(200, Vec::new(), "null"));
        assert_eq!(result, PaginatedResult::empty());
    }

    #[test]
    fn envelope_without_data_array_degrades_to_empty_result() {
        let result: PaginatedResult<Task> =
            to_paginated_result(&response(200, Vec::new(), r#"{"items": 3}"#));
        assert_eq!(result, PaginatedResult::empty());
    }

    #[test]
    fn undeserializable_items_degrade_to_empty_list() {
        let body = r#"{"data": [{"nope": true}], "items": 1}"#;
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, Vec::new(), body));
        assert!(result.items.is_empty());
        assert_eq!(result.total_count, 1);
    }

    #[test]
    fn garbled_header_count_defaults_to_zero() {
        let headers = vec![("X-Total-Count".to_string(), "many".to_string())];
        let result: PaginatedResult<Task> = to_paginated_result(&response(200, headers, "[]"));
        assert_eq!(result.total_count, 0);
    }
}
