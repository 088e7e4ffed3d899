//! Query-string construction for paginated, sorted list requests.

use crate::types::{PageQuery, Sort, SortDirection};

/// Build the canonical ordered query parameters for a list request.
///
/// Descending sorts prefix the field name with a minus sign; the explicit
/// `_order` parameter is sent redundantly for servers that expect it. Pure
/// and total: every input produces a valid parameter set.
pub fn api_params(page_query: &PageQuery, sort: &Sort) -> Vec<(String, String)> {
    let sort_field = match sort.direction {
        SortDirection::Asc => sort.property.as_str().to_string(),
        SortDirection::Desc => format!("-{}", sort.property.as_str()),
    };
    vec![
        ("_page".to_string(), page_query.page.to_string()),
        ("_per_page".to_string(), page_query.limit.to_string()),
        ("_sort".to_string(), sort_field),
        ("_order".to_string(), sort.direction.as_str().to_string()),
    ]
}

/// Join parameters into a query string. Values here are page numbers and
/// fixed field/direction names, so no percent-encoding is required.
pub fn to_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskField;

    #[test]
    fn page_and_limit_pass_through_verbatim() {
        let params = api_params(
            &PageQuery { page: 3, limit: 25 },
            &Sort {
                property: TaskField::Id,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(params[0], ("_page".to_string(), "3".to_string()));
        assert_eq!(params[1], ("_per_page".to_string(), "25".to_string()));
    }

    #[test]
    fn ascending_sort_sends_bare_field_name() {
        let params = api_params(
            &PageQuery { page: 1, limit: 10 },
            &Sort {
                property: TaskField::Title,
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(params[2], ("_sort".to_string(), "title".to_string()));
        assert_eq!(params[3], ("_order".to_string(), "asc".to_string()));
    }

    #[test]
    fn descending_sort_prefixes_field_with_minus() {
        let params = api_params(
            &PageQuery { page: 1, limit: 5 },
            &Sort {
                property: TaskField::Completed,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(params[2], ("_sort".to_string(), "-completed".to_string()));
        assert_eq!(params[3], ("_order".to_string(), "desc".to_string()));
    }

    #[test]
    fn query_string_joins_in_declaration_order() {
        let params = api_params(
            &PageQuery { page: 2, limit: 10 },
            &Sort {
                property: TaskField::Title,
                direction: SortDirection::Desc,
            },
        );
        assert_eq!(
            to_query_string(&params),
            "_page=2&_per_page=10&_sort=-title&_order=desc"
        );
    }
}
