use crate::error::KmIndexError;
use serde_json::Value;
use std::collections::HashMap;

/// Normalized result of one server round trip.
///
/// The server nests its answer per result category and again per query id
/// (`category -> query id -> result`). Since this client submits exactly one
/// query per call, the parser assumes a single query id per raw response and
/// flattens the body into a map addressable purely by category name. It is
/// not a general multi-query response parser.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    query_id: String,
    results: HashMap<String, Value>,
}

impl QueryResponse {
    /// Parses the raw decoded JSON body of one query call.
    ///
    /// Fails with [`KmIndexError::EmptyResponse`] when the body carries no
    /// categories and with [`KmIndexError::MalformedResponse`] when the
    /// nesting is not object-shaped or the categories disagree on which
    /// query id they cover.
    pub fn from_raw(raw: Value) -> Result<Self, KmIndexError> {
        let categories = raw.as_object().ok_or_else(|| {
            KmIndexError::MalformedResponse("response body is not a JSON object".to_string())
        })?;
        let (first_category, first_entry) = categories
            .iter()
            .next()
            .ok_or(KmIndexError::EmptyResponse)?;
        let query_id = first_entry
            .as_object()
            .and_then(|ids| ids.keys().next())
            .ok_or_else(|| {
                KmIndexError::MalformedResponse(format!(
                    "category '{first_category}' holds no query id"
                ))
            })?
            .clone();

        let mut results = HashMap::with_capacity(categories.len());
        for (category, entry) in categories {
            let value = entry.get(&query_id).ok_or_else(|| {
                KmIndexError::MalformedResponse(format!(
                    "category '{category}' has no entry for query id '{query_id}'"
                ))
            })?;
            results.insert(category.clone(), value.clone());
        }
        Ok(Self { query_id, results })
    }

    /// id of the query this response corresponds to, as echoed by the server
    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    /// per-category results for this query
    pub fn results(&self) -> &HashMap<String, Value> {
        &self.results
    }

    /// result for a single category, if the server reported it
    pub fn get(&self, category: &str) -> Option<&Value> {
        self.results.get(category)
    }
}
