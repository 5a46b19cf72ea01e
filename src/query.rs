use crate::error::KmIndexError;
use serde::Serialize;

/// Default share-ratio threshold forwarded to the server.
pub const DEFAULT_RATIO: f64 = 0.0;
/// Default z parameter (findere extension) forwarded to the server.
pub const DEFAULT_Z: u32 = 3;

/// Conversion into the list-of-strings shape the server expects.
///
/// A bare string is wrapped as a one element list, so
/// `Query::new("q1", "ACGT", "idx")` and
/// `Query::new("q1", vec!["ACGT"], vec!["idx"])` build the same query.
pub trait IntoList {
    fn into_list(self) -> Vec<String>;
}

impl IntoList for String {
    fn into_list(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoList for &str {
    fn into_list(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoList for Vec<String> {
    fn into_list(self) -> Vec<String> {
        self
    }
}

impl IntoList for Vec<&str> {
    fn into_list(self) -> Vec<String> {
        self.into_iter().map(String::from).collect()
    }
}

impl IntoList for &[String] {
    fn into_list(self) -> Vec<String> {
        self.to_vec()
    }
}

impl IntoList for &[&str] {
    fn into_list(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

/// A single search request against one or more indexes on the server.
///
/// Queries are immutable once built and constructing one never performs
/// I/O. The `id` must be unique within a batch for downstream result
/// lookup to make sense; uniqueness is the caller's responsibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    id: String,
    sequences: Vec<String>,
    indexes: Vec<String>,
    ratio: f64,
    z: u32,
}

/// Wire-ready form of a query, the JSON body of `POST kmindex/query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPayload {
    pub id: String,
    pub seq: Vec<String>,
    pub index: Vec<String>,
    pub r: f64,
    pub z: u32,
}

impl Query {
    /// create a query with the default ratio and z parameters
    pub fn new(
        id: impl Into<String>,
        sequences: impl IntoList,
        indexes: impl IntoList,
    ) -> Result<Self, KmIndexError> {
        Self::with_params(id, sequences, indexes, DEFAULT_RATIO, DEFAULT_Z)
    }

    /// create a query with explicit ratio and z parameters, forwarded to the
    /// server unmodified and not range-checked locally
    pub fn with_params(
        id: impl Into<String>,
        sequences: impl IntoList,
        indexes: impl IntoList,
        ratio: f64,
        z: u32,
    ) -> Result<Self, KmIndexError> {
        let id = id.into();
        let sequences = sequences.into_list();
        let indexes = indexes.into_list();
        if id.is_empty() {
            return Err(KmIndexError::InvalidQuery("empty query id".to_string()));
        }
        if sequences.is_empty() {
            return Err(KmIndexError::InvalidQuery(format!(
                "query '{id}' has no sequences"
            )));
        }
        if indexes.is_empty() {
            return Err(KmIndexError::InvalidQuery(format!(
                "query '{id}' targets no indexes"
            )));
        }
        Ok(Self {
            id,
            sequences,
            indexes,
            ratio,
            z,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn sequences(&self) -> &[String] {
        &self.sequences
    }

    pub fn indexes(&self) -> &[String] {
        &self.indexes
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    /// Pure projection of the query into its wire payload.
    pub fn payload(&self) -> QueryPayload {
        QueryPayload {
            id: self.id.clone(),
            seq: self.sequences.clone(),
            index: self.indexes.clone(),
            r: self.ratio,
            z: self.z,
        }
    }
}

/// An ordered, append-only collection of queries.
///
/// Iteration always follows push order and never mutates the batch, so a
/// fresh pass starts over from the first pushed query.
#[derive(Debug, Clone, Default)]
pub struct QueryBatch {
    queries: Vec<Query>,
}

impl QueryBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queries: Vec::with_capacity(capacity),
        }
    }

    /// build a query from the given arguments and append it
    pub fn push(
        &mut self,
        id: impl Into<String>,
        sequences: impl IntoList,
        indexes: impl IntoList,
    ) -> Result<(), KmIndexError> {
        self.queries.push(Query::new(id, sequences, indexes)?);
        Ok(())
    }

    /// build a query with explicit ratio and z parameters and append it
    pub fn push_with_params(
        &mut self,
        id: impl Into<String>,
        sequences: impl IntoList,
        indexes: impl IntoList,
        ratio: f64,
        z: u32,
    ) -> Result<(), KmIndexError> {
        self.queries
            .push(Query::with_params(id, sequences, indexes, ratio, z)?);
        Ok(())
    }

    /// append an already constructed query
    pub fn push_query(&mut self, query: Query) {
        self.queries.push(query);
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.queries.iter()
    }
}

impl<'a> IntoIterator for &'a QueryBatch {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.queries.iter()
    }
}

impl FromIterator<Query> for QueryBatch {
    fn from_iter<I: IntoIterator<Item = Query>>(iter: I) -> Self {
        Self {
            queries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_payload_wraps_single_strings() {
        let query = Query::new("Q1", "ACGTACGT", "myindex").expect("valid query");
        let payload = serde_json::to_value(query.payload()).expect("serializable");
        assert_eq!(
            payload,
            json!({
                "id": "Q1",
                "seq": ["ACGTACGT"],
                "index": ["myindex"],
                "r": 0.0,
                "z": 3
            })
        );
    }

    #[test]
    fn test_wrapping_is_idempotent() {
        let from_str = Query::new("q", "ACGT", "idx").expect("valid query");
        let from_list = Query::new("q", vec!["ACGT"], vec!["idx"]).expect("valid query");
        assert_eq!(from_str.payload(), from_list.payload());
    }

    #[test]
    fn test_with_params_stores_supplied_values() {
        let query = Query::with_params("q", "ACGT", "idx", 0.75, 5).expect("valid query");
        assert_eq!(query.ratio(), 0.75);
        assert_eq!(query.z(), 5);
        let payload = query.payload();
        assert_eq!(payload.r, 0.75);
        assert_eq!(payload.z, 5);
    }

    #[test]
    fn test_rejects_empty_inputs() {
        assert!(matches!(
            Query::new("", "ACGT", "idx"),
            Err(KmIndexError::InvalidQuery(_))
        ));
        assert!(matches!(
            Query::new("q", Vec::<String>::new(), "idx"),
            Err(KmIndexError::InvalidQuery(_))
        ));
        assert!(matches!(
            Query::new("q", "ACGT", Vec::<String>::new()),
            Err(KmIndexError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_batch_iterates_in_push_order() {
        let mut batch = QueryBatch::with_capacity(3);
        batch.push("a", "ACGT", "idx").expect("valid query");
        batch.push("b", "TTTT", "idx").expect("valid query");
        batch.push("c", "GGGG", "idx").expect("valid query");
        assert_eq!(batch.len(), 3);
        let ids: Vec<&str> = batch.iter().map(Query::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        // a second pass starts over from the first query
        let again: Vec<&str> = batch.iter().map(Query::id).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_batch_push_query_and_from_iter() {
        let mut batch = QueryBatch::new();
        assert!(batch.is_empty());
        batch.push_query(Query::new("a", "ACGT", "idx").expect("valid query"));
        assert_eq!(batch.len(), 1);

        let collected: QueryBatch = ["x", "y"]
            .iter()
            .map(|id| Query::new(*id, "ACGT", "idx").expect("valid query"))
            .collect();
        let ids: Vec<&str> = (&collected).into_iter().map(Query::id).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }
}
