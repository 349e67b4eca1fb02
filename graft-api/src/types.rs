//! Edge-related API types

use graft_core::{EdgeForm, PointId};
use serde::{Deserialize, Serialize};

/// Request to create a new edge.
///
/// There is deliberately no `id` field: ids are generated server-side, and
/// an `id` key in the request body is dropped during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertEdgeRequest {
    /// Classifies the edge's origin/purpose
    pub context: String,
    /// Identifier of the origin point
    pub source: String,
    /// Names the relation type
    pub code: String,
    /// Identifier of the destination point
    pub target: String,
}

impl From<InsertEdgeRequest> for EdgeForm {
    fn from(req: InsertEdgeRequest) -> Self {
        EdgeForm {
            context: req.context,
            source: req.source,
            code: req.code,
            target: req.target,
        }
    }
}

/// Response carrying a generated identifier.
///
/// Returned by both `insert_edge` and `new_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: PointId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"context":"graph1","source":"p1","target":"p2","code":"links"}"#;
        let req: InsertEdgeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.context, "graph1");
        assert_eq!(req.source, "p1");
        assert_eq!(req.code, "links");
        assert_eq!(req.target, "p2");
    }

    #[test]
    fn test_caller_supplied_id_is_dropped() {
        let json = r#"{"id":"x","context":"c","source":"s","code":"k","target":"t"}"#;
        let req: InsertEdgeRequest = serde_json::from_str(json).unwrap();
        let form: EdgeForm = req.into();
        let value = serde_json::to_value(&form).unwrap();
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"context":"c","source":"s","code":"k"}"#;
        assert!(serde_json::from_str::<InsertEdgeRequest>(json).is_err());
    }

    #[test]
    fn test_id_response_serialization() {
        let id = PointId::generate();
        let json = serde_json::to_value(IdResponse { id }).unwrap();
        assert_eq!(json["id"], id.to_string());
    }

    proptest! {
        #[test]
        fn request_to_form_preserves_fields(
            context in ".*",
            source in ".*",
            code in ".*",
            target in ".*",
        ) {
            let req = InsertEdgeRequest {
                context: context.clone(),
                source: source.clone(),
                code: code.clone(),
                target: target.clone(),
            };
            let form: EdgeForm = req.into();
            prop_assert_eq!(form.context, context);
            prop_assert_eq!(form.source, source);
            prop_assert_eq!(form.code, code);
            prop_assert_eq!(form.target, target);
        }
    }
}
