use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::prelude::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub skill_id: Uuid,
    pub name: String,
}

/// Converts client-supplied skill identifiers into native references.
pub fn parse_refs(ids: &[String]) -> Result<Vec<Uuid>> {
    ids.iter()
        .map(|id| {
            id.parse::<Uuid>()
                .map_err(|_| Error::Request(format!("invalid skill reference: {}", id)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_references_parse() {
        let ids = vec![
            "8c2df3e8-6f76-4a0a-bb5a-3a08c9c3a2f1".to_string(),
            "0b9f8a3e-1f2d-4c5b-9e6f-7a8b9c0d1e2f".to_string(),
        ];
        let refs = parse_refs(&ids).expect("well formed references");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].to_string(), ids[0]);
    }

    #[test]
    fn malformed_reference_is_a_request_error() {
        let ids = vec!["not-a-skill".to_string()];
        match parse_refs(&ids) {
            Err(Error::Request(msg)) => assert!(msg.contains("not-a-skill")),
            other => panic!("expected request error, got {:?}", other),
        }
    }
}
