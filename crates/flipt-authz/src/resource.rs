//! Coarse-grained resource classes.
//!
//! # Purpose
//! Names the object class an operation acts on. Policies are usually written
//! against the resource first and narrowed by [`crate::Subject`].
//!
//! # Key invariants
//! - The set is closed; a new resource needs a new variant and every mapping
//!   that should use it updated.
//! - Wire names are lowercase and stable (`namespace`, `flag`, `segment`,
//!   `authentication`).
use crate::AuthzError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Namespace,
    Flag,
    Segment,
    Authentication,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Namespace,
        Resource::Flag,
        Resource::Segment,
        Resource::Authentication,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Resource::Namespace => "namespace",
            Resource::Flag => "flag",
            Resource::Segment => "segment",
            Resource::Authentication => "authentication",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resource {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "namespace" => Ok(Resource::Namespace),
            "flag" => Ok(Resource::Flag),
            "segment" => Ok(Resource::Segment),
            "authentication" => Ok(Resource::Authentication),
            _ => Err(AuthzError::InvalidResource(value.to_string())),
        }
    }
}
