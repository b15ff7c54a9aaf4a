//! Segment, constraint and distribution operation inputs.
//!
//! Constraints and distributions are classified as children of a segment.
//! Distributions are addressed through a flag's rule in the API, but the
//! descriptor still places them under the segment resource.
use crate::{Action, Request, Requester, SegmentSubject, segment_scoped};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    #[default]
    AllMatchType,
    AnyMatchType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonType {
    #[default]
    UnknownComparisonType,
    StringComparisonType,
    NumberComparisonType,
    BooleanComparisonType,
    DatetimeComparisonType,
    EntityIdComparisonType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSegmentRequest {
    pub key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSegmentRequest {
    pub limit: i32,
    pub page_token: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSegmentRequest {
    pub key: String,
    pub name: String,
    pub description: String,
    pub match_type: MatchType,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateSegmentRequest {
    pub key: String,
    pub name: String,
    pub description: String,
    pub match_type: MatchType,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSegmentRequest {
    pub key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateConstraintRequest {
    pub segment_key: String,
    #[serde(rename = "type")]
    pub comparison: ComparisonType,
    pub property: String,
    pub operator: String,
    pub value: String,
    pub namespace_key: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConstraintRequest {
    pub id: String,
    pub segment_key: String,
    #[serde(rename = "type")]
    pub comparison: ComparisonType,
    pub property: String,
    pub operator: String,
    pub value: String,
    pub namespace_key: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteConstraintRequest {
    pub id: String,
    pub segment_key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDistributionRequest {
    pub flag_key: String,
    pub rule_id: String,
    pub variant_id: String,
    pub rollout: f32,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateDistributionRequest {
    pub id: String,
    pub flag_key: String,
    pub rule_id: String,
    pub variant_id: String,
    pub rollout: f32,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteDistributionRequest {
    pub id: String,
    pub flag_key: String,
    pub rule_id: String,
    pub variant_id: String,
    pub namespace_key: String,
}

impl Requester for GetSegmentRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Segment, Action::Read)
    }
}

impl Requester for ListSegmentRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Segment, Action::Read)
    }
}

impl Requester for CreateSegmentRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Segment, Action::Create)
    }
}

impl Requester for UpdateSegmentRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Segment, Action::Update)
    }
}

impl Requester for DeleteSegmentRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Segment, Action::Delete)
    }
}

impl Requester for CreateConstraintRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Constraint, Action::Create)
    }
}

impl Requester for UpdateConstraintRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Constraint, Action::Update)
    }
}

impl Requester for DeleteConstraintRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Constraint, Action::Delete)
    }
}

impl Requester for CreateDistributionRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Distribution, Action::Create)
    }
}

impl Requester for UpdateDistributionRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Distribution, Action::Update)
    }
}

impl Requester for DeleteDistributionRequest {
    fn request(&self) -> Request {
        segment_scoped(&self.namespace_key, SegmentSubject::Distribution, Action::Delete)
    }
}
