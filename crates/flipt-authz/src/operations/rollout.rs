//! Rollout operation inputs. Rollouts are children of a flag.
use crate::operations::SegmentOperator;
use crate::{Action, FlagSubject, Request, Requester, flag_scoped};
use serde::{Deserialize, Serialize};

/// Rollout that matches callers in one or more segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutSegment {
    pub segment_key: String,
    pub segment_keys: Vec<String>,
    pub segment_operator: SegmentOperator,
    pub value: bool,
}

/// Rollout that matches a percentage of callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolloutThreshold {
    pub percentage: f32,
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRolloutRequest {
    pub namespace_key: String,
    pub flag_key: String,
    pub limit: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRolloutRequest {
    pub id: String,
    pub namespace_key: String,
    pub flag_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRolloutRequest {
    pub namespace_key: String,
    pub flag_key: String,
    pub rank: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<RolloutSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RolloutThreshold>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRolloutRequest {
    pub id: String,
    pub namespace_key: String,
    pub flag_key: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<RolloutSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<RolloutThreshold>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteRolloutRequest {
    pub id: String,
    pub namespace_key: String,
    pub flag_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRolloutsRequest {
    pub flag_key: String,
    pub namespace_key: String,
    pub rollout_ids: Vec<String>,
}

impl Requester for ListRolloutRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Read)
    }
}

impl Requester for GetRolloutRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Read)
    }
}

impl Requester for CreateRolloutRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Create)
    }
}

impl Requester for UpdateRolloutRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Update)
    }
}

impl Requester for OrderRolloutsRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Update)
    }
}

impl Requester for DeleteRolloutRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rollout, Action::Delete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Resource, Subject};

    #[test]
    fn order_rollouts_in_staging() {
        let request = OrderRolloutsRequest {
            flag_key: "new-checkout".to_string(),
            namespace_key: "staging".to_string(),
            rollout_ids: vec!["b".to_string(), "a".to_string()],
        }
        .request();
        assert_eq!(
            request,
            Request::new(Resource::Flag, Action::Update)
                .with_namespace("staging")
                .with_subject(Subject::Rollout)
        );
    }

    #[test]
    fn rollout_rule_shape_does_not_affect_descriptor() {
        let by_segment = CreateRolloutRequest {
            namespace_key: "default".to_string(),
            flag_key: "f".to_string(),
            segment: Some(RolloutSegment {
                segment_key: "beta".to_string(),
                value: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        let by_threshold = CreateRolloutRequest {
            namespace_key: "default".to_string(),
            flag_key: "f".to_string(),
            threshold: Some(RolloutThreshold {
                percentage: 12.5,
                value: true,
            }),
            ..Default::default()
        };
        assert_eq!(by_segment.request(), by_threshold.request());
        assert_eq!(by_segment.request().action, Action::Create);
    }

    #[test]
    fn update_rollout_decodes_threshold() {
        let request: UpdateRolloutRequest = serde_json::from_str(
            r#"{"id":"r1","namespace_key":"default","flag_key":"f","threshold":{"percentage":50.0,"value":false}}"#,
        )
        .expect("decode");
        assert_eq!(
            request.threshold.as_ref().map(|t| t.percentage),
            Some(50.0)
        );
        assert!(request.segment.is_none());
        assert_eq!(request.request().action, Action::Update);
    }
}
