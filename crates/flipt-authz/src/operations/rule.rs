//! Rule operation inputs. Rules are children of a flag.
use crate::{Action, FlagSubject, Request, Requester, flag_scoped};
use serde::{Deserialize, Serialize};

/// How multiple segment keys on a rule or rollout combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentOperator {
    #[default]
    OrSegmentOperator,
    AndSegmentOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListRuleRequest {
    pub limit: i32,
    pub flag_key: String,
    pub page_token: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRuleRequest {
    pub id: String,
    pub flag_key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateRuleRequest {
    pub flag_key: String,
    pub segment_key: String,
    pub rank: i32,
    pub namespace_key: String,
    pub segment_keys: Vec<String>,
    pub segment_operator: SegmentOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateRuleRequest {
    pub id: String,
    pub flag_key: String,
    pub segment_key: String,
    pub namespace_key: String,
    pub segment_keys: Vec<String>,
    pub segment_operator: SegmentOperator,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteRuleRequest {
    pub id: String,
    pub flag_key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRulesRequest {
    pub flag_key: String,
    pub rule_ids: Vec<String>,
    pub namespace_key: String,
}

impl Requester for ListRuleRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Read)
    }
}

impl Requester for GetRuleRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Read)
    }
}

impl Requester for CreateRuleRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Create)
    }
}

impl Requester for UpdateRuleRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Update)
    }
}

impl Requester for OrderRulesRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Update)
    }
}

impl Requester for DeleteRuleRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Rule, Action::Delete)
    }
}
