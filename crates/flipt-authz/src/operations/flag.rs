//! Flag and variant operation inputs.
use crate::{Action, FlagSubject, Request, Requester, flag_scoped};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    #[default]
    VariantFlagType,
    BooleanFlagType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFlagRequest {
    pub key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFlagRequest {
    pub limit: i32,
    pub page_token: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateFlagRequest {
    pub key: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub namespace_key: String,
    #[serde(rename = "type")]
    pub flag_type: FlagType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateFlagRequest {
    pub key: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub namespace_key: String,
    pub default_variant_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteFlagRequest {
    pub key: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateVariantRequest {
    pub flag_key: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub attachment: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateVariantRequest {
    pub id: String,
    pub flag_key: String,
    pub key: String,
    pub name: String,
    pub description: String,
    pub attachment: String,
    pub namespace_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVariantRequest {
    pub id: String,
    pub flag_key: String,
    pub namespace_key: String,
}

impl Requester for GetFlagRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Flag, Action::Read)
    }
}

impl Requester for ListFlagRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Flag, Action::Read)
    }
}

impl Requester for CreateFlagRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Flag, Action::Create)
    }
}

impl Requester for UpdateFlagRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Flag, Action::Update)
    }
}

impl Requester for DeleteFlagRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Flag, Action::Delete)
    }
}

impl Requester for CreateVariantRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Variant, Action::Create)
    }
}

impl Requester for UpdateVariantRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Variant, Action::Update)
    }
}

impl Requester for DeleteVariantRequest {
    fn request(&self) -> Request {
        flag_scoped(&self.namespace_key, FlagSubject::Variant, Action::Delete)
    }
}
