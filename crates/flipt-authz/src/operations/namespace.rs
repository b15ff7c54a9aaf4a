//! Namespace operation inputs.
//!
//! Namespaces carry their own key rather than a `namespace_key`; that key is
//! the descriptor's namespace. Listing namespaces is the one operation with
//! no namespace scope at all.
use crate::{Action, Request, Requester, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetNamespaceRequest {
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListNamespaceRequest {
    pub limit: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateNamespaceRequest {
    pub key: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateNamespaceRequest {
    pub key: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteNamespaceRequest {
    pub key: String,
}

impl Requester for GetNamespaceRequest {
    fn request(&self) -> Request {
        Request::new(Resource::Namespace, Action::Read).with_namespace(&self.key)
    }
}

impl Requester for ListNamespaceRequest {
    fn request(&self) -> Request {
        Request::new(Resource::Namespace, Action::Read)
    }
}

impl Requester for CreateNamespaceRequest {
    fn request(&self) -> Request {
        Request::new(Resource::Namespace, Action::Create).with_namespace(&self.key)
    }
}

impl Requester for UpdateNamespaceRequest {
    fn request(&self) -> Request {
        Request::new(Resource::Namespace, Action::Update).with_namespace(&self.key)
    }
}

// Deleting a namespace is classified under the flag resource. Policies written
// against `resource = namespace, action = delete` never match it.
impl Requester for DeleteNamespaceRequest {
    fn request(&self) -> Request {
        Request::new(Resource::Flag, Action::Delete).with_namespace(&self.key)
    }
}
