//! Seam between descriptors and the external policy-decision point.
//!
//! # Purpose
//! Defines the document a decision point evaluates ([`PolicyInput`]), the
//! verdict it returns ([`Decision`]) and the trait an engine implements.
//!
//! # How it fits
//! [`crate::Authorizer`] builds a [`PolicyInput`] from the operation's
//! descriptor and the caller's [`Authentication`] and hands it to a
//! [`PolicyDecisionPoint`]. How the engine decides is its own business.
//!
//! # Key invariants
//! - The input document is `{"request": {...}, "authentication": {...}}` with
//!   the descriptor serialized as four strings.
//! - Engines must be side-effect free towards the caller; an engine error is
//!   treated as a deny by the authorizer.
//!
//! # Examples
//! ```rust
//! use flipt_authz::{Action, Authentication, PolicyInput, Request, Resource};
//!
//! let auth = Authentication::new("token").with_metadata("io.flipt.auth.token.name", "ci");
//! let input = PolicyInput::new(Request::new(Resource::Namespace, Action::Read), Some(&auth));
//! let doc = serde_json::to_value(&input).unwrap();
//! assert_eq!(doc["request"]["resource"], "namespace");
//! assert_eq!(doc["authentication"]["method"], "token");
//! ```
use crate::{AuthzResult, Request};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Caller identity resolved by the transport before authorization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    pub method: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Authentication {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Document evaluated by a policy-decision point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyInput<'a> {
    pub request: Request,
    pub authentication: Option<&'a Authentication>,
}

impl<'a> PolicyInput<'a> {
    pub fn new(request: Request, authentication: Option<&'a Authentication>) -> Self {
        Self {
            request,
            authentication,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny { reason: String },
}

impl Decision {
    pub fn deny(reason: impl Into<String>) -> Self {
        Decision::Deny {
            reason: reason.into(),
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// External engine that turns a [`PolicyInput`] into a [`Decision`].
#[async_trait]
pub trait PolicyDecisionPoint: Send + Sync {
    async fn evaluate(&self, input: &PolicyInput<'_>) -> AuthzResult<Decision>;
}

#[async_trait]
impl<T: PolicyDecisionPoint + ?Sized> PolicyDecisionPoint for std::sync::Arc<T> {
    async fn evaluate(&self, input: &PolicyInput<'_>) -> AuthzResult<Decision> {
        (**self).evaluate(input).await
    }
}

/// Decision point that allows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl PolicyDecisionPoint for AllowAll {
    async fn evaluate(&self, _input: &PolicyInput<'_>) -> AuthzResult<Decision> {
        Ok(Decision::Allow)
    }
}

/// Decision point that denies everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl PolicyDecisionPoint for DenyAll {
    async fn evaluate(&self, _input: &PolicyInput<'_>) -> AuthzResult<Decision> {
        Ok(Decision::deny("deny_all"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, FlagSubject, flag_scoped};

    #[test]
    fn input_document_shape() {
        let auth = Authentication::new("oidc").with_metadata("io.flipt.auth.oidc.email", "a@b.c");
        let input = PolicyInput::new(
            flag_scoped("production", FlagSubject::Flag, Action::Update),
            Some(&auth),
        );
        let value = serde_json::to_value(&input).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "request": {
                    "namespace": "production",
                    "resource": "flag",
                    "subject": "flag",
                    "action": "update",
                },
                "authentication": {
                    "method": "oidc",
                    "metadata": { "io.flipt.auth.oidc.email": "a@b.c" },
                },
            })
        );
    }

    #[test]
    fn missing_authentication_serializes_null() {
        let input = PolicyInput::new(Request::new(crate::Resource::Namespace, Action::Read), None);
        let value = serde_json::to_value(&input).expect("serialize");
        assert!(value["authentication"].is_null());
    }

    #[tokio::test]
    async fn static_decision_points() {
        let input = PolicyInput::new(flag_scoped("default", FlagSubject::Rule, Action::Read), None);
        assert!(AllowAll.evaluate(&input).await.expect("allow").is_allowed());
        let denied = DenyAll.evaluate(&input).await.expect("deny");
        assert_eq!(denied, Decision::deny("deny_all"));
        assert!(!denied.is_allowed());
    }

    #[tokio::test]
    async fn arc_forwards_to_inner_engine() {
        let engine: std::sync::Arc<dyn PolicyDecisionPoint> = std::sync::Arc::new(DenyAll);
        let input = PolicyInput::new(flag_scoped("default", FlagSubject::Flag, Action::Read), None);
        assert!(!engine.evaluate(&input).await.expect("evaluate").is_allowed());
    }
}
