//! Tagged union over every operation input.
//!
//! # Purpose
//! [`Operation`] lets a transport decode any operation from a single envelope
//! (`{"operation": "get_flag", "input": {...}}`) and classify it without
//! naming the concrete type.
//!
//! # Key invariants
//! - The `Requester` impl is one exhaustive match with no wildcard arm; adding
//!   a variant without a mapping does not compile.
//! - [`OperationKind::as_str`] equals the serde tag of the matching variant.
//! - A missing or `null` `input` decodes as the input type's default, the same
//!   as an empty object.
use crate::operations::*;
use crate::{Request, Requester};
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! operations {
    ($($variant:ident($input:ty) => $name:literal,)+) => {
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(tag = "operation", content = "input", rename_all = "snake_case")]
        pub enum Operation {
            $($variant($input),)+
        }

        #[derive(Deserialize)]
        #[serde(tag = "operation", content = "input", rename_all = "snake_case")]
        enum Envelope {
            $($variant(Option<$input>),)+
        }

        impl<'de> Deserialize<'de> for Operation {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok(match Envelope::deserialize(deserializer)? {
                    $(Envelope::$variant(input) => Operation::$variant(input.unwrap_or_default()),)+
                })
            }
        }

        /// Fieldless mirror of [`Operation`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OperationKind {
            $($variant,)+
        }

        impl OperationKind {
            pub const ALL: &'static [OperationKind] = &[$(OperationKind::$variant,)+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(OperationKind::$variant => $name,)+
                }
            }
        }

        impl Operation {
            pub fn kind(&self) -> OperationKind {
                match self {
                    $(Operation::$variant(_) => OperationKind::$variant,)+
                }
            }
        }

        impl Requester for Operation {
            fn request(&self) -> Request {
                match self {
                    $(Operation::$variant(input) => input.request(),)+
                }
            }
        }

        $(
            impl From<$input> for Operation {
                fn from(value: $input) -> Self {
                    Operation::$variant(value)
                }
            }
        )+
    };
}

operations! {
    GetNamespace(GetNamespaceRequest) => "get_namespace",
    ListNamespaces(ListNamespaceRequest) => "list_namespaces",
    CreateNamespace(CreateNamespaceRequest) => "create_namespace",
    UpdateNamespace(UpdateNamespaceRequest) => "update_namespace",
    DeleteNamespace(DeleteNamespaceRequest) => "delete_namespace",

    GetFlag(GetFlagRequest) => "get_flag",
    ListFlags(ListFlagRequest) => "list_flags",
    CreateFlag(CreateFlagRequest) => "create_flag",
    UpdateFlag(UpdateFlagRequest) => "update_flag",
    DeleteFlag(DeleteFlagRequest) => "delete_flag",

    CreateVariant(CreateVariantRequest) => "create_variant",
    UpdateVariant(UpdateVariantRequest) => "update_variant",
    DeleteVariant(DeleteVariantRequest) => "delete_variant",

    GetRule(GetRuleRequest) => "get_rule",
    ListRules(ListRuleRequest) => "list_rules",
    CreateRule(CreateRuleRequest) => "create_rule",
    UpdateRule(UpdateRuleRequest) => "update_rule",
    OrderRules(OrderRulesRequest) => "order_rules",
    DeleteRule(DeleteRuleRequest) => "delete_rule",

    GetRollout(GetRolloutRequest) => "get_rollout",
    ListRollouts(ListRolloutRequest) => "list_rollouts",
    CreateRollout(CreateRolloutRequest) => "create_rollout",
    UpdateRollout(UpdateRolloutRequest) => "update_rollout",
    OrderRollouts(OrderRolloutsRequest) => "order_rollouts",
    DeleteRollout(DeleteRolloutRequest) => "delete_rollout",

    GetSegment(GetSegmentRequest) => "get_segment",
    ListSegments(ListSegmentRequest) => "list_segments",
    CreateSegment(CreateSegmentRequest) => "create_segment",
    UpdateSegment(UpdateSegmentRequest) => "update_segment",
    DeleteSegment(DeleteSegmentRequest) => "delete_segment",

    CreateConstraint(CreateConstraintRequest) => "create_constraint",
    UpdateConstraint(UpdateConstraintRequest) => "update_constraint",
    DeleteConstraint(DeleteConstraintRequest) => "delete_constraint",

    CreateDistribution(CreateDistributionRequest) => "create_distribution",
    UpdateDistribution(UpdateDistributionRequest) => "update_distribution",
    DeleteDistribution(DeleteDistributionRequest) => "delete_distribution",

    CreateToken(CreateTokenRequest) => "create_token",
    GetAuthentication(GetAuthenticationRequest) => "get_authentication",
    ListAuthentications(ListAuthenticationsRequest) => "list_authentications",
    DeleteAuthentication(DeleteAuthenticationRequest) => "delete_authentication",
    ExpireAuthenticationSelf(ExpireAuthenticationSelfRequest) => "expire_authentication_self",
}

impl Operation {
    /// The input's own namespace field, if the operation has one.
    ///
    /// Namespace operations report their `key`; listing namespaces and the
    /// authentication API report `None`.
    pub fn namespace_key(&self) -> Option<&str> {
        let key = match self {
            Operation::GetNamespace(input) => &input.key,
            Operation::CreateNamespace(input) => &input.key,
            Operation::UpdateNamespace(input) => &input.key,
            Operation::DeleteNamespace(input) => &input.key,
            Operation::ListNamespaces(_)
            | Operation::CreateToken(_)
            | Operation::GetAuthentication(_)
            | Operation::ListAuthentications(_)
            | Operation::DeleteAuthentication(_)
            | Operation::ExpireAuthenticationSelf(_) => return None,

            Operation::GetFlag(input) => &input.namespace_key,
            Operation::ListFlags(input) => &input.namespace_key,
            Operation::CreateFlag(input) => &input.namespace_key,
            Operation::UpdateFlag(input) => &input.namespace_key,
            Operation::DeleteFlag(input) => &input.namespace_key,
            Operation::CreateVariant(input) => &input.namespace_key,
            Operation::UpdateVariant(input) => &input.namespace_key,
            Operation::DeleteVariant(input) => &input.namespace_key,
            Operation::GetRule(input) => &input.namespace_key,
            Operation::ListRules(input) => &input.namespace_key,
            Operation::CreateRule(input) => &input.namespace_key,
            Operation::UpdateRule(input) => &input.namespace_key,
            Operation::OrderRules(input) => &input.namespace_key,
            Operation::DeleteRule(input) => &input.namespace_key,
            Operation::GetRollout(input) => &input.namespace_key,
            Operation::ListRollouts(input) => &input.namespace_key,
            Operation::CreateRollout(input) => &input.namespace_key,
            Operation::UpdateRollout(input) => &input.namespace_key,
            Operation::OrderRollouts(input) => &input.namespace_key,
            Operation::DeleteRollout(input) => &input.namespace_key,
            Operation::GetSegment(input) => &input.namespace_key,
            Operation::ListSegments(input) => &input.namespace_key,
            Operation::CreateSegment(input) => &input.namespace_key,
            Operation::UpdateSegment(input) => &input.namespace_key,
            Operation::DeleteSegment(input) => &input.namespace_key,
            Operation::CreateConstraint(input) => &input.namespace_key,
            Operation::UpdateConstraint(input) => &input.namespace_key,
            Operation::DeleteConstraint(input) => &input.namespace_key,
            Operation::CreateDistribution(input) => &input.namespace_key,
            Operation::UpdateDistribution(input) => &input.namespace_key,
            Operation::DeleteDistribution(input) => &input.namespace_key,
        };
        Some(key.as_str())
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
