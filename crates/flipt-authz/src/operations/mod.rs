//! Operation inputs of the flag-management API, one struct per operation.
//!
//! # Purpose
//! Each input implements [`crate::Requester`] with a one-line mapping to its
//! descriptor. Together these impls are the complete access-control surface.
//!
//! # Key invariants
//! - Resource and subject are fixed by the entity type, the action by the verb.
//! - Reordering (rules, rollouts) is an update.
//! - The namespace comes from the input's own `namespace_key` (or `key` for
//!   namespaces) and nothing else.
//!
//! # Common pitfalls
//! - Inputs decode with proto3 defaults: a missing `namespace_key` is the
//!   empty string, and the descriptor carries it through unchanged.
mod authentication;
mod flag;
mod namespace;
mod rollout;
mod rule;
mod segment;

pub use authentication::{
    CreateTokenRequest, DeleteAuthenticationRequest, ExpireAuthenticationSelfRequest,
    GetAuthenticationRequest, ListAuthenticationsRequest,
};
pub use flag::{
    CreateFlagRequest, CreateVariantRequest, DeleteFlagRequest, DeleteVariantRequest, FlagType,
    GetFlagRequest, ListFlagRequest, UpdateFlagRequest, UpdateVariantRequest,
};
pub use namespace::{
    CreateNamespaceRequest, DeleteNamespaceRequest, GetNamespaceRequest, ListNamespaceRequest,
    UpdateNamespaceRequest,
};
pub use rollout::{
    CreateRolloutRequest, DeleteRolloutRequest, GetRolloutRequest, ListRolloutRequest,
    OrderRolloutsRequest, RolloutSegment, RolloutThreshold, UpdateRolloutRequest,
};
pub use rule::{
    CreateRuleRequest, DeleteRuleRequest, GetRuleRequest, ListRuleRequest, OrderRulesRequest,
    SegmentOperator, UpdateRuleRequest,
};
pub use segment::{
    ComparisonType, CreateConstraintRequest, CreateDistributionRequest, CreateSegmentRequest,
    DeleteConstraintRequest, DeleteDistributionRequest, DeleteSegmentRequest, GetSegmentRequest,
    ListSegmentRequest, MatchType, UpdateConstraintRequest, UpdateDistributionRequest,
    UpdateSegmentRequest,
};
