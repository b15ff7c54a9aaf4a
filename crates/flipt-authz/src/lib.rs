//! Authorization descriptors for the flag-management API.
//!
//! # Purpose
//! Reduces every operation of the API (namespaces, flags, variants, rules,
//! rollouts, segments, constraints, distributions and authentication tokens)
//! to a four-field [`Request`] that a policy-decision point can evaluate.
//!
//! # How it fits
//! The transport decodes an operation input, calls [`Requester::request`]
//! through [`Authorizer::authorize`], and only runs the business handler when
//! the configured [`PolicyDecisionPoint`] allows it.
//!
//! # Key invariants
//! - Every operation input maps to exactly one descriptor, computed from its
//!   own fields only.
//! - Flag children (variant, rule, rollout) always carry `resource = flag`;
//!   segment children (constraint, distribution) always `resource = segment`.
//! - Reordering is an update.
//! - Deleting a namespace is classified under `resource = flag`.
//!
//! # Important configuration
//! - `FLIPT_AUTHORIZATION_REQUIRED` toggles policy evaluation.
//! - `FLIPT_AUTHORIZATION_CONFIG` points at an optional YAML override.
//!
//! # Examples
//! ```rust
//! use flipt_authz::{Action, CreateVariantRequest, Requester, Resource, Subject};
//!
//! let input = CreateVariantRequest {
//!     flag_key: "new-checkout".to_string(),
//!     key: "blue".to_string(),
//!     namespace_key: "default".to_string(),
//!     ..Default::default()
//! };
//! let request = input.request();
//! assert_eq!(request.resource, Resource::Flag);
//! assert_eq!(request.subject, Some(Subject::Variant));
//! assert_eq!(request.action, Action::Create);
//! ```
//!
//! # Common pitfalls
//! - Matching policies on `resource = namespace` for namespace deletion.
//! - Treating an empty namespace as "default"; it means unscoped.

mod action;
mod authorizer;
mod config;
mod errors;
pub mod observability;
mod operation;
pub mod operations;
mod policy;
mod request;
mod requester;
mod resource;
mod subject;

pub use action::Action;
pub use authorizer::Authorizer;
pub use config::{AuthorizationConfig, ENV_CONFIG_PATH, ENV_REQUIRED};
pub use errors::{AuthzError, AuthzResult};
pub use operation::{Operation, OperationKind};
pub use operations::*;
pub use policy::{AllowAll, Authentication, Decision, DenyAll, PolicyDecisionPoint, PolicyInput};
pub use request::{Modifier, Request, flag_scoped, segment_scoped};
pub use requester::Requester;
pub use resource::Resource;
pub use subject::{FlagSubject, SegmentSubject, Subject};
