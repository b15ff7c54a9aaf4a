//! The authorization descriptor and its builders.
//!
//! # Purpose
//! [`Request`] is the four-field value a policy-decision point evaluates:
//! namespace, resource, subject and action. Every operation of the
//! flag-management API reduces to exactly one of these.
//!
//! # How it fits
//! Operation inputs implement [`crate::Requester`] by calling the builders in
//! this module; the transport forwards the result to a
//! [`crate::PolicyDecisionPoint`] unchanged.
//!
//! # Key invariants
//! - An empty namespace means no namespace scoping applies.
//! - A missing subject means the resource itself is the subject; on the wire
//!   it is the empty string so the descriptor is always four strings.
//! - [`flag_scoped`] and [`segment_scoped`] fix the resource, which keeps
//!   child subjects paired with their parent resource.
//!
//! # Examples
//! ```rust
//! use flipt_authz::{Action, FlagSubject, Resource, Subject, flag_scoped};
//!
//! let request = flag_scoped("default", FlagSubject::Variant, Action::Create);
//! assert_eq!(request.resource, Resource::Flag);
//! assert_eq!(request.subject, Some(Subject::Variant));
//! assert_eq!(request.namespace, "default");
//! ```
use crate::{Action, FlagSubject, Resource, SegmentSubject, Subject};
use serde::{Deserialize, Serialize};

/// Authorization descriptor handed to the policy-decision point.
///
/// # Example
/// ```rust
/// use flipt_authz::{Action, Request, Resource};
///
/// let request = Request::new(Resource::Namespace, Action::Read);
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"namespace":"","resource":"namespace","subject":"","action":"read"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub namespace: String,
    pub resource: Resource,
    #[serde(default, with = "subject_or_empty")]
    pub subject: Option<Subject>,
    pub action: Action,
}

/// Optional field setter applied by [`Request::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Namespace(String),
    Subject(Subject),
}

impl Modifier {
    pub fn namespace(value: impl Into<String>) -> Self {
        Modifier::Namespace(value.into())
    }

    pub fn subject(value: impl Into<Subject>) -> Self {
        Modifier::Subject(value.into())
    }

    fn apply(&self, request: &mut Request) {
        match self {
            Modifier::Namespace(namespace) => request.namespace.clone_from(namespace),
            Modifier::Subject(subject) => request.subject = Some(*subject),
        }
    }
}

impl Request {
    /// Start a descriptor with no namespace and no subject.
    pub fn new(resource: Resource, action: Action) -> Self {
        Self {
            namespace: String::new(),
            resource,
            subject: None,
            action,
        }
    }

    /// Assemble a descriptor from a resource, an action and ordered modifiers.
    ///
    /// Modifiers apply left to right, so a later modifier for the same field
    /// overwrites an earlier one.
    pub fn build(resource: Resource, action: Action, modifiers: &[Modifier]) -> Self {
        let mut request = Self::new(resource, action);
        for modifier in modifiers {
            modifier.apply(&mut request);
        }
        request
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Subject as its wire string; empty when the resource is the subject.
    pub fn subject_str(&self) -> &'static str {
        self.subject.map(Subject::as_str).unwrap_or("")
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}/{}/{}",
            self.action,
            self.namespace,
            self.resource,
            self.subject_str()
        )
    }
}

/// Descriptor for a flag or one of its children (variant, rule, rollout).
pub fn flag_scoped(namespace: impl Into<String>, subject: FlagSubject, action: Action) -> Request {
    Request::new(Resource::Flag, action)
        .with_namespace(namespace)
        .with_subject(subject)
}

/// Descriptor for a segment or one of its children (constraint, distribution).
pub fn segment_scoped(
    namespace: impl Into<String>,
    subject: SegmentSubject,
    action: Action,
) -> Request {
    Request::new(Resource::Segment, action)
        .with_namespace(namespace)
        .with_subject(subject)
}

mod subject_or_empty {
    use crate::Subject;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(
        value: &Option<Subject>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(Subject::as_str).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Subject>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => value.parse::<Subject>().map(Some).map_err(D::Error::custom),
        }
    }
}
