//! Fine-grained subjects within a resource.
//!
//! # Purpose
//! [`Subject`] names the entity an action applies to. [`FlagSubject`] and
//! [`SegmentSubject`] are the subsets that may appear under the `flag` and
//! `segment` resources; the scoped request helpers accept only these, so a
//! segment child can never be described as a flag child.
//!
//! # Key invariants
//! - `variant`, `rule`, `rollout` and `flag` live under [`Resource::Flag`].
//! - `constraint`, `distribution` and `segment` live under [`Resource::Segment`].
//! - `namespace` lives under [`Resource::Namespace`], `token` under
//!   [`Resource::Authentication`].
use crate::{AuthzError, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Constraint,
    Distribution,
    Flag,
    Namespace,
    Rollout,
    Rule,
    Segment,
    Token,
    Variant,
}

impl Subject {
    pub const ALL: [Subject; 9] = [
        Subject::Constraint,
        Subject::Distribution,
        Subject::Flag,
        Subject::Namespace,
        Subject::Rollout,
        Subject::Rule,
        Subject::Segment,
        Subject::Token,
        Subject::Variant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Constraint => "constraint",
            Subject::Distribution => "distribution",
            Subject::Flag => "flag",
            Subject::Namespace => "namespace",
            Subject::Rollout => "rollout",
            Subject::Rule => "rule",
            Subject::Segment => "segment",
            Subject::Token => "token",
            Subject::Variant => "variant",
        }
    }

    /// The only resource this subject may be paired with.
    pub fn parent(self) -> Resource {
        match self {
            Subject::Flag | Subject::Variant | Subject::Rule | Subject::Rollout => Resource::Flag,
            Subject::Segment | Subject::Constraint | Subject::Distribution => Resource::Segment,
            Subject::Namespace => Resource::Namespace,
            Subject::Token => Resource::Authentication,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Subject {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.as_str() == value)
            .ok_or_else(|| AuthzError::InvalidSubject(value.to_string()))
    }
}

/// Subjects that belong to a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagSubject {
    Flag,
    Variant,
    Rule,
    Rollout,
}

impl From<FlagSubject> for Subject {
    fn from(value: FlagSubject) -> Self {
        match value {
            FlagSubject::Flag => Subject::Flag,
            FlagSubject::Variant => Subject::Variant,
            FlagSubject::Rule => Subject::Rule,
            FlagSubject::Rollout => Subject::Rollout,
        }
    }
}

/// Subjects that belong to a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentSubject {
    Segment,
    Constraint,
    Distribution,
}

impl From<SegmentSubject> for Subject {
    fn from(value: SegmentSubject) -> Self {
        match value {
            SegmentSubject::Segment => Subject::Segment,
            SegmentSubject::Constraint => Subject::Constraint,
            SegmentSubject::Distribution => Subject::Distribution,
        }
    }
}
