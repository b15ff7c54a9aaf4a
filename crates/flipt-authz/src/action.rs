use crate::AuthzError;
use serde::{Deserialize, Serialize};

/// CRUD verb applied to a resource.
///
/// Reordering rules or rollouts is an [`Action::Update`]; there is no
/// dedicated reorder verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::Create, Action::Read, Action::Update, Action::Delete];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            _ => Err(AuthzError::InvalidAction(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Action;
    use crate::AuthzError;

    #[test]
    fn action_string_roundtrip() {
        for action in Action::ALL {
            let as_str = action.as_str();
            assert_eq!(as_str.parse::<Action>().ok(), Some(action));
            assert_eq!(action.to_string(), as_str);
        }
    }

    #[test]
    fn action_from_str_invalid() {
        let err = "reorder".parse::<Action>().expect_err("reorder is not a verb");
        assert!(matches!(err, AuthzError::InvalidAction(s) if s == "reorder"));
    }

    #[test]
    fn action_serializes_lowercase() {
        let json = serde_json::to_string(&Action::Delete).expect("serialize");
        assert_eq!(json, "\"delete\"");
    }
}
