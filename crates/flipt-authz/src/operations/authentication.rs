//! Authentication API operation inputs.
//!
//! Tokens and authentications are not namespace-scoped; every descriptor here
//! has an empty namespace and the `authentication` resource with the `token`
//! subject.
use crate::{Action, Request, Requester, Resource, Subject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTokenRequest {
    pub name: String,
    pub description: String,
    /// RFC 3339 expiry, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetAuthenticationRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListAuthenticationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub limit: i32,
    pub page_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteAuthenticationRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpireAuthenticationSelfRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

fn token_request(action: Action) -> Request {
    Request::new(Resource::Authentication, action).with_subject(Subject::Token)
}

impl Requester for CreateTokenRequest {
    fn request(&self) -> Request {
        token_request(Action::Create)
    }
}

impl Requester for GetAuthenticationRequest {
    fn request(&self) -> Request {
        token_request(Action::Read)
    }
}

impl Requester for ListAuthenticationsRequest {
    fn request(&self) -> Request {
        token_request(Action::Read)
    }
}

impl Requester for DeleteAuthenticationRequest {
    fn request(&self) -> Request {
        token_request(Action::Delete)
    }
}

impl Requester for ExpireAuthenticationSelfRequest {
    fn request(&self) -> Request {
        token_request(Action::Update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_operations_are_unscoped() {
        let requests = [
            CreateTokenRequest {
                name: "ci".to_string(),
                ..Default::default()
            }
            .request(),
            GetAuthenticationRequest {
                id: "a1".to_string(),
            }
            .request(),
            ListAuthenticationsRequest::default().request(),
            DeleteAuthenticationRequest {
                id: "a1".to_string(),
            }
            .request(),
            ExpireAuthenticationSelfRequest::default().request(),
        ];
        for request in &requests {
            assert_eq!(request.namespace, "");
            assert_eq!(request.resource, Resource::Authentication);
            assert_eq!(request.subject, Some(Subject::Token));
        }
        let actions: Vec<Action> = requests.iter().map(|r| r.action).collect();
        assert_eq!(
            actions,
            vec![
                Action::Create,
                Action::Read,
                Action::Read,
                Action::Delete,
                Action::Update
            ]
        );
    }
}
