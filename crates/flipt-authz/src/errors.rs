use crate::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthzError {
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("invalid resource: {0}")]
    InvalidResource(String),
    #[error("invalid subject: {0}")]
    InvalidSubject(String),
    #[error("request is not authenticated")]
    Unauthenticated,
    #[error("permission denied for {request}: {reason}")]
    PermissionDenied { request: Request, reason: String },
    #[error("policy evaluation failed: {0}")]
    Engine(#[from] anyhow::Error),
}

pub type AuthzResult<T> = Result<T, AuthzError>;
