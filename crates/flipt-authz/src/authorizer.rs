//! Transport-facing authorization gate.
//!
//! # Purpose
//! Reduces an operation to its descriptor, consults the configured
//! [`PolicyDecisionPoint`] and turns the verdict into a result the transport
//! can act on before running the business handler.
//!
//! # Key invariants
//! - Descriptor extraction always happens, even when authorization is not
//!   required, so callers can log or audit it.
//! - When required, a missing authentication is rejected before the engine
//!   is consulted.
//! - Engine failures deny (fail closed).
//!
//! # Examples
//! ```rust
//! use flipt_authz::{AllowAll, AuthorizationConfig, Authentication, Authorizer, GetFlagRequest};
//!
//! # async fn demo() -> flipt_authz::AuthzResult<()> {
//! let authorizer = Authorizer::new(AuthorizationConfig { required: true }, AllowAll);
//! let auth = Authentication::new("token");
//! let input = GetFlagRequest {
//!     key: "new-checkout".to_string(),
//!     namespace_key: "production".to_string(),
//! };
//! let request = authorizer.authorize(Some(&auth), &input).await?;
//! assert_eq!(request.namespace, "production");
//! # Ok(())
//! # }
//! ```
use crate::{
    AuthorizationConfig, Authentication, AuthzError, AuthzResult, Decision, PolicyDecisionPoint,
    PolicyInput, Request, Requester,
};

#[derive(Debug, Clone)]
pub struct Authorizer<P> {
    config: AuthorizationConfig,
    engine: P,
}

impl<P: PolicyDecisionPoint> Authorizer<P> {
    pub fn new(config: AuthorizationConfig, engine: P) -> Self {
        Self { config, engine }
    }

    pub fn config(&self) -> &AuthorizationConfig {
        &self.config
    }

    pub fn engine(&self) -> &P {
        &self.engine
    }

    /// Authorize an operation for the given caller.
    ///
    /// # Returns
    /// - The operation's descriptor when access is granted or not required.
    ///
    /// # Errors
    /// - [`AuthzError::Unauthenticated`] when required and no caller is known.
    /// - [`AuthzError::PermissionDenied`] when the engine denies.
    /// - [`AuthzError::Engine`] when the engine fails.
    pub async fn authorize<R>(
        &self,
        authentication: Option<&Authentication>,
        operation: &R,
    ) -> AuthzResult<Request>
    where
        R: Requester + ?Sized,
    {
        let request = operation.request();

        if !self.config.required {
            tracing::debug!(
                namespace = %request.namespace,
                resource = %request.resource,
                subject = request.subject_str(),
                action = %request.action,
                "authorization not required; skipping policy evaluation"
            );
            return Ok(request);
        }

        let Some(authentication) = authentication else {
            tracing::warn!(
                namespace = %request.namespace,
                resource = %request.resource,
                subject = request.subject_str(),
                action = %request.action,
                "rejecting unauthenticated request"
            );
            return Err(AuthzError::Unauthenticated);
        };

        let input = PolicyInput::new(request, Some(authentication));
        let decision = match self.engine.evaluate(&input).await {
            Ok(decision) => decision,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    namespace = %input.request.namespace,
                    resource = %input.request.resource,
                    subject = input.request.subject_str(),
                    action = %input.request.action,
                    "policy evaluation failed"
                );
                return Err(err);
            }
        };

        let request = input.request;
        match decision {
            Decision::Allow => {
                tracing::info!(
                    method = %authentication.method,
                    namespace = %request.namespace,
                    resource = %request.resource,
                    subject = request.subject_str(),
                    action = %request.action,
                    "request authorized"
                );
                Ok(request)
            }
            Decision::Deny { reason } => {
                tracing::warn!(
                    method = %authentication.method,
                    namespace = %request.namespace,
                    resource = %request.resource,
                    subject = request.subject_str(),
                    action = %request.action,
                    reason = %reason,
                    "request denied"
                );
                Err(AuthzError::PermissionDenied { request, reason })
            }
        }
    }
}
