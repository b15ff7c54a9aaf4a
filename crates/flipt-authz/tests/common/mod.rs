#![allow(dead_code)]

use flipt_authz::*;

/// Build an operation of the given kind whose namespace field is `ns`.
pub fn operation_for(kind: OperationKind, ns: &str) -> Operation {
    let ns = ns.to_string();
    match kind {
        OperationKind::GetNamespace => GetNamespaceRequest { key: ns }.into(),
        OperationKind::ListNamespaces => ListNamespaceRequest::default().into(),
        OperationKind::CreateNamespace => CreateNamespaceRequest {
            key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateNamespace => UpdateNamespaceRequest {
            key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteNamespace => DeleteNamespaceRequest { key: ns }.into(),

        OperationKind::GetFlag => GetFlagRequest {
            key: "f".to_string(),
            namespace_key: ns,
        }
        .into(),
        OperationKind::ListFlags => ListFlagRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::CreateFlag => CreateFlagRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateFlag => UpdateFlagRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteFlag => DeleteFlagRequest {
            key: "f".to_string(),
            namespace_key: ns,
        }
        .into(),

        OperationKind::CreateVariant => CreateVariantRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateVariant => UpdateVariantRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteVariant => DeleteVariantRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::GetRule => GetRuleRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::ListRules => ListRuleRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::CreateRule => CreateRuleRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateRule => UpdateRuleRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::OrderRules => OrderRulesRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteRule => DeleteRuleRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::GetRollout => GetRolloutRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::ListRollouts => ListRolloutRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::CreateRollout => CreateRolloutRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateRollout => UpdateRolloutRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::OrderRollouts => OrderRolloutsRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteRollout => DeleteRolloutRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::GetSegment => GetSegmentRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::ListSegments => ListSegmentRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::CreateSegment => CreateSegmentRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateSegment => UpdateSegmentRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteSegment => DeleteSegmentRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::CreateConstraint => CreateConstraintRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateConstraint => UpdateConstraintRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteConstraint => DeleteConstraintRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::CreateDistribution => CreateDistributionRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::UpdateDistribution => UpdateDistributionRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),
        OperationKind::DeleteDistribution => DeleteDistributionRequest {
            namespace_key: ns,
            ..Default::default()
        }
        .into(),

        OperationKind::CreateToken => CreateTokenRequest::default().into(),
        OperationKind::GetAuthentication => GetAuthenticationRequest::default().into(),
        OperationKind::ListAuthentications => ListAuthenticationsRequest::default().into(),
        OperationKind::DeleteAuthentication => DeleteAuthenticationRequest::default().into(),
        OperationKind::ExpireAuthenticationSelf => {
            ExpireAuthenticationSelfRequest::default().into()
        }
    }
}

/// Independent table of the expected (resource, subject, action) per kind.
pub fn expected(kind: OperationKind) -> (Resource, Option<Subject>, Action) {
    use Action::*;
    use OperationKind as K;

    let flag = |subject, action| (Resource::Flag, Some(subject), action);
    let segment = |subject, action| (Resource::Segment, Some(subject), action);
    let token = |action| (Resource::Authentication, Some(Subject::Token), action);

    match kind {
        K::GetNamespace | K::ListNamespaces => (Resource::Namespace, None, Read),
        K::CreateNamespace => (Resource::Namespace, None, Create),
        K::UpdateNamespace => (Resource::Namespace, None, Update),
        K::DeleteNamespace => (Resource::Flag, None, Delete),

        K::GetFlag | K::ListFlags => flag(Subject::Flag, Read),
        K::CreateFlag => flag(Subject::Flag, Create),
        K::UpdateFlag => flag(Subject::Flag, Update),
        K::DeleteFlag => flag(Subject::Flag, Delete),

        K::CreateVariant => flag(Subject::Variant, Create),
        K::UpdateVariant => flag(Subject::Variant, Update),
        K::DeleteVariant => flag(Subject::Variant, Delete),

        K::GetRule | K::ListRules => flag(Subject::Rule, Read),
        K::CreateRule => flag(Subject::Rule, Create),
        K::UpdateRule | K::OrderRules => flag(Subject::Rule, Update),
        K::DeleteRule => flag(Subject::Rule, Delete),

        K::GetRollout | K::ListRollouts => flag(Subject::Rollout, Read),
        K::CreateRollout => flag(Subject::Rollout, Create),
        K::UpdateRollout | K::OrderRollouts => flag(Subject::Rollout, Update),
        K::DeleteRollout => flag(Subject::Rollout, Delete),

        K::GetSegment | K::ListSegments => segment(Subject::Segment, Read),
        K::CreateSegment => segment(Subject::Segment, Create),
        K::UpdateSegment => segment(Subject::Segment, Update),
        K::DeleteSegment => segment(Subject::Segment, Delete),

        K::CreateConstraint => segment(Subject::Constraint, Create),
        K::UpdateConstraint => segment(Subject::Constraint, Update),
        K::DeleteConstraint => segment(Subject::Constraint, Delete),

        K::CreateDistribution => segment(Subject::Distribution, Create),
        K::UpdateDistribution => segment(Subject::Distribution, Update),
        K::DeleteDistribution => segment(Subject::Distribution, Delete),

        K::CreateToken => token(Create),
        K::GetAuthentication | K::ListAuthentications => token(Read),
        K::DeleteAuthentication => token(Delete),
        K::ExpireAuthenticationSelf => token(Update),
    }
}
