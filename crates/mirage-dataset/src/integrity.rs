//! Dataset integrity verification
//!
//! Evaluates the cross-reference invariants a dataset must satisfy after
//! every build and every mutation. Violations are returned as data, not
//! errors: callers decide whether a violation is fatal.

use chrono::{DateTime, Utc};
use mirage_model::{DemoScenario, UserRole};

/// The invariants checked over a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityCheck {
    /// Every edge endpoint resolves to a node of the same graph
    AllEdgesReferenceExistingNodes,
    /// Every record naming a document has a matching document node
    RecordDocumentsHaveGraphNodes,
    /// The permission matrix covers exactly the assignable roles
    PermissionMatrixCoversRoles,
    /// No entity timestamp exceeds the reference instant
    NoTimestampExceedsReference,
    /// Channel sub-scores of every search hit average to its score
    ChannelScoresAverageToScore,
    /// Top users are a subset of users, ordered by descending requests
    TopUsersAreRankedSubset,
}

/// One detected violation
#[derive(Debug, Clone, thiserror::Error)]
#[error("{check:?}: {details}")]
pub struct IntegrityViolation {
    pub check: IntegrityCheck,
    pub details: String,
}

fn violation(check: IntegrityCheck, details: impl Into<String>) -> IntegrityViolation {
    IntegrityViolation {
        check,
        details: details.into(),
    }
}

/// Check every invariant; an empty result means the dataset is coherent.
#[must_use]
pub fn verify_dataset(scenario: &DemoScenario, now: DateTime<Utc>) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    check_edges(scenario, &mut violations);
    check_record_documents(scenario, &mut violations);
    check_permission_matrix(scenario, &mut violations);
    check_timestamps(scenario, now, &mut violations);
    check_channel_scores(scenario, &mut violations);
    check_top_users(scenario, &mut violations);

    if !violations.is_empty() {
        tracing::warn!(count = violations.len(), "dataset integrity violations");
    }
    violations
}

fn check_edges(scenario: &DemoScenario, out: &mut Vec<IntegrityViolation>) {
    let graph = &scenario.graph_data;
    for edge in &graph.edges {
        for endpoint in [&edge.source, &edge.target] {
            if graph.node(endpoint).is_none() {
                out.push(violation(
                    IntegrityCheck::AllEdgesReferenceExistingNodes,
                    format!("edge {} references missing node {}", edge.id, endpoint),
                ));
            }
        }
    }
}

fn check_record_documents(scenario: &DemoScenario, out: &mut Vec<IntegrityViolation>) {
    for record in &scenario.records {
        let Some(document) = &record.metadata.document else {
            continue;
        };
        let found = scenario
            .graph_data
            .nodes
            .iter()
            .any(|n| n.kind == mirage_model::NodeKind::Document && &n.label == document);
        if !found {
            out.push(violation(
                IntegrityCheck::RecordDocumentsHaveGraphNodes,
                format!("record {} names document {document} with no graph node", record.id),
            ));
        }
    }
}

fn check_permission_matrix(scenario: &DemoScenario, out: &mut Vec<IntegrityViolation>) {
    let matrix_roles: Vec<UserRole> = scenario
        .permission_matrix
        .entries
        .iter()
        .map(|e| e.role)
        .collect();
    for role in UserRole::ALL {
        if !matrix_roles.contains(&role) {
            out.push(violation(
                IntegrityCheck::PermissionMatrixCoversRoles,
                format!("role {role} missing from permission matrix"),
            ));
        }
    }
    if matrix_roles.len() != UserRole::ALL.len() {
        out.push(violation(
            IntegrityCheck::PermissionMatrixCoversRoles,
            format!(
                "matrix has {} entries, expected {}",
                matrix_roles.len(),
                UserRole::ALL.len()
            ),
        ));
    }
}

fn check_timestamps(scenario: &DemoScenario, now: DateTime<Utc>, out: &mut Vec<IntegrityViolation>) {
    let mut check = |label: &str, at: DateTime<Utc>| {
        if at > now {
            out.push(violation(
                IntegrityCheck::NoTimestampExceedsReference,
                format!("{label} timestamp {at} is after {now}"),
            ));
        }
    };

    for user in &scenario.users {
        check("user created", user.created_at);
        check("user last-active", user.last_active_at);
    }
    for group in &scenario.user_groups {
        check("group created", group.created_at);
    }
    for record in &scenario.records {
        check("record created", record.created_at);
        check("record updated", record.updated_at);
    }
    for point in &scenario.metrics_overview.trends {
        check("trend point", point.timestamp);
    }
    for point in &scenario.metrics_overview.analytics {
        check("analytics point", point.timestamp);
    }
    for sample in &scenario.latency.history {
        check("latency sample", sample.timestamp);
    }
    for log in &scenario.error_logs {
        check("error log", log.timestamp);
    }
    check("health", scenario.health.checked_at);
    check("account created", scenario.account.created_at);
}

fn check_channel_scores(scenario: &DemoScenario, out: &mut Vec<IntegrityViolation>) {
    for hit in &scenario.search_results {
        if (hit.channels.mean() - hit.score).abs() > 1e-9 {
            out.push(violation(
                IntegrityCheck::ChannelScoresAverageToScore,
                format!(
                    "hit {} channels average {} but score is {}",
                    hit.id,
                    hit.channels.mean(),
                    hit.score
                ),
            ));
        }
    }
}

fn check_top_users(scenario: &DemoScenario, out: &mut Vec<IntegrityViolation>) {
    let top = &scenario.metrics_overview.top_users;
    for entry in top {
        let Some(user) = scenario.users.iter().find(|u| u.id == entry.user_id) else {
            out.push(violation(
                IntegrityCheck::TopUsersAreRankedSubset,
                format!("top user {} is not a dataset user", entry.user_id),
            ));
            continue;
        };
        if user.request_count != entry.request_count {
            out.push(violation(
                IntegrityCheck::TopUsersAreRankedSubset,
                format!("top user {} request count diverged", entry.user_id),
            ));
        }
    }
    for pair in top.windows(2) {
        if pair[0].request_count < pair[1].request_count {
            out.push(violation(
                IntegrityCheck::TopUsersAreRankedSubset,
                format!("top users out of order at {}", pair[1].user_id),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_dataset;
    use mirage_model::{DemoContext, EdgeId, EdgeKind, GraphEdge, NodeId};

    #[test]
    fn fresh_build_has_no_violations() {
        let ctx = DemoContext::default();
        let scenario = build_dataset(&ctx);
        let violations = verify_dataset(&scenario, ctx.now);
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn dangling_edge_is_reported() {
        let ctx = DemoContext::default();
        let mut scenario = build_dataset(&ctx);
        scenario.graph_data.edges.push(GraphEdge {
            id: EdgeId::new("edge-bogus"),
            source: NodeId::new("node-doc-1"),
            target: NodeId::new("node-missing"),
            kind: EdgeKind::Contains,
        });

        let violations = verify_dataset(&scenario, ctx.now);
        assert!(violations
            .iter()
            .any(|v| v.check == IntegrityCheck::AllEdgesReferenceExistingNodes));
    }

    #[test]
    fn future_timestamp_is_reported() {
        let ctx = DemoContext::default();
        let mut scenario = build_dataset(&ctx);
        scenario.users[0].last_active_at = ctx.now + chrono::Duration::hours(1);

        let violations = verify_dataset(&scenario, ctx.now);
        assert!(violations
            .iter()
            .any(|v| v.check == IntegrityCheck::NoTimestampExceedsReference));
    }

    #[test]
    fn missing_matrix_role_is_reported() {
        let ctx = DemoContext::default();
        let mut scenario = build_dataset(&ctx);
        scenario.permission_matrix.entries.pop();

        let violations = verify_dataset(&scenario, ctx.now);
        assert!(violations
            .iter()
            .any(|v| v.check == IntegrityCheck::PermissionMatrixCoversRoles));
    }
}
