//! The dataset builder
//!
//! One pure function from `DemoContext` to `DemoScenario`. Stages run in a
//! fixed order and each stage may only reference entities built by a prior
//! stage, so every cross-reference resolves within the same build.

use crate::catalog::{
    DOCUMENT_TEMPLATES, FIRST_NAMES, GROUP_TEMPLATES, IMAGE_MODELS, LAST_NAMES, LOG_MESSAGES,
    SERVICES, TEXT_MODELS, CONTENT_SNIPPETS,
};
use crate::rng::SeededRng;
use crate::stats::{mean, percentile};
use chrono::{Datelike, Duration, Timelike, Weekday};
use mirage_model::{
    AccountSnapshot, AnalyticsPoint, ChannelScores, DemoContext, DemoScenario, EdgeId, EdgeKind,
    EmbeddingModel, ErrorLog, GraphData, GraphEdge, GraphNode, GroupId, HealthCheck,
    LatencyResponse, LatencySample, LogLevel, MetricCard, MetricsOverview, ModelId, ModelModality,
    NodeId, NodeKind, PermissionMatrix, PlanTier, Record, RecordId, RecordMetadata, RoleGrants,
    SearchResult, ServiceHealth, ServiceUsage, TopHit, TopUser, TrendDirection, TrendPoint, User,
    UserGroup, UserId, UserRole, UserStatus,
};

const USER_COUNT: usize = 12;
const SEARCH_RESULT_COUNT: usize = 10;
const DAILY_POINTS: usize = 30;
const HOURLY_POINTS: usize = 168;
const LATENCY_SAMPLES: usize = 60;
const ERROR_LOG_COUNT: usize = 12;

/// Build one complete dataset from the context. Pure: equal contexts give
/// deep-equal results.
#[must_use]
pub fn build_dataset(ctx: &DemoContext) -> DemoScenario {
    let mut rng = SeededRng::new(ctx.seed);

    let users = build_users(ctx, &mut rng);
    let user_groups = build_groups(ctx, &users);
    let permission_matrix = build_permission_matrix();
    let records = build_records(ctx, &mut rng);
    let search_results = build_search_results(&records, &mut rng);
    let trends = build_trends(ctx, &mut rng);
    let analytics = build_analytics(ctx, &mut rng);
    let cards = build_cards(&trends, &analytics);
    let latency = build_latency(ctx, &mut rng);
    let service_usage = build_service_usage(&mut rng);
    let error_logs = build_error_logs(ctx, &mut rng);
    let graph_data = build_graph(&user_groups, &mut rng);
    let top_hits = build_top_hits(&records, &mut rng);
    let top_users = build_top_users(&users);

    let scenario = DemoScenario {
        account: build_account(ctx, &users, &records),
        metrics_overview: MetricsOverview {
            cards,
            trends,
            analytics,
            top_hits,
            top_users,
        },
        health: build_health(ctx),
        latency,
        service_usage,
        error_logs,
        text_embedding_models: model_catalog(TEXT_MODELS, ModelModality::Text),
        image_embedding_models: model_catalog(IMAGE_MODELS, ModelModality::Image),
        users,
        user_groups,
        permission_matrix,
        records,
        graph_data,
        search_results,
    };

    tracing::debug!(
        seed = ctx.seed,
        users = scenario.users.len(),
        records = scenario.records.len(),
        nodes = scenario.graph_data.nodes.len(),
        "built demo dataset"
    );
    scenario
}

fn build_users(ctx: &DemoContext, rng: &mut SeededRng) -> Vec<User> {
    (0..USER_COUNT)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 5 + 3) % LAST_NAMES.len()];
            let role = if i == 0 {
                UserRole::Admin
            } else if rng.next_f64() < 0.45 {
                UserRole::Editor
            } else {
                UserRole::Viewer
            };
            let status = match i {
                7 => UserStatus::Suspended,
                11 => UserStatus::Invited,
                _ => UserStatus::Active,
            };
            let created_at = ctx.now - Duration::days(30 + rng.next_usize(300) as i64);
            let last_active_at = ctx.now - Duration::hours(rng.next_usize(96) as i64);
            User {
                id: UserId::new(format!("user-{}", i + 1)),
                email: format!(
                    "{}.{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                name: format!("{first} {last}"),
                role,
                status,
                request_count: rng.next_range(50.0, 980.0) as u64,
                created_at,
                last_active_at,
            }
        })
        .collect()
}

fn build_groups(ctx: &DemoContext, users: &[User]) -> Vec<UserGroup> {
    GROUP_TEMPLATES
        .iter()
        .enumerate()
        .map(|(gi, template)| UserGroup {
            id: GroupId::new(format!("group-{}", gi + 1)),
            name: template.name.to_string(),
            description: template.description.to_string(),
            member_ids: users
                .iter()
                .enumerate()
                .filter(|(ui, _)| ui % GROUP_TEMPLATES.len() == gi)
                .map(|(_, u)| u.id.clone())
                .collect(),
            created_at: ctx.now - Duration::days(200 + gi as i64 * 17),
        })
        .collect()
}

fn build_permission_matrix() -> PermissionMatrix {
    let entries = UserRole::ALL
        .iter()
        .map(|role| match role {
            UserRole::Admin => RoleGrants {
                role: *role,
                can_view_records: true,
                can_edit_records: true,
                can_delete_records: true,
                can_manage_users: true,
                can_manage_models: true,
            },
            UserRole::Editor => RoleGrants {
                role: *role,
                can_view_records: true,
                can_edit_records: true,
                can_delete_records: true,
                can_manage_users: false,
                can_manage_models: false,
            },
            UserRole::Viewer => RoleGrants {
                role: *role,
                can_view_records: true,
                can_edit_records: false,
                can_delete_records: false,
                can_manage_users: false,
                can_manage_models: false,
            },
        })
        .collect();
    PermissionMatrix { entries }
}

fn build_records(ctx: &DemoContext, rng: &mut SeededRng) -> Vec<Record> {
    let mut records = Vec::new();
    let mut next_id = 1usize;
    for (di, doc) in DOCUMENT_TEMPLATES.iter().enumerate() {
        let model = &TEXT_MODELS[di % TEXT_MODELS.len()];
        for ci in 0..doc.chunks {
            let snippet = rng.pick(CONTENT_SNIPPETS);
            let created_at = ctx.now
                - Duration::days(10 + di as i64 * 7 + ci as i64)
                - Duration::hours(rng.next_usize(12) as i64);
            let updated_at = created_at + Duration::hours(rng.next_usize(72) as i64);
            records.push(Record {
                id: RecordId::new(format!("record-{next_id}")),
                content: format!(
                    "{}, section {} of {}: {}.",
                    doc.name,
                    ci + 1,
                    doc.chunks,
                    snippet
                ),
                source: doc.source.to_string(),
                content_type: doc.content_type,
                embedding_model: ModelId::new(model.id),
                dimensions: model.dimensions,
                metadata: RecordMetadata {
                    document: Some(doc.name.to_string()),
                    chunk_index: Some(ci as u32),
                    language: Some(doc.language.to_string()),
                    tags: doc.tags.iter().map(|t| (*t).to_string()).collect(),
                },
                created_at,
                updated_at,
            });
            next_id += 1;
        }
    }
    records
}

fn build_search_results(records: &[Record], rng: &mut SeededRng) -> Vec<SearchResult> {
    records
        .iter()
        .step_by(2)
        .take(SEARCH_RESULT_COUNT)
        .enumerate()
        .map(|(i, record)| {
            let score = 0.97 - i as f64 * 0.055 - rng.next_f64() * 0.01;
            let semantic = score + rng.next_range(-0.08, 0.08);
            let lexical = score + rng.next_range(-0.08, 0.08);
            // Third channel balances the other two so the mean is the score.
            let recency = 3.0 * score - semantic - lexical;
            let highlight = record
                .content
                .split_whitespace()
                .take(6)
                .collect::<Vec<_>>()
                .join(" ");
            SearchResult {
                id: format!("hit-{}", i + 1),
                record_id: record.id.clone(),
                content: record.content.clone(),
                source: record.source.clone(),
                score,
                channels: ChannelScores {
                    semantic,
                    lexical,
                    recency,
                },
                highlights: vec![highlight],
                metadata: record.metadata.clone(),
            }
        })
        .collect()
}

fn build_trends(ctx: &DemoContext, rng: &mut SeededRng) -> Vec<TrendPoint> {
    (0..DAILY_POINTS)
        .map(|i| {
            let timestamp = ctx.now - Duration::days((DAILY_POINTS - 1 - i) as i64);
            let weekend = matches!(timestamp.weekday(), Weekday::Sat | Weekday::Sun);
            let multiplier = if weekend { 0.45 } else { 1.0 };
            let requests = (2400.0 * multiplier * rng.next_range(0.85, 1.15)) as u64;
            let errors = (requests as f64 * rng.next_range(0.005, 0.025)) as u64;
            TrendPoint {
                timestamp,
                requests,
                errors,
                latency_ms: rng.next_range(80.0, 140.0),
            }
        })
        .collect()
}

fn build_analytics(ctx: &DemoContext, rng: &mut SeededRng) -> Vec<AnalyticsPoint> {
    (0..HOURLY_POINTS)
        .map(|i| {
            let timestamp = ctx.now - Duration::hours((HOURLY_POINTS - 1 - i) as i64);
            let multiplier = match timestamp.hour() {
                9..=17 => 1.0,
                6..=8 | 18..=21 => 0.6,
                _ => 0.25,
            };
            let queries = (120.0 * multiplier * rng.next_range(0.8, 1.2)) as u64;
            AnalyticsPoint {
                timestamp,
                queries,
                embeddings: (queries as f64 * rng.next_range(0.3, 0.5)) as u64,
                cache_hits: (queries as f64 * rng.next_range(0.4, 0.7)) as u64,
            }
        })
        .collect()
}

fn build_cards(trends: &[TrendPoint], analytics: &[AnalyticsPoint]) -> Vec<MetricCard> {
    let total_requests: u64 = trends.iter().map(|t| t.requests).sum();
    let total_errors: u64 = trends.iter().map(|t| t.errors).sum();

    let recent: u64 = trends.iter().rev().take(7).map(|t| t.requests).sum();
    let prior: u64 = trends.iter().rev().skip(7).take(7).map(|t| t.requests).sum();
    let requests_delta = pct_change(prior as f64, recent as f64);

    let error_rate = if total_requests == 0 {
        0.0
    } else {
        total_errors as f64 / total_requests as f64 * 100.0
    };
    let recent_errors: u64 = trends.iter().rev().take(7).map(|t| t.errors).sum();
    let prior_errors: u64 = trends.iter().rev().skip(7).take(7).map(|t| t.errors).sum();
    let error_delta = rate_of(recent_errors, recent) - rate_of(prior_errors, prior);

    let latencies: Vec<f64> = trends.iter().map(|t| t.latency_ms).collect();
    let recent_latency = mean(&latencies[latencies.len().saturating_sub(7)..]);
    let prior_window =
        &latencies[latencies.len().saturating_sub(14)..latencies.len().saturating_sub(7)];
    let latency_delta = pct_change(mean(prior_window), recent_latency);

    let day_queries: u64 = analytics.iter().rev().take(24).map(|a| a.queries).sum();
    let prior_day: u64 = analytics
        .iter()
        .rev()
        .skip(24)
        .take(24)
        .map(|a| a.queries)
        .sum();
    let queries_delta = pct_change(prior_day as f64, day_queries as f64);

    vec![
        card("total-requests", "Total Requests", total_requests as f64, None, requests_delta),
        card("error-rate", "Error Rate", error_rate, Some("%"), error_delta),
        card("avg-latency", "Average Latency", mean(&latencies), Some("ms"), latency_delta),
        card("queries-24h", "Queries (24h)", day_queries as f64, None, queries_delta),
    ]
}

fn card(id: &str, title: &str, value: f64, unit: Option<&str>, delta_pct: f64) -> MetricCard {
    let direction = if delta_pct > 0.5 {
        TrendDirection::Up
    } else if delta_pct < -0.5 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };
    MetricCard {
        id: id.to_string(),
        title: title.to_string(),
        value,
        unit: unit.map(str::to_string),
        delta_pct,
        direction,
    }
}

fn pct_change(prior: f64, recent: f64) -> f64 {
    if prior == 0.0 {
        0.0
    } else {
        (recent - prior) / prior * 100.0
    }
}

fn rate_of(errors: u64, requests: u64) -> f64 {
    if requests == 0 {
        0.0
    } else {
        errors as f64 / requests as f64 * 100.0
    }
}

fn build_latency(ctx: &DemoContext, rng: &mut SeededRng) -> LatencyResponse {
    let history: Vec<LatencySample> = (0..LATENCY_SAMPLES)
        .map(|i| {
            let mut latency_ms = rng.next_range(70.0, 100.0);
            // Periodic spikes so the p95/p99 summary has something to find.
            if i % 15 == 7 {
                latency_ms *= rng.next_range(3.0, 5.0);
            }
            LatencySample {
                timestamp: ctx.now - Duration::minutes((LATENCY_SAMPLES - 1 - i) as i64),
                latency_ms,
            }
        })
        .collect();

    let values: Vec<f64> = history.iter().map(|s| s.latency_ms).collect();
    LatencyResponse {
        current_ms: values.last().copied().unwrap_or(0.0),
        average_ms: mean(&values),
        p95_ms: percentile(&values, 0.95),
        p99_ms: percentile(&values, 0.99),
        history,
    }
}

fn build_service_usage(rng: &mut SeededRng) -> Vec<ServiceUsage> {
    SERVICES
        .iter()
        .map(|service| {
            let requests = rng.next_range(5_000.0, 25_000.0) as u64;
            ServiceUsage {
                service: (*service).to_string(),
                requests,
                errors: (requests as f64 * rng.next_range(0.001, 0.011)) as u64,
                avg_latency_ms: rng.next_range(20.0, 100.0),
                uptime_pct: rng.next_range(99.0, 99.99),
            }
        })
        .collect()
}

fn build_error_logs(ctx: &DemoContext, rng: &mut SeededRng) -> Vec<ErrorLog> {
    let mut logs: Vec<ErrorLog> = (0..ERROR_LOG_COUNT)
        .map(|i| {
            let (level, template) = *rng.pick(LOG_MESSAGES);
            let service = *rng.pick(SERVICES);
            let level = match level {
                "error" => LogLevel::Error,
                "warn" => LogLevel::Warn,
                _ => LogLevel::Info,
            };
            ErrorLog {
                id: format!("log-{}", i + 1),
                level,
                service: service.to_string(),
                message: template.replace("{}", service),
                timestamp: ctx.now - Duration::minutes(rng.next_usize(1440) as i64),
            }
        })
        .collect();
    logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    logs
}

fn build_graph(user_groups: &[UserGroup], rng: &mut SeededRng) -> GraphData {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut next_edge = 1usize;

    let max_chunks = DOCUMENT_TEMPLATES
        .iter()
        .map(|d| d.chunks)
        .max()
        .unwrap_or(1) as f64;

    for (di, doc) in DOCUMENT_TEMPLATES.iter().enumerate() {
        nodes.push(GraphNode {
            id: NodeId::new(format!("node-doc-{}", di + 1)),
            label: doc.name.to_string(),
            kind: NodeKind::Document,
            weight: 0.35 + 0.65 * doc.chunks as f64 / max_chunks,
        });
    }

    let mut topics: Vec<&str> = Vec::new();
    for doc in DOCUMENT_TEMPLATES {
        if !topics.contains(&doc.topic) {
            topics.push(doc.topic);
        }
    }
    for (ti, topic) in topics.iter().enumerate() {
        nodes.push(GraphNode {
            id: NodeId::new(format!("node-topic-{}", ti + 1)),
            label: (*topic).to_string(),
            kind: NodeKind::Topic,
            weight: rng.next_range(0.45, 0.65),
        });
    }

    for (gi, group) in user_groups.iter().enumerate() {
        nodes.push(GraphNode {
            id: NodeId::new(format!("node-group-{}", gi + 1)),
            label: group.name.clone(),
            kind: NodeKind::Group,
            weight: 0.7,
        });
    }

    for (di, doc) in DOCUMENT_TEMPLATES.iter().enumerate() {
        let doc_node = NodeId::new(format!("node-doc-{}", di + 1));
        let topic_index = topics.iter().position(|t| *t == doc.topic).unwrap_or(0);
        edges.push(GraphEdge {
            id: EdgeId::new(format!("edge-{next_edge}")),
            source: doc_node.clone(),
            target: NodeId::new(format!("node-topic-{}", topic_index + 1)),
            kind: EdgeKind::Contains,
        });
        next_edge += 1;

        if let Some(group_index) = user_groups.iter().position(|g| g.name == doc.owner_group) {
            edges.push(GraphEdge {
                id: EdgeId::new(format!("edge-{next_edge}")),
                source: NodeId::new(format!("node-group-{}", group_index + 1)),
                target: doc_node,
                kind: EdgeKind::Owns,
            });
            next_edge += 1;
        }
    }

    GraphData { nodes, edges }
}

fn build_top_hits(records: &[Record], rng: &mut SeededRng) -> Vec<TopHit> {
    records
        .iter()
        .step_by(5)
        .take(5)
        .enumerate()
        .map(|(i, record)| TopHit {
            record_id: record.id.clone(),
            source: record.source.clone(),
            hits: 940 - i as u64 * 130 - rng.next_usize(40) as u64,
        })
        .collect()
}

fn build_top_users(users: &[User]) -> Vec<TopUser> {
    let mut ranked: Vec<&User> = users.iter().collect();
    ranked.sort_by(|a, b| b.request_count.cmp(&a.request_count));
    ranked
        .into_iter()
        .take(5)
        .map(|u| TopUser {
            user_id: u.id.clone(),
            name: u.name.clone(),
            request_count: u.request_count,
        })
        .collect()
}

fn model_catalog(specs: &[crate::catalog::ModelSpec], modality: ModelModality) -> Vec<EmbeddingModel> {
    specs
        .iter()
        .map(|spec| EmbeddingModel {
            id: ModelId::new(spec.id),
            name: spec.name.to_string(),
            provider: spec.provider.to_string(),
            dimensions: spec.dimensions,
            max_input: spec.max_input,
            modality,
        })
        .collect()
}

fn build_health(ctx: &DemoContext) -> HealthCheck {
    HealthCheck {
        status: ServiceHealth::Ok,
        version: "2.3.1".to_string(),
        uptime_secs: 1_555_200 + ctx.seed % 86_400,
        checked_at: ctx.now,
    }
}

fn build_account(ctx: &DemoContext, users: &[User], records: &[Record]) -> AccountSnapshot {
    AccountSnapshot {
        workspace_id: ctx.workspace_id.clone(),
        workspace_name: ctx.workspace_name.clone(),
        plan: PlanTier::Team,
        seat_limit: 25,
        seats_used: users.len() as u32,
        record_limit: 100_000,
        records_used: records.len() as u64,
        created_at: ctx.now - Duration::days(420),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> DemoContext {
        DemoContext::default()
    }

    #[test]
    fn series_have_contracted_lengths() {
        let scenario = build_dataset(&ctx());
        assert_eq!(scenario.metrics_overview.trends.len(), 30);
        assert_eq!(scenario.metrics_overview.analytics.len(), 168);
        assert_eq!(scenario.latency.history.len(), 60);
    }

    #[test]
    fn records_are_numbered_in_build_order() {
        let scenario = build_dataset(&ctx());
        assert_eq!(scenario.records[0].id.as_str(), "record-1");
        assert_eq!(scenario.records[1].id.as_str(), "record-2");
    }

    #[test]
    fn search_scores_descend_and_average_their_channels() {
        let scenario = build_dataset(&ctx());
        let results = &scenario.search_results;
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for hit in results {
            assert!((hit.channels.mean() - hit.score).abs() < 1e-9);
        }
    }

    #[test]
    fn latency_summary_derives_from_history() {
        let scenario = build_dataset(&ctx());
        let values: Vec<f64> = scenario
            .latency
            .history
            .iter()
            .map(|s| s.latency_ms)
            .collect();
        assert_eq!(scenario.latency.current_ms, *values.last().unwrap());
        assert_eq!(scenario.latency.p95_ms, percentile(&values, 0.95));
        assert!(scenario.latency.p99_ms >= scenario.latency.p95_ms);
    }

    #[test]
    fn account_usage_matches_built_entities() {
        let scenario = build_dataset(&ctx());
        assert_eq!(scenario.account.seats_used as usize, scenario.users.len());
        assert_eq!(scenario.account.records_used as usize, scenario.records.len());
    }
}
