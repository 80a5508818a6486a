//! Handler table for the simulated transport
//!
//! An ordered list of `(route, responder)` pairs; the first match answers.
//! Scenario layering works by precedence: the `error` catch-all and the
//! `slow` handlers are registered ahead of the defaults, so they shadow
//! the endpoints they cover and everything else falls through.

use crate::scenario::Scenario;
use mirage_model::{
    EdgeKind, EmbeddingRequest, MetricsPeriod, NodeId, RecordId, RecordPatch, RecordQuery,
    RecordSort, SearchRequest, SortOrder, UserId, UserPatch, UserRole,
};
use mirage_repo::{routes, ApiError, ApiRequest, Method};
use mirage_store::DemoData;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Fixed artificial delay applied by the slow scenario
pub const SLOW_DELAY: Duration = Duration::from_millis(1500);

/// Fixed failure status of the error scenario
pub const ERROR_STATUS: u16 = 503;

/// Route pattern: exact segments, with `:name` placeholders capturing path
/// parameters. `Route::any()` matches every request.
#[derive(Debug, Clone)]
pub struct Route {
    method: Option<Method>,
    pattern: &'static str,
}

impl Route {
    #[must_use]
    pub fn new(method: Method, pattern: &'static str) -> Self {
        Self {
            method: Some(method),
            pattern,
        }
    }

    /// Catch-all route
    #[must_use]
    pub fn any() -> Self {
        Self {
            method: None,
            pattern: "*",
        }
    }

    /// Captured path parameters on match, `None` otherwise
    #[must_use]
    pub fn matches(&self, request: &ApiRequest) -> Option<PathParams> {
        if let Some(method) = self.method {
            if method != request.method {
                return None;
            }
        }
        if self.pattern == "*" {
            return Some(PathParams::default());
        }

        let pattern: Vec<&str> = self.pattern.split('/').filter(|s| !s.is_empty()).collect();
        let path: Vec<&str> = request.path.split('/').filter(|s| !s.is_empty()).collect();
        if pattern.len() != path.len() {
            return None;
        }

        let mut params = PathParams::default();
        for (expected, actual) in pattern.iter().zip(&path) {
            if let Some(name) = expected.strip_prefix(':') {
                params.0.push((name.to_string(), (*actual).to_string()));
            } else if expected != actual {
                return None;
            }
        }
        Some(params)
    }
}

/// Path parameters captured by a route match
#[derive(Debug, Clone, Default)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Everything a responder may look at
pub struct HandlerContext<'a> {
    pub request: &'a ApiRequest,
    pub params: PathParams,
    pub data: &'a DemoData,
}

type RespondFn = dyn Fn(HandlerContext<'_>) -> Result<Value, ApiError> + Send + Sync;

/// One entry of the handler table
#[derive(Clone)]
pub struct Handler {
    pub(crate) route: Route,
    pub(crate) delay: Option<Duration>,
    pub(crate) respond: Arc<RespondFn>,
}

impl Handler {
    pub fn new(
        route: Route,
        respond: impl Fn(HandlerContext<'_>) -> Result<Value, ApiError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            route,
            delay: None,
            respond: Arc::new(respond),
        }
    }

    /// Apply an artificial delay before responding
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// The handler table for a scenario: scenario-specific handlers first,
/// defaults behind them.
#[must_use]
pub fn handler_set(scenario: Scenario) -> Vec<Handler> {
    match scenario {
        Scenario::Off | Scenario::Success => default_handlers(),
        Scenario::Error => {
            let mut handlers = vec![error_catch_all()];
            handlers.extend(default_handlers());
            handlers
        }
        Scenario::Slow => {
            let mut handlers = slow_handlers();
            handlers.extend(default_handlers());
            handlers
        }
    }
}

fn error_catch_all() -> Handler {
    Handler::new(Route::any(), |_| {
        Err(ApiError::Status {
            status: ERROR_STATUS,
            body: json!({ "scenario": "error", "message": "simulated backend failure" }),
        })
    })
}

/// Delayed variants of the heavy read endpoints; everything else falls
/// through to the defaults.
fn slow_handlers() -> Vec<Handler> {
    vec![
        Handler::new(Route::new(Method::Get, routes::USERS), respond_users_list)
            .with_delay(SLOW_DELAY),
        Handler::new(Route::new(Method::Get, routes::RECORDS), respond_records_list)
            .with_delay(SLOW_DELAY),
        Handler::new(Route::new(Method::Post, routes::SEARCH), respond_search)
            .with_delay(SLOW_DELAY),
        Handler::new(Route::new(Method::Get, routes::GRAPH), respond_graph_full)
            .with_delay(SLOW_DELAY),
        Handler::new(
            Route::new(Method::Get, routes::METRICS_OVERVIEW),
            respond_metrics_overview,
        )
        .with_delay(SLOW_DELAY),
    ]
}

/// The default handler table: every domain endpoint, answered from the
/// demo dataset.
#[must_use]
pub fn default_handlers() -> Vec<Handler> {
    vec![
        // Users. Fixed paths register ahead of the `:id` captures.
        Handler::new(Route::new(Method::Get, routes::USER_GROUPS), |ctx| {
            Ok(serde_json::to_value(ctx.data.users().groups())?)
        }),
        Handler::new(Route::new(Method::Get, routes::USER_PERMISSIONS), |ctx| {
            Ok(serde_json::to_value(ctx.data.users().permission_matrix())?)
        }),
        Handler::new(Route::new(Method::Get, routes::USERS), respond_users_list),
        Handler::new(Route::new(Method::Get, "/api/users/:id"), |ctx| {
            let id = UserId::new(require_param(&ctx, "id")?);
            Ok(serde_json::to_value(ctx.data.users().get(&id))?)
        }),
        Handler::new(Route::new(Method::Post, routes::USERS), |ctx| {
            #[derive(Deserialize)]
            struct InviteBody {
                email: String,
                role: UserRole,
            }
            let body: InviteBody = parse_body(&ctx)?;
            Ok(serde_json::to_value(
                ctx.data.users().invite(&body.email, body.role),
            )?)
        }),
        Handler::new(Route::new(Method::Patch, "/api/users/:id"), |ctx| {
            let id = UserId::new(require_param(&ctx, "id")?);
            let patch: UserPatch = parse_body(&ctx)?;
            Ok(serde_json::to_value(ctx.data.users().update(&id, &patch)?)?)
        }),
        Handler::new(Route::new(Method::Delete, "/api/users/:id"), |ctx| {
            let id = UserId::new(require_param(&ctx, "id")?);
            ctx.data.users().remove(&id)?;
            Ok(Value::Null)
        }),
        // Records
        Handler::new(Route::new(Method::Get, routes::RECORDS), respond_records_list),
        Handler::new(Route::new(Method::Get, "/api/records/:id"), |ctx| {
            let id = RecordId::new(require_param(&ctx, "id")?);
            Ok(serde_json::to_value(ctx.data.records().get(&id))?)
        }),
        Handler::new(Route::new(Method::Patch, "/api/records/:id"), |ctx| {
            let id = RecordId::new(require_param(&ctx, "id")?);
            let patch: RecordPatch = parse_body(&ctx)?;
            Ok(serde_json::to_value(ctx.data.records().update(&id, &patch)?)?)
        }),
        Handler::new(Route::new(Method::Delete, "/api/records/:id"), |ctx| {
            let id = RecordId::new(require_param(&ctx, "id")?);
            ctx.data.records().remove(&id)?;
            Ok(Value::Null)
        }),
        // Graph
        Handler::new(Route::new(Method::Get, routes::GRAPH), respond_graph_full),
        Handler::new(Route::new(Method::Get, "/api/graph/nodes/:id"), |ctx| {
            let id = NodeId::new(require_param(&ctx, "id")?);
            Ok(serde_json::to_value(ctx.data.graph().node_detail(&id))?)
        }),
        Handler::new(Route::new(Method::Post, routes::GRAPH_EDGES), |ctx| {
            #[derive(Deserialize)]
            struct EdgeBody {
                source: NodeId,
                target: NodeId,
                kind: EdgeKind,
            }
            let body: EdgeBody = parse_body(&ctx)?;
            Ok(serde_json::to_value(ctx.data.graph().create_edge(
                &body.source,
                &body.target,
                body.kind,
            )?)?)
        }),
        Handler::new(Route::new(Method::Delete, "/api/graph/edges/:id"), |ctx| {
            let id = mirage_model::EdgeId::new(require_param(&ctx, "id")?);
            ctx.data.graph().remove_edge(&id)?;
            Ok(Value::Null)
        }),
        // Search
        Handler::new(Route::new(Method::Post, routes::SEARCH), respond_search),
        // Metrics
        Handler::new(
            Route::new(Method::Get, routes::METRICS_OVERVIEW),
            respond_metrics_overview,
        ),
        Handler::new(Route::new(Method::Get, routes::METRICS_TRENDS), |ctx| {
            Ok(serde_json::to_value(
                ctx.data.metrics().trends(period_of(ctx.request)),
            )?)
        }),
        Handler::new(Route::new(Method::Get, routes::METRICS_ANALYTICS), |ctx| {
            Ok(serde_json::to_value(
                ctx.data.metrics().analytics(period_of(ctx.request)),
            )?)
        }),
        Handler::new(Route::new(Method::Get, routes::METRICS_TOP_HITS), |ctx| {
            Ok(serde_json::to_value(ctx.data.metrics().top_hits())?)
        }),
        Handler::new(Route::new(Method::Get, routes::METRICS_TOP_USERS), |ctx| {
            Ok(serde_json::to_value(ctx.data.metrics().top_users())?)
        }),
        // Embeddings
        Handler::new(Route::new(Method::Get, routes::MODELS_TEXT), |ctx| {
            Ok(serde_json::to_value(ctx.data.embeddings().text_models())?)
        }),
        Handler::new(Route::new(Method::Get, routes::MODELS_IMAGE), |ctx| {
            Ok(serde_json::to_value(ctx.data.embeddings().image_models())?)
        }),
        Handler::new(Route::new(Method::Post, routes::EMBED_TEXT), |ctx| {
            let request: EmbeddingRequest = parse_body(&ctx)?;
            Ok(serde_json::to_value(ctx.data.embeddings().embed_text(&request)?)?)
        }),
        Handler::new(Route::new(Method::Post, routes::EMBED_IMAGE), |ctx| {
            let request: EmbeddingRequest = parse_body(&ctx)?;
            Ok(serde_json::to_value(ctx.data.embeddings().embed_image(&request)?)?)
        }),
        // Status
        Handler::new(Route::new(Method::Get, routes::STATUS_HEALTH), |ctx| {
            Ok(serde_json::to_value(ctx.data.status().health())?)
        }),
        Handler::new(Route::new(Method::Get, routes::STATUS_LATENCY), |ctx| {
            Ok(serde_json::to_value(ctx.data.status().latency())?)
        }),
        Handler::new(Route::new(Method::Get, routes::STATUS_SERVICES), |ctx| {
            Ok(serde_json::to_value(ctx.data.status().service_usage())?)
        }),
        Handler::new(Route::new(Method::Get, routes::STATUS_LOGS), |ctx| {
            Ok(serde_json::to_value(ctx.data.status().error_logs())?)
        }),
    ]
}

fn respond_users_list(ctx: HandlerContext<'_>) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(ctx.data.users().list())?)
}

fn respond_records_list(ctx: HandlerContext<'_>) -> Result<Value, ApiError> {
    let query = record_query_of(ctx.request);
    Ok(serde_json::to_value(ctx.data.records().list(&query))?)
}

fn respond_search(ctx: HandlerContext<'_>) -> Result<Value, ApiError> {
    let request: SearchRequest = parse_body(&ctx)?;
    Ok(serde_json::to_value(ctx.data.search().search(&request))?)
}

fn respond_graph_full(ctx: HandlerContext<'_>) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(ctx.data.graph().full())?)
}

fn respond_metrics_overview(ctx: HandlerContext<'_>) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(
        ctx.data.metrics().overview(period_of(ctx.request)),
    )?)
}

fn period_of(request: &ApiRequest) -> MetricsPeriod {
    request
        .query_param("period")
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

fn record_query_of(request: &ApiRequest) -> RecordQuery {
    let defaults = RecordQuery::default();
    RecordQuery {
        search: request.query_param("search").map(str::to_string),
        content_type: request
            .query_param("contentType")
            .and_then(|v| v.parse().ok()),
        sort: match request.query_param("sort") {
            Some("updatedAt") => RecordSort::UpdatedAt,
            Some("model") => RecordSort::Model,
            Some("dimensions") => RecordSort::Dimensions,
            _ => RecordSort::CreatedAt,
        },
        order: match request.query_param("order") {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        },
        page: request
            .query_param("page")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.page),
        page_size: request
            .query_param("pageSize")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.page_size),
    }
}

fn require_param(ctx: &HandlerContext<'_>, name: &str) -> Result<String, ApiError> {
    ctx.params
        .get(name)
        .map(str::to_string)
        .ok_or_else(|| ApiError::schema(format!("missing path parameter: {name}")))
}

fn parse_body<T: serde::de::DeserializeOwned>(ctx: &HandlerContext<'_>) -> Result<T, ApiError> {
    let body = ctx
        .request
        .body
        .clone()
        .ok_or_else(|| ApiError::schema("missing request body"))?;
    Ok(serde_json::from_value(body)?)
}
