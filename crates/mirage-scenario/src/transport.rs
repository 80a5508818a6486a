//! The simulated transport
//!
//! A `NetworkClient` that answers from the demo dataset through the
//! scenario's handler table. This is the construction-boundary port of
//! browser-level request interception: inject it where the real client
//! would be constructed and every repository call behaves per scenario.

use crate::handlers::{handler_set, Handler, HandlerContext};
use crate::scenario::Scenario;
use async_trait::async_trait;
use mirage_repo::{ApiError, ApiRequest, NetworkClient};
use mirage_store::DemoData;
use serde_json::{json, Value};

/// Dataset-backed `NetworkClient` with scenario-layered handlers
pub struct SimulatedClient {
    data: DemoData,
    scenario: Scenario,
    handlers: Vec<Handler>,
}

impl SimulatedClient {
    /// Client answering per the given scenario's handler table
    #[must_use]
    pub fn new(data: DemoData, scenario: Scenario) -> Self {
        let handlers = handler_set(scenario);
        tracing::debug!(scenario = %scenario, handlers = handlers.len(), "simulated client ready");
        Self {
            data,
            scenario,
            handlers,
        }
    }

    /// The scenario this client was assembled for
    #[must_use]
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }
}

#[async_trait]
impl NetworkClient for SimulatedClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        for handler in &self.handlers {
            let Some(params) = handler.route.matches(&request) else {
                continue;
            };
            if let Some(delay) = handler.delay {
                tokio::time::sleep(delay).await;
            }
            return (handler.respond)(HandlerContext {
                request: &request,
                params,
                data: &self.data,
            });
        }

        Err(ApiError::Status {
            status: 404,
            body: json!({ "message": format!("no handler for {}", request.path) }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mirage_repo::routes;

    #[tokio::test]
    async fn success_scenario_answers_from_the_dataset() {
        let data = DemoData::with_defaults();
        let client = SimulatedClient::new(data.clone(), Scenario::Success);

        let value = client.send(ApiRequest::get(routes::USERS)).await.unwrap();
        let expected = serde_json::to_value(data.users().list()).unwrap();
        assert_eq!(value, expected);
    }

    #[tokio::test]
    async fn unknown_paths_answer_404() {
        let client = SimulatedClient::new(DemoData::with_defaults(), Scenario::Success);
        let err = client
            .send(ApiRequest::get("/api/unknown"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
