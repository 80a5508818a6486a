use mirage_model::{RecordQuery, SearchRequest};
use mirage_repo::repos::{
    DemoRecordsRepository, DemoSearchRepository, DemoUsersRepository, RecordsRepository,
    SearchRepository, UsersRepository,
};
use mirage_repo::repos::{LiveRecordsRepository, LiveSearchRepository, LiveUsersRepository};
use mirage_repo::{routes, ApiRequest, NetworkClient};
use mirage_scenario::handlers::ERROR_STATUS;
use mirage_scenario::handlers::SLOW_DELAY;
use mirage_scenario::{Scenario, SimulatedClient};
use mirage_store::DemoData;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn error_scenario_fails_every_endpoint_identically() {
    let client = SimulatedClient::new(DemoData::with_defaults(), Scenario::Error);

    let requests = [
        ApiRequest::get(routes::USERS),
        ApiRequest::get(routes::RECORDS),
        ApiRequest::get(routes::GRAPH),
        ApiRequest::get(routes::STATUS_HEALTH),
        ApiRequest::post(routes::SEARCH, serde_json::json!({"query": "x"})),
        ApiRequest::get("/api/not-even-a-route"),
    ];

    for request in requests {
        let err = client.send(request).await.unwrap_err();
        match err {
            mirage_repo::ApiError::Status { status, body } => {
                assert_eq!(status, ERROR_STATUS);
                assert_eq!(body["scenario"], "error");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn success_scenario_is_a_pass_through_to_the_demo_repositories() {
    let data = DemoData::with_defaults();
    let simulated: Arc<dyn NetworkClient> =
        Arc::new(SimulatedClient::new(data.clone(), Scenario::Success));

    // Live repositories over the simulated transport must answer exactly
    // like direct demo repositories over the same store.
    let via_transport = LiveUsersRepository::new(simulated.clone());
    let direct = DemoUsersRepository::new(data.users());
    assert_eq!(
        via_transport.list().await.unwrap(),
        direct.list().await.unwrap()
    );

    let query = RecordQuery {
        search: Some("guide".to_string()),
        ..RecordQuery::default()
    };
    let via_transport = LiveRecordsRepository::new(simulated.clone());
    let direct = DemoRecordsRepository::new(data.records());
    assert_eq!(
        via_transport.list(&query).await.unwrap(),
        direct.list(&query).await.unwrap()
    );

    let request = SearchRequest::new("retrieval").with_window(0, 5);
    let via_transport = LiveSearchRepository::new(simulated.clone());
    let direct = DemoSearchRepository::new(data.search());
    assert_eq!(
        via_transport.search(&request).await.unwrap(),
        direct.search(&request).await.unwrap()
    );
}

#[tokio::test]
async fn mutations_through_the_transport_hit_the_shared_store() {
    let data = DemoData::with_defaults();
    let simulated: Arc<dyn NetworkClient> =
        Arc::new(SimulatedClient::new(data.clone(), Scenario::Success));
    let users = LiveUsersRepository::new(simulated);

    let invited = users
        .invite("via.transport@example.com", mirage_model::UserRole::Viewer)
        .await
        .unwrap();

    // Visible through the direct accessors: same canonical dataset.
    assert_eq!(data.users().list()[0].id, invited.id);
}

#[tokio::test(start_paused = true)]
async fn slow_scenario_delays_covered_endpoints_only() {
    let client = SimulatedClient::new(DemoData::with_defaults(), Scenario::Slow);

    let before = tokio::time::Instant::now();
    client.send(ApiRequest::get(routes::RECORDS)).await.unwrap();
    assert!(before.elapsed() >= SLOW_DELAY);

    let before = tokio::time::Instant::now();
    client
        .send(ApiRequest::get(routes::STATUS_HEALTH))
        .await
        .unwrap();
    assert_eq!(before.elapsed(), std::time::Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn slow_scenario_answers_match_success_after_the_delay() {
    let data = DemoData::with_defaults();
    let slow = SimulatedClient::new(data.clone(), Scenario::Slow);
    let success = SimulatedClient::new(data, Scenario::Success);

    let delayed = slow.send(ApiRequest::get(routes::USERS)).await.unwrap();
    let immediate = success.send(ApiRequest::get(routes::USERS)).await.unwrap();
    assert_eq!(delayed, immediate);
}
