use mirage_core::prelude::*;
use mirage_repo::{SearchRepository, UsersRepository};
use mirage_scenario::Scenario;
use mirage_test_utils::{anchor_context, anchor_data};
use pretty_assertions::assert_eq;

fn anchor_config() -> MirageConfig {
    let anchor = anchor_context();
    MirageConfig::new()
        .with_data_mode(DataMode::Demo)
        .with_seed(anchor.seed)
        .with_reference_time(anchor.now)
}

#[tokio::test]
async fn demo_factory_serves_the_anchor_dataset() {
    let runtime = MirageRuntime::new(anchor_config());

    // An independently built anchor store answers identically: the whole
    // pipeline is a pure function of (seed, reference time).
    let expected = anchor_data().users().list();
    let actual = runtime.factory().users().list().await.unwrap();
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn scenario_switching_leaves_repository_results_stable() {
    let runtime = MirageRuntime::new(anchor_config());
    let controller = runtime.controller().unwrap();
    runtime.start("?scenario=success").await;

    let search = runtime.factory().search();
    let request = mirage_model::SearchRequest::new("onboarding").with_window(0, 5);
    let before = search.search(&request).await.unwrap();

    controller.apply(Scenario::Error).await;
    controller.apply(Scenario::Success).await;

    // Repositories in demo mode bypass the transport, so scenario churn
    // must not disturb their answers.
    let after = search.search(&request).await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn verify_passes_for_the_runtime_dataset() {
    let runtime = MirageRuntime::new(anchor_config());
    let scenario = runtime.data().store().snapshot();
    let violations = verify_dataset(&scenario, anchor_context().now);
    assert!(violations.is_empty(), "unexpected: {violations:?}");
}
