use interview_core::model::CategoryName;

use super::test_harness::{ViewKind, sample_service, setup_view_harness, setup_view_harness_with_service};

fn name(value: &str) -> CategoryName {
    CategoryName::new(value).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_library_categories() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();

    for expected in ["JavaScript", "CSS", "HTTP", "3 questions", "1 question", "Start interview"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_without_selection_is_not_loaded() {
    let mut harness = setup_view_harness(ViewKind::Interview);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Not loaded"), "missing fallback in {html}");
    assert!(!html.contains("Check the answer"), "unexpected controls in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn interview_view_smoke_renders_first_question() {
    let service = sample_service();
    service.select(&[name("HTTP")]).await.expect("select");

    let mut harness = setup_view_harness_with_service(ViewKind::Interview, service);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    for expected in [
        "HTTP",
        "Which HTTP methods are idempotent?",
        "Check the answer",
        "Go to the next question",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("GET, HEAD, PUT"), "answer leaked before reveal in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_lists_answered_questions() {
    let service = sample_service();
    service.select(&[name("HTTP")]).await.expect("select");
    let mut interview = service.start_interview();
    interview.activate().await.expect("activate");
    interview.update_my_answer("GET and PUT");
    interview.check_answer();
    interview.question_answered().await.expect("answer");

    let mut harness = setup_view_harness_with_service(ViewKind::Results, service);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    for expected in [
        "Answered 1 of 1",
        "Which HTTP methods are idempotent?",
        "My answer: GET and PUT",
        "Start over",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}
