use quiz_core::model::QuestionBank;
use quiz_core::time::fixed_now;
use services::IDENTITY_KEY;
use storage::repository::PreferenceRecord;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_bank};
use crate::vm::QuizIntent;

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_lists_topics_with_counts() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render();

    for expected in ["General", "Web", "Science", "3 questions", "2 questions"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("/quiz/General"), "missing quiz link in {html}");
    assert!(!html.contains("No topics available."));
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_empty_bank() {
    let mut harness = setup_view_harness_with_bank(ViewKind::Dashboard, QuestionBank::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No topics available."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz("General".into()));
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Topic: General",
        "Question 1 of 3",
        "Which language runs in a web browser?",
        "JavaScript",
        "Previous",
        "Next",
        "Submit",
        "Back",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("choice--selected"), "unexpected selection in {html}");
    assert!(!html.contains("Submit anyway?"), "unexpected confirmation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_unknown_topic_error() {
    let mut harness = setup_view_harness(ViewKind::Quiz("History".into()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("That topic does not exist."), "missing error in {html}");
    assert!(html.contains("Back to topics"), "missing back link in {html}");
    assert!(!html.contains("Question 1 of"), "unexpected question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_asks_before_submitting_with_gaps() {
    let mut harness = setup_view_harness(ViewKind::Quiz("General".into()));
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(3));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("choice--selected"), "missing selection in {html}");
    for expected in [
        "You have 2 unanswered question(s). Submit anyway?",
        "Keep answering",
        "Submit anyway",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }

    harness.dispatch(QuizIntent::CancelSubmit);
    let html = harness.render();
    assert!(!html.contains("Keep answering"), "modal still open in {html}");
    assert!(html.contains("Question 1 of 3"), "lost position in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_results_and_restarts() {
    let mut harness = setup_view_harness(ViewKind::Quiz("General".into()));
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(3));
    harness.dispatch(QuizIntent::Submit);
    harness.dispatch(QuizIntent::ConfirmSubmit);
    let html = harness.render();

    for expected in [
        "Results",
        "You scored 1 out of 3.",
        "33%",
        "Q1: Which language runs in a web browser?",
        "Your answer: JavaScript",
        "Correct: Cascading Style Sheets",
        "Your answer: —",
        "feedback-correct",
        "feedback-wrong",
        "Restart",
        "Back",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Submit anyway"), "modal left open in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 3"), "missing question in {html}");
    assert!(!html.contains("Results"), "stale results in {html}");
    assert!(!html.contains("choice--selected"), "stale selection in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_offers_sign_in_when_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Header);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Topic Quiz"), "missing title in {html}");
    assert!(html.contains("Sign in"), "missing sign-in button in {html}");
    for label in ["System", "Light", "Dark"] {
        assert!(html.contains(label), "missing theme {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_renders_badge_for_stored_identity() {
    let mut harness = setup_view_harness(ViewKind::Header);
    harness
        .services
        .identity()
        .sign_in("grace.hopper@example.com")
        .await
        .expect("sign in");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("grace hopper"), "missing name in {html}");
    assert!(
        html.contains("data:image/svg+xml;base64,"),
        "missing avatar in {html}"
    );
    assert!(html.contains("Sign out"), "missing sign-out in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn header_smoke_treats_corrupt_identity_as_signed_out() {
    let mut harness = setup_view_harness(ViewKind::Header);
    harness
        .storage
        .preferences
        .put_preference(&PreferenceRecord::new(IDENTITY_KEY, "{broken", fixed_now()))
        .await
        .expect("put preference");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Sign in"), "missing sign-in button in {html}");
}
