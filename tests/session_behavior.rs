//! Behavior-driven tests for the snapshot-based session.

use roster_tests::*;

fn session_over(server: &std::sync::Arc<FakeStudentServer>) -> StudentSession<RemoteStudentClient> {
    StudentSession::new(client_for(server))
}

#[tokio::test]
async fn when_student_is_added_visible_list_matches_server_before_success_is_reported() {
    // Given: A session over a service holding Luis
    let server = FakeStudentServer::with_students(&[("Luis", 23)]);
    let session = session_over(&server);
    session.set_name("Ana");
    session.set_age("20");

    // When: The form is submitted
    session.add().await;

    // Then: The list equals the server's contents and success is reported
    let state = session.snapshot();
    assert_eq!(state.students, server.stored());
    assert_eq!(state.students.len(), 2);
    assert_eq!(state.info.as_deref(), Some("student added"));
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[tokio::test]
async fn when_form_is_invalid_no_request_is_sent() {
    let server = FakeStudentServer::new();
    let session = session_over(&server);
    session.set_name("Ana");
    session.set_age("");

    session.add().await;

    assert!(server.requests().is_empty());
    assert!(session.snapshot().error.is_some());
}

#[tokio::test]
async fn when_refresh_fails_previous_list_is_kept_and_error_is_shown() {
    // Given: A session that loaded the list once
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let session = session_over(&server);
    session.refresh().await;
    let loaded = session.snapshot().students;

    // When: The service goes away and the user refreshes
    server.fail_with(Fault::Status(401));
    session.refresh().await;

    // Then: The old list remains and the mapped message is shown
    let state = session.snapshot();
    assert_eq!(state.students, loaded);
    let error = state.error.expect("error is shown");
    assert!(error.contains("api key"), "{error}");
}

#[tokio::test]
async fn when_selected_student_is_updated_list_reflects_new_values() {
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let session = session_over(&server);
    session.refresh().await;
    let ana = session.snapshot().students[0].clone();

    session.select(&ana);
    session.set_name("Ana Sofía");
    session.update().await;

    let state = session.snapshot();
    assert_eq!(state.students[0].name, "Ana Sofía");
    assert_eq!(state.selected_id, Some(ana.id));
}

#[tokio::test]
async fn when_bulk_delete_is_confirmed_list_becomes_empty() {
    let server = FakeStudentServer::with_students(&[("Ana", 20), ("Luis", 23)]);
    let session = session_over(&server);
    session.refresh().await;

    session.delete_all(true).await;

    let state = session.snapshot();
    assert!(state.students.is_empty());
    assert_eq!(state.info.as_deref(), Some("deleted 2 students (0 remaining)"));
}

#[tokio::test]
async fn subscribers_observe_whole_snapshots_in_order() {
    // Given: A subscriber attached before any action
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let session = session_over(&server);
    let updates = session.subscribe();

    // When: The list is refreshed
    session.refresh().await;

    // Then: The latest snapshot seen by the subscriber is the final one
    assert!(updates.has_changed().expect("sender alive"));
    assert_eq!(*updates.borrow(), session.snapshot());
    assert_eq!(updates.borrow().students.len(), 1);
}

#[tokio::test]
async fn dropping_session_discards_its_state() {
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let session = session_over(&server);
    let mut updates = session.subscribe();

    drop(session);

    assert!(updates.changed().await.is_err());
}
