//! Behavior-driven tests for the student service operations.
//!
//! These tests drive `RemoteStudentClient` against the in-memory service and
//! check what a caller observes, not how requests are assembled.

use roster_tests::*;

// =============================================================================
// Create / List
// =============================================================================

#[tokio::test]
async fn when_student_is_created_list_includes_it_with_server_id() {
    // Given: An empty service
    let server = FakeStudentServer::new();
    let client = client_for(&server);

    // When: A student is created and the list is fetched
    let created = client
        .create_student(StudentDraft::new("Ana", 20))
        .await
        .expect("create should succeed");
    let students = client.list_students().await.expect("list should succeed");

    // Then: The list contains Ana with the id the server assigned
    assert!(created.id.get() > 0);
    assert!(students
        .iter()
        .any(|s| s.id == created.id && s.name == "Ana" && s.age == 20));
}

#[tokio::test]
async fn when_student_is_created_returned_fields_match_draft_exactly() {
    // Given: A draft with surrounding whitespace and unusual characters
    let server = FakeStudentServer::new();
    let client = client_for(&server);
    let draft = StudentDraft::new("  María José ", 0);

    // When: It is created
    let created = client
        .create_student(draft.clone())
        .await
        .expect("create should succeed");

    // Then: Nothing was normalized on the way
    assert_eq!(created.to_draft(), draft);
}

#[tokio::test]
async fn when_list_is_fetched_on_empty_service_result_is_empty() {
    let server = FakeStudentServer::new();
    let client = client_for(&server);

    let students = client.list_students().await.expect("list should succeed");

    assert!(students.is_empty());
}

// =============================================================================
// Get / Update
// =============================================================================

#[tokio::test]
async fn when_existing_student_is_fetched_record_is_returned() {
    let server = FakeStudentServer::with_students(&[("Ana", 20), ("Luis", 23)]);
    let client = client_for(&server);

    let student = client
        .get_student(StudentId::new(2))
        .await
        .expect("get should succeed");

    assert_eq!(student, Student::new(StudentId::new(2), "Luis", 23));
}

#[tokio::test]
async fn when_existing_student_is_updated_new_values_are_stored() {
    // Given: Ana exists
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let client = client_for(&server);

    // When: She is renamed and her age changes
    let updated = client
        .update_student(StudentId::new(1), StudentDraft::new("Ana María", 21))
        .await
        .expect("update should succeed");

    // Then: The id is unchanged and the service stored the new values
    assert_eq!(updated.id, StudentId::new(1));
    assert_eq!(
        server.stored(),
        vec![Student::new(StudentId::new(1), "Ana María", 21)]
    );
}

#[tokio::test]
async fn when_missing_student_is_updated_user_gets_not_found_and_list_is_unchanged() {
    // Given: Only Ana exists
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let client = client_for(&server);
    let before = client.list_students().await.expect("list should succeed");

    // When: Student 5 is updated
    let error = client
        .update_student(StudentId::new(5), StudentDraft::new("Bob", 21))
        .await
        .expect_err("update should fail");

    // Then: NotFound, and the list is the same as before
    assert_eq!(error.kind(), StudentErrorKind::NotFound);
    assert_eq!(error.message(), "student not found (id=5)");
    let after = client.list_students().await.expect("list should succeed");
    assert_eq!(before, after);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn when_student_is_deleted_fetching_it_yields_not_found() {
    // Given: Ana exists
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let client = client_for(&server);

    // When: She is deleted and then fetched
    client
        .delete_student(StudentId::new(1))
        .await
        .expect("delete should succeed");
    let error = client
        .get_student(StudentId::new(1))
        .await
        .expect_err("get should fail");

    // Then: NotFound
    assert_eq!(error.kind(), StudentErrorKind::NotFound);
    assert_eq!(error.status(), Some(404));
}

#[tokio::test]
async fn when_missing_student_is_deleted_user_gets_not_found() {
    let server = FakeStudentServer::new();
    let client = client_for(&server);

    let error = client
        .delete_student(StudentId::new(42))
        .await
        .expect_err("delete should fail");

    assert_eq!(error.kind(), StudentErrorKind::NotFound);
}

// =============================================================================
// Bulk delete
// =============================================================================

#[tokio::test]
async fn when_bulk_delete_is_not_confirmed_no_request_is_sent() {
    // Given: A populated service
    let server = FakeStudentServer::with_students(&[("Ana", 20), ("Luis", 23)]);
    let client = client_for(&server);

    // When: Bulk delete is attempted without confirmation
    let error = client
        .delete_all_students(false)
        .await
        .expect_err("bulk delete should be refused");

    // Then: InvalidRequest, no network call, nothing deleted
    assert_eq!(error.kind(), StudentErrorKind::InvalidRequest);
    assert!(server.requests().is_empty());
    assert_eq!(server.stored().len(), 2);
}

#[tokio::test]
async fn when_bulk_delete_is_confirmed_summary_reports_counts() {
    let server = FakeStudentServer::with_students(&[("Ana", 20), ("Luis", 23), ("Eva", 19)]);
    let client = client_for(&server);

    let summary = client
        .delete_all_students(true)
        .await
        .expect("bulk delete should succeed");

    assert_eq!(summary.deleted_count, 3);
    assert_eq!(summary.remaining_count, 0);
    assert!(!summary.message.is_empty());
    assert!(client.list_students().await.expect("list").is_empty());
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn every_request_carries_the_configured_api_key() {
    // Given: A client performing every operation
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let client = client_for(&server);

    // When: Each operation runs once
    for operation in Operation::ALL {
        let _ = invoke(&client, operation).await;
    }

    // Then: Every recorded request had X-API-Key set
    let requests = server.requests();
    assert_eq!(requests.len(), Operation::ALL.len());
    assert!(requests
        .iter()
        .all(|request| request.header("X-API-Key") == Some(API_KEY)));
}

#[tokio::test]
async fn when_api_key_is_wrong_user_gets_unauthorized() {
    let server = FakeStudentServer::with_students(&[("Ana", 20)]);
    let client = client_with_key(&server, "stale-key");

    let error = client.list_students().await.expect_err("should fail");

    assert_eq!(error.kind(), StudentErrorKind::Unauthorized);
    assert_eq!(error.status(), Some(401));
}
