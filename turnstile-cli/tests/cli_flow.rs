use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;
use turnstile_cli::ticketing::{self, EXIT_FAILURE, EXIT_OK};
use turnstile_cli::verify;
use turnstile_order::{TicketVerifier, INVALID_OR_EXPIRED};
use turnstile_store::JsonFileStore;

struct Captured {
    code: u8,
    out: String,
    err: String,
}

async fn issue(store: &JsonFileStore, input: &str, validity: Duration) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = ticketing::run(input.as_bytes(), &mut out, &mut err, store, validity)
        .await
        .unwrap();
    Captured {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

async fn check(store: &JsonFileStore, input: &str) -> Captured {
    let verifier = TicketVerifier::new(Arc::new(store.clone()));
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = verify::run(input.as_bytes(), &mut out, &mut err, &verifier).await.unwrap();
    Captured {
        code,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn stored_ids(store: &JsonFileStore) -> Vec<String> {
    let raw: Value = serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    raw.as_object().unwrap().keys().cloned().collect()
}

const TWO_GUESTS: &str = "2\nAna,30,9876543210,ana@example.com,female\nBo,65,9876543211,bo@example.com,male\n";

#[tokio::test]
async fn test_issue_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let issued = issue(&store, TWO_GUESTS, Duration::hours(24)).await;
    assert_eq!(issued.code, EXIT_OK, "stderr: {}", issued.err);
    assert!(issued.out.contains("Enter the total number of guests: "));
    assert!(issued.out.contains("Enter guest 2 details (name, age, phone, email, gender): "));
    assert!(issued.out.contains("Total Price: 800 Rs"));
    assert!(issued.out.contains("Ticket Price (Rs)"));

    let ids = stored_ids(&store);
    assert_eq!(ids.len(), 1);
    assert!(issued.out.contains(&format!("Ticket ID: {}", ids[0])));

    let verified = check(&store, &format!("{}\n", ids[0])).await;
    assert_eq!(verified.code, EXIT_OK);
    assert!(verified.out.contains("Ana 30 9876543210 ana@example.com"));
    assert!(verified.out.contains("Bo 65 9876543211 bo@example.com"));
    assert!(verified.err.is_empty());
}

#[tokio::test]
async fn test_second_ticket_is_merged_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    issue(&store, TWO_GUESTS, Duration::hours(24)).await;
    issue(&store, "1\nCy,10,9876543212,cy@example.com,other\n", Duration::hours(24)).await;

    assert_eq!(stored_ids(&store).len(), 2);
}

#[tokio::test]
async fn test_invalid_count_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = issue(&store, "zero\n", Duration::hours(24)).await;
    assert_eq!(run.code, EXIT_FAILURE);
    assert!(run.err.contains("Invalid input. Please enter a valid number of guests."));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_bad_guest_line_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = issue(
        &store,
        "2\nAna,30,98765,ana-at-example.com,female\nBo,65,9876543211,bo@example.com,male\n",
        Duration::hours(24),
    )
    .await;
    assert_eq!(run.code, EXIT_FAILURE);
    assert!(run.err.contains("Phone number must be 10 digits long"));
    assert!(run.err.contains("Invalid email format"));
    assert!(!run.out.contains("Enter guest 2 details"));
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_missing_field_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = issue(&store, "1\nAna,30,9876543210,ana@example.com\n", Duration::hours(24)).await;
    assert_eq!(run.code, EXIT_FAILURE);
    assert!(run.err.contains("Invalid input format. Please provide all details."));
}

#[tokio::test]
async fn test_input_closed_early() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = issue(&store, "2\nAna,30,9876543210,ana@example.com,female\n", Duration::hours(24)).await;
    assert_eq!(run.code, EXIT_FAILURE);
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_receipt_printed_even_when_save_fails() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the store path makes the write fail.
    let store = JsonFileStore::new(dir.path());

    let run = issue(&store, "1\nAna,30,9876543210,ana@example.com,female\n", Duration::hours(24)).await;
    assert_eq!(run.code, EXIT_OK);
    assert!(run.out.contains("Total Price: 500 Rs"));
}

#[tokio::test]
async fn test_verify_unknown_and_expired_read_the_same() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    issue(&store, TWO_GUESTS, Duration::milliseconds(-1)).await;
    let expired_id = stored_ids(&store).remove(0);

    let expired = check(&store, &format!("{}\n", expired_id)).await;
    let unknown = check(&store, "no-such-ticket\n").await;

    for run in [&expired, &unknown] {
        assert_eq!(run.code, EXIT_OK);
        assert!(run.err.contains(INVALID_OR_EXPIRED));
        assert!(!run.out.contains("details"));
    }
}

#[tokio::test]
async fn test_verify_without_store_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = check(&store, "abc\n").await;
    assert_eq!(run.code, EXIT_OK);
    assert!(run.err.contains(INVALID_OR_EXPIRED));
}

#[tokio::test]
async fn test_verify_empty_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    for input in ["\n", "   \n", ""] {
        let run = check(&store, input).await;
        assert_eq!(run.code, EXIT_FAILURE);
        assert!(run.err.contains("Please provide a ticket id"));
    }
}

#[tokio::test]
async fn test_errors_are_red_and_prompts_green() {
    colored::control::set_override(true);
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    let run = check(&store, "missing\n").await;
    assert!(run.out.contains("\u{1b}[32mEnter the ticket id to verify: \u{1b}[0m"));
    assert!(run.err.contains(&format!("\u{1b}[31m{}\u{1b}[0m", INVALID_OR_EXPIRED)));
}
