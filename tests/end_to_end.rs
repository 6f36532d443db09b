//! End-to-end scenario tests
//!
//! Drives the whole pipeline: a channel-fed capture session through the
//! relay service to a stubbed processing service, with the reconciler
//! tracking the result and task completion.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use echo_audit::application::{CaptureError, RecordAndRelay, RelayService, ViewStatus};
use echo_audit::infrastructure::server::{build_router, serve};
use echo_audit::infrastructure::{
    ChannelAudioInput, FsAudioStore, HttpProcessingClient, HttpRelayClient,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_relay(storage_dir: &Path, processing_url: &str) -> String {
    let store = FsAudioStore::create(storage_dir).await.unwrap();
    let backend = HttpProcessingClient::new(processing_url, Duration::from_secs(5));
    let relay = Arc::new(RelayService::new(store, backend));
    let app = build_router(relay, "*");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn transcript_stub() -> serde_json::Value {
    serde_json::json!({
        "text": "buy milk",
        "tasks": [
            {"_id": "1", "task": "buy milk", "deadline": null, "completed": false}
        ],
        "txt_file": "t1.txt"
    })
}

#[tokio::test]
async fn full_session_from_recording_to_task_completion() {
    let processing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript_stub()))
        .expect(1)
        .mount(&processing)
        .await;
    // Slow acknowledgment: the optimistic toggle must not wait for it.
    Mock::given(method("POST"))
        .and(path("/complete"))
        .and(body_json(serde_json::json!({"task": "buy milk"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "done"}))
                .set_delay(Duration::from_millis(150)),
        )
        .expect(1)
        .mount(&processing)
        .await;

    let storage = tempfile::tempdir().unwrap();
    let relay_url = spawn_relay(storage.path(), &processing.uri()).await;

    let (input, feeder) = ChannelAudioInput::new();
    let mut workflow = RecordAndRelay::new(
        input,
        HttpRelayClient::new(&relay_url),
        HttpProcessingClient::new(processing.uri(), Duration::from_secs(5)),
    );

    workflow.start_recording().await.unwrap();

    // Three chunks totaling 50 KB
    let chunks = [vec![0x11u8; 20_000], vec![0x22u8; 20_000], vec![0x33u8; 10_000]];
    for chunk in &chunks {
        feeder.push(chunk.clone());
    }

    workflow.stop_and_upload().await.unwrap();

    let view = workflow.view();
    assert_eq!(view.status, ViewStatus::Ready);
    assert_eq!(view.text, "buy milk");
    assert_eq!(view.tasks.len(), 1);
    assert!(!view.tasks[0].completed);

    // The persisted blob is the ordered concatenation of the chunks.
    let mut entries = tokio::fs::read_dir(storage.path()).await.unwrap();
    let entry = entries.next_entry().await.unwrap().unwrap();
    let stored = tokio::fs::read(entry.path()).await.unwrap();
    let expected: Vec<u8> = chunks.iter().flatten().copied().collect();
    assert_eq!(stored.len(), 50_000);
    assert_eq!(stored, expected);

    workflow.toggle_task("1").await.unwrap();
    assert!(workflow.view().tasks[0].completed);

    assert_eq!(
        workflow.download_url().unwrap(),
        format!("{}/download/t1.txt", processing.uri())
    );
}

#[tokio::test]
async fn back_to_back_recordings_reuse_the_same_input() {
    let processing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript_stub()))
        .expect(2)
        .mount(&processing)
        .await;

    let storage = tempfile::tempdir().unwrap();
    let relay_url = spawn_relay(storage.path(), &processing.uri()).await;

    let (input, feeder) = ChannelAudioInput::new();
    let mut workflow = RecordAndRelay::new(
        input,
        HttpRelayClient::new(&relay_url),
        HttpProcessingClient::new(processing.uri(), Duration::from_secs(5)),
    );

    workflow.start_recording().await.unwrap();
    feeder.push(vec![1u8; 256]);
    workflow.stop_and_upload().await.unwrap();
    assert_eq!(workflow.view().status, ViewStatus::Ready);

    tokio::time::sleep(Duration::from_millis(5)).await;

    // The device must be re-acquirable after a completed session.
    workflow.start_recording().await.unwrap();
    feeder.push(vec![2u8; 256]);
    workflow.stop_and_upload().await.unwrap();
    assert_eq!(workflow.view().status, ViewStatus::Ready);

    let mut count = 0;
    let mut entries = tokio::fs::read_dir(storage.path()).await.unwrap();
    while entries.next_entry().await.unwrap().is_some() {
        count += 1;
    }
    assert_eq!(count, 2);
}

#[tokio::test]
async fn upload_failure_marks_view_failed_and_keeps_audio() {
    let processing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&processing)
        .await;

    let storage = tempfile::tempdir().unwrap();
    let relay_url = spawn_relay(storage.path(), &processing.uri()).await;

    let (input, feeder) = ChannelAudioInput::new();
    let mut workflow = RecordAndRelay::new(
        input,
        HttpRelayClient::new(&relay_url),
        HttpProcessingClient::new(processing.uri(), Duration::from_secs(5)),
    );

    workflow.start_recording().await.unwrap();
    feeder.push(vec![5u8; 512]);
    workflow.stop_and_upload().await.unwrap();

    // Failed is distinguishable from still-processing, and the recording
    // is not silently lost: the audio survives on the relay.
    match &workflow.view().status {
        ViewStatus::Failed(reason) => assert!(reason.contains("Processing failed")),
        other => panic!("expected failed status, got {:?}", other),
    }

    let mut entries = tokio::fs::read_dir(storage.path()).await.unwrap();
    let entry = entries.next_entry().await.unwrap().unwrap();
    let stored = tokio::fs::read(entry.path()).await.unwrap();
    assert_eq!(stored, vec![5u8; 512]);
}

#[tokio::test]
async fn empty_recording_never_reaches_the_relay() {
    let processing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/process"))
        .respond_with(ResponseTemplate::new(200).set_body_json(transcript_stub()))
        .expect(0)
        .mount(&processing)
        .await;

    let storage = tempfile::tempdir().unwrap();
    let relay_url = spawn_relay(storage.path(), &processing.uri()).await;

    let (input, _feeder) = ChannelAudioInput::new();
    let mut workflow = RecordAndRelay::new(
        input,
        HttpRelayClient::new(&relay_url),
        HttpProcessingClient::new(processing.uri(), Duration::from_secs(5)),
    );

    workflow.start_recording().await.unwrap();
    let err = workflow.stop_and_upload().await.unwrap_err();
    assert!(matches!(err, CaptureError::EmptyRecording));

    let mut entries = tokio::fs::read_dir(storage.path()).await.unwrap();
    assert!(entries.next_entry().await.unwrap().is_none());
}
