/*!
 * End-to-end tests for the verified translation workflow, driving the
 * Controller with a deterministic mock provider and real temporary files.
 */

use std::sync::Arc;

use tempfile::tempdir;

use backtrip::app_controller::Controller;
use backtrip::providers::mock::MockTranslator;
use backtrip::providers::Direction;
use backtrip::Config;

const HEBREW_DOC: &str = "שלום עולם טוב היום לכולם";

fn config_with_chunk_size(chunk_size: usize) -> Config {
    Config { chunk_size, ..Default::default() }
}

#[tokio::test]
async fn test_run_verifiedDocument_shouldWriteTranslationVerbatim() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, HEBREW_DOC).unwrap();

    let provider = MockTranslator::scripted()
        .with_response(Direction::Forward, HEBREW_DOC, "hello world good day everyone")
        .with_response(Direction::Reverse, "everyone", "לכולם");
    let controller = Controller::with_provider(Config::default(), Arc::new(provider)).unwrap();

    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "hello world good day everyone\n");
}

#[tokio::test]
async fn test_run_unverifiableDocument_shouldAnnotateBaselineTranslation() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, HEBREW_DOC).unwrap();

    let provider = MockTranslator::scripted()
        .with_effort_response(Direction::Forward, HEBREW_DOC, 5, "hello world good day everyone")
        .with_effort_response(Direction::Forward, HEBREW_DOC, 10, "greetings planet nice day folks")
        .with_response(Direction::Reverse, "everyone", "כל אחד")
        .with_response(Direction::Reverse, "day everyone", "יום כולם")
        .with_response(Direction::Reverse, "good day everyone", "יום טוב כולם")
        .with_response(Direction::Reverse, "folks", "אנשים")
        .with_response(Direction::Reverse, "day folks", "יום אנשים")
        .with_response(Direction::Reverse, "nice day folks", "יום נחמד אנשים");
    let controller = Controller::with_provider(Config::default(), Arc::new(provider.clone())).unwrap();

    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "hello world good day everyone \
         (regional word: לכולם, got: כל אחד, יום כולם, יום טוב כולם)\n"
    );
    // One baseline and one escalated forward attempt, never a third
    assert_eq!(provider.forward_calls(), 2);
}

#[tokio::test]
async fn test_run_partialOutage_shouldOmitSkippedChunkWithoutBlankLine() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, "אחת שתיים שלוש ארבע חמש שש").unwrap();

    // First and third chunks translate and verify; the second yields the
    // empty candidate, which counts as a service failure for that chunk
    let provider = MockTranslator::scripted()
        .with_response(Direction::Forward, "אחת שתיים", "one two")
        .with_response(Direction::Forward, "שלוש ארבע", "")
        .with_response(Direction::Forward, "חמש שש", "five six")
        .with_response(Direction::Reverse, "two", "שתיים")
        .with_response(Direction::Reverse, "six", "שש");
    let controller =
        Controller::with_provider(config_with_chunk_size(2), Arc::new(provider)).unwrap();

    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "one two\nfive six\n");
}

#[tokio::test]
async fn test_run_escalatedMatch_shouldWriteEscalatedTranslation() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, HEBREW_DOC).unwrap();

    let provider = MockTranslator::scripted()
        .with_effort_response(Direction::Forward, HEBREW_DOC, 5, "hello world good day everybody")
        .with_effort_response(Direction::Forward, HEBREW_DOC, 10, "hello world good day everyone")
        .with_response(Direction::Reverse, "everybody", "כולם")
        .with_response(Direction::Reverse, "day everybody", "יום כולם")
        .with_response(Direction::Reverse, "good day everybody", "יום טוב כולם")
        .with_response(Direction::Reverse, "everyone", "לכולם");
    let controller = Controller::with_provider(Config::default(), Arc::new(provider)).unwrap();

    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "hello world good day everyone\n");
}

#[tokio::test]
async fn test_run_punctuatedInput_shouldNormalizeBeforeChunking() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, "שלום, עולם טוב היום לכולם!").unwrap();

    // The provider only knows the punctuation-free chunk text
    let provider = MockTranslator::scripted()
        .with_response(Direction::Forward, HEBREW_DOC, "hello world good day everyone")
        .with_response(Direction::Reverse, "everyone", "לכולם");
    let controller = Controller::with_provider(Config::default(), Arc::new(provider)).unwrap();

    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "hello world good day everyone\n");
}

#[tokio::test]
async fn test_run_emptyDocument_shouldFailWithoutWritingOutput() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, "  \n\t ").unwrap();

    let controller =
        Controller::with_provider(Config::default(), Arc::new(MockTranslator::scripted())).unwrap();

    let result = controller.run(&input, &output).await;

    assert!(result.is_err());
    assert!(!output.exists());
}

#[tokio::test]
async fn test_run_totalOutage_shouldWriteEmptyTranscriptAndNotCrash() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("dataset.txt");
    let output = dir.path().join("translated_output.txt");
    std::fs::write(&input, HEBREW_DOC).unwrap();

    let controller =
        Controller::with_provider(Config::default(), Arc::new(MockTranslator::failing())).unwrap();

    // A dead translation server skips every chunk but never aborts the run
    controller.run(&input, &output).await.unwrap();

    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(content, "");
}
