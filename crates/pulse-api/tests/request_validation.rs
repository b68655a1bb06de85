use pulse_api::{ApiErrorCode, PredictInput, PredictRequestDto, PredictionDto, PredictResponseDto};
use pulse_core::Label;

fn request(json: &str) -> PredictRequestDto {
    serde_json::from_str(json).expect("parse request")
}

#[test]
fn single_text_becomes_single_input() {
    let input = request(r#"{"text": "I love it"}"#).into_input().expect("input");
    assert_eq!(input, PredictInput::Single("I love it".to_string()));
}

#[test]
fn batch_preserves_order() {
    let input = request(r#"{"texts": ["a", "b", "c"]}"#).into_input().expect("input");
    assert_eq!(
        input.into_texts(),
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    );
}

#[test]
fn single_text_wins_when_both_fields_are_present() {
    let input = request(r#"{"text": "solo", "texts": ["x", "y"]}"#)
        .into_input()
        .expect("input");
    assert_eq!(input.into_texts(), vec!["solo".to_string()]);
}

#[test]
fn neither_field_is_a_client_error() {
    let err = request("{}").into_input().expect_err("must fail");
    assert_eq!(err.code, ApiErrorCode::MissingInput);
    assert_eq!(err.message, "Provide either 'text' or 'texts'.");
}

#[test]
fn empty_batch_is_a_client_error() {
    let err = request(r#"{"texts": []}"#).into_input().expect_err("must fail");
    assert_eq!(err.code, ApiErrorCode::EmptyBatch);
    assert_eq!(err.message, "'texts' must contain at least one item.");
}

#[test]
fn empty_string_is_a_valid_single_input() {
    let input = request(r#"{"text": ""}"#).into_input().expect("input");
    assert_eq!(input.into_texts(), vec![String::new()]);
}

#[test]
fn unknown_request_fields_are_tolerated() {
    let input = request(r#"{"texts": ["ok"], "return_polarity": true}"#)
        .into_input()
        .expect("input");
    assert_eq!(input.into_texts(), vec!["ok".to_string()]);
}

#[test]
fn prediction_serializes_label_and_polarity() {
    let dto = PredictionDto::new(Label::Positive, 0.65);
    let value = serde_json::to_value(&dto).expect("serialize");
    assert_eq!(value["label"], "positive");
    assert_eq!(value["polarity"], 0.65);
}

#[test]
fn absent_polarity_is_omitted_on_the_wire() {
    let dto = PredictionDto {
        label: "neutral".to_string(),
        polarity: None,
    };
    let value = serde_json::to_value(&dto).expect("serialize");
    assert!(value.get("polarity").is_none());
}

#[test]
fn response_round_trips() {
    let response = PredictResponseDto {
        results: vec![
            PredictionDto::new(Label::Negative, -0.6),
            PredictionDto::new(Label::Neutral, 0.0),
        ],
    };
    let raw = serde_json::to_string(&response).expect("serialize");
    let back: PredictResponseDto = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, response);
}

#[test]
fn health_payload_is_fixed() {
    let health = pulse_api::HealthDto::current();
    assert_eq!(health.status, "ok");
    assert_eq!(health.engine, "vader");
    assert_eq!(health.labels, vec!["negative", "neutral", "positive"]);
}
