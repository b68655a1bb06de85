// SPDX-License-Identifier: Apache-2.0

use pulse_api::{PredictRequestDto, PredictResponseDto, PredictionDto, ResourceMetricsDto};

/// One batch predict call; the response order matches the input order.
///
/// Any network or HTTP failure is fatal to the evaluation run, no retry.
pub fn fetch_predictions(api_url: &str, texts: &[String]) -> Result<Vec<PredictionDto>, String> {
    let request = PredictRequestDto {
        text: None,
        texts: Some(texts.to_vec()),
    };
    let url = format!("{}/predict", api_url.trim_end_matches('/'));
    let response = reqwest::blocking::Client::new()
        .post(&url)
        .json(&request)
        .send()
        .map_err(|e| format!("predict request to {url} failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("predict request to {url} failed: {e}"))?;
    let body: PredictResponseDto = response
        .json()
        .map_err(|e| format!("invalid predict response from {url}: {e}"))?;
    Ok(body.results)
}

pub fn fetch_resource_metrics(api_url: &str) -> Result<ResourceMetricsDto, String> {
    let url = format!("{}/metrics", api_url.trim_end_matches('/'));
    reqwest::blocking::get(&url)
        .map_err(|e| format!("metrics request to {url} failed: {e}"))?
        .error_for_status()
        .map_err(|e| format!("metrics request to {url} failed: {e}"))?
        .json()
        .map_err(|e| format!("invalid metrics response from {url}: {e}"))
}
