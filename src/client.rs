//! Browser-side calls to `/api/reviews`.
use crate::error::ClientError;
use crate::models::{ApiResponse, NewReview, Review, SEARCH_FAILURE};
use gloo_net::http::Request;
use leptos::logging::log;

pub const REVIEWS_ENDPOINT: &str = "/api/reviews";
pub const RECENT_LIMIT: usize = 10;

pub const SUBMIT_FAILURE: &str = "리뷰 등록에 실패했습니다.";
pub const RECENT_FAILURE: &str = "리뷰 로딩에 실패했습니다.";

pub async fn submit_review(review: &NewReview) -> Result<Review, ClientError> {
    log!("[CLIENT] Submitting review for {}", review.car_number);
    let response = Request::post(REVIEWS_ENDPOINT).json(review)?.send().await?;
    let body: ApiResponse<Review> = response.json().await?;
    unwrap_envelope(body, SUBMIT_FAILURE)
}

pub async fn search_reviews(car_number: &str) -> Result<Vec<Review>, ClientError> {
    fetch_reviews(&search_url(car_number), SEARCH_FAILURE).await
}

pub async fn recent_reviews() -> Result<Vec<Review>, ClientError> {
    fetch_reviews(&recent_url(), RECENT_FAILURE).await
}

async fn fetch_reviews(url: &str, fallback: &str) -> Result<Vec<Review>, ClientError> {
    log!("[CLIENT] GET {}", url);
    let response = Request::get(url).send().await?;
    let body: ApiResponse<Vec<Review>> = response.json().await?;
    unwrap_envelope(body, fallback)
}

pub fn search_url(car_number: &str) -> String {
    format!(
        "{}?carNumber={}",
        REVIEWS_ENDPOINT,
        urlencoding::encode(car_number)
    )
}

pub fn recent_url() -> String {
    format!("{}?limit={}", REVIEWS_ENDPOINT, RECENT_LIMIT)
}

/// Turns the response envelope into data, or the server's message (else `fallback`).
fn unwrap_envelope<T>(body: ApiResponse<T>, fallback: &str) -> Result<T, ClientError> {
    match body {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { message, .. } => Err(ClientError::Rejected(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        )),
    }
}
