#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::models::{ApiResponse, NewReview, ReviewQuery};
#[cfg(feature = "ssr")]
use actix_web::{error::InternalError, web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::{error, log};

pub const SAVE_SUCCESS: &str = "리뷰가 저장되었습니다.";
pub const SAVE_FAILURE: &str = "리뷰 저장에 실패했습니다.";
pub use crate::models::SEARCH_FAILURE;

#[cfg(feature = "ssr")]
fn failure(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::<()>::failure(message))
}

/// `POST /api/reviews`
#[cfg(feature = "ssr")]
pub async fn create_review(
    db: web::Data<Database>,
    request: web::Json<NewReview>,
) -> HttpResponse {
    let input = request.into_inner();
    log!(
        "[API] Received review for plate '{}' ({})",
        input.car_number,
        input.rating.as_str()
    );

    match db.insert_review(&input).await {
        Ok(review) => {
            log!("[API] Saved review {}", review.id);
            HttpResponse::Ok().json(ApiResponse::ok_with_message(SAVE_SUCCESS, review))
        }
        Err(err) => {
            error!("[API] Error in POST /api/reviews: {}", err);
            failure(SAVE_FAILURE)
        }
    }
}

/// `GET /api/reviews?carNumber=<substring>&limit=<n>`
#[cfg(feature = "ssr")]
pub async fn list_reviews(
    db: web::Data<Database>,
    query: web::Query<ReviewQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    log!("[API] Searching reviews: {:?}", query);

    match db.search_reviews(query.plate_filter(), query.cap()).await {
        Ok(reviews) => HttpResponse::Ok().json(ApiResponse::ok(reviews)),
        Err(err) => {
            error!("[API] Error in GET /api/reviews: {}", err);
            failure(SEARCH_FAILURE)
        }
    }
}

/// Malformed bodies get the same envelope as any other save failure.
#[cfg(feature = "ssr")]
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error!("[API] Rejected review body: {}", err);
        InternalError::from_response(err, failure(SAVE_FAILURE)).into()
    })
}

#[cfg(feature = "ssr")]
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        error!("[API] Rejected review query: {}", err);
        InternalError::from_response(err, failure(SEARCH_FAILURE)).into()
    })
}

/// Mounts `/reviews`; the caller provides the `/api` scope and the `Database`.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reviews")
            .app_data(json_config())
            .app_data(query_config())
            .route(web::get().to(list_reviews))
            .route(web::post().to(create_review)),
    );
}
