pub mod response;
pub mod review;

pub use response::{ApiResponse, SEARCH_FAILURE};
pub use review::{NewReview, Rating, Review, ReviewQuery};
