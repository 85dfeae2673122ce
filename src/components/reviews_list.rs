use leptos::*;
use crate::models::{Rating, Review};

/// Thumbs up, dot, or thumbs down next to a review.
#[component]
pub fn RatingIcon(rating: Rating) -> impl IntoView {
    let (class, glyph) = match rating {
        Rating::Good => ("rating rating--good", "👍"),
        Rating::Neutral => ("rating rating--neutral", "●"),
        Rating::Bad => ("rating rating--bad", "👎"),
    };

    view! {
        <span class=class title=rating.label() data-rating=rating.as_str()>{ glyph }</span>
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="card review-card">
            <div class="review-card__header">
                <div>
                    <p class="review-card__plate">{ review.car_number }</p>
                    <p class="review-card__date">{ review.date }</p>
                </div>
                <RatingIcon rating=review.rating />
            </div>
            <p class="review-card__body">{ review.review }</p>
        </div>
    }
}

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    view! {
        <div class="reviews-list">
            {
                reviews.into_iter().map(|review| {
                    view! { <ReviewCard review=review /> }
                }).collect_view()
            }
        </div>
    }
}
