// src/models/review.rs
use crate::error::ValidationError;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// How the reviewer felt about the driver behind the plate.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    #[default]
    Neutral,
    Bad,
}

impl Rating {
    pub const ALL: [Rating; 3] = [Rating::Good, Rating::Neutral, Rating::Bad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Neutral => "neutral",
            Rating::Bad => "bad",
        }
    }

    pub fn parse(value: &str) -> Option<Rating> {
        Rating::ALL.into_iter().find(|rating| rating.as_str() == value)
    }

    /// Button label shown on the submit form.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Good => "좋아요",
            Rating::Neutral => "보통이에요",
            Rating::Bad => "나빠요",
        }
    }
}

/// A stored review, as returned by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub car_number: String,
    pub review: String,
    pub rating: Rating,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Case-insensitive substring match on the plate number. An empty query matches everything.
    pub fn matches_plate(&self, query: &str) -> bool {
        fold_plate(&self.car_number).contains(&fold_plate(query))
    }
}

/// Body of `POST /api/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub car_number: String,
    pub review: String,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewReview {
    pub fn new(car_number: String, review: String, rating: Rating) -> Self {
        Self {
            car_number,
            review,
            rating,
            date: Some(display_date(Local::now())),
        }
    }

    /// Presence checks only: plate number and review text must not be blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.car_number.trim().is_empty() {
            return Err(ValidationError::MissingCarNumber);
        }
        if self.review.trim().is_empty() {
            return Err(ValidationError::MissingReview);
        }
        Ok(())
    }

    /// The display date to store, falling back to today when the client sent none.
    pub fn date_or_today(&self) -> String {
        match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.to_string(),
            _ => display_date(Local::now()),
        }
    }
}

/// Query string of `GET /api/reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    #[serde(default)]
    pub car_number: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ReviewQuery {
    /// The plate filter, or `None` when absent or empty.
    pub fn plate_filter(&self) -> Option<&str> {
        self.car_number.as_deref().filter(|plate| !plate.is_empty())
    }

    /// Row cap; zero means no cap.
    pub fn cap(&self) -> Option<usize> {
        self.limit.filter(|n| *n > 0)
    }
}

/// Case folding applied to plate numbers before substring matching.
pub fn fold_plate(plate: &str) -> String {
    plate.to_lowercase()
}

/// Formats a date the way Korean locales print short dates, e.g. `2024. 3. 7.`.
pub fn display_date<Tz: chrono::TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y. %-m. %-d.").to_string()
}
