#[cfg(feature = "ssr")]
mod db_impl {
    use crate::error::StoreError;
    use crate::models::review::fold_plate;
    use crate::models::{NewReview, Rating, Review};
    use chrono::{DateTime, SubsecRound, Utc};
    use leptos::logging;
    use leptos::logging::log;
    use rusqlite::functions::FunctionFlags;
    use rusqlite::{params, Connection};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use uuid::Uuid;


    /// SQLite-backed review store. Clones share one connection.
    #[derive(Debug, Clone)]
    pub struct Database {
        conn: Arc<Mutex<Connection>>,
    }

    impl Database {
        // Create a new database connection
        pub fn new(db_path: &str) -> Result<Self, StoreError> {
            let conn = Connection::open(db_path)?;
            register_functions(&conn)?;
            logging::log!("Database connection established at: {}", db_path);
            Ok(Database {
                conn: Arc::new(Mutex::new(conn)),
            })
        }

        pub async fn create_schema(&self) -> Result<(), StoreError> {
            let conn = self.conn.lock().await;

            conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS reviews (
                    seq INTEGER PRIMARY KEY AUTOINCREMENT,
                    id TEXT NOT NULL UNIQUE,
                    car_number TEXT NOT NULL,
                    review TEXT NOT NULL,
                    rating TEXT NOT NULL CHECK (rating IN ('good', 'neutral', 'bad')),
                    date TEXT NOT NULL,
                    created_at INTEGER NOT NULL
                );
                CREATE INDEX IF NOT EXISTS reviews_created_at
                    ON reviews (created_at DESC, seq DESC);",
            )
            .map_err(|e| {
                logging::error!("[DB] Failed creating reviews table: {}", e);
                e
            })?;
            Ok(())
        }

        /// Validates and stores a submission, returning it with its id and timestamp.
        pub async fn insert_review(&self, input: &NewReview) -> Result<Review, StoreError> {
            input.validate()?;

            let review = Review {
                id: Uuid::new_v4().to_string(),
                car_number: input.car_number.clone(),
                review: input.review.clone(),
                rating: input.rating,
                date: input.date_or_today(),
                // Stored with millisecond precision
                created_at: Utc::now().trunc_subsecs(3),
            };

            let conn = self.conn.lock().await;
            conn.execute(
                "INSERT INTO reviews (id, car_number, review, rating, date, created_at)
                VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    &review.id,
                    &review.car_number,
                    &review.review,
                    review.rating.as_str(),
                    &review.date,
                    review.created_at.timestamp_millis(),
                ],
            )?;
            log!(
                "[DB] Stored review {} for plate '{}'",
                review.id,
                review.car_number
            );
            Ok(review)
        }

        /// Reviews whose plate contains `plate` (Unicode case-insensitive), newest first.
        /// `None` or an empty filter returns everything; `limit` caps the row count.
        pub async fn search_reviews(
            &self,
            plate: Option<&str>,
            limit: Option<usize>,
        ) -> Result<Vec<Review>, StoreError> {
            let needle = plate.map(fold_plate).unwrap_or_default();
            // SQLite treats a negative LIMIT as unbounded.
            let limit = limit
                .and_then(|n| i64::try_from(n).ok())
                .unwrap_or(-1);

            let conn = self.conn.lock().await;
            let mut stmt = conn.prepare(
                "SELECT id, car_number, review, rating, date, created_at
                FROM reviews
                WHERE ?1 = '' OR instr(fold_plate(car_number), ?1) > 0
                ORDER BY created_at DESC, seq DESC
                LIMIT ?2",
            )?;

            let rows = stmt.query_map(params![needle, limit], |row| {
                Ok(RawReview {
                    id: row.get(0)?,
                    car_number: row.get(1)?,
                    review: row.get(2)?,
                    rating: row.get(3)?,
                    date: row.get(4)?,
                    created_at: row.get(5)?,
                })
            })?;

            let mut reviews = Vec::new();
            for row in rows {
                reviews.push(row?.into_review()?);
            }
            log!(
                "[DB] Search {:?} (limit {}) returned {} reviews",
                plate,
                limit,
                reviews.len()
            );
            Ok(reviews)
        }

        #[cfg(test)]
        async fn count_reviews(&self) -> Result<usize, StoreError> {
            let conn = self.conn.lock().await;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            Ok(count.max(0) as usize)
        }
    }

    // Row as stored, before the rating and timestamp are decoded
    struct RawReview {
        id: String,
        car_number: String,
        review: String,
        rating: String,
        date: String,
        created_at: i64,
    }

    impl RawReview {
        fn into_review(self) -> Result<Review, StoreError> {
            let rating = Rating::parse(&self.rating).ok_or_else(|| StoreError::CorruptRow {
                id: self.id.clone(),
                reason: format!("unknown rating '{}'", self.rating),
            })?;
            let created_at = DateTime::<Utc>::from_timestamp_millis(self.created_at).ok_or_else(|| {
                StoreError::CorruptRow {
                    id: self.id.clone(),
                    reason: format!("timestamp {} out of range", self.created_at),
                }
            })?;
            Ok(Review {
                id: self.id,
                car_number: self.car_number,
                review: self.review,
                rating,
                date: self.date,
                created_at,
            })
        }
    }

    // `fold_plate(text)`: the same case folding the client uses when narrowing results
    fn register_functions(conn: &Connection) -> Result<(), rusqlite::Error> {
        conn.create_scalar_function(
            "fold_plate",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let value = ctx.get::<String>(0)?;
                Ok(fold_plate(&value))
            },
        )
    }
}

#[cfg(feature = "ssr")]
pub use db_impl::Database;
