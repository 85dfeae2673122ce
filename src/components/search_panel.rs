/// Search tab: recent reviews on entry, plate search on submit.
use leptos::*;
use leptos::ev::SubmitEvent;
use crate::client;
use crate::components::reviews_list::ReviewsList;
use crate::models::Review;

/// Narrows fetched results to those still matching the current input.
pub fn filter_by_plate(reviews: &[Review], query: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.matches_plate(query))
        .cloned()
        .collect()
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    // A fresh panel is mounted each time the tab opens, so state starts reset.
    let (search_number, set_search_number) = create_signal(String::new());
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (recent_reviews, set_recent_reviews) = create_signal(Vec::<Review>::new());
    let (searched, set_searched) = create_signal(false);
    let (is_loading, set_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match client::recent_reviews().await {
                Ok(recent) => set_recent_reviews.set(recent),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let handle_search = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);
        set_error.set(None);
        set_searched.set(true);

        let query = search_number.get_untracked();
        spawn_local(async move {
            match client::search_reviews(&query).await {
                Ok(found) => set_reviews.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    let filtered_reviews = move || filter_by_plate(&reviews.get(), &search_number.get());

    view! {
        <div class="card">
            <form class="search-form" on:submit=handle_search>
                <input
                    type="text"
                    class="input"
                    placeholder="차량번호를 검색하세요"
                    prop:value=search_number
                    on:input=move |e| set_search_number.set(event_target_value(&e))
                />
                <button type="submit" class="button" disabled=is_loading>
                    {move || if is_loading.get() { "⌛" } else { "🔍" }}
                </button>
            </form>

            <div class="search-results">
                <Show
                    when=move || searched.get()
                    fallback=move || view! {
                        <h3 class="section-title">{ "최근 등록된 리뷰" }</h3>
                        {move || view! { <ReviewsList reviews=recent_reviews.get() /> }}
                    }
                >
                    {move || {
                        let found = filtered_reviews();
                        if found.is_empty() {
                            view! { <p class="empty">{ "검색 결과가 없습니다." }</p> }.into_view()
                        } else {
                            view! { <ReviewsList reviews=found /> }.into_view()
                        }
                    }}
                </Show>
            </div>

            {move || error.get().map(|message| view! {
                <div class="alert alert--error">{ message }</div>
            })}
        </div>
    }
}
