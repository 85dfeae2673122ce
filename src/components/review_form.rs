use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use crate::client;
use crate::components::reviews_list::RatingIcon;
use crate::models::{NewReview, Rating};

/// How long the "saved" notice stays up, in milliseconds.
const SUBMITTED_NOTICE_MS: u32 = 3_000;

#[component]
pub fn ReviewForm() -> impl IntoView {
    let (car_number, set_car_number) = create_signal(String::new());
    let (review, set_review) = create_signal(String::new());
    let (rating, set_rating) = create_signal(Rating::default());
    let (is_loading, set_loading) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = NewReview::new(
            car_number.get_untracked(),
            review.get_untracked(),
            rating.get_untracked(),
        );
        if let Err(err) = input.validate() {
            log!("[FORM] Skipping submit: {}", err);
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = client::submit_review(&input).await;
            set_loading.set(false);
            match result {
                Ok(saved) => {
                    log!("[FORM] Review {} saved", saved.id);
                    set_car_number.set(String::new());
                    set_review.set(String::new());
                    set_rating.set(Rating::Neutral);
                    set_submitted.set(true);
                    gloo_timers::future::TimeoutFuture::new(SUBMITTED_NOTICE_MS).await;
                    // The form may have been unmounted by a tab switch in the meantime
                    let _ = set_submitted.try_set(false);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="card">
            <form class="review-form" on:submit=handle_submit>
                <input
                    type="text"
                    class="input"
                    placeholder="차량번호를 입력하세요 (예: 12가 3456)"
                    prop:value=car_number
                    on:input=move |e| set_car_number.set(event_target_value(&e))
                />
                <textarea
                    class="input input--tall"
                    placeholder="운전 매너에 대한 리뷰를 작성해주세요"
                    prop:value=review
                    on:input=move |e| set_review.set(event_target_value(&e))
                />
                <div class="rating-picker">
                    {Rating::ALL.into_iter().map(|option| view! {
                        <button
                            type="button"
                            class="button button--outline"
                            data-rating=option.as_str()
                            class:active=move || rating.get() == option
                            on:click=move |_| set_rating.set(option)
                        >
                            {(option != Rating::Neutral).then(|| view! { <RatingIcon rating=option /> })}
                            <span>{ option.label() }</span>
                        </button>
                    }).collect_view()}
                </div>
                <button type="submit" class="button button--wide" disabled=is_loading>
                    {move || if is_loading.get() { "등록 중..." } else { "리뷰 등록하기" }}
                </button>
            </form>

            <Show when=move || submitted.get()>
                <div class="alert">{ "리뷰가 성공적으로 등록되었습니다." }</div>
            </Show>
            {move || error.get().map(|message| view! {
                <div class="alert alert--error">{ message }</div>
            })}
        </div>
    }
}
