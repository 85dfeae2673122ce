/// Main application entry point for Carnum.
/// A header and two tabs: submit a review, or search reviews by plate number.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{review_form::ReviewForm, search_panel::SearchPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Review,
    Search,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Review => "리뷰 등록",
            Tab::Search => "리뷰 검색",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="ko" />
        <Stylesheet id="leptos" href="/pkg/carnum.css" />
        <Title text="Carnum - 운전 매너 리뷰" />
        <Meta name="description" content="차량번호로 운전 매너를 리뷰하는 서비스" />

        <Router>
            <Routes>
                <Route path="" view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(Tab::Review);

    view! {
        <div class="page">
            <header class="site-header">
                <div class="container site-header__inner">
                    <div class="brand">
                        <span class="brand__icon">{ "🚗" }</span>
                        <h1>{ "Carnum.kr" }</h1>
                    </div>
                    <p class="tagline">{ "번호판 리뷰하기" }</p>
                </div>
            </header>

            <main class="container">
                <div class="tabs" role="tablist">
                    {[Tab::Review, Tab::Search].into_iter().map(|tab| view! {
                        <button
                            type="button"
                            role="tab"
                            class="tabs__trigger"
                            class:active=move || active_tab.get() == tab
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            { tab.label() }
                        </button>
                    }).collect_view()}
                </div>

                // Switching tabs remounts the panel, which resets its state.
                {move || match active_tab.get() {
                    Tab::Review => view! { <ReviewForm /> }.into_view(),
                    Tab::Search => view! { <SearchPanel /> }.into_view(),
                }}
            </main>
        </div>
    }
}
