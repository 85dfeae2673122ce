// Browser tests: wasm-pack test --headless --firefox -- --no-default-features --features wasm-test
#![cfg(target_arch = "wasm32")]

use carnum::app::HomePage;
use carnum::components::review_form::ReviewForm;
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

// Helper function to create a fresh container for each test
fn create_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<web_sys::HtmlElement>()
}

fn find(container: &web_sys::HtmlElement, selector: &str) -> Option<web_sys::Element> {
    container.query_selector(selector).unwrap()
}

fn click(container: &web_sys::HtmlElement, selector: &str) {
    find(container, selector)
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .unchecked_into::<web_sys::HtmlElement>()
        .click();
}

fn tab(container: &web_sys::HtmlElement, index: u32) -> web_sys::HtmlElement {
    container
        .query_selector_all(".tabs__trigger")
        .unwrap()
        .item(index)
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
}

fn type_into(element: web_sys::Element, value: &str) {
    if let Some(input) = element.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
    }
    let event = web_sys::Event::new("input").unwrap();
    element.dispatch_event(&event).unwrap();
}

// The search button stays disabled while the recent list is loading
async fn wait_for_search_button(container: &web_sys::HtmlElement) {
    for _ in 0..30 {
        let button = find(container, ".search-form button[type=submit]").unwrap();
        if !button.has_attribute("disabled") {
            return;
        }
        sleep(Duration::from_millis(100)).await;
    }
    panic!("search button never became enabled");
}

fn is_active(container: &web_sys::HtmlElement, selector: &str) -> bool {
    find(container, selector)
        .unwrap()
        .class_list()
        .contains("active")
}

#[wasm_bindgen_test]
async fn test_submit_tab_is_default() {
    let container = create_container("default-tab");
    mount_to(container.clone(), || view! { <HomePage /> });
    sleep(Duration::from_millis(50)).await;

    assert!(find(&container, ".review-form").is_some());
    assert!(find(&container, ".search-form").is_none());
    assert!(tab(&container, 0).class_list().contains("active"));
    assert!(!tab(&container, 1).class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn test_switching_to_search_resets_panel() {
    let container = create_container("search-reset");
    mount_to(container.clone(), || view! { <HomePage /> });

    tab(&container, 1).click();
    sleep(Duration::from_millis(50)).await;

    assert!(find(&container, ".review-form").is_none());
    let heading = find(&container, ".section-title").expect("recent heading");
    assert_eq!(heading.text_content().unwrap(), "최근 등록된 리뷰");

    // Search for something, then leave and come back
    type_into(find(&container, ".search-form input").unwrap(), "12가");
    wait_for_search_button(&container).await;
    click(&container, ".search-form button[type=submit]");
    sleep(Duration::from_millis(50)).await;
    assert!(find(&container, ".section-title").is_none());

    tab(&container, 0).click();
    sleep(Duration::from_millis(50)).await;
    tab(&container, 1).click();
    sleep(Duration::from_millis(50)).await;

    let input = find(&container, ".search-form input")
        .unwrap()
        .unchecked_into::<web_sys::HtmlInputElement>();
    assert_eq!(input.value(), "");
    assert!(find(&container, ".section-title").is_some());
    assert!(find(&container, ".empty").is_none());
}

#[wasm_bindgen_test]
async fn test_empty_search_shows_no_results() {
    let container = create_container("empty-search");
    mount_to(container.clone(), || view! { <HomePage /> });
    tab(&container, 1).click();
    sleep(Duration::from_millis(50)).await;

    type_into(find(&container, ".search-form input").unwrap(), "없는번호");
    wait_for_search_button(&container).await;
    click(&container, ".search-form button[type=submit]");

    // No backend in the test runner, so the search yields nothing either way
    let mut message = None;
    for _ in 0..20 {
        message = find(&container, ".empty");
        if message.is_some() {
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(
        message.expect("empty-state line").text_content().unwrap(),
        "검색 결과가 없습니다."
    );
}

#[wasm_bindgen_test]
async fn test_rating_buttons_toggle_active() {
    let container = create_container("rating-toggle");
    mount_to(container.clone(), || view! { <ReviewForm /> });
    sleep(Duration::from_millis(50)).await;

    assert!(is_active(&container, "button[data-rating=neutral]"));
    assert!(!is_active(&container, "button[data-rating=good]"));

    click(&container, "button[data-rating=bad]");
    sleep(Duration::from_millis(50)).await;
    assert!(is_active(&container, "button[data-rating=bad]"));
    assert!(!is_active(&container, "button[data-rating=neutral]"));

    // Only good and bad carry an icon
    assert!(find(&container, "button[data-rating=neutral] .rating").is_none());
    assert!(find(&container, "button[data-rating=good] .rating").is_some());
}

#[wasm_bindgen_test]
async fn test_rating_resets_to_neutral_on_return() {
    let container = create_container("rating-reset");
    mount_to(container.clone(), || view! { <HomePage /> });

    click(&container, "button[data-rating=good]");
    sleep(Duration::from_millis(50)).await;
    assert!(is_active(&container, "button[data-rating=good]"));

    tab(&container, 1).click();
    sleep(Duration::from_millis(50)).await;
    tab(&container, 0).click();
    sleep(Duration::from_millis(50)).await;

    assert!(is_active(&container, "button[data-rating=neutral]"));
    assert!(!is_active(&container, "button[data-rating=good]"));
}

#[wasm_bindgen_test]
async fn test_submit_button_disabled_while_loading() {
    let container = create_container("submit-loading");
    mount_to(container.clone(), || view! { <ReviewForm /> });
    sleep(Duration::from_millis(50)).await;

    // Blank form: nothing is sent
    click(&container, ".review-form button[type=submit]");
    let submit = find(&container, ".review-form button[type=submit]").unwrap();
    assert!(!submit.has_attribute("disabled"));

    type_into(find(&container, ".review-form input").unwrap(), "12가 3456");
    type_into(find(&container, ".review-form textarea").unwrap(), "차선 변경 전에 깜빡이를 켰어요");
    click(&container, ".review-form button[type=submit]");

    assert!(submit.has_attribute("disabled"));
    assert_eq!(submit.text_content().unwrap(), "등록 중...");

    // The request cannot succeed here; the button comes back once it fails
    for _ in 0..30 {
        if !submit.has_attribute("disabled") {
            break;
        }
        sleep(Duration::from_millis(100)).await;
    }
    assert!(!submit.has_attribute("disabled"));
    assert_eq!(submit.text_content().unwrap(), "리뷰 등록하기");
    assert!(find(&container, ".alert--error").is_some());
}
