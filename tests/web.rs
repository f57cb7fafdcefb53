// Browser tests for the DOM wiring. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use flip_card::{CardConfig, mount};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

// Build an isolated card under its own root so listeners from other tests never see it.
fn fixture(name: &str, with_overlay: bool) -> CardConfig {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_id(name);
    let overlay = if with_overlay {
        format!("<div id='{name}-scare' class='hidden'></div>")
    } else {
        String::new()
    };
    root.set_inner_html(&format!(
        "<div class='page'>
            <span id='{name}-sign'>sign here</span>
            <span id='{name}-signed' class='hidden'>signed</span>
         </div>
         <div class='page'><button id='{name}-btn'>celebrate</button></div>
         <div class='page'></div>
         {overlay}"
    ));
    doc.body().unwrap().append_child(&root).unwrap();

    let mut cfg = CardConfig::default();
    cfg.book.page_selector = format!("#{name} .page");
    cfg.book.settle_ms = 20;
    cfg.signature.line_id = format!("{name}-sign");
    cfg.signature.signed_text_id = format!("{name}-signed");
    cfg.celebration.button_id = format!("{name}-btn");
    cfg.celebration.overlay_id = format!("{name}-scare");
    cfg.celebration.scare_ms = 20;
    cfg.celebration.vibration_ms = vec![1];
    cfg.atmosphere.container_id = format!("{name}-bg");
    cfg
}

fn element(id: &str) -> HtmlElement {
    document().get_element_by_id(id).unwrap().dyn_into().unwrap()
}

fn page_element(name: &str, index: u32) -> HtmlElement {
    document()
        .query_selector_all(&format!("#{name} .page"))
        .unwrap()
        .item(index)
        .unwrap()
        .dyn_into()
        .unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_stacks_pages() {
    let cfg = fixture("mount", false);
    let card = mount(&document(), &cfg).unwrap();
    assert_eq!(card.book.page_count(), 3);
    assert!(!card.atmosphere);
    assert!(card.celebration);
    for i in 0..3u32 {
        let z = page_element("mount", i).style().get_property_value("z-index").unwrap();
        assert_eq!(z, (3 - i).to_string());
    }
}

#[wasm_bindgen_test]
async fn click_opens_then_close_settles_later() {
    let cfg = fixture("flip", false);
    let card = mount(&document(), &cfg).unwrap();
    let el = page_element("flip", 0);

    el.click();
    assert!(el.class_list().contains("flipped"));
    assert_eq!(card.book.page(0).unwrap().layer(), 1);

    el.click();
    assert!(!el.class_list().contains("flipped"));
    assert_eq!(card.book.page(0).unwrap().layer(), 1);

    sleep(60).await;
    assert_eq!(card.book.page(0).unwrap().layer(), 3);
    assert_eq!(el.style().get_property_value("z-index").unwrap(), "3");
}

#[wasm_bindgen_test]
async fn reopen_within_settle_window_keeps_open_layer() {
    let cfg = fixture("reopen", false);
    let card = mount(&document(), &cfg).unwrap();
    let el = page_element("reopen", 1);
    el.click();
    el.click();
    el.click();
    sleep(60).await;
    let page = card.book.page(1).unwrap();
    assert!(page.is_open());
    assert_eq!(page.layer(), 2);
}

#[wasm_bindgen_test]
fn signature_reveals_once_without_turning_page() {
    let cfg = fixture("sig", false);
    let card = mount(&document(), &cfg).unwrap();
    let sign = element("sig-sign");

    sign.click();
    sign.click();

    let signature = card.signature.expect("signature line present");
    assert!(signature.is_revealed());
    assert_eq!(sign.style().get_property_value("display").unwrap(), "none");
    assert!(!element("sig-signed").class_list().contains("hidden"));
    assert!(!card.book.page(0).unwrap().is_open());
}

#[wasm_bindgen_test]
fn celebrate_without_overlay_is_harmless() {
    let cfg = fixture("noscare", false);
    let card = mount(&document(), &cfg).unwrap();
    let btn = element("noscare-btn");
    btn.click();
    assert!(!card.book.page(1).unwrap().is_open());
    assert_eq!(btn.inner_text(), "celebrate");
}

#[wasm_bindgen_test]
async fn celebrate_shows_overlay_then_relabels_button() {
    let cfg = fixture("scare", true);
    let card = mount(&document(), &cfg).unwrap();
    let btn = element("scare-btn");
    let overlay = element("scare-scare");

    btn.click();
    assert!(!overlay.class_list().contains("hidden"));
    assert!(!card.book.page(1).unwrap().is_open());

    sleep(80).await;
    assert!(overlay.class_list().contains("hidden"));
    assert_eq!(btn.inner_text(), cfg.celebration.gotcha_label);
}

#[wasm_bindgen_test]
async fn atmosphere_spawns_floaters_that_expire() {
    let mut cfg = fixture("sky", false);
    let doc = document();
    let bg = doc.create_element("div").unwrap();
    bg.set_id("sky-bg");
    doc.get_element_by_id("sky").unwrap().append_child(&bg).unwrap();
    cfg.atmosphere.glyphs = vec!["🎈".into()];
    cfg.atmosphere.spawn_interval_ms = 10;
    cfg.atmosphere.lifetime_ms = 30;

    let card = mount(&doc, &cfg).unwrap();
    assert!(card.atmosphere);

    sleep(45).await;
    let floaters = doc.query_selector_all("#sky-bg .floater").unwrap();
    assert!(floaters.length() >= 1);
    let first: HtmlElement = floaters.item(0).unwrap().dyn_into().unwrap();
    assert_eq!(first.tag_name(), "DIV");
    assert_eq!(first.text_content().unwrap(), "🎈");
    let style = first.style();
    assert!(style.get_property_value("left").unwrap().ends_with("vw"));
    assert!(style.get_property_value("font-size").unwrap().ends_with("rem"));
    assert!(style.get_property_value("animation-duration").unwrap().ends_with('s'));

    sleep(120).await;
    assert!(first.parent_node().is_none(), "floater outlived its lifetime");
    // Spawning keeps going after the early floaters are gone.
    assert!(doc.query_selector_all("#sky-bg .floater").unwrap().length() >= 1);
}
