//! Flip Card core crate.
//!
//! An interactive greeting card for the browser: a book of pages that turn on
//! click, floating emoji in the background, a signature line that throws
//! confetti and a "celebrate" button with a surprise. `start_card()` wires
//! everything to the host page; the pure pieces (book state, floater rolls,
//! scare timeline) are usable and testable without a browser.

use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod atmosphere;
pub mod book;
pub mod celebration;
pub mod config;
mod platform;
pub mod rng;
pub mod signature;

pub use book::dom::BookView;
pub use book::{Book, Page, PendingSettle};
pub use config::CardConfig;
pub use signature::Signature;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Everything mounted on the page.
pub struct Card {
    pub book: BookView,
    pub signature: Option<Signature>,
    /// Wired because the celebrate button exists.
    pub celebration: bool,
    /// Wired because the background container exists.
    pub atmosphere: bool,
}

/// Mount every component on `doc`. Components whose elements are missing are
/// skipped; only DOM failures while wiring are errors.
pub fn mount(doc: &Document, cfg: &CardConfig) -> Result<Card, JsValue> {
    let book = BookView::mount(doc, &cfg.book)?;
    let signature = signature::mount(doc, &cfg.signature)?;
    let celebration = celebration::mount(doc, &cfg.celebration)?;
    let atmosphere = atmosphere::start(doc, &cfg.atmosphere)?;
    Ok(Card {
        book,
        signature,
        celebration,
        atmosphere,
    })
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_card() -> Result<(), JsValue> {
    let (_, doc) = platform::window_document()?;
    let cfg = embedded_config(&doc);
    mount(&doc, &cfg)?;
    Ok(())
}

/// Start with an explicit (possibly partial) JSON configuration.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_card_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = CardConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (_, doc) = platform::window_document()?;
    mount(&doc, &cfg)?;
    Ok(())
}

/// Read `<script type="application/json" id="card-config">` if present.
#[cfg(feature = "serde_json")]
fn embedded_config(doc: &Document) -> CardConfig {
    let Some(text) = doc
        .get_element_by_id("card-config")
        .and_then(|el| el.text_content())
    else {
        return CardConfig::default();
    };
    CardConfig::from_json(&text).unwrap_or_else(|e| {
        platform::warn(&format!("[config] ignoring #card-config: {}", e));
        CardConfig::default()
    })
}

#[cfg(not(feature = "serde_json"))]
fn embedded_config(_doc: &Document) -> CardConfig {
    CardConfig::default()
}
