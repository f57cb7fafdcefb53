//! "Sign here" line.
//!
//! Clicking the line swaps it for the signed text and fires a confetti burst.
//! The click is stopped from bubbling so the page underneath does not turn.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::SignatureConfig;
use crate::platform;

/// One-shot reveal flag.
#[derive(Clone, Debug, Default)]
pub struct Signature {
    revealed: Rc<Cell<bool>>,
}

impl Signature {
    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Mark the signature revealed. Returns `true` only for the first call.
    pub fn reveal(&self) -> bool {
        !self.revealed.replace(true)
    }
}

/// Attach the signature handler. Returns `None` when the page has no signature line.
pub fn mount(doc: &Document, cfg: &SignatureConfig) -> Result<Option<Signature>, JsValue> {
    let Some(line) = doc.get_element_by_id(&cfg.line_id) else {
        return Ok(None);
    };
    let line: HtmlElement = line.dyn_into()?;
    let signature = Signature::default();

    let state = signature.clone();
    let doc = doc.clone();
    let cfg = cfg.clone();
    let line_el = line.clone();
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        evt.stop_propagation();
        if !state.reveal() {
            return;
        }
        let _ = line_el.style().set_property("display", "none");
        match doc.get_element_by_id(&cfg.signed_text_id) {
            Some(signed) => {
                let _ = signed.class_list().remove_1(&cfg.hidden_class);
            }
            None => platform::warn(&format!("[signature] no #{} element", cfg.signed_text_id)),
        }
        platform::confetti(&cfg.confetti);
    }) as Box<dyn FnMut(_)>);
    line.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(Some(signature))
}
