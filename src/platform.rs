//! Best-effort browser capabilities.
//!
//! Everything here may be missing or may reject (autoplay policy, no vibration
//! motor, fullscreen denied, confetti script not loaded). Failures are written to
//! the console and otherwise ignored; none of them are retried.

use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlAudioElement, Window, window};

use crate::config::ConfettiBurst;

#[wasm_bindgen]
extern "C" {
    // canvas-confetti exposes a global `confetti(options)`.
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;

    // The web-sys bindings drop the promises these return, so rejections would
    // surface as unhandled.
    #[wasm_bindgen(extends = Element)]
    type FullscreenElement;

    #[wasm_bindgen(catch, method, js_name = requestFullscreen)]
    fn request_fullscreen_promise(this: &FullscreenElement) -> Result<Promise, JsValue>;

    #[wasm_bindgen(extends = Document)]
    type FullscreenDocument;

    #[wasm_bindgen(catch, method, js_name = exitFullscreen)]
    fn exit_fullscreen_promise(this: &FullscreenDocument) -> Result<Promise, JsValue>;
}

pub(crate) fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub(crate) fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

pub(crate) fn window_document() -> Result<(Window, Document), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    Ok((win, doc))
}

pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Browser timers take a signed millisecond count; saturate instead of wrapping.
pub(crate) fn timer_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Run `f` once after `delay_ms`. The closure is handed to JS and freed after it fires.
pub(crate) fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let (win, _) = window_document()?;
    let cb = Closure::once_into_js(f);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timer_ms(delay_ms))
}

/// Run `f` every `period_ms` for the lifetime of the page.
pub(crate) fn set_interval(period_ms: u32, f: impl FnMut() + 'static) -> Result<i32, JsValue> {
    let (win, _) = window_document()?;
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        timer_ms(period_ms),
    )?;
    cb.forget();
    Ok(id)
}

/// Start playback of `url`; a rejected play() promise is logged.
pub(crate) fn play_audio(url: &str) {
    let audio = match HtmlAudioElement::new_with_src(url) {
        Ok(a) => a,
        Err(e) => {
            warn(&format!("[audio] cannot create element: {:?}", e));
            return;
        }
    };
    match audio.play() {
        Ok(promise) => {
            swallow(&promise, "[audio] play failed");
        }
        Err(e) => log(&format!("[audio] play failed: {:?}", e)),
    }
}

/// Log a rejection of `promise` instead of leaving it unhandled. The returned
/// promise always fulfils.
pub(crate) fn swallow(promise: &Promise, context: &'static str) -> Promise {
    let on_reject = Closure::wrap(Box::new(move |e: JsValue| {
        log(&format!("{}: {:?}", context, e));
    }) as Box<dyn FnMut(JsValue)>);
    let handled = promise.catch(&on_reject);
    on_reject.forget();
    handled
}

/// Vibrate with a millisecond on/off pattern when the device supports it.
pub(crate) fn vibrate(pattern_ms: &[u32]) {
    let Some(nav) = window().map(|w| w.navigator()) else {
        return;
    };
    let supported = Reflect::has(&nav, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        log("[vibrate] not supported, skipped");
        return;
    }
    let pattern: Array = pattern_ms.iter().map(|&ms| JsValue::from(ms)).collect();
    let _ = nav.vibrate_with_pattern(&pattern);
}

/// Ask for fullscreen on the document element. Returns the handled request,
/// `None` when there is nothing to request on or the API is missing.
pub(crate) fn request_fullscreen(doc: &Document) -> Option<Promise> {
    let root = doc.document_element()?;
    match root.unchecked_ref::<FullscreenElement>().request_fullscreen_promise() {
        Ok(promise) => Some(swallow(&promise, "[fullscreen] request failed")),
        Err(e) => {
            log(&format!("[fullscreen] request failed: {:?}", e));
            None
        }
    }
}

/// Leave fullscreen if something is currently fullscreen.
pub(crate) fn exit_fullscreen(doc: &Document) -> Option<Promise> {
    doc.fullscreen_element()?;
    match doc.unchecked_ref::<FullscreenDocument>().exit_fullscreen_promise() {
        Ok(promise) => Some(swallow(&promise, "[fullscreen] exit failed")),
        Err(e) => {
            log(&format!("[fullscreen] exit failed: {:?}", e));
            None
        }
    }
}

/// Fire a confetti burst through the page's confetti library.
pub(crate) fn confetti(burst: &ConfettiBurst) {
    let options = confetti_options(burst);
    if let Err(e) = confetti_js(&options) {
        warn(&format!("[confetti] unavailable: {:?}", e));
    }
}

fn confetti_options(burst: &ConfettiBurst) -> JsValue {
    let opts = Object::new();
    let _ = Reflect::set(&opts, &"particleCount".into(), &JsValue::from(burst.particle_count));
    let _ = Reflect::set(&opts, &"spread".into(), &JsValue::from(burst.spread));
    if burst.origin_x.is_some() || burst.origin_y.is_some() {
        let origin = Object::new();
        if let Some(x) = burst.origin_x {
            let _ = Reflect::set(&origin, &"x".into(), &JsValue::from(x));
        }
        if let Some(y) = burst.origin_y {
            let _ = Reflect::set(&origin, &"y".into(), &JsValue::from(y));
        }
        let _ = Reflect::set(&opts, &"origin".into(), &origin);
    }
    opts.into()
}


// Browser-only: needs real promises and a document.
#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn swallowed_rejection_fulfils() {
        let rejected = Promise::reject(&JsValue::from_str("denied"));
        let handled = swallow(&rejected, "[test] rejected");
        assert!(JsFuture::from(handled).await.is_ok());
    }

    #[wasm_bindgen_test]
    async fn denied_fullscreen_request_does_not_reject() {
        let (_, doc) = window_document().unwrap();
        // No user gesture during a test run, so the browser refuses the request.
        if let Some(handled) = request_fullscreen(&doc) {
            assert!(JsFuture::from(handled).await.is_ok());
        }
        if let Some(handled) = exit_fullscreen(&doc) {
            assert!(JsFuture::from(handled).await.is_ok());
        }
    }
}
