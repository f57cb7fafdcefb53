//! Celebrate button and its jump-scare.
//!
//! The sequence is a fixed timeline of [`Cue`]s. [`timeline`] decides which cues
//! run and when; [`mount`] plays them against the DOM. Every platform call in
//! the sequence is best effort.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::CelebrationConfig;
use crate::platform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    PlayAudio,
    Vibrate,
    ShowOverlay,
    RequestFullscreen,
    HideOverlay,
    ExitFullscreen,
    RelabelButton,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeline {
    pub immediate: Vec<Cue>,
    /// Cues to run after the given delay (ms), if any.
    pub after: Option<(u32, Vec<Cue>)>,
}

/// Build the scare sequence. Without an overlay there is nothing to show or
/// hide, so only sound and vibration remain.
pub fn timeline(overlay_present: bool, scare_ms: u32) -> Timeline {
    let mut immediate = vec![Cue::PlayAudio, Cue::Vibrate];
    if !overlay_present {
        return Timeline { immediate, after: None };
    }
    immediate.extend([Cue::ShowOverlay, Cue::RequestFullscreen]);
    Timeline {
        immediate,
        after: Some((
            scare_ms,
            vec![Cue::HideOverlay, Cue::ExitFullscreen, Cue::RelabelButton],
        )),
    }
}

/// Attach the celebrate handler. Returns `false` when the page has no button.
pub fn mount(doc: &Document, cfg: &CelebrationConfig) -> Result<bool, JsValue> {
    let Some(button) = doc.get_element_by_id(&cfg.button_id) else {
        return Ok(false);
    };
    let doc = doc.clone();
    let cfg = cfg.clone();
    let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        evt.stop_propagation();
        evt.prevent_default();
        celebrate(&doc, &cfg);
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(true)
}

fn celebrate(doc: &Document, cfg: &CelebrationConfig) {
    let overlay = doc.get_element_by_id(&cfg.overlay_id);
    let plan = timeline(overlay.is_some(), cfg.scare_ms);
    for cue in &plan.immediate {
        run_cue(*cue, doc, cfg);
    }
    if let Some((delay, cues)) = plan.after {
        let doc = doc.clone();
        let cfg = cfg.clone();
        let scheduled = platform::set_timeout(delay, move || {
            for cue in cues {
                run_cue(cue, &doc, &cfg);
            }
        });
        if let Err(e) = scheduled {
            platform::warn(&format!("[celebration] end of scare not scheduled: {:?}", e));
        }
    }
}

fn run_cue(cue: Cue, doc: &Document, cfg: &CelebrationConfig) {
    match cue {
        Cue::PlayAudio => platform::play_audio(&cfg.audio_url),
        Cue::Vibrate => platform::vibrate(&cfg.vibration_ms),
        Cue::ShowOverlay => {
            if let Some(overlay) = doc.get_element_by_id(&cfg.overlay_id) {
                let _ = overlay.class_list().remove_1(&cfg.hidden_class);
            }
        }
        Cue::RequestFullscreen => {
            platform::request_fullscreen(doc);
        }
        Cue::HideOverlay => {
            if let Some(overlay) = doc.get_element_by_id(&cfg.overlay_id) {
                let _ = overlay.class_list().add_1(&cfg.hidden_class);
            }
        }
        Cue::ExitFullscreen => {
            platform::exit_fullscreen(doc);
        }
        Cue::RelabelButton => {
            // Looked up again: the host may have replaced the button meanwhile.
            let button = doc
                .get_element_by_id(&cfg.button_id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(button) = button {
                button.set_inner_text(&cfg.gotcha_label);
                let _ = button
                    .style()
                    .set_property("background", &cfg.gotcha_background);
            }
        }
    }
}
