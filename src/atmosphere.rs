//! Floating emoji background.
//!
//! A repeating timer drops a decorative glyph into the background container at
//! a random horizontal position, size and rise speed. CSS does the animating;
//! each floater removes itself after a fixed lifetime.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::config::AtmosphereConfig;
use crate::platform;
use crate::rng::Rng;

/// Visual parameters of one floater.
#[derive(Clone, Debug, PartialEq)]
pub struct FloaterSpec {
    pub glyph: String,
    /// Horizontal position in viewport widths, `[0, 100)`.
    pub left_vw: f64,
    pub font_rem: f64,
    pub duration_s: f64,
}

impl FloaterSpec {
    pub fn roll(rng: &mut Rng, cfg: &AtmosphereConfig) -> Self {
        let glyph = cfg
            .glyphs
            .get(rng.index(cfg.glyphs.len()))
            .cloned()
            .unwrap_or_default();
        Self {
            glyph,
            left_vw: rng.range(0.0, 100.0),
            font_rem: rng.range(cfg.font_rem.0, cfg.font_rem.1),
            duration_s: rng.range(cfg.duration_s.0, cfg.duration_s.1),
        }
    }
}

/// Start spawning floaters into the configured container.
/// Returns `Ok(false)` when the page has no container.
pub fn start(doc: &Document, cfg: &AtmosphereConfig) -> Result<bool, JsValue> {
    let Some(container) = doc.get_element_by_id(&cfg.container_id) else {
        platform::warn(&format!("[atmosphere] no #{} container, not started", cfg.container_id));
        return Ok(false);
    };
    let doc = doc.clone();
    let cfg = cfg.clone();
    let mut rng = Rng::from_entropy();
    platform::set_interval(cfg.spawn_interval_ms, move || {
        let spec = FloaterSpec::roll(&mut rng, &cfg);
        if let Err(e) = spawn(&doc, &container, &spec, &cfg) {
            platform::warn(&format!("[atmosphere] spawn failed: {:?}", e));
        }
    })?;
    Ok(true)
}

fn spawn(
    doc: &Document,
    container: &Element,
    spec: &FloaterSpec,
    cfg: &AtmosphereConfig,
) -> Result<(), JsValue> {
    let el: HtmlElement = doc.create_element("div")?.dyn_into()?;
    el.class_list().add_1(&cfg.floater_class)?;
    el.set_inner_text(&spec.glyph);
    let style = el.style();
    style.set_property("left", &format!("{}vw", spec.left_vw))?;
    style.set_property("font-size", &format!("{}rem", spec.font_rem))?;
    style.set_property("animation-duration", &format!("{}s", spec.duration_s))?;
    container.append_child(&el)?;
    platform::set_timeout(cfg.lifetime_ms, move || el.remove())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_stays_in_configured_ranges() {
        let cfg = AtmosphereConfig::default();
        let mut rng = Rng::with_seed(2024);
        for _ in 0..2_000 {
            let f = FloaterSpec::roll(&mut rng, &cfg);
            assert!(cfg.glyphs.contains(&f.glyph), "unexpected glyph {}", f.glyph);
            assert!((0.0..100.0).contains(&f.left_vw));
            assert!((1.0..3.0).contains(&f.font_rem));
            assert!((5.0..15.0).contains(&f.duration_s));
        }
    }

    #[test]
    fn test_roll_with_no_glyphs_is_blank() {
        let cfg = AtmosphereConfig {
            glyphs: Vec::new(),
            ..AtmosphereConfig::default()
        };
        let f = FloaterSpec::roll(&mut Rng::with_seed(1), &cfg);
        assert!(f.glyph.is_empty());
    }
}
