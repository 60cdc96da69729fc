use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::sounds::UiSoundPlayer;
use portfolio_core::page::{
    scatter_particles, BackgroundBlend, QuoteCycler, PARTICLE_COUNT, QUOTE_SWAP_DELAY_MS,
    REVEAL_SEQUENCE,
};
use portfolio_core::SoundKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Staggered fade-in of the main page sections.
pub fn schedule_reveals(document: &web::Document) {
    for &(selector, delay_ms) in REVEAL_SEQUENCE {
        let Some(el) = dom::query(document, selector) else {
            log::warn!("[page] reveal target {} missing", selector);
            continue;
        };
        dom::set_timeout(delay_ms, move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        });
    }
}

pub fn wire_contact_links(document: &web::Document, sounds: &Rc<RefCell<UiSoundPlayer>>) {
    for link in dom::query_all(document, CONTACT_LINK) {
        let s = sounds.clone();
        dom::add_listener(link.as_ref(), "click", move || {
            s.borrow_mut().play(SoundKind::Click);
        });
        let s = sounds.clone();
        dom::add_listener(link.as_ref(), "mouseenter", move || {
            s.borrow_mut().play(SoundKind::Hover);
        });
    }
}

/// Clicking the bio quote fades it out and swaps in the next one.
pub fn wire_quote(document: &web::Document, sounds: &Rc<RefCell<UiSoundPlayer>>) {
    let Some(quote) = dom::query(document, BIO_QUOTE) else {
        return;
    };
    dom::set_style(&quote, "cursor", "pointer");
    _ = quote.set_attribute("title", QUOTE_HINT);

    let s = sounds.clone();
    dom::add_listener(quote.as_ref(), "mouseenter", move || {
        s.borrow_mut().play(SoundKind::Hover);
    });

    let cycler = Rc::new(RefCell::new(QuoteCycler::new()));
    let s = sounds.clone();
    let el = quote.clone();
    dom::add_listener(quote.as_ref(), "click", move || {
        s.borrow_mut().play(SoundKind::Click);
        let next = cycler.borrow_mut().advance();
        dom::set_style(&el, "opacity", "0");
        dom::set_style(&el, "transform", "translateY(-10px)");
        let el = el.clone();
        dom::set_timeout(QUOTE_SWAP_DELAY_MS, move || {
            el.set_text_content(Some(next));
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        });
    });
}

fn apply_background_blend(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let blend = BackgroundBlend::at(scroll_y, viewport_h);
    if let Some(body) = document.body() {
        _ = body
            .style()
            .set_property(SECOND_BG_VAR, &blend.second.to_string());
        _ = body
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, blend.scrolled);
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root
            .style()
            .set_property(FIRST_BG_VAR, &blend.first.to_string());
    }
}

pub fn wire_background_crossfade(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    dom::add_listener(window.as_ref(), "scroll", move || apply_background_blend(&doc));
}

pub fn create_particles(document: &web::Document) -> anyhow::Result<()> {
    let container = dom::create_element(document, "div", PARTICLES_CONTAINER_CLASS)?;
    overlay::append_to_body(document, &container)?;
    let mut rng = StdRng::from_entropy();
    for p in scatter_particles(&mut rng, PARTICLE_COUNT) {
        let el = dom::create_element(document, "div", PARTICLE_CLASS)?;
        dom::set_style(&el, "width", &format!("{}px", p.size_px));
        dom::set_style(&el, "height", &format!("{}px", p.size_px));
        dom::set_style(&el, "left", &format!("{}vw", p.left_vw));
        dom::set_style(&el, "top", &format!("{}vh", p.top_vh));
        dom::set_style(&el, "animation-duration", &format!("{}s", p.duration_s));
        dom::set_style(&el, "animation-delay", &format!("{}s", p.delay_s));
        dom::set_style(&el, "opacity", &p.opacity.to_string());
        container
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(())
}
