use crate::constants::*;
use crate::dom;
use crate::sounds::UiSoundPlayer;
use portfolio_core::page::CardDeck;
use portfolio_core::SoundKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Card {
    el: web::HtmlElement,
    details: web::HtmlElement,
}

fn apply(card: &Card, expanded: bool) {
    dom::set_style(&card.details, "display", if expanded { "block" } else { "none" });
    _ = card
        .el
        .class_list()
        .toggle_with_force(EXPANDED_CLASS, expanded);
}

/// True when the click landed on a link inside the card.
fn clicked_link(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

/// Append a collapsed details block to every project card and wire
/// hover/expand behavior; opening one card closes the others.
pub fn wire_project_cards(
    document: &web::Document,
    sounds: &Rc<RefCell<UiSoundPlayer>>,
) -> anyhow::Result<()> {
    let mut cards = Vec::new();
    for el in dom::query_all(document, PROJECT_CARD) {
        let details = dom::create_element(document, "div", PROJECT_DETAILS_CLASS)?;
        details.set_inner_html(PROJECT_DETAILS_HTML);
        dom::set_style(&details, "display", "none");
        el.append_child(&details)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        cards.push(Card { el, details });
    }
    log::info!("[cards] {} project cards", cards.len());

    let cards = Rc::new(cards);
    let deck = Rc::new(RefCell::new(CardDeck::new()));
    for (index, card) in cards.iter().enumerate() {
        let s = sounds.clone();
        dom::add_listener(card.el.as_ref(), "mouseenter", move || {
            s.borrow_mut().play(SoundKind::Hover);
        });

        let s = sounds.clone();
        let deck = deck.clone();
        let all = cards.clone();
        dom::add_event_listener(card.el.as_ref(), "click", move |ev| {
            if clicked_link(&ev) {
                return;
            }
            s.borrow_mut().play(SoundKind::Expand);
            let changes = deck.borrow_mut().toggle(index);
            for (i, expanded) in changes {
                if let Some(c) = all.get(i) {
                    apply(c, expanded);
                }
            }
        });
    }
    Ok(())
}
