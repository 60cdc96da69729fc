pub mod cards;
pub mod page;

use crate::sounds::UiSoundPlayer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire everything on the page that is not the visualizer.
pub fn init_page(
    document: &web::Document,
    sounds: &Rc<RefCell<UiSoundPlayer>>,
) -> anyhow::Result<()> {
    page::wire_contact_links(document, sounds);
    cards::wire_project_cards(document, sounds)?;
    page::wire_background_crossfade(document);
    page::schedule_reveals(document);
    page::wire_quote(document, sounds);
    page::create_particles(document)?;
    Ok(())
}
