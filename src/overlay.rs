use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Transient banner telling the visitor what the ambient audio needs.
#[derive(Clone)]
pub struct NoticeBanner {
    el: web::HtmlElement,
}

impl NoticeBanner {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let el = dom::create_element(document, "div", NOTICE_CLASS)?;
        el.set_text_content(Some(NOTICE_INITIAL_TEXT));
        append_to_body(document, &el)?;
        Ok(Self { el })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.el
    }

    pub fn show(&self, message: &str) {
        self.el.set_text_content(Some(message));
        // clickable while it is up
        dom::set_style(&self.el, "cursor", "pointer");
        _ = self.el.class_list().add_1(NOTICE_VISIBLE_CLASS);
    }

    pub fn hide(&self) {
        _ = self.el.class_list().remove_1(NOTICE_VISIBLE_CLASS);
        dom::set_style(&self.el, "cursor", "");
    }
}

/// Speaker icon toggling the ambient track.
#[derive(Clone)]
pub struct MuteControl {
    el: web::HtmlElement,
}

impl MuteControl {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let el = dom::create_element(document, "div", AUDIO_CONTROL_CLASS)?;
        el.set_inner_html(ICON_UNMUTED);
        append_to_body(document, &el)?;
        Ok(Self { el })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.el
    }

    pub fn set_muted(&self, muted: bool) {
        self.el
            .set_inner_html(if muted { ICON_MUTED } else { ICON_UNMUTED });
    }
}

pub fn append_to_body(document: &web::Document, el: &web::HtmlElement) -> anyhow::Result<()> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.append_child(el)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(())
}
