use crate::constants::VISUALIZER_CLASS;
use portfolio_core::{CircleStroke, RippleSurface, VisualizerError, VisualizerParams};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas backend for the ripple engine.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl RippleSurface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn stroke_circle(&mut self, circle: &CircleStroke) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(
            circle.center.x as f64,
            circle.center.y as f64,
            circle.radius.max(0.0) as f64,
            0.0,
            TAU,
        );
        ctx.set_stroke_style_str(&circle.color.to_string());
        ctx.set_line_width(circle.line_width as f64);
        ctx.set_shadow_blur(circle.glow_blur as f64);
        ctx.set_shadow_color(&circle.glow_color.to_string());
        ctx.stroke();
    }
}

pub fn create_canvas(
    document: &web::Document,
    params: &VisualizerParams,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_class_name(VISUALIZER_CLASS);
    canvas.set_width(params.canvas_size_px);
    canvas.set_height(params.canvas_size_px);
    Ok(canvas)
}

/// Insert the canvas as the first child of the profile container.
pub fn attach_canvas(
    container: Option<&web::HtmlElement>,
    canvas: &web::HtmlCanvasElement,
) -> Result<(), VisualizerError> {
    let container = container.ok_or_else(|| {
        VisualizerError::MissingAttachPoint(crate::constants::PROFILE_CONTAINER.to_string())
    })?;
    container
        .insert_before(canvas, container.first_child().as_ref())
        .map_err(|e| VisualizerError::MissingAttachPoint(format!("{:?}", e)))?;
    log::info!("[visualizer] canvas attached");
    Ok(())
}
