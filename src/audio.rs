use portfolio_core::{SpectrumSource, VisualizerError, VisualizerParams};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Analyser tapped off the ambient `<audio>` element.
pub struct WebAnalyser {
    // keeps the graph alive
    _ctx: web::AudioContext,
    node: web::AnalyserNode,
}

impl SpectrumSource for WebAnalyser {
    #[inline]
    fn bin_count(&self) -> usize {
        self.node.frequency_bin_count() as usize
    }

    #[inline]
    fn read_bytes(&self, out: &mut [u8]) {
        self.node.get_byte_frequency_data(out);
    }
}

fn unavailable(what: &str, e: JsValue) -> VisualizerError {
    VisualizerError::AnalysisUnavailable(format!("{}: {:?}", what, e))
}

/// Route the media element through an analyser to the speakers.
///
/// Once an element is captured by a media source node its sound only reaches
/// the output through this graph, so the analyser is also connected to the
/// destination.
pub fn create_analyser(
    audio: &web::HtmlAudioElement,
    params: &VisualizerParams,
) -> Result<WebAnalyser, VisualizerError> {
    let ctx = web::AudioContext::new().map_err(|e| unavailable("AudioContext", e))?;
    _ = ctx.resume();
    let node = web::AnalyserNode::new(&ctx).map_err(|e| unavailable("AnalyserNode", e))?;
    node.set_fft_size(params.fft_size);
    node.set_smoothing_time_constant(params.smoothing);
    let source = ctx
        .create_media_element_source(audio)
        .map_err(|e| unavailable("MediaElementSource", e))?;
    source
        .connect_with_audio_node(&node)
        .map_err(|e| unavailable("connect source", e))?;
    node.connect_with_audio_node(&ctx.destination())
        .map_err(|e| unavailable("connect destination", e))?;
    Ok(WebAnalyser { _ctx: ctx, node })
}

pub fn create_ambient_audio(params: &VisualizerParams) -> anyhow::Result<web::HtmlAudioElement> {
    let audio = web::HtmlAudioElement::new_with_src(&params.audio_src)
        .map_err(|e| anyhow::anyhow!("Audio element error: {:?}", e))?;
    audio.set_loop(true);
    audio.set_volume(params.volume);
    audio.set_autoplay(true);
    audio.set_preload("auto");
    Ok(audio)
}

/// Call `play()` and wait for the browser's verdict.
pub async fn play(media: &web::HtmlMediaElement) -> Result<(), JsValue> {
    let promise: js_sys::Promise = media.play()?;
    JsFuture::from(promise).await.map(|_| ())
}
