//! Headless demo of the Ducky core: error popups, events and growable arrays

mod popup;

use ducky_core::foundation::{logging, text};
use ducky_core::prelude::*;
use ducky_core::throw_error;

const DEFAULT_CONFIG: &str = "ducky_app/config/ducky.toml";

const FRAGMENT_SHADER: &str = "#version 330 core
#define MAX_POINT_LIGHTS 8
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0);
}
";

#[derive(Debug, Clone, Copy, PartialEq)]
struct Vertex {
    position: [f32; 3],
    uv: [f32; 2],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = CoreConfig::load_or_default(&config_path)?;

    logging::init_with_filter(&config.log_filter);
    log::info!("Starting Ducky core demo");

    let core = CoreContext::init(config)?;
    popup::install(&core);

    let Some(quad) = build_quad(&core) else {
        core.shutdown();
        return Err("failed to build quad".into());
    };
    log::info!("Quad uses {} vertices ({} bytes each)", quad.len(), quad.element_size());
    for vertex in &quad {
        log::debug!("  position {:?} uv {:?}", vertex.position, vertex.uv);
    }

    // Out of range on purpose: shows up as a popup, then the demo carries on
    if core.errors().ok_or_report(quad.get(quad.len())).is_none() {
        log::info!("Vertex lookup failed as expected: {}", core.current_error().kind);
    }

    match patch_shader(&core, FRAGMENT_SHADER, 16) {
        Some(source) => log::info!("Patched shader:\n{source}"),
        None => log::warn!("Shader was left unpatched"),
    }

    let frames = std::rc::Rc::new(std::cell::Cell::new(0u32));
    core.add_event("on_frame");
    let counter = std::rc::Rc::clone(&frames);
    core.add_listener("on_frame", move || counter.set(counter.get() + 1));
    for _ in 0..3 {
        core.invoke("on_frame");
    }
    log::info!("on_frame fired {} times", frames.get());

    // Registering the error event again is rejected with a warning popup
    core.add_event(ON_THROW_ERROR);

    core.shutdown();
    log::info!("Demo finished");
    Ok(())
}

fn build_quad(core: &CoreContext) -> Option<DynArray<Vertex>> {
    let corners = [
        ([-0.5, -0.5, 0.0], [0.0, 0.0]),
        ([0.5, -0.5, 0.0], [1.0, 0.0]),
        ([0.5, 0.5, 0.0], [1.0, 1.0]),
        ([-0.5, 0.5, 0.0], [0.0, 1.0]),
    ];

    let mut vertices = core.errors().ok_or_report(DynArray::with_capacity(1))?;
    for (position, uv) in corners {
        core.errors().ok_or_report(vertices.push(Vertex { position, uv }))?;
    }
    Some(vertices)
}

fn patch_shader(core: &CoreContext, source: &str, max_lights: u32) -> Option<String> {
    const DEFINE: &str = "#define MAX_POINT_LIGHTS";

    let start = core.errors().ok_or_report(text::find(source, DEFINE, 0))?;
    let Some(start) = start else {
        throw_error!(core.errors(), ErrorKind::Failure, "{DEFINE} not found in shader source");
        return None;
    };
    let end = core.errors().ok_or_report(text::find(source, "\n", start))?;
    let Some(end) = end else {
        throw_error!(core.errors(), ErrorKind::Failure, "{DEFINE} is not followed by a line break");
        return None;
    };
    log::debug!("Found {DEFINE} at {start}..{end}");

    let line = &source[start..end];
    let patched = text::replace_first(source, line, &format!("{DEFINE} {max_lights}"));
    core.errors().ok_or_report(patched)?
}
