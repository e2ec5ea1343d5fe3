//! WASM bindings for surface texture synthesis.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use celestial::BodyDescriptor;
use surface::{
    synthesize_ring, SurfaceCache, SurfaceKey, SurfaceParams, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    RING_SIZE,
};

use crate::{from_js, to_js};

// Thread-local texture cache (WASM is single-threaded)
thread_local! {
    static TEXTURE_CACHE: RefCell<SurfaceCache> =
        RefCell::new(SurfaceCache::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
}

/// Texture width in pixels for all synthesized surfaces.
#[wasm_bindgen]
pub fn texture_width() -> u32 {
    DEFAULT_WIDTH
}

/// Texture height in pixels for all synthesized surfaces.
#[wasm_bindgen]
pub fn texture_height() -> u32 {
    DEFAULT_HEIGHT
}

/// Synthesize (or fetch from cache) the surface texture for a body.
///
/// # Arguments
/// * `body` - A BodyDescriptor object as returned by enrich_collection
///
/// # Returns
/// Row-major RGBA8 bytes at texture_width() x texture_height().
#[wasm_bindgen]
pub fn planet_texture(body: JsValue) -> Result<Vec<u8>, JsError> {
    let body: BodyDescriptor = from_js(body)?;
    let params = SurfaceParams::from_body(&body);
    let field = TEXTURE_CACHE.with(|cache| cache.borrow_mut().get_or_synthesize(&params));
    Ok(field.bytes().to_vec())
}

/// Edge length in pixels of a synthesized ring texture.
#[wasm_bindgen]
pub fn ring_texture_size() -> u32 {
    RING_SIZE
}

/// Synthesize the ring texture for a ringed body.
///
/// # Arguments
/// * `body` - A BodyDescriptor object with hasRings set
///
/// # Returns
/// Row-major RGBA8 bytes of a ring_texture_size() square; errors if the
/// body has no rings.
#[wasm_bindgen]
pub fn ring_texture(body: JsValue) -> Result<Vec<u8>, JsError> {
    let body: BodyDescriptor = from_js(body)?;
    if !body.has_rings {
        return Err(JsError::new("body has no rings"));
    }
    let color = body.ring_color.unwrap_or_else(|| body.kind.ring_color());
    Ok(synthesize_ring(body.seed, color, RING_SIZE).into_bytes())
}

/// Export the uniform set for a shader-driven renderer that recomputes
/// the surface on the GPU instead of uploading the raster.
///
/// # Returns
/// Object with typeId, seed, color1, color2, color3, hasClouds.
#[wasm_bindgen]
pub fn surface_uniforms(body: JsValue) -> Result<JsValue, JsError> {
    let body: BodyDescriptor = from_js(body)?;
    to_js(&SurfaceParams::from_body(&body).shader_uniforms())
}

/// Drop a body's cached texture; the next planet_texture call regenerates
/// it.
///
/// # Returns
/// Whether a cached texture was present.
#[wasm_bindgen]
pub fn invalidate_texture(body: JsValue) -> Result<bool, JsError> {
    let body: BodyDescriptor = from_js(body)?;
    let key = SurfaceKey::from_params(&SurfaceParams::from_body(&body));
    Ok(TEXTURE_CACHE.with(|cache| cache.borrow_mut().invalidate(&key)))
}

/// Clear every cached texture.
#[wasm_bindgen]
pub fn clear_texture_cache() {
    TEXTURE_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Number of textures currently cached.
#[wasm_bindgen]
pub fn texture_cache_len() -> usize {
    TEXTURE_CACHE.with(|cache| cache.borrow().len())
}
