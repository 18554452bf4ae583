//! Bindings to the Leaflet global `L`, loaded from `index.html`.
//!
//! Only the calls the program map needs are bound. Options objects are
//! built from serde structs through `serde_wasm_bindgen`.

use contracts::projections::p903_program_map::LatLng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Anything that can be added to a map or a group
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Layer, target: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, content: &web_sys::HtmlElement) -> Layer;

    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = setMaxBounds)]
    pub fn set_max_bounds(this: &Map, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method, js_name = closePopup)]
    pub fn close_popup(this: &Map);

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type LayerGroup;

    #[wasm_bindgen(catch, js_namespace = L, js_name = layerGroup)]
    fn create_layer_group() -> Result<LayerGroup, JsValue>;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type CircleMarker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    fn create_circle_marker(
        position: &JsValue,
        options: &JsValue,
    ) -> Result<CircleMarker, JsValue>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    min_zoom: u8,
    scroll_wheel_zoom: bool,
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
    #[serde(rename = "maxZoom")]
    max_zoom: u8,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleStyle {
    pub radius: f64,
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: u8,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

pub fn map(container: &web_sys::HtmlElement, min_zoom: u8) -> Result<Map, JsValue> {
    let options = to_js(&MapOptions {
        min_zoom,
        scroll_wheel_zoom: true,
    })?;
    create_map(container, &options)
}

pub fn tile_layer(url: &str, attribution: &str) -> Result<TileLayer, JsValue> {
    let options = to_js(&TileOptions {
        attribution,
        max_zoom: 18,
    })?;
    create_tile_layer(url, &options)
}

pub fn layer_group() -> Result<LayerGroup, JsValue> {
    create_layer_group()
}

pub fn circle_marker(position: LatLng, style: &CircleStyle) -> Result<CircleMarker, JsValue> {
    create_circle_marker(&to_js(&position)?, &to_js(style)?)
}

/// `[[south, west], [north, east]]`
pub fn bounds(corners: &[[f64; 2]; 2]) -> Result<JsValue, JsValue> {
    to_js(corners)
}
