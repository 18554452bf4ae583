//! Town map of the filtered programs, drawn with Leaflet.
//!
//! The map widget is created once, on the first entry into the Map view,
//! and kept for the page lifetime. Its container stays mounted while
//! hidden so that the widget is never torn down. Redraws happen one
//! animation frame after the view becomes visible, then the widget's size
//! is re-validated.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::ModalService;
use crate::shared::leaflet::{self, CircleStyle, LayerGroup, Map};
use contracts::domain::a001_program::ProgramId;
use contracts::projections::p903_program_map::{CityMarker, MapProjection};
use contracts::shared::config::MapConfig;
use contracts::system::browser::ViewMode;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Задержка перед пересчётом размера карты после показа контейнера
const SIZE_REVALIDATE_MS: u32 = 200;

const PROGRAM_ID_ATTR: &str = "data-program-id";

struct MapHandle {
    map: Map,
    markers: LayerGroup,
    /// Shared click handler of every popup; opens the program modal
    on_popup_click: Closure<dyn FnMut(web_sys::Event)>,
}

thread_local! {
    static PROGRAM_MAP: RefCell<Option<MapHandle>> = const { RefCell::new(None) };
}

impl MapHandle {
    fn create(
        container: &HtmlElement,
        config: &MapConfig,
        modal: ModalService,
    ) -> Result<Self, JsValue> {
        let map = leaflet::map(container, config.min_zoom)?;
        leaflet::tile_layer(&config.tile_url, &config.attribution)?.add_to(&map);

        let bounds = leaflet::bounds(&config.bounds)?;
        map.set_max_bounds(&bounds);
        map.fit_bounds(&bounds);

        let markers = leaflet::layer_group()?;
        markers.add_to(&map);

        let on_popup_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if let Some(id) = clicked_program(&event) {
                modal.open(id);
            }
        });

        log::info!("map: widget created");
        Ok(Self {
            map,
            markers,
            on_popup_click,
        })
    }

    fn render(&self, projection: &MapProjection) -> Result<(), JsValue> {
        self.map.close_popup();
        self.markers.clear_layers();

        for marker in &projection.markers {
            let circle = leaflet::circle_marker(marker.position, &marker_style(marker))?;
            circle.bind_popup(&popup_content(marker, &self.on_popup_click)?);
            circle.add_to(&self.markers);
        }
        log::debug!(
            "map: {} markers, {} unmapped",
            projection.markers.len(),
            projection.unmapped_count
        );
        Ok(())
    }
}

fn marker_style(marker: &CityMarker) -> CircleStyle {
    CircleStyle {
        radius: marker.radius,
        color: "#1f5f8b",
        fill_color: "#2f86c3",
        fill_opacity: 0.7,
        weight: 2,
    }
}

fn clicked_program(event: &web_sys::Event) -> Option<ProgramId> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target
        .closest(&format!("[{}]", PROGRAM_ID_ATTR))
        .ok()
        .flatten()?;
    let raw = button.get_attribute(PROGRAM_ID_ATTR)?;
    ProgramId::from_string(&raw).ok()
}

/// Popup body: heading, program buttons, "+N more".
fn popup_content(
    marker: &CityMarker,
    on_click: &Closure<dyn FnMut(web_sys::Event)>,
) -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let root = document.create_element("div")?;
    root.set_class_name("map-popup");

    let heading = document.create_element("strong")?;
    heading.set_text_content(Some(&marker.heading()));
    root.append_child(&heading)?;

    let list = document.create_element("ul")?;
    for program in &marker.programs {
        let item = document.create_element("li")?;
        let button = document.create_element("button")?;
        button.set_class_name("map-popup__program");
        button.set_attribute(PROGRAM_ID_ATTR, &program.id.to_string())?;
        button.set_text_content(Some(&program.name));
        item.append_child(&button)?;
        list.append_child(&item)?;
    }
    if marker.overflow > 0 {
        let more = document.create_element("li")?;
        more.set_class_name("map-popup__more");
        more.set_text_content(Some(&format!("+{} more", marker.overflow)));
        list.append_child(&more)?;
    }
    root.append_child(&list)?;

    // Leaflet гасит всплытие кликов из попапа, поэтому слушатель на самом содержимом
    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    root.dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("popup root is not an HtmlElement"))
}

fn draw(
    container: &HtmlElement,
    config: &MapConfig,
    projection: &MapProjection,
    modal: ModalService,
) -> Result<(), JsValue> {
    PROGRAM_MAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(MapHandle::create(container, config, modal)?);
        }
        match slot.as_ref() {
            Some(handle) => handle.render(projection),
            None => Ok(()),
        }
    })
}

fn revalidate_size() {
    PROGRAM_MAP.with(|slot| {
        if let Some(handle) = slot.borrow().as_ref() {
            handle.map.invalidate_size();
        }
    });
}

#[component]
pub fn ProgramMap() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let modal = leptos::context::use_context::<ModalService>()
        .expect("ModalService context not found");

    let container = NodeRef::<leptos::html::Div>::new();
    let is_visible = move || ctx.view_mode() == ViewMode::Map;

    // None while another view is shown: the projection is built only for the map
    let projection = Memo::new(move |_| {
        ctx.browser
            .with(|s| (s.view() == ViewMode::Map).then(|| s.map_projection()))
    });

    Effect::new(move |_| {
        let Some(projection) = projection.get() else {
            return;
        };
        let config = ctx.config.with_value(|c| c.map.clone());

        request_animation_frame(move || {
            let Some(element) = container.get_untracked() else {
                return;
            };
            if let Err(e) = draw(&element, &config, &projection, modal) {
                log::error!("map: draw failed: {:?}", e);
                return;
            }
            spawn_local(async move {
                TimeoutFuture::new(SIZE_REVALIDATE_MS).await;
                revalidate_size();
            });
        });
    });

    let unmapped = move || projection.with(|p| p.as_ref().map_or(0, |p| p.unmapped_count));

    view! {
        <div class="program-map" class:is-hidden=move || !is_visible()>
            <div class="program-map__canvas" node_ref=container></div>
            {move || {
                let count = unmapped();
                (count > 0).then(|| view! {
                    <p class="program-map__unmapped">
                        {format!(
                            "{} matching program{} in towns without map coordinates.",
                            count,
                            if count == 1 { "" } else { "s" },
                        )}
                    </p>
                })
            }}
        </div>
    }
}
