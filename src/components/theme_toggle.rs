use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::configs::ToggleConfig;
use crate::theme::{Presentation, ThemeChange, ThemeController, ToggleSize};

const TOGGLE_CSS: Asset = asset!("/assets/styling/theme_toggle.css");

#[cfg(target_arch = "wasm32")]
type EventBridge = crate::theme::web::DomEventBridge;

/// Hosts without a DOM have nothing to re-dispatch on.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
struct EventBridge;

#[cfg(target_arch = "wasm32")]
fn build_controller(config: &ToggleConfig, bridge: &EventBridge) -> ThemeController {
    use crate::theme::web::{DocumentRootSink, LocalStorageStore, MediaQueryPreference};

    let mut controller = ThemeController::new(
        config,
        Rc::new(LocalStorageStore),
        &MediaQueryPreference,
        Rc::new(DocumentRootSink),
    );
    let bridge = bridge.clone();
    controller.subscribe(move |change| bridge.dispatch(change));
    controller
}

#[cfg(not(target_arch = "wasm32"))]
fn build_controller(config: &ToggleConfig, _bridge: &EventBridge) -> ThemeController {
    use crate::theme::{FixedPreference, JsonFileStore, MemoryStore, NoopSink, ThemeStore};

    let store: Rc<dyn ThemeStore> = match &config.store_path {
        Some(path) => Rc::new(JsonFileStore::new(path)),
        None => {
            log::warn!("THEME_STORE_PATH not set, theme will not survive a restart");
            Rc::new(MemoryStore::new())
        }
    };
    ThemeController::new(config, store, &FixedPreference::unavailable(), Rc::new(NoopSink))
}

#[cfg(target_arch = "wasm32")]
fn bind_event_target(bridge: &EventBridge, mounted: &MountedData) {
    match mounted.downcast::<web_sys::Element>() {
        Some(element) => bridge.set_target(element.clone()),
        None => log::warn!("Mounted toggle is not a DOM element, theme-change will start at <html>"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn bind_event_target(_bridge: &EventBridge, _mounted: &MountedData) {}

/// Light/dark switch. `size` overrides the size from the `ToggleConfig` in context and may
/// change between renders; the store key and `on_change` subscription are fixed at mount.
#[component]
pub fn ThemeToggle(size: Option<ToggleSize>, on_change: Option<EventHandler<ThemeChange>>) -> Element {
    let bridge = use_hook(EventBridge::default);
    let controller = use_hook(|| {
        let mut config = try_consume_context::<ToggleConfig>().unwrap_or_default();
        if let Some(size) = size {
            config.size = size;
        }

        let mut controller = build_controller(&config, &bridge);
        if let Some(handler) = on_change {
            controller.subscribe(move |change| handler.call(*change));
        }
        Rc::new(RefCell::new(controller))
    });

    let mut state = use_signal(|| controller.borrow().state());

    let on_mount = controller.clone();
    let on_click = controller.clone();
    let view = Presentation::of(state(), size.unwrap_or(controller.borrow().size()));
    let metrics = view.size.metrics();

    rsx! {
        document::Link { rel: "stylesheet", href: TOGGLE_CSS }
        div {
            class: "theme-toggle theme-toggle--{view.size}",
            style: "--pill-w: {metrics.pill_width}px; --pill-h: {metrics.pill_height}px; --knob-size: {metrics.knob_size}px; --icon-size: {metrics.icon_size}px;",
            div {
                class: view.container_class(),
                role: "switch",
                aria_checked: if view.container_dark { "true" } else { "false" },
                onmounted: move |event: MountedEvent| {
                    bind_event_target(&bridge, &event.data());
                    let controller = on_mount.borrow();
                    controller.attach();
                    state.set(controller.state());
                },
                onclick: move |_| {
                    let mut controller = on_click.borrow_mut();
                    controller.toggle();
                    state.set(controller.state());
                },
                div {
                    class: "pill",
                    div { class: "liquid", style: view.liquid_style() }
                    span {
                        class: if view.show_label { "label" } else { "label hidden" },
                        "{view.label}"
                    }
                }
                div {
                    class: "knob",
                    style: view.knob_style(),
                    div {
                        class: "blob",
                        svg {
                            class: "icon",
                            view_box: "0 0 24 24",
                            path {
                                d: view.icon.d,
                                fill: "currentColor",
                                stroke: if view.icon.outlined { "currentColor" } else { "none" },
                                stroke_width: if view.icon.outlined { "2" } else { "0" },
                            }
                        }
                    }
                }
            }
        }
    }
}
