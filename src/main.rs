use dioxus::prelude::*;
use theme_toggle::theme::{ThemeChange, ToggleSize};
use theme_toggle::{Theme, ThemeState, ThemeToggle, ToggleConfig};

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ToggleConfig::load);
    let mut theme = use_signal(ThemeState::default);

    rsx! {
        div {
            class: if theme().is_dark { "page dark" } else { "page" },
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            header {
                class: "page-header",
                h1 { "Theme Toggle" }
                ThemeToggle {
                    on_change: move |change: ThemeChange| {
                        log::info!("Page theme is now {}", change.theme.as_str());
                        theme.set(ThemeState::new(change.theme == Theme::Dark));
                    },
                }
            }
            section {
                class: "sizes",
                for size in ToggleSize::ALL {
                    div {
                        key: "{size}",
                        class: "size-row",
                        span { "{size}" }
                        ThemeToggle { size }
                    }
                }
            }
        }
    }
}
