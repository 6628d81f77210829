use log::{info, Level};
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod config;
mod i18n;
mod pages {
    pub mod landing;
}
mod contact {
    pub mod form;
    pub mod transport;
}

use i18n::{t, Lang};
use pages::landing::Landing;

/// Smooth-scroll to one of the fixed page sections (`services`, `about`,
/// `team`, `contact`). Silently does nothing when the anchor is absent.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub lang: Lang,
    pub on_toggle_lang: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let lang = props.lang;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // section buttons close the mobile menu before scrolling
    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let toggle_lang = {
        let on_toggle_lang = props.on_toggle_lang.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            on_toggle_lang.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #ffedd5;
                        z-index: 50;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        color: #1e293b;
                    }
                    .nav-logo-badge {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 8px;
                        background: linear-gradient(135deg, #ea580c, #d97706);
                        color: #fff;
                        font-size: 0.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        font-size: 1rem;
                        color: #475569;
                        cursor: pointer;
                        padding: 0;
                    }
                    .nav-link:hover { color: #ea580c; }
                    .lang-toggle {
                        border: 1px solid #ea580c;
                        border-radius: 6px;
                        background: none;
                        color: #ea580c;
                        font-size: 0.875rem;
                        padding: 0.25rem 0.75rem;
                        cursor: pointer;
                    }
                    .lang-toggle:hover { background: #fff7ed; }
                    .burger-menu { display: none; }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                            flex-direction: column;
                            gap: 5px;
                            background: none;
                            border: none;
                            cursor: pointer;
                            padding: 0.5rem;
                        }
                        .burger-menu span {
                            width: 22px;
                            height: 2px;
                            background: #1e293b;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            background: #fff;
                            border-bottom: 1px solid #ffedd5;
                            padding: 1rem 1.5rem;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <span class="nav-logo">
                    <span class="nav-logo-badge">{"R"}</span>
                    {"ReSH"}
                </span>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <button class="nav-link" onclick={go_to("services")}>
                        { t("nav.services", lang) }
                    </button>
                    <button class="nav-link" onclick={go_to("about")}>
                        { t("nav.about", lang) }
                    </button>
                    <button class="nav-link" onclick={go_to("team")}>
                        { t("nav.team", lang) }
                    </button>
                    <button class="nav-link" onclick={go_to("contact")}>
                        { t("nav.contact", lang) }
                    </button>
                    <button class="lang-toggle" onclick={toggle_lang}>
                        { t("nav.lang-toggle", lang) }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let lang = use_state(Lang::default);

    let toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_| lang.set(lang.toggled()))
    };

    html! {
        <>
            <Nav lang={*lang} on_toggle_lang={toggle_lang} />
            <Landing lang={*lang} />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
