use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::NAV_SCROLL_THRESHOLD;

pub const NAV_ITEMS: &[&str] = &["Professionals", "Practices", "Insights", "Careers", "Contact"];

pub fn section_anchor(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > NAV_SCROLL_THRESHOLD
}

#[function_component(FirmLogo)]
pub fn firm_logo() -> Html {
    html! {
        <a href="#" class="firm-logo">
            <span class="light">{"Greenspoon"}</span>
            <span>{"Marder"}</span>
            <span class="llp">{"LLP"}</span>
        </a>
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                Closure::wrap(Box::new(move || {
                    let offset = window.scroll_y().unwrap_or(0.0);
                    scrolled.set(is_scrolled(offset));
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(listener)) = (&window, &listener) {
                let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }

            move || {
                if let (Some(window), Some(listener)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <FirmLogo />

                <div class="nav-links">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={section_anchor(item)} class="nav-link">{ *item }</a>
                    }) }
                    <button class="portal-button">{"Client Portal"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <svg class="burger-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        if *menu_open {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={section_anchor(item)} class="mobile-link" onclick={close_menu.clone()}>{ *item }</a>
                    }) }
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                    animation: navIn 0.6s ease-out;
                }

                .top-nav.scrolled {
                    background: #1e3a5f;
                    padding: 0.75rem 0;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                }

                @keyframes navIn {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .firm-logo {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 1.5rem;
                    letter-spacing: 0.025em;
                    text-decoration: none;
                }

                .firm-logo .light { font-weight: 300; }

                .firm-logo .llp {
                    color: #c9a227;
                    font-size: 0.875rem;
                    margin-left: 0.25rem;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #ffffff;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover { color: #c9a227; }

                .portal-button {
                    background: #c9a227;
                    color: #1e3a5f;
                    border: none;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .portal-button:hover { background: #ffffff; }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #ffffff;
                    cursor: pointer;
                }

                .burger-icon { width: 1.5rem; height: 1.5rem; }

                .mobile-menu {
                    display: none;
                    background: #1e3a5f;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    margin-top: 1rem;
                    animation: menuIn 0.3s ease-out;
                }

                @keyframes menuIn {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .mobile-link {
                    display: block;
                    padding: 0.75rem 1.5rem;
                    color: #ffffff;
                    text-decoration: none;
                }

                .mobile-link:hover { background: rgba(255, 255, 255, 0.1); }

                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu { display: block; }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_lowercased_labels() {
        assert_eq!(section_anchor("Practices"), "#practices");
        assert_eq!(section_anchor("Contact"), "#contact");
    }

    #[test]
    fn solid_background_starts_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
