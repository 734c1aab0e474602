use chrono::Utc;
use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

struct Stat {
    number: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: &[Stat] = &[
    Stat { number: 44, suffix: "+", label: "Years" },
    Stat { number: 215, suffix: "+", label: "Attorneys" },
    Stat { number: 20, suffix: "+", label: "Offices" },
];

pub const SERVICE_OPTIONS: &[&str] = &["Real Estate", "Litigation", "Cannabis", "Immigration", "Corporate"];

/// Value shown `elapsed_ms` into a count-up from zero to `end`.
pub fn counter_value(end: u32, elapsed_ms: i64, duration_ms: u32) -> u32 {
    if duration_ms == 0 {
        return end;
    }
    let progress = (elapsed_ms.max(0) as f64 / duration_ms as f64).min(1.0);
    (progress * end as f64).floor() as u32
}

/// True once any part of the element is inside the viewport.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height && bottom > 0.0
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    pub active: bool,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: u32,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let count = use_state_eq(|| 0u32);
    let finished = *count >= props.end;

    {
        let count = count.clone();
        let end = props.end;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |(active, finished)| {
                let ticker = (*active && !*finished).then(|| {
                    let started = Utc::now();
                    Interval::new(COUNTER_TICK_MS, move || {
                        let elapsed = (Utc::now() - started).num_milliseconds();
                        count.set(counter_value(end, elapsed, duration_ms));
                    })
                });
                // Runs when the count finishes or the component unmounts.
                move || drop(ticker)
            },
            (props.active, finished),
        );
    }

    html! { <span>{ *count }</span> }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let section_ref = use_node_ref();
    let in_view = use_state_eq(|| false);

    {
        let section_ref = section_ref.clone();
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let Some(section) = section_ref.cast::<Element>() else {
                            return;
                        };
                        let rect = section.get_bounding_client_rect();
                        let viewport = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        if in_viewport(rect.top(), rect.bottom(), viewport) {
                            in_view.set(true);
                        }
                    }) as Box<dyn FnMut()>)
                });

                if let (Some(window), Some(listener)) = (&window, &listener) {
                    let callback: &web_sys::js_sys::Function = listener.as_ref().unchecked_ref();
                    let _ = window.add_event_listener_with_callback("scroll", callback);
                    // The section may already be on screen.
                    let _ = callback.call0(&wasm_bindgen::JsValue::NULL);
                }

                move || {
                    if let (Some(window), Some(listener)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    html! {
        <section class="stats-section" ref={section_ref}>
            <div class="stats-grid">
                <div class="discover">
                    <div class="discover-block slide-in">
                        <h2>{"Discover Our People"}</h2>
                        <div class="letter-row">
                            { for ('A'..='Z').map(|letter| html! {
                                <button class="letter-button">{ letter }</button>
                            }) }
                        </div>
                        <div class="underline-field">
                            <input type="text" placeholder="Search" />
                            <SearchIcon />
                        </div>
                    </div>

                    <div class="discover-block slide-in delayed">
                        <h2>{"Discover Our Services"}</h2>
                        <div class="underline-field">
                            <input type="text" placeholder="Search Practice Areas" />
                            <SearchIcon />
                        </div>
                        <select class="underline-select">
                            <option>{"Practice Areas"}</option>
                            { for SERVICE_OPTIONS.iter().map(|option| html! { <option>{ *option }</option> }) }
                        </select>
                    </div>
                </div>

                <div class="stat-figures">
                    { for STATS.iter().enumerate().map(|(idx, stat)| html! {
                        <div class="stat" style={format!("animation-delay: {}ms", idx * 200)}>
                            <div class="stat-number">
                                <AnimatedCounter end={stat.number} active={*in_view} />
                                <span class="stat-suffix">{ stat.suffix }</span>
                            </div>
                            <div class="stat-label">{ stat.label }</div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .stats-section {
                    padding: 5rem 0;
                    background: #ffffff;
                }

                .stats-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }

                .discover {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .discover-block h2 {
                    color: #1e3a5f;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 1.875rem;
                    font-weight: 400;
                    margin: 0 0 1.5rem;
                }

                .slide-in {
                    opacity: 0;
                    animation: slideFromLeft 0.6s ease-out forwards;
                }

                .slide-in.delayed { animation-delay: 0.2s; }

                .letter-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .letter-button {
                    width: 2rem;
                    height: 2rem;
                    font-size: 0.875rem;
                    color: #1e3a5f;
                    background: none;
                    border: 1px solid rgba(30, 58, 95, 0.2);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .letter-button:hover {
                    background: #1e3a5f;
                    color: #ffffff;
                }

                .underline-field {
                    position: relative;
                }

                .underline-field input,
                .underline-select {
                    width: 100%;
                    border: none;
                    border-bottom: 2px solid rgba(30, 58, 95, 0.3);
                    padding: 0.5rem 0;
                    background: transparent;
                    transition: border-color 0.3s ease;
                }

                .underline-select {
                    margin-top: 1rem;
                    color: rgba(30, 58, 95, 0.6);
                }

                .underline-field input:focus,
                .underline-select:focus {
                    outline: none;
                    border-color: #c9a227;
                }

                .underline-field .search-icon {
                    position: absolute;
                    right: 0.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #c9a227;
                }

                .stat-figures {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    text-align: center;
                    align-self: center;
                }

                .stat {
                    opacity: 0;
                    animation: statIn 0.6s ease-out forwards;
                }

                @keyframes statIn {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .stat-number {
                    color: #1e3a5f;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 3.75rem;
                }

                .stat-suffix { color: #c9a227; }

                .stat-label {
                    color: rgba(30, 58, 95, 0.7);
                    font-size: 1.125rem;
                    margin-top: 0.5rem;
                }

                @media (max-width: 768px) {
                    .stats-grid { grid-template-columns: 1fr; }
                    .stat-number { font-size: 3rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(SearchIcon)]
fn search_icon() -> Html {
    html! {
        <svg class="search-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_lands_on_target() {
        assert_eq!(counter_value(215, 0, 2000), 0);
        assert_eq!(counter_value(215, 2000, 2000), 215);
        assert_eq!(counter_value(215, 9000, 2000), 215);
    }

    #[test]
    fn counter_floors_partial_progress() {
        assert_eq!(counter_value(44, 1000, 2000), 22);
        assert_eq!(counter_value(215, 1000, 2000), 107);
        assert_eq!(counter_value(20, 150, 2000), 1);
    }

    #[test]
    fn counter_tolerates_clock_skew_and_zero_duration() {
        assert_eq!(counter_value(20, -50, 2000), 0);
        assert_eq!(counter_value(20, 0, 0), 20);
    }

    #[test]
    fn viewport_check_needs_overlap() {
        assert!(in_viewport(100.0, 600.0, 800.0));
        assert!(in_viewport(-200.0, 10.0, 800.0));
        assert!(!in_viewport(900.0, 1400.0, 800.0));
        assert!(!in_viewport(-600.0, -1.0, 800.0));
    }
}
