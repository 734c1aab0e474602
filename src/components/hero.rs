use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::HERO_ROTATION_MS;

pub struct Headline {
    pub tag: &'static str,
    pub text: &'static str,
}

pub const HEADLINES: &[Headline] = &[
    Headline { tag: "CANNABIS", text: "We Applaud Federal Cannabis Rescheduling and Celebrate Our Clients" },
    Headline { tag: "LITIGATION", text: "Securing $123M Victory in Landmark TCPA Class Action Defense" },
    Headline { tag: "REAL ESTATE", text: "Unanimous Miami City Commission Approval Through 2050" },
];

pub fn next_headline(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let current = use_state(|| 0usize);
    let search_query = use_state(String::new);
    let search_focused = use_state(|| false);

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_headline(*current, HEADLINES.len())),
            HERO_ROTATION_MS,
        );
    }

    let headline = &HEADLINES[*current % HEADLINES.len()];

    let on_search_input = {
        let search_query = search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_query.set(input.value());
        })
    };
    let on_focus = {
        let search_focused = search_focused.clone();
        Callback::from(move |_: FocusEvent| search_focused.set(true))
    };
    let on_blur = {
        let search_focused = search_focused.clone();
        Callback::from(move |_: FocusEvent| search_focused.set(false))
    };

    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-pattern"></div>
                <svg class="hero-lines" preserveAspectRatio="none">
                    <path d="M0,400 Q400,300 800,400 T1600,400" stroke="white" stroke-width="1" fill="none" />
                </svg>
            </div>

            <div class="hero-content">
                // Keyed so each rotation remounts and replays the fade-in.
                <div class="hero-headline" key={*current}>
                    <span class="hero-tag">{ headline.tag }</span>
                    <h1>{ headline.text }</h1>
                </div>

                <div class={classes!("hero-search", (*search_focused).then(|| "focused"))}>
                    <input
                        type="text"
                        placeholder="Find answers here"
                        value={(*search_query).clone()}
                        oninput={on_search_input}
                        onfocus={on_focus}
                        onblur={on_blur}
                    />
                    <button class="hero-search-button" aria-label="Search">
                        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                        </svg>
                    </button>
                </div>

                <div class="hero-indicators">
                    { for (0..HEADLINES.len()).map(|idx| {
                        let current = current.clone();
                        let active = idx == *current;
                        html! {
                            <button
                                class={classes!("hero-indicator", active.then(|| "active"))}
                                onclick={Callback::from(move |_| current.set(idx))}
                                aria-label={format!("Show headline {}", idx + 1)}
                            />
                        }
                    }) }
                </div>
            </div>

            <div class="scroll-hint">
                <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                </svg>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: #1e3a5f;
                }

                .hero-pattern {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    background-image: url("data:image/svg+xml,%3Csvg width='60' height='60' viewBox='0 0 60 60' xmlns='http://www.w3.org/2000/svg'%3E%3Cg fill='none' fill-rule='evenodd'%3E%3Cg fill='%23ffffff' fill-opacity='0.1'%3E%3Cpath d='M36 34v-4h-2v4h-4v2h4v4h2v-4h4v-2h-4zm0-30V0h-2v4h-4v2h4v4h2V6h4V4h-4zM6 34v-4H4v4H0v2h4v4h2v-4h4v-2H6zM6 4V0H4v4H0v2h4v4h2V6h4V4H6z'/%3E%3C/g%3E%3C/g%3E%3C/svg%3E");
                }

                .hero-lines {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.1;
                }

                .hero-lines path {
                    stroke-dasharray: 2000;
                    stroke-dashoffset: 2000;
                    animation: drawLine 3s linear infinite;
                }

                @keyframes drawLine {
                    to { stroke-dashoffset: 0; }
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .hero-headline {
                    animation: headlineIn 0.8s ease-out;
                }

                @keyframes headlineIn {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .hero-tag {
                    color: #c9a227;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                    font-weight: 500;
                }

                .hero-headline h1 {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 3.75rem;
                    font-weight: 400;
                    line-height: 1.25;
                    max-width: 56rem;
                    margin: 1rem auto 0;
                }

                .hero-search {
                    position: relative;
                    max-width: 36rem;
                    margin: 3rem auto 0;
                    transition: transform 0.3s ease;
                    opacity: 0;
                    animation: searchIn 0.6s ease-out 0.5s forwards;
                }

                @keyframes searchIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                .hero-search.focused {
                    transform: scale(1.05);
                }

                .hero-search input {
                    width: 100%;
                    background: transparent;
                    border: none;
                    border-bottom: 2px solid #c9a227;
                    color: #ffffff;
                    padding: 0.75rem 0.5rem;
                    font-size: 1.125rem;
                }

                .hero-search input::placeholder { color: rgba(201, 162, 39, 0.7); }
                .hero-search input:focus { outline: none; }

                .hero-search-button {
                    position: absolute;
                    right: 0.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    background: none;
                    border: none;
                    color: #c9a227;
                    cursor: pointer;
                }

                .hero-search-button:hover { color: #ffffff; }

                .icon { width: 1.5rem; height: 1.5rem; }

                .hero-indicators {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }

                .hero-indicator {
                    height: 0.25rem;
                    width: 1.5rem;
                    border: none;
                    padding: 0;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-indicator.active {
                    width: 3rem;
                    background: #ffffff;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.5);
                    animation: hintBounce 1.5s ease-in-out infinite;
                }

                @keyframes hintBounce {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                @media (max-width: 768px) {
                    .hero-headline h1 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_to_first_headline() {
        assert_eq!(next_headline(0, 3), 1);
        assert_eq!(next_headline(1, 3), 2);
        assert_eq!(next_headline(2, 3), 0);
    }

    #[test]
    fn rotation_of_empty_list_stays_put() {
        assert_eq!(next_headline(0, 0), 0);
    }

    #[test]
    fn every_headline_has_copy() {
        assert_eq!(HEADLINES.len(), 3);
        assert!(HEADLINES.iter().all(|h| !h.tag.is_empty() && !h.text.is_empty()));
    }
}
