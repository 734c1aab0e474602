use yew::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, hero::Hero, nav::Nav, news::News,
    practice_areas::PracticeAreas, stats::Stats,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on first mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Nav />
            <Hero />
            <Stats />
            <PracticeAreas />
            <News />
            <Contact />
            <Footer />

            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #1e3a5f;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                }

                .landing-page {
                    min-height: 100vh;
                    background: #ffffff;
                    overflow-x: hidden;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .eyebrow {
                    color: #c9a227;
                    font-size: 0.875rem;
                    letter-spacing: 0.3em;
                }

                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.6s ease-out forwards;
                }

                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes slideFromLeft {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .outline-button {
                    background: transparent;
                    border: 1px solid #c9a227;
                    color: #c9a227;
                    padding: 0.75rem 2rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .outline-button:hover {
                    background: #c9a227;
                    color: #1e3a5f;
                }

                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                }
                "#}
            </style>
        </div>
    }
}
