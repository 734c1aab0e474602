use yew::prelude::*;

pub struct PracticeArea {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        name: "Real Estate",
        description: "Full-service real estate representation for buyers, sellers, developers, lenders, and investors across all property types.",
        icon: "🏢",
    },
    PracticeArea {
        name: "Litigation",
        description: "Nationally recognized trial attorneys handling complex commercial disputes and class action defense.",
        icon: "⚖️",
    },
    PracticeArea {
        name: "Cannabis",
        description: "The only firm to secure cannabis dispensary approvals in Miami. Comprehensive regulatory and business counsel.",
        icon: "🌿",
    },
    PracticeArea {
        name: "Corporate",
        description: "Strategic counsel for M&A, securities, corporate governance, and business transactions of all sizes.",
        icon: "📊",
    },
    PracticeArea {
        name: "Immigration",
        description: "Business and family immigration services including H-1B, EB-5, and naturalization.",
        icon: "🌍",
    },
    PracticeArea {
        name: "Hospitality",
        description: "Serving the $1.5 trillion hospitality sector - hotels, restaurants, bars, and entertainment venues.",
        icon: "🍽️",
    },
];

#[function_component(PracticeAreas)]
pub fn practice_areas() -> Html {
    let active = use_state(|| None::<&'static str>);

    html! {
        <section id="practices" class="practices-section">
            <div class="section-inner">
                <div class="practices-header fade-up">
                    <span class="eyebrow">{"EXPERTISE"}</span>
                    <h2>{"41 Practice Areas"}</h2>
                    <p>{"From complex litigation to cutting-edge cannabis law, our attorneys bring decades of experience to every matter."}</p>
                </div>

                <div class="practice-grid">
                    { for PRACTICE_AREAS.iter().enumerate().map(|(idx, area)| {
                        let on_enter = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(Some(area.name)))
                        };
                        let on_leave = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(None))
                        };
                        let expanded = *active == Some(area.name);

                        html! {
                            <div
                                class="practice-card fade-up"
                                style={format!("animation-delay: {}ms", idx * 100)}
                                onmouseenter={on_enter}
                                onmouseleave={on_leave}
                            >
                                <div class="practice-icon">{ area.icon }</div>
                                <h3>{ area.name }</h3>
                                if expanded {
                                    <p class="practice-description">{ area.description }</p>
                                }
                                <div class="practice-arrow">
                                    <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                                    </svg>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <div class="practices-footer">
                    <button class="outline-button">{"View All Practice Areas"}</button>
                </div>
            </div>

            <style>
                {r#"
                .practices-section {
                    padding: 5rem 0;
                    background: #1e3a5f;
                }

                .practices-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .practices-header h2 {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 2.25rem;
                    font-weight: 400;
                    margin: 1rem 0 0;
                }

                .practices-header p {
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 42rem;
                    margin: 1rem auto 0;
                }

                .practice-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }

                .practice-card {
                    position: relative;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .practice-card:hover { background: rgba(255, 255, 255, 0.1); }

                .practice-icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .practice-card h3 {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 1.25rem;
                    font-weight: 400;
                    margin: 0 0 0.5rem;
                }

                .practice-description {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    overflow: hidden;
                    animation: expandIn 0.3s ease-out;
                }

                @keyframes expandIn {
                    from { opacity: 0; max-height: 0; }
                    to { opacity: 1; max-height: 10rem; }
                }

                .practice-arrow {
                    position: absolute;
                    bottom: 1rem;
                    right: 1rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #c9a227;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .practice-card:hover .practice-arrow { opacity: 1; }

                .practices-footer {
                    text-align: center;
                    margin-top: 3rem;
                }

                @media (max-width: 1024px) {
                    .practice-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (max-width: 768px) {
                    .practice-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::Responder;

    #[test]
    fn six_featured_areas_with_unique_names() {
        let mut names: Vec<_> = PRACTICE_AREAS.iter().map(|a| a.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn chat_fallback_mentions_every_featured_area() {
        let fallback = Responder::default().reply("hello there");
        for area in PRACTICE_AREAS {
            assert!(fallback.contains(area.name), "{} missing from fallback", area.name);
        }
    }
}
