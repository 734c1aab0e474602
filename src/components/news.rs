use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub tag: &'static str,
    pub date: NaiveDate,
    pub title: &'static str,
    pub featured: bool,
}

impl NewsItem {
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct NewsLayout<'a> {
    pub featured: Vec<&'a NewsItem>,
    pub side: Vec<&'a NewsItem>,
    pub bottom: Vec<&'a NewsItem>,
}

/// Featured items go in the wide column, the first two others in the side
/// column, and everything from the fifth item on in the bottom row.
pub fn split_news(items: &[NewsItem]) -> NewsLayout<'_> {
    NewsLayout {
        featured: items.iter().filter(|n| n.featured).collect(),
        side: items.iter().filter(|n| !n.featured).take(2).collect(),
        bottom: items.iter().skip(4).collect(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn firm_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            tag: "NEWS",
            date: date(2026, 1, 28),
            title: "Greenspoon Marder Attorney Kevin Cruz to Speak at the 2026...",
            featured: true,
        },
        NewsItem {
            tag: "NEWS",
            date: date(2026, 1, 28),
            title: "Greenspoon Marder Celebrates Launch of Broward County's \"50 & Forward\"...",
            featured: true,
        },
        NewsItem {
            tag: "NEWS",
            date: date(2026, 1, 23),
            title: "Greenspoon Marder Ranks First in Am Law 200 Digital Visibility...",
            featured: false,
        },
        NewsItem {
            tag: "NEWS",
            date: date(2026, 1, 20),
            title: "Greenspoon Marder Announces Jamey Campellone's Promotion to Partner",
            featured: false,
        },
        NewsItem {
            tag: "TCPA",
            date: date(2026, 1, 28),
            title: "Another Court Concludes that Text Messages Count as \"Telephone Calls\"",
            featured: false,
        },
        NewsItem {
            tag: "Immigration Blog",
            date: date(2026, 1, 20),
            title: "Preparation for the Fiscal Year (FY) 2027 H-1B Cap Season",
            featured: false,
        },
    ]
}

#[function_component(News)]
pub fn news() -> Html {
    let items = use_memo(|_| firm_news(), ());
    let layout = split_news(&items);

    html! {
        <section id="insights" class="news-section">
            <div class="section-inner">
                <h2 class="news-title fade-up">{"Featured News & Insights"}</h2>

                <div class="news-grid">
                    <div class="news-featured">
                        { for layout.featured.iter().enumerate().map(|(idx, item)| html! {
                            <article class="news-card featured fade-up" style={format!("animation-delay: {}ms", idx * 100)}>
                                <div class="news-meta">
                                    <span class="news-badge">{ item.tag }</span>
                                    <span class="news-date">
                                        <svg class="icon-xs" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z" />
                                        </svg>
                                        { item.display_date() }
                                    </span>
                                </div>
                                <h3>{ item.title }</h3>
                                <div class="read-more">
                                    {"Read More"}
                                    <svg class="icon-xs arrow" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                                    </svg>
                                </div>
                            </article>
                        }) }
                    </div>

                    <div class="news-side">
                        { for layout.side.iter().map(|item| html! {
                            <article class="news-card side">
                                <div class="news-meta">
                                    <span class="news-tag">{ item.tag }</span>
                                    <span class="news-date small">{ item.display_date() }</span>
                                </div>
                                <h3>{ item.title }</h3>
                                <div class="read-more">{"Read More →"}</div>
                            </article>
                        }) }
                    </div>
                </div>

                <div class="news-bottom">
                    { for layout.bottom.iter().map(|item| html! {
                        <article class="news-card bottom">
                            <span class="news-chip">{ item.tag }</span>
                            <p class="news-date">{ item.display_date() }</p>
                            <h3>{ item.title }</h3>
                            <button class="news-button">{"Read More"}</button>
                        </article>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .news-section {
                    padding: 5rem 0;
                    background: #1e3a5f;
                }

                .news-title {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 2.25rem;
                    font-weight: 400;
                    margin: 0 0 3rem;
                }

                .news-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 1.5rem;
                }

                .news-featured,
                .news-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .news-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .news-card:hover { background: rgba(255, 255, 255, 0.1); }
                .news-card.featured { padding: 2rem; }
                .news-card.side { padding: 1.5rem; }

                .news-card.bottom {
                    background: #1e3a5f;
                    border-color: rgba(255, 255, 255, 0.2);
                    padding: 1.5rem;
                }

                .news-card.bottom:hover { border-color: #c9a227; }

                .news-card h3 {
                    color: #ffffff;
                    font-family: Georgia, "Times New Roman", serif;
                    font-weight: 400;
                    margin: 0;
                    transition: color 0.3s ease;
                }

                .news-card.featured h3 { font-size: 1.5rem; }
                .news-card:hover h3 { color: #c9a227; }

                .news-meta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1rem;
                }

                .news-badge {
                    background: #c9a227;
                    color: #1e3a5f;
                    font-size: 0.75rem;
                    font-weight: 500;
                    padding: 0.25rem 0.75rem;
                }

                .news-tag {
                    color: #c9a227;
                    font-size: 0.75rem;
                    letter-spacing: 0.05em;
                }

                .news-chip {
                    display: inline-block;
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                }

                .news-date {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 0 0 0.5rem;
                }

                .news-meta .news-date { margin: 0; }
                .news-date.small { font-size: 0.75rem; }

                .icon-xs { width: 1rem; height: 1rem; }

                .read-more {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #c9a227;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .read-more .arrow { transition: transform 0.3s ease; }
                .news-card:hover .read-more .arrow { transform: translateX(0.5rem); }

                .news-bottom {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .news-button {
                    margin-top: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    color: #ffffff;
                    border: none;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .news-button:hover {
                    background: #c9a227;
                    color: #1e3a5f;
                }

                @media (max-width: 1024px) {
                    .news-grid { grid-template-columns: 1fr; }
                }

                @media (max-width: 768px) {
                    .news-bottom { grid-template-columns: 1fr; }
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
    fn layout_matches_column_rules() {
        let items = firm_news();
        let layout = split_news(&items);

        assert_eq!(layout.featured.len(), 2);
        assert!(layout.featured.iter().all(|n| n.featured));

        let side: Vec<_> = layout.side.iter().map(|n| n.title).collect();
        assert_eq!(side, vec![items[2].title, items[3].title]);

        let bottom: Vec<_> = layout.bottom.iter().map(|n| n.tag).collect();
        assert_eq!(bottom, vec!["TCPA", "Immigration Blog"]);
    }

    #[test]
    fn short_feed_leaves_bottom_row_empty() {
        let items = firm_news().into_iter().take(3).collect::<Vec<_>>();
        let layout = split_news(&items);
        assert_eq!(layout.side.len(), 1);
        assert!(layout.bottom.is_empty());
        assert_eq!(split_news(&[]), NewsLayout::default());
    }

    #[test]
    fn dates_render_as_short_month_day_year() {
        let items = firm_news();
        assert_eq!(items[0].display_date(), "Jan 28, 2026");
        assert_eq!(items[3].display_date(), "Jan 20, 2026");

        let early = NewsItem { date: date(2026, 2, 3), ..items[0].clone() };
        assert_eq!(early.display_date(), "Feb 3, 2026");
    }
}
