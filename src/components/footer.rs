use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::nav::FirmLogo;

const QUICK_LINKS: &[&str] = &["About Us", "Our People", "Practice Areas", "Careers", "News & Insights"];
const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Use", "Disclaimer", "Sitemap", "Pay Online"];

struct Social {
    name: &'static str,
    path: &'static str,
}

const SOCIALS: &[Social] = &[
    Social {
        name: "facebook",
        path: "M18.77,7.46H14.5v-1.9c0-.9.6-1.1,1-1.1h3V.5L14.17.5C10.24.5,9.25,3.3,9.25,5.47v2H6.5v4h2.75V24h5.25V11.5h3.54l.48-4Z",
    },
    Social {
        name: "twitter",
        path: "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z",
    },
    Social {
        name: "linkedin",
        path: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
    },
    Social {
        name: "youtube",
        path: "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z",
    },
];

pub fn copyright_line(year: i32) -> String {
    format!("Attorney Advertising. Copyright © {}. Greenspoon Marder LLP. All Rights Reserved.", year)
}

fn link_column(title: &'static str, links: &'static [&'static str]) -> Html {
    html! {
        <div>
            <h4>{ title }</h4>
            <ul class="footer-links">
                { for links.iter().map(|link| html! {
                    <li><a href="#">{ *link }</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <FirmLogo />
                        <p>
                            {"A full-service law firm with over 215 attorneys and 20+ offices across the United States. Am Law 200 ranked since 2015."}
                        </p>
                        <div class="social-row">
                            { for SOCIALS.iter().map(|social| html! {
                                <a href="#" class="social-link">
                                    <span class="sr-only">{ social.name }</span>
                                    <svg fill="currentColor" viewBox="0 0 24 24"><path d={social.path} /></svg>
                                </a>
                            }) }
                        </div>
                    </div>
                    { link_column("Quick Links", QUICK_LINKS) }
                    { link_column("Legal", LEGAL_LINKS) }
                </div>

                <div class="footer-bottom">
                    <p>{ copyright_line(year) }</p>
                    <p>{"A U Botika Web Experience"}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #1e3a5f;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }

                .footer-brand p {
                    color: rgba(255, 255, 255, 0.6);
                    max-width: 28rem;
                    margin: 1rem 0 0;
                }

                .social-row {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }

                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: rgba(255, 255, 255, 0.6);
                    transition: all 0.3s ease;
                }

                .social-link svg { width: 1.25rem; height: 1.25rem; }

                .social-link:hover {
                    border-color: #c9a227;
                    color: #c9a227;
                }

                .site-footer h4 {
                    color: #ffffff;
                    font-weight: 500;
                    margin: 0 0 1rem;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .footer-links a {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover { color: #c9a227; }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    margin-top: 3rem;
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .footer-bottom p {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.875rem;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_given_year() {
        assert_eq!(
            copyright_line(2026),
            "Attorney Advertising. Copyright © 2026. Greenspoon Marder LLP. All Rights Reserved."
        );
    }
}
