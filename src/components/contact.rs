use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const OFFICES: &[&str] = &[
    "Atlanta", "Boca Raton", "Chicago", "Denver", "Fort Lauderdale",
    "Las Vegas", "Los Angeles", "Miami", "New York", "Orlando",
    "Scottsdale", "West Palm Beach",
];

pub const INQUIRY_PRACTICES: &[&str] = &[
    "Real Estate", "Litigation", "Cannabis", "Corporate", "Immigration", "Hospitality", "Other",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub practice: String,
    pub message: String,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Email,
    Phone,
    Practice,
    Message,
}

impl ContactForm {
    /// Labels of the starred fields that are still blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("Full Name", &self.name),
            ("Email", &self.email),
            ("How can we help?", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Practice => self.practice = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Missing(Vec<&'static str>),
    Received,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);

    let update = |field: Field| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let on_input = |field: Field| {
        let update = update(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_practice = {
        let update = update(Field::Practice);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = form.missing_required();
            if missing.is_empty() {
                info!(
                    "Inquiry from {} <{}> about {}",
                    form.name.trim(),
                    form.email.trim(),
                    if form.practice.is_empty() { "an unspecified practice" } else { form.practice.as_str() }
                );
                form.set(ContactForm::default());
                notice.set(Some(Notice::Received));
            } else {
                notice.set(Some(Notice::Missing(missing)));
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="section-inner contact-grid">
                <div class="slide-left">
                    <span class="eyebrow">{"GET IN TOUCH"}</span>
                    <h2 class="contact-title">{"Contact Us"}</h2>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div>
                                <label>{"Full Name *"}</label>
                                <input type="text" value={form.name.clone()} oninput={on_input(Field::Name)} />
                            </div>
                            <div>
                                <label>{"Email *"}</label>
                                <input type="email" value={form.email.clone()} oninput={on_input(Field::Email)} />
                            </div>
                        </div>

                        <div class="form-row">
                            <div>
                                <label>{"Phone"}</label>
                                <input type="tel" value={form.phone.clone()} oninput={on_input(Field::Phone)} />
                            </div>
                            <div>
                                <label>{"Practice Area"}</label>
                                <select onchange={on_practice}>
                                    <option value="" selected={form.practice.is_empty()}>{"Select a practice area"}</option>
                                    { for INQUIRY_PRACTICES.iter().map(|practice| html! {
                                        <option value={*practice} selected={form.practice == *practice}>{ *practice }</option>
                                    }) }
                                </select>
                            </div>
                        </div>

                        <div>
                            <label>{"How can we help? *"}</label>
                            <textarea rows="4" value={form.message.clone()} oninput={on_message} />
                        </div>

                        {
                            match &*notice {
                                Some(Notice::Missing(fields)) => html! {
                                    <p class="form-notice error">{ format!("Please complete: {}", fields.join(", ")) }</p>
                                },
                                Some(Notice::Received) => html! {
                                    <p class="form-notice success">{"Thank you. A member of our team will be in touch shortly."}</p>
                                },
                                None => html! {},
                            }
                        }

                        <button type="submit" class="submit-button">{"Submit Inquiry"}</button>
                    </form>
                </div>

                <div class="slide-right">
                    <span class="eyebrow">{"PRINCIPAL LOCATIONS"}</span>
                    <h2 class="contact-title">{"22 Offices Nationwide"}</h2>

                    <div class="office-grid">
                        { for OFFICES.iter().enumerate().map(|(idx, office)| html! {
                            <a href="#" class="office-link" style={format!("animation-delay: {}ms", idx * 50)}>{ *office }</a>
                        }) }
                    </div>

                    <div class="main-office">
                        <h3>{"Main Office"}</h3>
                        <p>
                            {"200 East Las Olas Boulevard"}<br />
                            {"Fort Lauderdale, FL 33301"}
                        </p>
                        <p class="main-office-phone">
                            <a href="tel:8884911120">{"(888) 491-1120"}</a>
                        </p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 5rem 0;
                    background: #ffffff;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }

                .contact-title {
                    color: #1e3a5f;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 2.25rem;
                    font-weight: 400;
                    margin: 1rem 0 2rem;
                }

                .slide-left { animation: slideFromLeft 0.6s ease-out; }
                .slide-right { animation: slideFromRight 0.6s ease-out; }

                @keyframes slideFromRight {
                    from { opacity: 0; transform: translateX(30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .contact-form label {
                    display: block;
                    color: rgba(30, 58, 95, 0.7);
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }

                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    border: none;
                    border-bottom: 2px solid rgba(30, 58, 95, 0.2);
                    padding: 0.5rem 0;
                    background: transparent;
                    font: inherit;
                    transition: border-color 0.3s ease;
                }

                .contact-form textarea { resize: none; }

                .contact-form input:focus,
                .contact-form select:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #c9a227;
                }

                .form-notice {
                    margin: 0;
                    font-size: 0.875rem;
                }

                .form-notice.error { color: #b91c1c; }
                .form-notice.success { color: #1e3a5f; }

                .submit-button {
                    align-self: flex-start;
                    background: #1e3a5f;
                    color: #ffffff;
                    border: none;
                    padding: 1rem 2rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .submit-button:hover {
                    background: #c9a227;
                    color: #1e3a5f;
                    transform: scale(1.02);
                }

                .submit-button:active { transform: scale(0.98); }

                .office-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }

                .office-link {
                    color: #1e3a5f;
                    text-decoration: none;
                    padding: 0.5rem 0;
                    border-bottom: 1px solid rgba(30, 58, 95, 0.1);
                    opacity: 0;
                    animation: fadeUpSmall 0.4s ease-out forwards;
                    transition: color 0.3s ease;
                }

                .office-link:hover { color: #c9a227; }

                @keyframes fadeUpSmall {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .main-office {
                    margin-top: 3rem;
                    padding: 1.5rem;
                    background: rgba(30, 58, 95, 0.05);
                }

                .main-office h3 {
                    color: #1e3a5f;
                    font-family: Georgia, "Times New Roman", serif;
                    font-size: 1.25rem;
                    font-weight: 400;
                    margin: 0 0 1rem;
                }

                .main-office p {
                    color: rgba(30, 58, 95, 0.7);
                    margin: 0;
                }

                .main-office-phone {
                    margin-top: 1rem !important;
                    font-weight: 500;
                }

                .main-office-phone a {
                    color: #1e3a5f;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .main-office-phone a:hover { color: #c9a227; }

                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }

                @media (max-width: 768px) {
                    .form-row { grid-template-columns: 1fr; }
                    .office-grid { grid-template-columns: repeat(2, 1fr); }
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
    fn blank_form_lists_every_required_field() {
        assert_eq!(
            ContactForm::default().missing_required(),
            vec!["Full Name", "Email", "How can we help?"]
        );
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let form = ContactForm {
            name: "Jane Roe".into(),
            email: "   ".into(),
            message: "Closing on a condo".into(),
            ..ContactForm::default()
        };
        assert_eq!(form.missing_required(), vec!["Email"]);
    }

    #[test]
    fn optional_fields_are_not_required() {
        let form = ContactForm {
            name: "Jane Roe".into(),
            email: "jane@example.com".into(),
            message: "Visa renewal".into(),
            ..ContactForm::default()
        };
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn set_targets_a_single_field() {
        let mut form = ContactForm::default();
        form.set(Field::Practice, "Cannabis".into());
        form.set(Field::Phone, "555-0100".into());
        assert_eq!(form.practice, "Cannabis");
        assert_eq!(form.phone, "555-0100");
        assert!(form.name.is_empty());
    }

    #[test]
    fn twelve_principal_offices() {
        assert_eq!(OFFICES.len(), 12);
        assert!(OFFICES.contains(&"Fort Lauderdale"));
    }
}
