//! The single marketing page: hero, services, about, team and contact
//! sections. All copy goes through the i18n table; the four section ids
//! are the scroll anchors the nav targets.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::contact::form::ContactForm;
use crate::i18n::{t, Lang};
use crate::scroll_to_section;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub lang: Lang,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let lang = props.lang;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let scroll_to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(135deg, #fffbeb, #fff7ed);
                        color: #1e293b;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-page section {
                        padding: 4rem 1.5rem;
                    }
                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.5rem;
                        font-weight: 700;
                        color: #1e293b;
                        margin: 0 0 1rem;
                    }
                    .section-heading p {
                        font-size: 1.25rem;
                        color: #475569;
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    /* hero */
                    .hero-section {
                        padding-top: 7rem;
                        text-align: center;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        font-weight: 700;
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .brand-gradient {
                        background: linear-gradient(to right, #ea580c, #d97706, #ca8a04);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero-lead {
                        font-size: 1.35rem;
                        color: #475569;
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .cta-button {
                        border: none;
                        border-radius: 10px;
                        padding: 0.85rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #fff;
                        background: linear-gradient(to right, #ea580c, #d97706);
                        cursor: pointer;
                    }
                    .cta-button:hover {
                        background: linear-gradient(to right, #c2410c, #b45309);
                    }
                    .outline-button {
                        display: inline-block;
                        border: 1px solid #ea580c;
                        border-radius: 10px;
                        padding: 0.85rem 2rem;
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #ea580c;
                        background: transparent;
                        text-decoration: none;
                        cursor: pointer;
                    }
                    .outline-button:hover { background: #fff7ed; }

                    /* cards */
                    .value-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        margin-top: 4rem;
                    }
                    .value-card,
                    .about-card,
                    .team-card,
                    .service-card {
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 14px;
                        box-shadow: 0 10px 25px rgba(120, 53, 15, 0.08);
                        padding: 1.5rem;
                    }
                    .value-card { text-align: center; }
                    .icon-circle {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #f97316, #f59e0b);
                        margin: 0 auto 1rem;
                    }
                    .about-card .icon-circle {
                        margin: 0 0 1rem;
                        border-radius: 10px;
                    }
                    .value-card h3, .about-card h3 {
                        font-size: 1.15rem;
                        margin: 0 0 0.5rem;
                        color: #1e293b;
                    }
                    .value-card p, .about-card p {
                        color: #475569;
                        margin: 0;
                    }

                    /* services */
                    .services-section { background: rgba(255, 255, 255, 0.5); }
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    .service-card { padding: 2rem; }
                    .service-card h3 {
                        font-size: 1.5rem;
                        margin: 0 0 0.5rem;
                        color: #1e293b;
                    }
                    .service-tagline {
                        color: #475569;
                        margin: 0 0 1.25rem;
                    }
                    .checklist {
                        list-style: none;
                        margin: 0 0 1.5rem;
                        padding: 0;
                        color: #475569;
                    }
                    .checklist li {
                        position: relative;
                        padding-left: 1.75rem;
                        margin-bottom: 0.75rem;
                    }
                    .checklist li::before {
                        content: "\2713";
                        position: absolute;
                        left: 0;
                        color: #ea580c;
                        font-weight: 700;
                    }
                    .training-banner {
                        margin-top: 2rem;
                        border-radius: 14px;
                        background: linear-gradient(to right, #ffedd5, #fef3c7);
                        padding: 2rem;
                    }
                    .training-banner h3 {
                        font-size: 1.9rem;
                        margin: 0 0 0.5rem;
                    }
                    .training-banner .service-tagline { font-size: 1.1rem; }
                    .training-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        align-items: center;
                    }

                    /* about */
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .about-actions {
                        text-align: center;
                        margin-top: 3rem;
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    /* team */
                    .team-section { background: rgba(255, 255, 255, 0.5); }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .team-card { text-align: center; padding: 2rem; }
                    .avatar-badge {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #f97316, #f59e0b);
                        color: #fff;
                        font-size: 1.5rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin: 0 auto 1.5rem;
                    }
                    .team-card h3 {
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem;
                    }
                    .team-role {
                        color: #ea580c;
                        font-weight: 600;
                        margin: 0 0 0.75rem;
                    }
                    .team-bio { color: #475569; margin: 0; }
                    .team-outro {
                        text-align: center;
                        margin-top: 3rem;
                        font-size: 1.1rem;
                        color: #475569;
                    }

                    /* contact */
                    .contact-inner { max-width: 56rem; margin: 0 auto; }
                    .contact-info {
                        margin-top: 3rem;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        text-align: center;
                        color: #475569;
                    }
                    .social-block {
                        margin-top: 2rem;
                        text-align: center;
                        color: #475569;
                    }
                    .social-block a {
                        color: #94a3b8;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .social-block a:hover { color: #ea580c; }

                    /* footer */
                    .site-footer {
                        background: #1e293b;
                        color: #fff;
                        text-align: center;
                        padding: 2rem 1.5rem;
                    }
                    .site-footer .footer-brand {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                    }
                    .footer-badge {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 8px;
                        background: linear-gradient(135deg, #f97316, #f59e0b);
                        color: #fff;
                        font-size: 0.875rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .site-footer p { color: #94a3b8; margin: 0; }

                    @media (max-width: 950px) {
                        .value-grid,
                        .services-grid,
                        .about-grid,
                        .team-grid,
                        .training-columns,
                        .contact-info {
                            grid-template-columns: 1fr;
                        }
                        .hero-title { font-size: 2.5rem; }
                    }
                "#}
            </style>

            // Hero
            <section class="hero-section">
                <div class="section-inner">
                    <h1 class="hero-title">
                        <span class="brand-gradient">{"Requena"}</span>
                        <br />
                        <span>{"Software House"}</span>
                    </h1>
                    <p class="hero-lead">{ t("hero.lead", lang) }</p>
                    <button class="cta-button" onclick={scroll_to_contact.clone()}>
                        { t("hero.cta", lang) }
                    </button>

                    <div class="value-grid">
                        <div class="value-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("value.innovation.title", lang) }</h3>
                            <p>{ t("value.innovation.body", lang) }</p>
                        </div>
                        <div class="value-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("value.trust.title", lang) }</h3>
                            <p>{ t("value.trust.body", lang) }</p>
                        </div>
                        <div class="value-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("value.results.title", lang) }</h3>
                            <p>{ t("value.results.body", lang) }</p>
                        </div>
                    </div>
                </div>
            </section>

            // Services
            <section id="services" class="services-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{ t("services.title", lang) }</h2>
                        <p>{ t("services.lead", lang) }</p>
                    </div>
                    <div class="services-grid">
                        <div class="service-card">
                            <h3>{ t("services.cloud.title", lang) }</h3>
                            <p class="service-tagline">{ t("services.cloud.tagline", lang) }</p>
                            <ul class="checklist">
                                <li>{ t("services.cloud.item1", lang) }</li>
                                <li>{ t("services.cloud.item2", lang) }</li>
                                <li>{ t("services.cloud.item3", lang) }</li>
                                <li>{ t("services.cloud.item4", lang) }</li>
                            </ul>
                            <button class="cta-button" onclick={scroll_to_contact.clone()}>
                                { t("services.cloud.cta", lang) }
                            </button>
                        </div>
                        <div class="service-card">
                            <h3>{ t("services.apps.title", lang) }</h3>
                            <p class="service-tagline">{ t("services.apps.tagline", lang) }</p>
                            <ul class="checklist">
                                <li>{ t("services.apps.item1", lang) }</li>
                                <li>{ t("services.apps.item2", lang) }</li>
                                <li>{ t("services.apps.item3", lang) }</li>
                            </ul>
                            <button class="cta-button" onclick={scroll_to_contact.clone()}>
                                { t("services.apps.cta", lang) }
                            </button>
                        </div>
                        <div class="service-card">
                            <h3>{ t("services.ai.title", lang) }</h3>
                            <p class="service-tagline">{ t("services.ai.tagline", lang) }</p>
                            <ul class="checklist">
                                <li>{ t("services.ai.item1", lang) }</li>
                                <li>{ t("services.ai.item2", lang) }</li>
                                <li>{ t("services.ai.item3", lang) }</li>
                            </ul>
                            <button class="cta-button" onclick={scroll_to_contact.clone()}>
                                { t("services.ai.cta", lang) }
                            </button>
                        </div>
                        <div class="service-card">
                            <h3>{ t("services.analytics.title", lang) }</h3>
                            <p class="service-tagline">{ t("services.analytics.tagline", lang) }</p>
                            <ul class="checklist">
                                <li>{ t("services.analytics.item1", lang) }</li>
                                <li>{ t("services.analytics.item2", lang) }</li>
                                <li>{ t("services.analytics.item3", lang) }</li>
                            </ul>
                            <button class="cta-button" onclick={scroll_to_contact.clone()}>
                                { t("services.analytics.cta", lang) }
                            </button>
                        </div>
                    </div>

                    <div class="training-banner">
                        <h3>{ t("training.title", lang) }</h3>
                        <p class="service-tagline">{ t("training.lead", lang) }</p>
                        <div class="training-columns">
                            <ul class="checklist">
                                <li>{ t("training.item1", lang) }</li>
                                <li>{ t("training.item2", lang) }</li>
                                <li>{ t("training.item3", lang) }</li>
                            </ul>
                            <div style="text-align: center;">
                                <button class="cta-button" onclick={scroll_to_contact.clone()}>
                                    { t("training.cta", lang) }
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // About
            <section id="about">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{ t("about.title", lang) }</h2>
                        <p>{ t("about.lead", lang) }</p>
                    </div>
                    <div class="about-grid">
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.expertise.title", lang) }</h3>
                            <p>{ t("about.expertise.body", lang) }</p>
                        </div>
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.endtoend.title", lang) }</h3>
                            <p>{ t("about.endtoend.body", lang) }</p>
                        </div>
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.security.title", lang) }</h3>
                            <p>{ t("about.security.body", lang) }</p>
                        </div>
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.agile.title", lang) }</h3>
                            <p>{ t("about.agile.body", lang) }</p>
                        </div>
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.multi.title", lang) }</h3>
                            <p>{ t("about.multi.body", lang) }</p>
                        </div>
                        <div class="about-card">
                            <div class="icon-circle"></div>
                            <h3>{ t("about.support.title", lang) }</h3>
                            <p>{ t("about.support.body", lang) }</p>
                        </div>
                    </div>
                    <div class="about-actions">
                        <button class="cta-button" onclick={scroll_to_contact.clone()}>
                            { t("about.cta", lang) }
                        </button>
                        <a
                            class="outline-button"
                            href={config::COMPANY_SITE_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { t("about.visit", lang) }
                        </a>
                    </div>
                </div>
            </section>

            // Team
            <section id="team" class="team-section">
                <div class="section-inner">
                    <div class="section-heading">
                        <h2>{ t("team.title", lang) }</h2>
                        <p>{ t("team.lead", lang) }</p>
                    </div>
                    <div class="team-grid">
                        <div class="team-card">
                            <div class="avatar-badge">{"M"}</div>
                            <h3>{"Michał"}</h3>
                            <p class="team-role">{ t("team.michal.role", lang) }</p>
                            <p class="team-bio">{ t("team.michal.bio", lang) }</p>
                        </div>
                        <div class="team-card">
                            <div class="avatar-badge">{"Ł"}</div>
                            <h3>{"Łukasz"}</h3>
                            <p class="team-role">{ t("team.lukasz.role", lang) }</p>
                            <p class="team-bio">{ t("team.lukasz.bio", lang) }</p>
                        </div>
                        <div class="team-card">
                            <div class="avatar-badge">{"P"}</div>
                            <h3>{"Paweł"}</h3>
                            <p class="team-role">{ t("team.pawel.role", lang) }</p>
                            <p class="team-bio">{ t("team.pawel.bio", lang) }</p>
                        </div>
                    </div>
                    <p class="team-outro">{ t("team.outro", lang) }</p>
                </div>
            </section>

            // Contact
            <section id="contact">
                <div class="contact-inner">
                    <div class="section-heading">
                        <h2>{ t("contact.title", lang) }</h2>
                        <p>{ t("contact.lead", lang) }</p>
                    </div>

                    <ContactForm {lang} />

                    <div class="contact-info">
                        <div>{ config::CONTACT_EMAIL }</div>
                        <div>{ config::CONTACT_PHONE }</div>
                        <div>{ config::COMPANY_SITE_LABEL }</div>
                    </div>

                    <div class="social-block">
                        <p>{ t("contact.follow", lang) }</p>
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">
                            {"LinkedIn"}
                        </a>
                    </div>
                </div>
            </section>

            <footer class="site-footer">
                <div class="footer-brand">
                    <span class="footer-badge">{"R"}</span>
                    <span>{"ReSH - Requena Software House"}</span>
                </div>
                <p>{"© 2024 Requena Software House. Building the future with data, AI, and innovation."}</p>
            </footer>
        </div>
    }
}
