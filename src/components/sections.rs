use std::rc::Rc;

use chrono::Datelike;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::counter::Counter;
use crate::components::lazy_image::LazyImage;
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::content::{self, Feature, Icon, Project, SiteContent, Testimonial};
use crate::viewport::registry::{use_section, SectionId};

#[derive(Properties, PartialEq)]
pub struct NavigableProps {
    pub on_navigate: Callback<SectionId>,
}

fn go(on_navigate: &Callback<SectionId>, id: SectionId) -> Callback<MouseEvent> {
    let on_navigate = on_navigate.clone();
    Callback::from(move |_| on_navigate.emit(id))
}

#[function_component(Hero)]
pub fn hero(props: &NavigableProps) -> Html {
    let node = use_section(SectionId::Home);

    html! {
        <section id="home" ref={node} class="hero">
            <div class="hero-shapes">
                <div class="shape ring"></div>
                <div class="shape square"></div>
            </div>
            <div class="hero-content">
                <div class="hero-text">
                    <div class="hero-kicker">
                        <div class="kicker-line"></div>
                        <span>{"Engineering Excellence"}</span>
                    </div>
                    <h1>{"Build the "}<span class="accent">{"Future"}</span>{" with Precision"}</h1>
                    <p class="hero-subtitle">{"Innovative engineering solutions for tomorrow's challenges"}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={go(&props.on_navigate, SectionId::Services)}>
                            {"Explore Services"}
                        </button>
                        <button class="hero-cta outline" onclick={go(&props.on_navigate, SectionId::Contact)}>
                            {"Contact Us"}
                        </button>
                    </div>
                </div>
                <div class="hero-visual">
                    <LazyImage
                        src={config::asset_url(content::HERO_IMAGE)}
                        alt="Engineering visualization"
                        class={classes!("hero-image")}
                    />
                    <div class="hero-badge">{ Icon::Target.glyph() }</div>
                </div>
            </div>
            <button class="scroll-hint" aria-label="Scroll to about" onclick={go(&props.on_navigate, SectionId::About)}>
                {"⌄"}
            </button>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContentProps {
    pub content: Rc<SiteContent>,
}

#[function_component(About)]
pub fn about(props: &ContentProps) -> Html {
    let node = use_section(SectionId::About);

    html! {
        <section id="about" ref={node} class="page-section">
            <div class="section-inner two-col">
                <div class="about-copy">
                    <SectionTitle subtitle="About Us" title="Engineering Excellence Since 1999" />
                    <p>
                        {"TechForge is a leading engineering firm specializing in software development, IoT solutions, and advanced analytics. With over two decades of experience, we've delivered innovative solutions across industries worldwide."}
                    </p>
                    <ul class="highlights">
                        { for props.content.about_highlights.iter().map(|item| html! {
                            <li>
                                <span class="check">{ Icon::CheckCircle.glyph() }</span>
                                <span>{ item }</span>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="stats-grid">
                    { for props.content.stats.iter().map(|stat| html! {
                        <Counter
                            key={stat.label.clone()}
                            value={stat.value}
                            label={stat.label.clone()}
                            icon={stat.icon}
                            suffix={stat.suffix.clone()}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}

/// Not a navigation target, so it stays out of the section registry.
#[function_component(Principles)]
pub fn principles(props: &ContentProps) -> Html {
    html! {
        <section class="page-section light">
            <div class="section-inner">
                <SectionTitle
                    subtitle="Our Principles"
                    title="Engineering Excellence"
                    description={Some(AttrValue::from("The core principles that drive our engineering approach"))}
                    center={true}
                />
                <div class="grid four">
                    { for props.content.principles.iter().map(|principle| html! {
                        <div class="principle" key={principle.title.clone()}>
                            <div class="principle-icon">{ principle.icon.glyph() }</div>
                            <h3>{ &principle.title }</h3>
                            <p>{ &principle.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn service_card(service: &Feature) -> Html {
    html! {
        <div class="card service-card" key={service.title.clone()}>
            <div class="card-icon">{ service.icon.glyph() }</div>
            <h3>{ &service.title }</h3>
            <p>{ &service.description }</p>
            <div class="card-more">{"Learn more →"}</div>
        </div>
    }
}

#[function_component(Services)]
pub fn services(props: &ContentProps) -> Html {
    let node = use_section(SectionId::Services);

    html! {
        <section id="services" ref={node} class="page-section">
            <div class="section-inner">
                <SectionTitle
                    subtitle="Our Services"
                    title="Comprehensive Engineering Solutions"
                    description={Some(AttrValue::from("From concept to deployment, we deliver end-to-end solutions"))}
                    center={true}
                />
                <div class="grid three">
                    { for props.content.services.iter().map(service_card) }
                </div>
            </div>
        </section>
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <div class="card project-card" key={project.title.clone()}>
            <div class="project-media">
                <LazyImage
                    src={config::asset_url(&project.image)}
                    alt={project.title.clone()}
                    class={classes!("project-image")}
                />
                <div class="project-overlay">
                    <button class="project-button">{"View Project →"}</button>
                </div>
            </div>
            <div class="project-body">
                <div class="project-category">{ &project.category }</div>
                <h3>{ &project.title }</h3>
                <p>{ &project.description }</p>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ContentProps) -> Html {
    let node = use_section(SectionId::Projects);

    html! {
        <section id="projects" ref={node} class="page-section light">
            <div class="section-inner">
                <SectionTitle
                    subtitle="Our Work"
                    title="Featured Projects"
                    description={Some(AttrValue::from("Real-world solutions that drive business success"))}
                    center={true}
                />
                <div class="grid two">
                    { for props.content.projects.iter().map(project_card) }
                </div>
            </div>
        </section>
    }
}

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial-card" key={testimonial.author.clone()}>
            <div class="quote-mark">{"\u{201C}"}</div>
            <p class="quote">{ &testimonial.text }</p>
            <div>
                <p class="author">{ &testimonial.author }</p>
                <p class="position">{ format!("{}, {}", testimonial.position, testimonial.company) }</p>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &ContentProps) -> Html {
    let node = use_section(SectionId::Testimonials);

    html! {
        <section id="testimonials" ref={node} class="page-section">
            <div class="section-inner">
                <SectionTitle subtitle="Client Testimonials" title="What Our Clients Say" center={true} />
                <div class="grid three">
                    { for props.content.testimonials.iter().map(testimonial_card) }
                </div>
            </div>
        </section>
    }
}

/// The form is display-only: there is no endpoint to send it to.
#[function_component(ContactForm)]
fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    html! {
        <div class="contact-form">
            <input type="text" placeholder="Your Name" value={(*name).clone()} oninput={on_name} />
            <input type="email" placeholder="Your Email" value={(*email).clone()} oninput={on_email} />
            <textarea rows="5" placeholder="Your Message" value={(*message).clone()} oninput={on_message} />
            <button type="button" class="send-button">{"Send Message"}</button>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContentProps) -> Html {
    let node = use_section(SectionId::Contact);

    html! {
        <section id="contact" ref={node} class="page-section dark">
            <div class="section-inner two-col">
                <div>
                    <h2>{"Get In Touch"}</h2>
                    <p class="contact-lead">{"Ready to start your next project? Contact us today."}</p>
                    <div class="contact-list">
                        { for props.content.contact_info.iter().map(|info| html! {
                            <div class="contact-entry" key={info.title.clone()}>
                                <div class="contact-icon">{ info.icon.glyph() }</div>
                                <div>
                                    <h4>{ &info.title }</h4>
                                    <p>{ &info.value }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="social-links">
                        { for props.content.social_links.iter().map(|social| html! {
                            <a
                                key={social.label.clone()}
                                href={social.href.clone()}
                                class="social-link"
                                aria-label={social.label.clone()}
                            >
                                { social.icon.glyph() }
                            </a>
                        }) }
                    </div>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="nav-logo">{"Tech"}<span class="accent">{"Forge"}</span></div>
                <div class="footer-legal">
                    <p>{ format!("© {year} Developed by David. All rights reserved.") }</p>
                    <p class="small">{"Engineering Excellence Since 1999"}</p>
                </div>
            </div>
        </footer>
    }
}
