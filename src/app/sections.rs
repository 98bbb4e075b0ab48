use leptos::prelude::*;

use crate::{profile::profile, section::Section, theme::Theme};

use super::controller::PageController;

#[component]
fn SectionHeading(theme: Theme, text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl md:text-5xl font-bold text-center mb-12">
            <span class=theme.palette().heading>{theme.heading_prefix()} {text}</span>
        </h2>
    }
}

#[component]
pub fn HomeSection(theme: Theme) -> impl IntoView {
    let page = expect_context::<PageController>();
    let palette = theme.palette();
    let profile = profile();

    view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center px-6 pt-20"
        >
            <div class="relative z-10 max-w-6xl mx-auto w-full">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="order-2 md:order-1 space-y-6 animate-slideInLeft">
                        <h1 class="text-5xl md:text-7xl font-bold leading-tight">
                            <span class=palette.heading>{profile.name.clone()}</span>
                        </h1>
                        <p class="text-xl md:text-2xl font-light opacity-90">
                            {theme.heading_prefix()}
                            {profile.role.clone()}
                        </p>
                        <p class="text-lg leading-relaxed opacity-70">{profile.tagline.clone()}</p>
                        <div class="flex items-center space-x-4 pt-4">
                            <button
                                class=palette.button_primary
                                on:click=move |_| page.navigate(Section::Work)
                            >
                                "View My Work"
                            </button>
                            <button
                                class=palette.button_secondary
                                on:click=move |_| page.navigate(Section::Contact)
                            >
                                "Contact Me"
                            </button>
                        </div>
                    </div>
                    <div class="order-1 md:order-2 animate-slideInRight">
                        <img
                            src=profile.portrait.clone()
                            alt=profile.name.clone()
                            class="relative rounded-2xl shadow-2xl w-full h-auto object-cover aspect-[3/4] border-2 border-slate-700"
                        />
                    </div>
                </div>
            </div>
            <button
                class=format!(
                    "absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce text-3xl {}",
                    palette.accent_text,
                )
                aria-label="Scroll to about"
                on:click=move |_| page.navigate(Section::About)
            >
                "⌄"
            </button>
        </section>
    }
}

#[component]
pub fn AboutSection(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let profile = profile();

    let list = move |items: &[String]| {
        items
            .iter()
            .map(|item| {
                view! {
                    <li class="flex items-center space-x-2">
                        <span class=palette.bullet></span>
                        <span>{item.clone()}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section
            id=Section::About.id()
            class="relative min-h-screen flex items-center justify-center px-6 py-20"
        >
            <div class="relative z-10 max-w-4xl mx-auto w-full space-y-8 animate-fadeInUp">
                <SectionHeading theme text="About Me" />
                <div class=format!("rounded-2xl p-8 md:p-12 transition-all duration-300 {}", palette.card)>
                    {profile
                        .about
                        .iter()
                        .map(|p| view! { <p class="text-lg leading-relaxed mb-6">{p.clone()}</p> })
                        .collect_view()}
                    <div class="grid md:grid-cols-2 gap-6 mt-8">
                        <div class="space-y-4">
                            <h3 class=format!("text-xl font-semibold mb-4 {}", palette.accent_text)>
                                "Technical Skills"
                            </h3>
                            <ul class="space-y-2">{list(&profile.skills)}</ul>
                        </div>
                        <div class="space-y-4">
                            <h3 class=format!("text-xl font-semibold mb-4 {}", palette.accent_text)>
                                "Core Competencies"
                            </h3>
                            <ul class="space-y-2">{list(&profile.competencies)}</ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn WorkSection(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let projects = profile()
        .projects
        .iter()
        .map(|project| {
            view! {
                <article class=format!(
                    "group rounded-xl p-6 transition-all duration-300 hover:scale-105 {}",
                    palette.card,
                )>
                    <h3 class="text-xl font-semibold mb-3">{project.title.clone()}</h3>
                    <p class="text-sm leading-relaxed mb-4 opacity-70">
                        {project.description.clone()}
                    </p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|tech| view! { <span class=palette.chip>{tech.clone()}</span> })
                            .collect_view()}
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Work.id()
            class="relative min-h-screen flex items-center justify-center px-6 py-20"
        >
            <div class="relative z-10 max-w-6xl mx-auto w-full space-y-12">
                <SectionHeading theme text="My Work" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{projects}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ContactSection(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let profile = profile();

    let links = profile
        .contacts
        .iter()
        .map(|contact| {
            let (target, rel) = if contact.is_external() {
                (Some("_blank"), Some("noopener noreferrer"))
            } else {
                (None, None)
            };
            view! {
                <a
                    href=contact.href()
                    target=target
                    rel=rel
                    class="flex flex-col items-center p-6 rounded-xl bg-white/5 hover:bg-white/10 transition-all hover:scale-105 group"
                >
                    <svg
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        aria-hidden="true"
                        class=format!(
                            "w-8 h-8 mb-3 group-hover:scale-110 transition-transform {}",
                            palette.accent_text,
                        )
                    >
                        {contact
                            .icon_paths()
                            .iter()
                            .map(|d| view! { <path d=*d /> })
                            .collect_view()}
                    </svg>
                    <span class="text-sm">{contact.label.clone()}</span>
                </a>
            }
        })
        .collect_view();

    let send = profile.email().map(|email| {
        view! {
            <div class="text-center">
                <a href=email.href() class=format!("inline-block text-lg {}", palette.button_primary)>
                    "Send Me a Message"
                </a>
            </div>
        }
    });

    view! {
        <section
            id=Section::Contact.id()
            class="relative min-h-screen flex items-center justify-center px-6 py-20"
        >
            <div class="relative z-10 max-w-4xl mx-auto w-full space-y-8 animate-fadeInUp">
                <SectionHeading theme text="Get In Touch" />
                <div class=format!("rounded-2xl p-8 md:p-12 {}", palette.card)>
                    <p class="text-lg text-center mb-12">{profile.contact_blurb.clone()}</p>
                    <div class="grid md:grid-cols-3 gap-6 mb-12">{links}</div>
                    {send}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer(theme: Theme) -> impl IntoView {
    view! {
        <footer class=theme.palette().footer>
            <div class="max-w-7xl mx-auto px-6 text-center">
                <p>
                    {format!(
                        "© {} {}. All rights reserved.",
                        env!("BUILD_YEAR"),
                        profile().name,
                    )}
                </p>
            </div>
        </footer>
    }
}
