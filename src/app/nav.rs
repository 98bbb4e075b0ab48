use leptos::prelude::*;
use leptos_router::components::*;

use crate::{profile::profile, section::Section, theme::Theme};

use super::controller::PageController;

#[component]
pub fn NavBar(theme: Theme) -> impl IntoView {
    let page = expect_context::<PageController>();
    let palette = theme.palette();
    let menu_open = page.menu_open();
    let active = page.active_section();

    let desktop_links = Section::ALL
        .into_iter()
        .map(|section| {
            let class = move || {
                let state = if active.get() == section {
                    palette.nav_active
                } else {
                    palette.nav_idle
                };
                format!(
                    "text-sm font-medium transition-all duration-300 {} {state}",
                    palette.nav_hover
                )
            };
            view! {
                <button class=class on:click=move |_| page.navigate(section)>
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    let mobile_links = move || {
        Section::ALL
            .into_iter()
            .map(|section| {
                let class = move || {
                    let state = if active.get() == section {
                        palette.mobile_active
                    } else {
                        palette.mobile_idle
                    };
                    format!("block w-full text-left py-2 px-4 rounded-lg transition-all {state}")
                };
                view! {
                    <button class=class on:click=move |_| page.navigate(section)>
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class=palette.nav>
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <button class=palette.brand on:click=move |_| page.navigate(Section::Home)>
                        {profile().initials.clone()}
                    </button>
                    <div class="hidden md:flex items-center space-x-8">
                        {desktop_links}
                        <ThemeSwitch theme />
                    </div>
                    <button
                        class="md:hidden p-2 rounded-lg transition-colors text-2xl leading-none"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| page.toggle_menu()
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 pb-4 space-y-3 animate-fadeIn">
                        {mobile_links()} <ThemeSwitch theme />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn ThemeSwitch(theme: Theme) -> impl IntoView {
    let target = theme.other();
    view! {
        <A
            href=target.route()
            attr:class="text-xs uppercase tracking-widest opacity-70 hover:opacity-100 transition-opacity"
        >
            {theme.switch_label()}
        </A>
    }
}
