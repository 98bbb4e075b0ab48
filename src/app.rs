mod backdrop;
mod controller;
mod nav;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{profile::profile, theme::Theme};

use backdrop::Backdrop;
use controller::{use_section_tracking, PageController};
use nav::NavBar;
use sections::{AboutSection, ContactSection, Footer, HomeSection, WorkSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = profile().name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=GradientPage />
                <Route path=path!("/terminal") view=TerminalPage />
            </Routes>
        </Router>
    }
}

#[component]
fn GradientPage() -> impl IntoView {
    view! { <PortfolioPage theme=Theme::Gradient /> }
}

#[component]
fn TerminalPage() -> impl IntoView {
    view! { <PortfolioPage theme=Theme::Terminal /> }
}

/// The whole single-page document in one theme.
///
/// Owns the page controller, so switching themes tears down the scroll
/// listener and animation of the previous page.
#[component]
fn PortfolioPage(theme: Theme) -> impl IntoView {
    let page = PageController::provide();
    use_section_tracking(page);
    let palette = theme.palette();

    view! {
        <Title text=profile().role.clone() />
        <div class=palette.page>
            <Backdrop theme />
            <NavBar theme />
            <main>
                <HomeSection theme />
                <AboutSection theme />
                <WorkSection theme />
                <ContactSection theme />
            </main>
            <Footer theme />
        </div>
    }
}
