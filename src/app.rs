use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::chatbox::ChatBox;
use crate::components::intelligence::IntelligencePage;
use crate::components::navbar::Navbar;
use crate::components::recommend::RecommendPage;
use crate::components::RecommendationContext;
use crate::error_template::{AppError, ErrorTemplate};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Recommendation results are shared between the recommendation page and
    // the chat widget; the widget sends them along with every chat request.
    provide_context(RecommendationContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/materna.css"/>

        <Title text="Materna"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(AppError::NotFound);
                    view! {
                        <ErrorTemplate outside_errors/>
                    }
                    .into_view()
                }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("recommend") view=RecommendPage/>
                    <Route path=StaticSegment("intelligence") view=IntelligencePage/>
                </Routes>
            </main>
            // Global floating assistant, present on every view
            <ChatBox/>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="w-full mx-auto max-w-4xl px-6 py-12">
            <h1 class="text-4xl font-bold text-rose-600 mb-4">"Materna"</h1>
            <p class="text-lg text-gray-700 mb-8">
                "Personalized maternal healthcare guidance, from early pregnancy through postpartum."
            </p>
            <div class="flex space-x-4">
                <a
                    href="/recommend"
                    class="px-5 py-3 rounded-lg bg-rose-500 text-white hover:bg-rose-600 transition-colors"
                >
                    "Get recommendations"
                </a>
                <a
                    href="/intelligence"
                    class="px-5 py-3 rounded-lg border border-rose-300 text-rose-600 hover:bg-rose-50 transition-colors"
                >
                    "Health insights"
                </a>
            </div>
        </div>
    }
}
