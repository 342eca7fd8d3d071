use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <div class="flex justify-between items-center bg-rose-50 px-6 py-4">
            <a href="/" class="text-2xl font-semibold text-rose-600 hover:text-rose-700">
                "Materna"
            </a>
            <div class="items-end space-x-4">
                <a href="/recommend" class="text-rose-500 hover:text-rose-700 transition-colors">
                    "recommend"
                </a>
                <a href="/intelligence" class="text-rose-500 hover:text-rose-700 transition-colors">
                    "intelligence"
                </a>
            </div>
        </div>
    }
}
