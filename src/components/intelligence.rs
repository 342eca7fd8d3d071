use leptos::prelude::*;

#[component]
pub fn IntelligencePage() -> impl IntoView {
    view! {
        <div class="w-full mx-auto max-w-2xl px-6 py-10">
            <h1 class="text-3xl font-bold text-rose-600 mb-6">"Health insights"</h1>
            <div class="space-y-4 text-gray-700">
                <p>
                    "Materna combines your recommendation profile with an AI assistant
                    that can answer questions about nutrition, checkups, and symptoms."
                </p>
                <p>
                    "Open the chat bubble in the corner to ask about anything on this
                    page; the assistant sees the recommendations you generated."
                </p>
                <p class="text-sm text-gray-500">
                    "Materna is not a substitute for professional medical advice.
                    Always consult your care provider about concerning symptoms."
                </p>
            </div>
        </div>
    }
}
