use leptos::prelude::*;
use serde_json::json;

use crate::components::RecommendationContext;

/// Recommendation form. Writes its results into the shared
/// RecommendationContext so the chat widget can reference them.
#[component]
pub fn RecommendPage() -> impl IntoView {
    let (trimester, set_trimester) = signal("first".to_string());
    let (risk, set_risk) = signal("low".to_string());
    let (tips, set_tips) = signal::<Vec<&'static str>>(Vec::new());

    let recommendation = use_context::<RecommendationContext>();

    let generate = move |_| {
        let trimester = trimester.get_untracked();
        let risk = risk.get_untracked();

        let selected = tips_for(&trimester, &risk);
        set_tips.set(selected.clone());

        if let Some(ctx) = recommendation {
            ctx.results.set(json!({
                "trimester": trimester,
                "risk": risk,
                "tips": selected,
            }));
        }
    };

    view! {
        <div class="w-full mx-auto max-w-2xl px-6 py-10">
            <h1 class="text-3xl font-bold text-rose-600 mb-6">"Your recommendations"</h1>

            <div class="space-y-4 mb-6">
                <label class="block text-gray-700">
                    "Trimester"
                    <select
                        class="block mt-1 w-full px-3 py-2 rounded-lg border border-rose-100 bg-white"
                        on:change=move |ev| set_trimester.set(event_target_value(&ev))
                    >
                        <option value="first">"First"</option>
                        <option value="second">"Second"</option>
                        <option value="third">"Third"</option>
                    </select>
                </label>

                <label class="block text-gray-700">
                    "Risk level"
                    <select
                        class="block mt-1 w-full px-3 py-2 rounded-lg border border-rose-100 bg-white"
                        on:change=move |ev| set_risk.set(event_target_value(&ev))
                    >
                        <option value="low">"Low"</option>
                        <option value="moderate">"Moderate"</option>
                        <option value="high">"High"</option>
                    </select>
                </label>

                <button
                    class="px-5 py-2 rounded-lg bg-rose-500 text-white hover:bg-rose-600 transition-colors"
                    on:click=generate
                >
                    "Generate"
                </button>
            </div>

            {move || {
                let tips = tips.get();
                (!tips.is_empty())
                    .then(|| {
                        view! {
                            <ul class="space-y-2">
                                <For
                                    each=move || tips.clone()
                                    key=|tip| *tip
                                    children=move |tip| {
                                        view! {
                                            <li class="px-4 py-3 rounded-lg bg-rose-50 text-gray-800">
                                                {tip}
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                    })
            }}
        </div>
    }
}

fn tips_for(trimester: &str, risk: &str) -> Vec<&'static str> {
    let mut tips = match trimester {
        "first" => vec![
            "Start a daily prenatal vitamin with folic acid.",
            "Schedule your first prenatal checkup.",
        ],
        "second" => vec![
            "Book the anatomy ultrasound around week 20.",
            "Add gentle strength work to your routine.",
        ],
        _ => vec![
            "Track fetal movement daily.",
            "Pack your hospital bag and review your birth plan.",
        ],
    };

    if risk != "low" {
        tips.push("Discuss your risk factors with your care provider at every visit.");
    }
    tips
}
