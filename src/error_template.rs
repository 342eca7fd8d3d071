use http::status::StatusCode;
use leptos::prelude::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

// A basic function to display errors served by the error boundaries.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => RwSignal::new(e),
        None => match errors {
            Some(e) => e,
            None => panic!("No Errors found and we expected errors!"),
        },
    };
    let errors = errors.get_untracked();

    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    // Only the response code for the first error is actually sent from the server.
    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        let response = use_context::<ResponseOptions>();
        if let Some(response) = response {
            response.set_status(errors[0].status_code());
        }
    }

    view! {
        <div class="w-full mx-auto max-w-4xl px-6 py-12 text-center">
            <h1 class="text-3xl font-bold text-rose-600 mb-4">
                {if errors.len() > 1 { "Errors" } else { "Error" }}
            </h1>
            <For
                each=move || errors.clone().into_iter().enumerate()
                key=|(index, _error)| *index
                children=move |(_index, error)| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();
                    view! {
                        <h2 class="text-xl text-gray-700">{error_code.to_string()}</h2>
                        <p class="text-gray-500 mb-6">"Error: " {error_string}</p>
                        <a href="/" class="text-rose-500 hover:underline">
                            "Back to Materna"
                        </a>
                    }
                }
            />
        </div>
    }
}
