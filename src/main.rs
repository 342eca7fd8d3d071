use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::{
            body::Body as AxumBody,
            extract::State,
            http::Request,
            response::IntoResponse,
            routing::{get, post},
            Router,
        };
        use dotenv::dotenv;
        use env_logger::Env;
        use leptos::prelude::*;
        use leptos_axum::{generate_route_list, LeptosRoutes};
        use tower_http::cors::CorsLayer;
        use materna::app::{shell, App};
        use materna::handlers::chat_handler;
        use materna::relay_service::server::RelayService;
        use materna::state::AppState;
        use materna::types::CHAT_ENDPOINT;

        #[tokio::main]
        async fn main() {
            dotenv().ok();
            env_logger::init_from_env(Env::default().default_filter_or("info"));

            let conf = get_configuration(None).unwrap();
            let leptos_options = conf.leptos_options;
            let mut addr = leptos_options.site_addr;
            let routes = generate_route_list(App);

            // Fatal if GEMINI_API_KEY is missing; the server must not bind
            // without a credential for the upstream.
            let relay = RelayService::from_env();

            if let Ok(port) = std::env::var("PORT") {
                match port.parse() {
                    Ok(port) => addr.set_port(port),
                    Err(_) => log::warn!("Ignoring unparseable PORT value: {}", port),
                }
            }

            let app_state = AppState {
                leptos_options: leptos_options.clone(),
                relay,
            };

            // The chat API is open to any origin; everything else is served
            // same-origin by the Leptos routes.
            let app = Router::new()
                .route(CHAT_ENDPOINT, post(chat_handler))
                .layer(CorsLayer::permissive())
                .leptos_routes_with_handler(routes, get(|State(app_state): State<AppState>, request: Request<AxumBody>| async move {
                    let handler = leptos_axum::render_app_to_stream_with_context(
                        move || {
                            provide_context(app_state.clone());
                        },
                        move || shell(leptos_options.clone())
                    );
                    handler(request).await.into_response()
                }))
                .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
                .with_state(app_state);

            log::info!("Starting server at {}", addr);

            let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
            log::info!("listening on http://{}", &addr);
            axum::serve(listener, app.into_make_service()).await.unwrap();
        }
    } else {
        pub fn main() {
            // no client-side main function
            // unless we want this to work with e.g., Trunk for a purely client-side app
            // see lib.rs for hydration function instead
        }
    }
}
