//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR pages, the compiled WASM/CSS bundle under `/pkg`, a
//! health probe, and a static fallback (installers, icons) under a single
//! Axum router.
//!
//! Paths that match neither a page nor a public file are rendered through the
//! app shell so the navbar and the "not found" view appear on a direct load,
//! with a 404 status.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Directory holding the compiled bundle for `options`.
pub fn pkg_dir(options: &LeptosOptions) -> PathBuf {
    Path::new(&*options.site_root).join(&*options.site_pkg_dir)
}

#[derive(Clone)]
struct Fallback {
    options: LeptosOptions,
    public: ServeDir,
}

/// SSR site: Leptos pages + `/pkg` assets + `/healthz` + static fallback.
pub fn app(options: LeptosOptions, public_dir: &Path) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg = pkg_dir(&options);

    let fallback = Fallback {
        options: options.clone(),
        public: ServeDir::new(public_dir).append_index_html_on_directories(false),
    };

    let leptos_router = Router::new()
        .leptos_routes(&options, routes, {
            let opts = options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(options);

    Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .fallback(move |req: Request| public_or_not_found(fallback.clone(), req))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Serve a public file if one exists, otherwise the app's not-found view.
async fn public_or_not_found(fallback: Fallback, req: Request) -> Response {
    let (parts, body) = req.into_parts();

    let lookup = Request::from_parts(parts.clone(), Body::empty());
    let file = match fallback.public.oneshot(lookup).await {
        Ok(res) => res,
        Err(never) => match never {},
    };
    if file.status() != StatusCode::NOT_FOUND {
        return file.map(Body::new);
    }

    let options = fallback.options;
    let render = render_app_to_stream(move || client::app::shell(options.clone()));
    let mut page = render(Request::from_parts(parts, body)).await;
    *page.status_mut() = StatusCode::NOT_FOUND;
    page
}
