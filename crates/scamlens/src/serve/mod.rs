use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Html,
    routing::{get, post},
    Form, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::classify::{ClassificationProvider, Gemini};
use crate::prelude::*;
use anstream::eprintln;
use scamlens_core::view::PageView;
use scamlens_core::{prompt, reply, url};

#[derive(Debug, clap::Args)]
pub struct Options {
    /// Port to listen on
    #[arg(short, long, env = "SCAMLENS_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "SCAMLENS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(flatten)]
    pub model: crate::classify::ModelOptions,
}

#[derive(Clone)]
struct AppState {
    provider: Arc<dyn ClassificationProvider>,
    templates: Arc<minijinja::Environment<'static>>,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let provider = Gemini::new(&options.model)?;

    if global.verbose {
        eprintln!(
            "Starting scamlens web app on {}:{} (model: {})...",
            options.host, options.port, options.model.model
        );
    }

    let state = AppState {
        provider: Arc::new(provider),
        templates: Arc::new(template_env()?),
    };

    let addr = format!("{}:{}", options.host, options.port);
    let app_router = router(state);

    log::info!("listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

fn template_env() -> Result<minijinja::Environment<'static>> {
    let mut env = minijinja::Environment::new();
    env.add_template("index.html", include_str!("templates/index.html"))
        .map_err(|e| eyre!("Failed to load page template: {e}"))?;
    Ok(env)
}

fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/scam/", post(classify_content))
        .route("/predict", post(classify_url))
        // Uploads are held in memory for one request only; no size cap is
        // enforced at this layer.
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .with_state(state)
}

/// Every route answers 200 with a fresh render of the page; domain errors
/// surface as text in the `message` slot, never as HTTP error statuses.
fn render_page(templates: &minijinja::Environment<'static>, view: &PageView) -> Html<String> {
    let rendered = templates
        .get_template("index.html")
        .and_then(|tpl| tpl.render(view));

    match rendered {
        Ok(html) => Html(html),
        Err(e) => {
            log::error!("template render failed: {e}");
            Html(String::new())
        }
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    render_page(&state.templates, &PageView::empty())
}

/// Pull the `file` part out of the multipart form.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), Error> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| Error::NoFileUploaded)?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|_| Error::NoFileUploaded)?;
            return Ok((filename, bytes.to_vec()));
        }
    }

    Err(Error::NoFileUploaded)
}

async fn classify_content(State(state): State<AppState>, multipart: Multipart) -> Html<String> {
    let view = match content_view(&state, multipart).await {
        Ok(view) => view,
        Err(e) => PageView::message(e.to_string()),
    };

    render_page(&state.templates, &view)
}

async fn content_view(state: &AppState, multipart: Multipart) -> Result<PageView, Error> {
    let (filename, bytes) = read_upload(multipart).await?;
    let text = crate::extract::extract_text(&filename, &bytes)?;

    log::debug!("classifying {} chars from '{}'", text.len(), filename);

    let view = match state.provider.classify(&prompt::content_prompt(&text)).await {
        Ok(raw) => PageView::message(reply::content_message(&raw)),
        Err(e) => PageView::message(f!("Error during AI classification: {e}")),
    };

    Ok(view)
}

#[derive(Debug, serde::Deserialize)]
struct PredictForm {
    #[serde(default)]
    url: String,
}

async fn classify_url(State(state): State<AppState>, Form(form): Form<PredictForm>) -> Html<String> {
    let target = form.url.trim();

    let view = if !url::has_supported_scheme(target) {
        PageView::url_error(Error::InvalidUrlFormat.to_string(), target)
    } else {
        log::debug!("classifying url '{}'", target);

        match state.provider.classify(&prompt::url_prompt(target)).await {
            Ok(raw) => PageView::url_verdict(reply::url_category(&raw), target),
            Err(e) => PageView::url_verdict(f!("error: {e}"), target),
        }
    };

    render_page(&state.templates, &view)
}
