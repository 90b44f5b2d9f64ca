use std::borrow::Cow;

use tauri::{
    http::{header::CONTENT_TYPE, Request, Response, StatusCode},
    Runtime, UriSchemeContext,
};
use url::Url;

use crate::{APP_SCHEME, PACKAGED_ENTRY_PATH};

/// URL the main window loads in packaged builds.
pub fn packaged_entry_url() -> Result<Url, url::ParseError> {
    if cfg!(windows) {
        // WebView2 only routes custom schemes through the http://<scheme>.localhost form.
        Url::parse(&format!("http://{APP_SCHEME}.localhost/{PACKAGED_ENTRY_PATH}"))
    } else {
        Url::parse(&format!("{APP_SCHEME}://localhost/{PACKAGED_ENTRY_PATH}"))
    }
}

/// Maps a request path onto a bundled asset key.
///
/// Directory and unknown-path fallbacks (`<path>.html`, `<path>/index.html`, then the entry
/// page) are left to the asset resolver so front-end routes load the single-page app.
pub(crate) fn asset_key_for_path(path: &str) -> Option<String> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.split('/').any(|segment| segment == "..") {
        return None;
    }
    Some(trimmed.to_string())
}

pub fn serve_bundled_asset<R: Runtime>(
    ctx: UriSchemeContext<'_, R>,
    request: Request<Vec<u8>>,
) -> Response<Cow<'static, [u8]>> {
    let path = request.uri().path();
    let Some(key) = asset_key_for_path(path) else {
        tracing::warn!(path, "rejected {APP_SCHEME}:// request outside the bundle");
        return empty_response(StatusCode::FORBIDDEN);
    };

    let found = ctx
        .app_handle()
        .asset_resolver()
        .get(key.clone())
        .map(|asset| (asset.bytes().to_vec(), asset.mime_type().to_string()));
    asset_response(&key, found)
}

/// `None` only happens when the bundle has no entry page to fall back to.
fn asset_response(key: &str, found: Option<(Vec<u8>, String)>) -> Response<Cow<'static, [u8]>> {
    let Some((bytes, mime_type)) = found else {
        tracing::error!(asset = key, "bundle has no {PACKAGED_ENTRY_PATH} to serve");
        return empty_response(StatusCode::NOT_FOUND);
    };

    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, mime_type)
        .body(Cow::Owned(bytes))
        .unwrap_or_else(|error| {
            tracing::error!("failed to build {APP_SCHEME}:// response for {key}: {error}");
            empty_response(StatusCode::INTERNAL_SERVER_ERROR)
        })
}

fn empty_response(status: StatusCode) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(Cow::Borrowed(&[][..]));
    *response.status_mut() = status;
    response
}
