use crate::app_config::SiteConfig;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use gut_kitchen_model::API_BASE_URL_META;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error as ThisError;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to read index page {path}: {source}")]
    Index {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Inserts the API base URL meta tag just before `</head>`.
pub fn render_index(template: &str, api_base_url: Option<&str>) -> String {
    let Some(api_base_url) = api_base_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
    else {
        return template.to_string();
    };
    let tag = format!(
        r#"<meta name="{API_BASE_URL_META}" content="{}" />"#,
        html_escape::encode_double_quoted_attribute(api_base_url)
    );
    match template.find("</head>") {
        Some(idx) => {
            let mut page = String::with_capacity(template.len() + tag.len());
            page.push_str(&template[..idx]);
            page.push_str(&tag);
            page.push_str(&template[idx..]);
            page
        }
        None => format!("{tag}{template}"),
    }
}

/// Serves files from the dist directory. Any path that isn't a file gets the
/// index page so client-side routes like `/recipe/42` survive a reload.
pub fn router(site: &SiteConfig) -> Result<Router, Error> {
    let index_path = Path::new(&site.dist_dir).join("index.html");
    let template = std::fs::read_to_string(&index_path).map_err(|source| Error::Index {
        path: index_path.clone(),
        source,
    })?;
    info!("serving {} from {}", index_path.display(), site.dist_dir);
    let page = Arc::new(render_index(&template, site.api_base_url.as_deref()));

    let index = move || {
        let page = Arc::clone(&page);
        async move { Html(page.as_str().to_owned()) }
    };

    let assets = ServeDir::new(&site.dist_dir)
        .append_index_html_on_directories(false)
        .fallback(get(index.clone()));

    Ok(Router::new()
        .route("/", get(index))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const INDEX: &str = "<html><head><title>Kitchen</title></head><body></body></html>";

    #[test]
    fn meta_tag_lands_inside_head() {
        let page = render_index(INDEX, Some("http://api:8000"));
        assert_eq!(
            page,
            "<html><head><title>Kitchen</title>\
             <meta name=\"gut-kitchen:api-base-url\" content=\"http://api:8000\" />\
             </head><body></body></html>"
        );
    }

    #[test]
    fn meta_tag_uses_the_name_the_app_reads() {
        let page = render_index(INDEX, Some("http://api:8000"));
        let name = format!(r#"name="{}""#, gut_kitchen_model::API_BASE_URL_META);
        assert!(page.contains(&name), "{page}");
    }

    #[test]
    fn no_url_leaves_page_untouched() {
        assert_eq!(render_index(INDEX, None), INDEX);
        assert_eq!(render_index(INDEX, Some("  ")), INDEX);
    }

    #[test]
    fn url_is_attribute_escaped() {
        let page = render_index(INDEX, Some(r#"http://x/"><script>"#));
        assert!(!page.contains(r#""><script>"#));
        assert!(page.contains("&quot;"));
    }

    fn site(dir: &Path, api_base_url: Option<&str>) -> SiteConfig {
        std::fs::write(dir.join("index.html"), INDEX).unwrap();
        std::fs::write(dir.join("app.js"), "console.log('kitchen')").unwrap();
        SiteConfig {
            dist_dir: dir.to_str().unwrap().to_string(),
            api_base_url: api_base_url.map(str::to_string),
        }
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn client_routes_get_the_index_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(&site(dir.path(), Some("http://api:8000"))).unwrap();

        for uri in ["/", "/recipe/42", "/no/such/page"] {
            let (status, body) = get_body(app.clone(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(API_BASE_URL_META), "{uri}: {body}");
        }
    }

    #[tokio::test]
    async fn assets_are_served_as_files() {
        let dir = tempfile::tempdir().unwrap();
        let app = router(&site(dir.path(), None)).unwrap();

        let (status, body) = get_body(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('kitchen')");
    }

    #[test]
    fn missing_index_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            dist_dir: dir.path().to_str().unwrap().to_string(),
            api_base_url: None,
        };
        assert!(matches!(router(&config), Err(Error::Index { .. })));
    }
}
