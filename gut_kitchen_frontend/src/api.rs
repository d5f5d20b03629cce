use crate::config::ApiConfig;
use crate::util::join_url;
use gloo_net::http;
use gut_kitchen_model::{RecipeDetail, RecipeId, RecipeSummary};
use leptos::logging::{log, warn};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to do some HTTP: {0}")]
    Request(#[from] gloo_net::Error),
    // The listing shows this text as-is; the body is never read.
    #[error("Failed to fetch recipes.")]
    Status { code: u16, text: String },
    #[error("Failed to read JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub fn check_status(code: u16, text: &str) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(FetchError::Status {
            code,
            text: text.to_string(),
        })
    }
}

trait HttpOk {
    fn http_ok_json<T: DeserializeOwned + 'static>(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<T, FetchError>>>>;
}

// The body of a failed response is never read.
async fn response_ok_json<T: DeserializeOwned>(resp: http::Response) -> Result<T, FetchError> {
    let (code, text) = (resp.status(), resp.status_text());
    if let Err(err) = check_status(code, &text) {
        warn!("{url} answered {code} {text}", url = resp.url());
        return Err(err);
    }
    let body = resp.text().await?;
    serde_json::from_str::<T>(&body).map_err(|err| {
        warn!("Unexpected body from {url}: {err}", url = resp.url());
        err.into()
    })
}

impl HttpOk for http::Response {
    fn http_ok_json<T: DeserializeOwned + 'static>(
        self,
    ) -> Pin<Box<dyn Future<Output = Result<T, FetchError>>>> {
        Box::pin(response_ok_json(self))
    }
}

async fn fetch_json<T: DeserializeOwned + 'static>(url: &str) -> Result<T, FetchError> {
    log!("GET {url}");
    http::Request::get(url)
        .send()
        .await?
        .http_ok_json::<T>()
        .await
}

/// Client for the two recipe endpoints. No retries, timeouts or caching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeApi {
    config: ApiConfig,
}

impl RecipeApi {
    pub fn new(config: ApiConfig) -> Self {
        RecipeApi { config }
    }

    pub fn recipes_url(&self) -> String {
        join_url(self.config.base_url(), &["api", "recipes"])
    }

    pub fn recipe_url(&self, id: &RecipeId) -> String {
        join_url(self.config.base_url(), &["api", "recipes", id.as_ref()])
    }

    pub async fn list_recipes(&self) -> Result<Vec<RecipeSummary>, FetchError> {
        fetch_json(&self.recipes_url()).await
    }

    pub async fn get_recipe(&self, id: &RecipeId) -> Result<RecipeDetail, FetchError> {
        fetch_json(&self.recipe_url(id)).await
    }
}

pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>>>>;

/// Where the pages get their data from.
pub trait RecipeSource {
    fn list_recipes(&self) -> FetchFuture<Vec<RecipeSummary>>;
    fn get_recipe(&self, id: &RecipeId) -> FetchFuture<RecipeDetail>;
}

impl RecipeSource for RecipeApi {
    fn list_recipes(&self) -> FetchFuture<Vec<RecipeSummary>> {
        let api = self.clone();
        Box::pin(async move { RecipeApi::list_recipes(&api).await })
    }

    fn get_recipe(&self, id: &RecipeId) -> FetchFuture<RecipeDetail> {
        let api = self.clone();
        let id = id.clone();
        Box::pin(async move { RecipeApi::get_recipe(&api, &id).await })
    }
}

/// Shared handle to a [`RecipeSource`], provided to the pages through context.
#[derive(Clone)]
pub struct Recipes(Rc<dyn RecipeSource>);

impl Recipes {
    pub fn new(source: Rc<dyn RecipeSource>) -> Self {
        Recipes(source)
    }

    pub fn list_recipes(&self) -> FetchFuture<Vec<RecipeSummary>> {
        self.0.list_recipes()
    }

    pub fn get_recipe(&self, id: &RecipeId) -> FetchFuture<RecipeDetail> {
        self.0.get_recipe(id)
    }
}

impl From<RecipeApi> for Recipes {
    fn from(api: RecipeApi) -> Self {
        Recipes(Rc::new(api))
    }
}
