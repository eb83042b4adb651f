// HTTP exchange with the game server. Every call yields the raw response body of a successful
// request; interpreting it is up to `ClientState`.

use checkers_client::{ClientError, ControlRequest};
use log::debug;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::rust_error;
use crate::web_document::page_url;
use crate::web_error_handling::JsResult;


const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";


// The browser resolves relative URLs against the page, but reqwest needs them absolute.
pub fn resolve_endpoint(endpoint: &str) -> JsResult<Url> {
    let page = page_url()?;
    let base = Url::parse(&page).map_err(|err| rust_error!("Invalid page URL {page}: {err}"))?;
    base.join(endpoint)
        .map_err(|err| rust_error!("Invalid endpoint {endpoint:?}: {err}"))
}

pub async fn fetch_state(url: Url) -> Result<String, ClientError> {
    debug!("GET {url}");
    let response = reqwest::Client::new().get(url).send().await.map_err(transport_error)?;
    read_body(response).await
}

pub async fn post_control(url: Url, request: ControlRequest) -> Result<String, ClientError> {
    let body = serde_json::to_string(&request)
        .map_err(|err| ClientError::Transport(format!("cannot encode {request:?}: {err}")))?;
    debug!("POST {url} {body}");
    let response = reqwest::Client::new()
        .post(url)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(transport_error)?;
    read_body(response).await
}

async fn read_body(response: reqwest::Response) -> Result<String, ClientError> {
    let response = response.error_for_status().map_err(transport_error)?;
    response.text().await.map_err(transport_error)
}

fn transport_error(err: reqwest::Error) -> ClientError { ClientError::Transport(err.to_string()) }
