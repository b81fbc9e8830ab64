use super::http_request::request_common::{
    HTTPRequestType, JSONBodyHTTPRequestType, NoBodyHTTPRequestType,
};
use super::http_response::response_common::{ResponseError, unwrap_return_code};

/// Request timeout for every call to the flight platform bridge.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for all calls to the flight platform bridge.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL of the bridge, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` with the given base URL and a 5 second timeout.
    ///
    /// # Errors
    /// Fails if the TLS backend or resolver of `reqwest` cannot be initialized.
    pub(crate) fn new(base_url: &str) -> Result<HTTPClient, reqwest::Error> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url: String::from(base_url.trim_end_matches('/')),
        })
    }

    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }

    fn builder<R: HTTPRequestType>(&self, request: &R) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, request.endpoint());
        self.client.request(request.request_method().into(), url)
    }

    /// Sends a request without a body and parses the JSON response.
    pub(crate) async fn send_no_body<R>(&self, request: R) -> Result<R::Response, ResponseError>
    where R: NoBodyHTTPRequestType + Send {
        let response = self.builder(&request).send().await?;
        Ok(unwrap_return_code(response).await?.json::<R::Response>().await?)
    }

    /// Sends a request with a JSON body and parses the JSON response.
    pub(crate) async fn send_json<R>(&self, request: R) -> Result<R::Response, ResponseError>
    where R: JSONBodyHTTPRequestType + Send {
        let response = self.builder(&request).json(request.body()).send().await?;
        Ok(unwrap_return_code(response).await?.json::<R::Response>().await?)
    }
}
