use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::{http::Response, Agent, Body};

use crate::{
    config::Config,
    error::Error,
    model::{ApiResponse, UserRecord},
};

pub struct WebApi {
    agent: Agent,
    api_url: String,
}

impl WebApi {
    pub fn new(api_url: impl Into<String>, proxy_url: Option<&str>, timeout: Option<Duration>) -> Self {
        let proxy = proxy_url.and_then(|url| match ureq::Proxy::new(url) {
            Ok(proxy) => Some(proxy),
            Err(err) => {
                log::error!("ignoring invalid proxy {url}: {err}");
                None
            }
        });
        let mut config = Agent::config_builder()
            .timeout_global(timeout)
            .http_status_as_error(false);
        // Without an explicit proxy, keep the one ureq picks up from the environment.
        if let Some(proxy) = proxy {
            config = config.proxy(Some(proxy));
        }
        Self {
            agent: config.build().into(),
            api_url: api_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_url.clone(),
            Config::proxy().as_deref(),
            config.request_timeout(),
        )
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn request(&self, uri: &str) -> Result<Response<Body>, Error> {
        log::info!("GET {uri}");
        let response = self.agent.get(uri).call()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {uri} returned {status}");
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }
        Ok(response)
    }

    /// Send a GET request and return the deserialized JSON body.
    fn load<T: DeserializeOwned>(&self, uri: &str) -> Result<T, Error> {
        let mut response = self.request(uri)?;
        let value = response.body_mut().read_json()?;
        Ok(value)
    }
}

/// User endpoints.
impl WebApi {
    // https://randomuser.me/documentation#howto
    pub fn get_random_user(&self) -> Result<UserRecord, Error> {
        let response: ApiResponse = self.load(&self.api_url)?;
        response.into_first()
    }
}

/// Image endpoints.
impl WebApi {
    pub fn get_image(&self, uri: &str) -> Result<Vec<u8>, Error> {
        let parsed = url::Url::parse(uri).map_err(|_| Error::InvalidUrl(uri.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidUrl(uri.to_string()));
        }
        let mut response = self.request(parsed.as_str())?;
        let body = response.body_mut().read_to_vec()?;
        Ok(body)
    }
}
