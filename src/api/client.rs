use crate::api::Lookup;
use crate::api::models::{FormValue, Paginated, Submission, SubmitAck, SubmitRejection};
use crate::config::{BASE_URL_ENV_VARS, DEFAULT_BASE_URL, resolve_base_url};
use crate::error::ApiError;
use log::{error, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const USER_AGENT: &str = concat!("wagtail-client/", env!("CARGO_PKG_VERSION"));

/// Page size used by accessors that drain a whole endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Message surfaced when a form submission never reaches the server.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error while submitting the form";

const DEFAULT_CONFIRMATION: &str = "Form submitted successfully";

/// Client for the Wagtail v2 content API.
///
/// Holds no state beyond the immutable base URL; every request is
/// independent, so sharing a clone across tasks is safe even though the
/// intended caller is a sequential build step. No timeout is imposed here:
/// callers wanting bounded latency must wrap their calls externally.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the environment cascade, falling back to the
    /// default local base URL. Meant to run once at process start.
    pub fn from_env() -> Result<Self, ApiError> {
        ApiClient::new(resolve_base_url(BASE_URL_ENV_VARS, DEFAULT_BASE_URL))
    }

    /// Root of the site, for endpoints that live outside a versioned API
    /// prefix. A base URL ending in `/api/v2` serves pages; navigation and
    /// settings hang off the host root.
    pub fn site_root(&self) -> &str {
        self.base_url
            .strip_suffix("/api/v2")
            .unwrap_or(&self.base_url)
    }

    /// Issue one GET against `base_url` + `endpoint` and decode the body.
    ///
    /// A `format=json` parameter is always attached first; entries of
    /// `params` with an empty value are dropped, never sent as empty query
    /// parameters. Every failure mode becomes an `Err` value and is logged
    /// with the URL it hit; nothing here panics or propagates a fault.
    pub async fn get_json<T>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.get_json_from(&self.base_url, endpoint, params).await
    }

    /// Same as [`ApiClient::get_json`], addressed from [`ApiClient::site_root`].
    pub async fn get_site_json<T>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.get_json_from(self.site_root(), endpoint, params).await
    }

    async fn get_json_from<T>(
        &self,
        base: &str,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let endpoint = normalize_endpoint(endpoint);
        let url = format!("{}{}", base, endpoint);
        let query = query_pairs(params);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("[api] network error for {}: {}", url, e);
                ApiError::Transport {
                    endpoint: endpoint.clone(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            error!("[api] error {} {} - {}", status.as_u16(), reason, final_url);
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint,
                message: reason.to_string(),
            });
        }

        response.json::<T>().await.map_err(|e| {
            error!("[api] undecodable body from {}: {}", final_url, e);
            ApiError::Decode {
                endpoint,
                message: e.to_string(),
            }
        })
    }

    /// Fetch a list envelope and keep only its first item.
    ///
    /// The workhorse behind by-slug and by-id lookups: the server does the
    /// filtering, this side takes index zero or reports `Missing`.
    pub async fn first_match<T>(&self, endpoint: &str, params: &[(&str, String)]) -> Lookup<T>
    where
        T: DeserializeOwned,
    {
        match self.get_json::<Paginated<T>>(endpoint, params).await {
            Ok(envelope) => match envelope.items.into_iter().next() {
                Some(item) => Lookup::Found(item),
                None => Lookup::Missing,
            },
            Err(err) => Lookup::Failed(err),
        }
    }

    /// Drain a paginated endpoint into one ordered sequence.
    ///
    /// Pages are requested one at a time with increasing offsets until the
    /// accumulated length reaches the server-reported `total_count` or a
    /// page comes back empty. The empty-page exit is load-bearing: the
    /// count is the server's claim, and a lying count must not loop
    /// forever. A mid-drain failure stops the loop and returns the partial
    /// accumulation rather than discarding it.
    pub async fn get_all<T>(&self, endpoint: &str, params: &[(&str, String)], page_size: u32) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let page_size = page_size.max(1);
        let mut all: Vec<T> = Vec::new();
        let mut offset: u64 = 0;

        loop {
            let mut page_params: Vec<(&str, String)> = params.to_vec();
            page_params.push(("limit", page_size.to_string()));
            page_params.push(("offset", offset.to_string()));

            let envelope: Paginated<T> = match self.get_json(endpoint, &page_params).await {
                Ok(envelope) => envelope,
                Err(err) => {
                    warn!(
                        "[api] drain of {} stopped after {} items: {}",
                        endpoint,
                        all.len(),
                        err
                    );
                    break;
                }
            };

            if envelope.items.is_empty() {
                break;
            }

            let total = envelope.meta.total_count;
            all.extend(envelope.items);

            if all.len() as u64 >= total {
                break;
            }
            offset += u64::from(page_size);
        }

        all
    }

    /// POST a form submission and fold every outcome into a [`Submission`].
    ///
    /// Non-2xx responses get their error body decoded when possible (an
    /// undecodable body counts as empty); transport failures surface as a
    /// fixed network-error message. This never returns an error.
    pub async fn submit_form(
        &self,
        page_id: u64,
        payload: &HashMap<String, FormValue>,
    ) -> Submission {
        let url = format!("{}/pages/forms/submit/{}/", self.base_url, page_id);

        let response = match self.client.post(&url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("[api] form submission network error for {}: {}", url, e);
                return Submission {
                    success: false,
                    message: NETWORK_ERROR_MESSAGE.to_string(),
                    field_errors: HashMap::new(),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            let ack = response.json::<SubmitAck>().await.unwrap_or_default();
            Submission {
                success: true,
                message: ack.message.unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string()),
                field_errors: HashMap::new(),
            }
        } else {
            error!("[api] form submission rejected: {} - {}", status.as_u16(), url);
            let rejection = response.json::<SubmitRejection>().await.unwrap_or_default();
            Submission {
                success: false,
                message: rejection.message.unwrap_or_else(|| {
                    format!(
                        "Error {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("unknown status")
                    )
                }),
                field_errors: rejection.errors,
            }
        }
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{}", endpoint)
    }
}

/// `format=json` first, then every nonempty caller parameter.
fn query_pairs<'a>(params: &'a [(&'a str, String)]) -> Vec<(&'a str, &'a str)> {
    std::iter::once(("format", "json"))
        .chain(
            params
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (*key, value.as_str())),
        )
        .collect()
}
