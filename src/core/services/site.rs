use crate::api::Lookup;
use crate::api::client::ApiClient;
use crate::api::models::{FormValue, Navigation, Settings, Submission};
use std::collections::HashMap;

/// Site-wide singletons (navigation, settings) and form submission.
///
/// Navigation and settings live at the site root, outside any versioned API
/// prefix the base URL may carry. They are fetched once per build by the
/// caller; this service holds nothing between calls.
pub struct SiteService {
    client: ApiClient,
}

impl SiteService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn navigation(&self) -> Lookup<Navigation> {
        match self
            .client
            .get_site_json::<Navigation>("/api/navigation/", &[])
            .await
        {
            Ok(navigation) => Lookup::Found(navigation),
            Err(err) => Lookup::Failed(err),
        }
    }

    pub async fn settings(&self) -> Lookup<Settings> {
        match self
            .client
            .get_site_json::<Settings>("/api/settings/", &[])
            .await
        {
            Ok(settings) => Lookup::Found(settings),
            Err(err) => Lookup::Failed(err),
        }
    }

    /// Forward a form submission to its form page. Field names are the form
    /// definition's clean names; values are strings or string lists.
    pub async fn submit_form(
        &self,
        page_id: u64,
        payload: &HashMap<String, FormValue>,
    ) -> Submission {
        self.client.submit_form(page_id, payload).await
    }
}
