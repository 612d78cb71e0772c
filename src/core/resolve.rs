use crate::api::Lookup;
use crate::api::client::ApiClient;
use crate::core::services::content::PageKind;
use log::warn;

/// One lookup step of a resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Filter by slug (and the page kind's discriminator).
    Slug(String),
    /// Filter by discriminator alone, taking whatever matches first.
    Kind,
}

/// Ordered list of lookup strategies for a page that is conceptually unique
/// but not reliably addressable by one key.
///
/// The order is part of the contract: steps run front to back and the first
/// one that matches wins, so the most specific candidate belongs first. The
/// default chains encode deployment conventions, not semantics — swap in
/// your own steps when your deployment names things differently.
#[derive(Debug, Clone)]
pub struct ResolutionChain {
    steps: Vec<Criterion>,
}

impl ResolutionChain {
    pub fn new(steps: Vec<Criterion>) -> Self {
        Self { steps }
    }

    /// Convention for locating the home page: the French slug, then the
    /// Wagtail default slug, then any page of the expected kind.
    pub fn default_home() -> Self {
        Self::new(vec![
            Criterion::Slug("accueil".to_string()),
            Criterion::Slug("home".to_string()),
            Criterion::Kind,
        ])
    }

    pub fn steps(&self) -> &[Criterion] {
        &self.steps
    }

    /// Run the chain: one request per step, short-circuiting on the first
    /// nonempty envelope. A failed step logs and falls through to the next,
    /// same as an empty one; an exhausted chain is `Missing`.
    pub async fn resolve<P: PageKind>(&self, client: &ApiClient) -> Lookup<P> {
        for step in &self.steps {
            let mut params: Vec<(&str, String)> =
                vec![("type", P::DISCRIMINATOR.to_string())];
            match step {
                Criterion::Slug(slug) => params.push(("slug", slug.clone())),
                Criterion::Kind => params.push(("limit", "1".to_string())),
            }
            if !P::DETAIL_FIELDS.is_empty() {
                params.push(("fields", P::DETAIL_FIELDS.join(",")));
            }

            match client.first_match::<P>("/pages/", &params).await {
                Lookup::Found(page) => return Lookup::Found(page),
                Lookup::Missing => {}
                Lookup::Failed(err) => {
                    warn!("[resolve] step {:?} failed, trying next: {}", step, err);
                }
            }
        }
        Lookup::Missing
    }
}
