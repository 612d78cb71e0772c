use crate::api::Lookup;
use crate::api::client::ApiClient;
use crate::api::models::{
    Article, FormPage, HomePage, Page, Paginated, SectorPage, StaticPage,
};
use crate::core::resolve::ResolutionChain;
use serde::de::DeserializeOwned;

/// One row of the accessor table: a server-side discriminator plus the field
/// projections each fetch shape requests. Projections keep list payloads
/// small; the server may still drop a requested field, which the models
/// tolerate.
pub trait PageKind: DeserializeOwned {
    const DISCRIMINATOR: &'static str;
    /// `fields` projection for list fetches; empty means none is sent.
    const LIST_FIELDS: &'static [&'static str] = &[];
    /// `fields` projection for single-entity fetches.
    const DETAIL_FIELDS: &'static [&'static str] = &[];
    /// Server-side ordering for list fetches.
    const ORDER: Option<&'static str> = None;
}

impl PageKind for Article {
    const DISCRIMINATOR: &'static str = "blog.ArticlePage";
    const LIST_FIELDS: &'static [&'static str] =
        &["date", "author", "introduction", "header_image_thumbnail"];
    const DETAIL_FIELDS: &'static [&'static str] = &["*"];
    const ORDER: Option<&'static str> = Some("-date");
}

impl PageKind for SectorPage {
    const DISCRIMINATOR: &'static str = "blog.SectorPage";
}

impl PageKind for FormPage {
    const DISCRIMINATOR: &'static str = "blog.FormPage";
}

impl PageKind for StaticPage {
    const DISCRIMINATOR: &'static str = "blog.StaticPage";
    const LIST_FIELDS: &'static [&'static str] = &["content", "header_image"];
    const DETAIL_FIELDS: &'static [&'static str] = &["content", "header_image"];
}

impl PageKind for HomePage {
    const DISCRIMINATOR: &'static str = "blog.HomePage";
    const DETAIL_FIELDS: &'static [&'static str] = &[
        "hero_title",
        "hero_subtitle",
        "hero_cta_text",
        "hero_cta_link",
        "features",
    ];
}

/// Typed page accessors over an [`ApiClient`].
///
/// Every method absorbs failure the same way the transport does: lists come
/// back possibly partial or empty, lookups come back as [`Lookup`]. Nothing
/// here panics on a bad response.
pub struct ContentService {
    client: ApiClient,
    home_chain: ResolutionChain,
}

impl ContentService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            home_chain: ResolutionChain::default_home(),
        }
    }

    /// Replace the home-page resolution chain (the default encodes a
    /// deployment convention, not a requirement).
    pub fn with_home_chain(client: ApiClient, home_chain: ResolutionChain) -> Self {
        Self { client, home_chain }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// All pages of one kind, drained across every result page.
    pub async fn all_of<P: PageKind>(&self, page_size: u32) -> Vec<P> {
        let mut params: Vec<(&str, String)> =
            vec![("type", P::DISCRIMINATOR.to_string())];
        if !P::LIST_FIELDS.is_empty() {
            params.push(("fields", P::LIST_FIELDS.join(",")));
        }
        if let Some(order) = P::ORDER {
            params.push(("order", order.to_string()));
        }
        self.client.get_all("/pages/", &params, page_size).await
    }

    /// One page of one kind by slug. Exactly one request; the first item of
    /// the envelope wins.
    pub async fn by_slug<P: PageKind>(&self, slug: &str) -> Lookup<P> {
        let mut params: Vec<(&str, String)> = vec![
            ("type", P::DISCRIMINATOR.to_string()),
            ("slug", slug.to_string()),
        ];
        if !P::DETAIL_FIELDS.is_empty() {
            params.push(("fields", P::DETAIL_FIELDS.join(",")));
        }
        self.client.first_match("/pages/", &params).await
    }

    /// One page of one kind by numeric id.
    pub async fn by_id<P: PageKind>(&self, id: u64) -> Lookup<P> {
        let params: Vec<(&str, String)> = vec![
            ("type", P::DISCRIMINATOR.to_string()),
            ("id", id.to_string()),
        ];
        self.client.first_match("/pages/", &params).await
    }

    /// Every page regardless of kind, base fields only.
    pub async fn all_pages(&self, page_size: u32) -> Vec<Page> {
        self.client.get_all("/pages/", &[], page_size).await
    }

    /// The newest articles, in one request (no draining).
    pub async fn recent_articles(&self, limit: u32) -> Vec<Article> {
        let mut params: Vec<(&str, String)> = vec![
            ("type", Article::DISCRIMINATOR.to_string()),
            ("fields", Article::LIST_FIELDS.join(",")),
            ("limit", limit.to_string()),
        ];
        if let Some(order) = Article::ORDER {
            params.push(("order", order.to_string()));
        }
        match self
            .client
            .get_json::<Paginated<Article>>("/pages/", &params)
            .await
        {
            Ok(envelope) => envelope.items,
            Err(_) => Vec::new(), // already logged at the transport
        }
    }

    /// Pages flagged for menus, slug and title only.
    pub async fn menu_pages(&self) -> Vec<Page> {
        let params: Vec<(&str, String)> = vec![
            ("show_in_menus", "true".to_string()),
            ("fields", "slug,title".to_string()),
        ];
        match self
            .client
            .get_json::<Paginated<Page>>("/pages/", &params)
            .await
        {
            Ok(envelope) => envelope.items,
            Err(_) => Vec::new(),
        }
    }

    /// The home page, located through the resolution chain.
    pub async fn home_page(&self) -> Lookup<HomePage> {
        self.home_chain.resolve::<HomePage>(&self.client).await
    }
}
