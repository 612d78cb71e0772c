use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// Paginated response envelope

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListMeta {
    #[serde(default)]
    pub total_count: u64,
}

/// Wagtail list envelope: `{ "meta": { "total_count": n }, "items": [...] }`.
#[derive(Debug, Deserialize, Clone)]
pub struct Paginated<T> {
    #[serde(default)]
    pub meta: ListMeta,
    pub items: Vec<T>,
}

// Base page shape
//
// Only `id` and `meta.type` are guaranteed by the API; every other field may
// be dropped by a `fields` projection and must decode as absent.

#[derive(Debug, Deserialize, Clone)]
pub struct Page {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    pub meta: PageMeta,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageMeta {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub first_published_at: Option<DateTime<Utc>>,
}

/// Opaque StreamField block. The block value is kept as raw JSON; rendering
/// is the site generator's concern.
#[derive(Debug, Deserialize, Clone)]
pub struct StreamBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: Value,
    #[serde(default)]
    pub id: String,
}

// Page variants

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Agriculture,
    Ecologie,
    Interieur,
    General,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CategoryInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Article {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub sector: Option<Sector>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
    #[serde(default)]
    pub body: Vec<StreamBlock>,
    #[serde(default)]
    pub category_info: Option<CategoryInfo>,
    #[serde(default)]
    pub header_image_url: Option<String>,
    #[serde(default)]
    pub header_image_thumbnail: Option<String>,
    #[serde(default)]
    pub tags_list: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTheme {
    Green,
    Blue,
    Yellow,
    Red,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Representative {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SectorPage {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub color_theme: Option<ColorTheme>,
    #[serde(default)]
    pub context_banner_text: Option<String>,
    #[serde(default)]
    pub news_general_list: Vec<Article>,
    #[serde(default)]
    pub news_instance_list: Vec<Article>,
    #[serde(default)]
    pub representatives_list: Vec<Representative>,
    #[serde(default)]
    pub actions: Vec<StreamBlock>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticPage {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub content: Vec<StreamBlock>,
    #[serde(default)]
    pub header_image_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HomePage {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    #[serde(default)]
    pub hero_cta_text: Option<String>,
    #[serde(default)]
    pub hero_cta_link: Option<String>,
    #[serde(default)]
    pub features: Vec<StreamBlock>,
}

// Form pages

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Singleline,
    Multiline,
    Email,
    Dropdown,
    Radio,
    Checkbox,
    Date,
    Number,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "field_type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Option<String>,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl FormField {
    /// Parsed choice list. `choices` is a comma-separated string and only
    /// meaningful for dropdown and radio fields; every other kind yields an
    /// empty list regardless of what the server sent.
    pub fn choice_list(&self) -> Vec<String> {
        if !matches!(self.kind, FieldKind::Dropdown | FieldKind::Radio) {
            return Vec::new();
        }
        self.choices
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FormPage {
    #[serde(flatten)]
    pub page: Page,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub thank_you_text: Option<String>,
    #[serde(default)]
    pub form_fields_data: Vec<FormField>,
}

// Navigation and settings singletons

#[derive(Debug, Deserialize, Clone)]
pub struct NavLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SocialLink {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Navigation {
    #[serde(default)]
    pub topbar: Vec<NavLink>,
    #[serde(default)]
    pub footer: Vec<NavLink>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub site_tagline: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

// Form submission

/// A submitted field value: a single string, or several for checkbox groups.
#[derive(Debug, Serialize, Clone)]
#[serde(untagged)]
pub enum FormValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::One(value.to_string())
    }
}

/// Outcome of a form submission. Constructed by the client, never an error:
/// every failure mode lands here with `success == false`.
#[derive(Debug, Clone)]
pub struct Submission {
    pub success: bool,
    pub message: String,
    pub field_errors: HashMap<String, Vec<String>>,
}

/// Error body the form endpoint returns on rejection. Either field may be
/// absent, and an undecodable body decodes as the default (empty) shape.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubmitRejection {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Success body of the form endpoint.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SubmitAck {
    #[serde(default)]
    pub message: Option<String>,
}
