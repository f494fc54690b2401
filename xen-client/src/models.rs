use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ==================== Общие обёртки ====================

/// Listing endpoints answer either with a raw array or with a
/// `{ results, count }` envelope depending on whether they paginate.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_results(self) -> Vec<T> {
        match self {
            Listing::Paged { results, .. } => results,
            Listing::Plain(results) => results,
        }
    }

    pub fn into_page(self) -> Page<T> {
        match self {
            Listing::Paged { results, count } => {
                let count = count.unwrap_or(results.len() as u64);
                Page { results, count }
            }
            Listing::Plain(results) => {
                let count = results.len() as u64;
                Page { results, count }
            }
        }
    }
}

/// One page of results plus the server-reported total item count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

// ==================== Модели блога ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    /// HTML fragment; present on the detail endpoint, often omitted in lists.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Nested category object; only the detail endpoint includes it.
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tag_names: Vec<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Минуты чтения
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub comment_count: u64,
    #[serde(default)]
    pub like_count: u64,
    /// Session-local; set by the optimistic like action, never unset.
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub featured_image_alt: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    /// Slug поста
    pub post: String,
    pub name: String,
    pub email: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsletterSubscription {
    pub email: String,
    pub name: String,
}

// ==================== Модели тарифов ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Zero is the "contact for pricing" sentinel, not a free plan.
    #[serde(default, deserialize_with = "de_decimal")]
    pub monthly_price: f64,
    #[serde(default, deserialize_with = "de_decimal")]
    pub annual_price: f64,
    /// Free-form, e.g. "51-100"
    #[serde(default)]
    pub user_range: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub cta_label: Option<String>,
}

impl PricingPlan {
    pub fn is_contact_pricing(&self) -> bool {
        self.monthly_price == 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_decimal")]
    pub price: f64,
    /// "Contact sales" sentinel; the price field is meaningless when set.
    #[serde(default)]
    pub is_discussion: bool,
    #[serde(default = "default_price_unit")]
    pub price_unit: String,
}

fn default_price_unit() -> String {
    "month".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// All pricing data in one call. `Default` doubles as the empty-but-valid
/// fallback shape the pricing page renders when the fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    #[serde(default)]
    pub plans: Vec<PricingPlan>,
    #[serde(default)]
    pub addons: Vec<AddOn>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

impl PricingSummary {
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty() && self.addons.is_empty() && self.faqs.is_empty()
    }
}

// Тарифы приходят как десятичные строки ("1500.00") либо числа
fn de_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ==================== Модели поддержки ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportArticle {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub helpful_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    FeatureRequest,
    General,
    BugReport,
}

impl FromStr for TicketCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(Self::Technical),
            "billing" => Ok(Self::Billing),
            "feature_request" => Ok(Self::FeatureRequest),
            "general" => Ok(Self::General),
            "bug_report" => Ok(Self::BugReport),
            other => Err(format!("unknown ticket category: {other}")),
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::FeatureRequest => "feature_request",
            Self::General => "general",
            Self::BugReport => "bug_report",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(format!("unknown ticket priority: {other}")),
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        };
        f.write_str(s)
    }
}

/// Write-only from the client side; the backend validates the fields.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: Option<TicketCategory>,
    #[serde(default)]
    pub priority: Option<TicketPriority>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketComment {
    pub content: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}
