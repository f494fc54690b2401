use crate::error::XenClientError;
use crate::http_client::HttpClient;
use crate::models::{AddOn, Faq, Listing, PricingPlan, PricingSummary};
use std::cmp::Ordering;

/// Pricing endpoints: plans, add-ons, FAQs.
#[derive(Debug, Clone, Copy)]
pub struct PricingApi<'a> {
    http: &'a HttpClient,
}

impl<'a> PricingApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All pricing data in one call.
    pub async fn summary(&self) -> Result<PricingSummary, XenClientError> {
        self.http.get_json("/pricing/plans/summary/", &[]).await
    }

    pub async fn plans(&self) -> Result<Vec<PricingPlan>, XenClientError> {
        let listing: Listing<PricingPlan> = self.http.get_json("/pricing/plans/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn plan(&self, id: i64) -> Result<PricingPlan, XenClientError> {
        self.http.get_json(&format!("/pricing/plans/{id}/"), &[]).await
    }

    pub async fn popular_plans(&self) -> Result<Vec<PricingPlan>, XenClientError> {
        let listing: Listing<PricingPlan> =
            self.http.get_json("/pricing/plans/popular/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn addons(&self) -> Result<Vec<AddOn>, XenClientError> {
        let listing: Listing<AddOn> = self.http.get_json("/pricing/addons/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn faqs(&self) -> Result<Vec<Faq>, XenClientError> {
        let listing: Listing<Faq> = self.http.get_json("/pricing/faqs/", &[]).await?;
        Ok(listing.into_results())
    }
}

/// Display comparator: ascending monthly price, but zero-priced
/// "contact for pricing" plans always sort last.
///
/// Total order over the coerced price fields; pair it with a stable sort so
/// ties among sentinel plans keep the server's order.
pub fn display_order(a: &PricingPlan, b: &PricingPlan) -> Ordering {
    sort_key(a.monthly_price).total_cmp(&sort_key(b.monthly_price))
}

fn sort_key(monthly_price: f64) -> f64 {
    if monthly_price == 0.0 {
        f64::INFINITY
    } else {
        monthly_price
    }
}

/// Sort a plan collection into display order.
pub fn sorted_for_display(mut plans: Vec<PricingPlan>) -> Vec<PricingPlan> {
    plans.sort_by(display_order);
    plans
}
