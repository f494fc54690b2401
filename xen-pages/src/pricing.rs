use crate::Phase;
use xen_client::models::{PricingPlan, PricingSummary};
use xen_client::pricing::sorted_for_display;
use xen_client::XenClient;

#[derive(Debug, Clone, Default)]
pub struct PricingState {
    pub phase: Phase,
    pub summary: PricingSummary,
    pub error: Option<String>,
}

/// Controller for the pricing page: one summary fetch, empty-but-valid
/// fallback on failure so the page can render its "no data" panel with a
/// retry button instead of crashing.
#[derive(Debug, Default)]
pub struct PricingController {
    state: PricingState,
}

impl PricingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &PricingState {
        &self.state
    }

    pub async fn load(&mut self, client: &XenClient) {
        self.state.phase = Phase::Loading;
        self.state.error = None;

        match client.pricing().summary().await {
            Ok(summary) => {
                self.state.summary = summary;
                self.state.phase = Phase::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch pricing data");
                self.state.summary = PricingSummary::default();
                self.state.phase = Phase::Error;
                self.state.error =
                    Some("Failed to load pricing information. Please try again later.".to_string());
            }
        }
    }

    /// Plans in display order: ascending price, contact-pricing plans last.
    pub fn sorted_plans(&self) -> Vec<PricingPlan> {
        sorted_for_display(self.state.summary.plans.clone())
    }
}
