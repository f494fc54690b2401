use crate::Phase;
use xen_client::models::{ContactMessage, NewTicket, SupportArticle, Ticket};
use xen_client::{XenClient, XenClientError};

#[derive(Debug, Clone)]
pub struct SupportState {
    pub phase: Phase,
    pub articles: Vec<SupportArticle>,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub search_query: String,
    pub error: Option<String>,
}

impl Default for SupportState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            articles: Vec::new(),
            categories: Vec::new(),
            selected_category: "all".to_string(),
            search_query: String::new(),
            error: None,
        }
    }
}

/// Controller for the support page: knowledge base plus ticket/contact
/// submission. Unlike the blog listing, article filtering happens entirely
/// client-side: the full article list is fetched once and narrowed locally.
#[derive(Debug, Default)]
pub struct SupportController {
    state: SupportState,
}

impl SupportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &SupportState {
        &self.state
    }

    pub async fn load(&mut self, client: &XenClient) {
        self.state.phase = Phase::Loading;
        self.state.error = None;

        let support = client.support();
        let (articles, categories) = futures::join!(support.articles(), support.categories());

        match articles {
            Ok(articles) => {
                self.state.articles = articles;
                self.state.categories = categories.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "failed to fetch support categories");
                    Vec::new()
                });
                self.state.phase = Phase::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch support data");
                self.state.articles.clear();
                self.state.categories.clear();
                self.state.phase = Phase::Error;
                self.state.error = Some(
                    "Failed to load support information. Please try again later.".to_string(),
                );
            }
        }
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.state.selected_category = category.into();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    /// Articles matching the local category and search filters.
    ///
    /// Search matches title or excerpt, case-insensitively; the "all"
    /// category matches everything.
    pub fn visible_articles(&self) -> Vec<&SupportArticle> {
        let needle = self.state.search_query.to_lowercase();
        self.state
            .articles
            .iter()
            .filter(|article| {
                let matches_search = needle.is_empty()
                    || article.title.to_lowercase().contains(&needle)
                    || article.excerpt.to_lowercase().contains(&needle);
                let matches_category = self.state.selected_category == "all"
                    || article.category == self.state.selected_category;
                matches_search && matches_category
            })
            .collect()
    }

    /// Submit a support ticket; validation is the backend's job.
    pub async fn submit_ticket(
        &self,
        client: &XenClient,
        ticket: &NewTicket,
    ) -> Result<Ticket, XenClientError> {
        client.support().create_ticket(ticket).await
    }

    pub async fn submit_contact(
        &self,
        client: &XenClient,
        message: &ContactMessage,
    ) -> Result<(), XenClientError> {
        client.support().submit_contact(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: i64, title: &str, category: &str, excerpt: &str) -> SupportArticle {
        SupportArticle {
            id,
            slug: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            category: category.to_string(),
            excerpt: excerpt.to_string(),
            content: String::new(),
            is_featured: false,
            view_count: 0,
            helpful_count: 0,
        }
    }

    fn controller_with_articles() -> SupportController {
        let mut ctrl = SupportController::new();
        ctrl.state.articles = vec![
            article(1, "Resetting your password", "account", "Step by step guide"),
            article(2, "Understanding payslips", "payroll", "Reading the payslip PDF"),
            article(3, "Payroll calendar setup", "payroll", "Configure pay runs"),
        ];
        ctrl
    }

    #[test]
    fn all_category_and_empty_search_show_everything() {
        let ctrl = controller_with_articles();
        assert_eq!(ctrl.visible_articles().len(), 3);
    }

    #[test]
    fn category_filter_narrows_articles() {
        let mut ctrl = controller_with_articles();
        ctrl.set_category("payroll");
        let titles: Vec<_> = ctrl.visible_articles().iter().map(|a| &a.title).collect();
        assert_eq!(titles, ["Understanding payslips", "Payroll calendar setup"]);
    }

    #[test]
    fn search_matches_title_or_excerpt_case_insensitively() {
        let mut ctrl = controller_with_articles();
        ctrl.set_search("PAYSLIP");
        assert_eq!(ctrl.visible_articles().len(), 1);

        ctrl.set_search("guide");
        assert_eq!(ctrl.visible_articles()[0].id, 1);
    }

    #[test]
    fn search_and_category_combine() {
        let mut ctrl = controller_with_articles();
        ctrl.set_category("payroll");
        ctrl.set_search("calendar");
        assert_eq!(ctrl.visible_articles().len(), 1);
        assert_eq!(ctrl.visible_articles()[0].id, 3);
    }
}
