use crate::error::XenClientError;
use crate::http_client::HttpClient;
use crate::models::{ContactMessage, Listing, NewTicket, SupportArticle, Ticket, TicketComment};

/// Support endpoints: knowledge base, tickets, contact form.
#[derive(Debug, Clone, Copy)]
pub struct SupportApi<'a> {
    http: &'a HttpClient,
}

impl<'a> SupportApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn articles(&self) -> Result<Vec<SupportArticle>, XenClientError> {
        let listing: Listing<SupportArticle> =
            self.http.get_json("/support/articles/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn article(&self, slug: &str) -> Result<SupportArticle, XenClientError> {
        self.http
            .get_json(&format!("/support/articles/{slug}/"), &[])
            .await
    }

    pub async fn featured_articles(&self) -> Result<Vec<SupportArticle>, XenClientError> {
        let listing: Listing<SupportArticle> = self
            .http
            .get_json("/support/articles/featured/", &[])
            .await?;
        Ok(listing.into_results())
    }

    /// Knowledge-base categories; plain strings, used only as filter facets.
    pub async fn categories(&self) -> Result<Vec<String>, XenClientError> {
        let listing: Listing<String> = self
            .http
            .get_json("/support/articles/categories/", &[])
            .await?;
        Ok(listing.into_results())
    }

    pub async fn tickets(&self) -> Result<Vec<Ticket>, XenClientError> {
        let listing: Listing<Ticket> = self.http.get_json("/support/tickets/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn ticket(&self, id: i64) -> Result<Ticket, XenClientError> {
        self.http
            .get_json(&format!("/support/tickets/{id}/"), &[])
            .await
    }

    pub async fn create_ticket(&self, ticket: &NewTicket) -> Result<Ticket, XenClientError> {
        self.http.post_json("/support/tickets/", ticket).await
    }

    pub async fn add_ticket_comment(
        &self,
        ticket_id: i64,
        comment: &TicketComment,
    ) -> Result<(), XenClientError> {
        self.http
            .post_json_unit(&format!("/support/tickets/{ticket_id}/add_comment/"), comment)
            .await
    }

    pub async fn update_ticket_status(
        &self,
        ticket_id: i64,
        status: &str,
    ) -> Result<(), XenClientError> {
        self.http
            .post_json_unit(
                &format!("/support/tickets/{ticket_id}/update_status/"),
                &serde_json::json!({ "status": status }),
            )
            .await
    }

    pub async fn submit_contact(&self, message: &ContactMessage) -> Result<(), XenClientError> {
        self.http.post_json_unit("/support/messages/", message).await
    }
}
