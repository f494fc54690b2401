use crate::error::XenClientError;
use crate::http_client::HttpClient;
use crate::models::{
    Category, Comment, Listing, NewComment, NewsletterSubscription, Page, Post, Tag,
};

/// Query parameters for the paginated post listing.
///
/// `"all"` and empty-string filter values are treated the same as absent and
/// never reach the wire; everything else round-trips to the server unchecked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostQuery {
    /// 1-based page number
    pub page: Option<u32>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub limit: Option<u32>,
}

impl PostQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(category) = filter_value(&self.category) {
            params.push(("category", category.to_string()));
        }
        if let Some(tag) = filter_value(&self.tag) {
            params.push(("tags", tag.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }

        params
    }
}

fn filter_value(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty() && *v != "all")
}

/// Blog endpoints: posts, filter facets, comments, newsletter.
#[derive(Debug, Clone, Copy)]
pub struct BlogApi<'a> {
    http: &'a HttpClient,
}

impl<'a> BlogApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Paginated post listing; the server pages by 12.
    pub async fn posts(&self, query: &PostQuery) -> Result<Page<Post>, XenClientError> {
        let listing: Listing<Post> = self
            .http
            .get_json("/blog/posts/", &query.to_params())
            .await?;
        Ok(listing.into_page())
    }

    pub async fn post(&self, slug: &str) -> Result<Post, XenClientError> {
        self.http
            .get_json(&format!("/blog/posts/{slug}/"), &[])
            .await
    }

    pub async fn featured(&self) -> Result<Vec<Post>, XenClientError> {
        let listing: Listing<Post> = self.http.get_json("/blog/posts/featured/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn recent(&self) -> Result<Vec<Post>, XenClientError> {
        let listing: Listing<Post> = self.http.get_json("/blog/posts/recent/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn popular(&self) -> Result<Vec<Post>, XenClientError> {
        let listing: Listing<Post> = self.http.get_json("/blog/posts/popular/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Post>, XenClientError> {
        let listing: Listing<Post> = self
            .http
            .get_json("/blog/posts/search/", &[("q", query.to_string())])
            .await?;
        Ok(listing.into_results())
    }

    pub async fn archive(&self) -> Result<Vec<Post>, XenClientError> {
        let listing: Listing<Post> = self.http.get_json("/blog/posts/archive/", &[]).await?;
        Ok(listing.into_results())
    }

    /// Increment the like counter. The response payload is ignored.
    pub async fn like(&self, slug: &str) -> Result<(), XenClientError> {
        self.http
            .post_unit(&format!("/blog/posts/{slug}/like/"))
            .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, XenClientError> {
        let listing: Listing<Category> = self.http.get_json("/blog/categories/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn category(&self, slug: &str) -> Result<Category, XenClientError> {
        self.http
            .get_json(&format!("/blog/categories/{slug}/"), &[])
            .await
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, XenClientError> {
        let listing: Listing<Tag> = self.http.get_json("/blog/tags/", &[]).await?;
        Ok(listing.into_results())
    }

    pub async fn tag(&self, slug: &str) -> Result<Tag, XenClientError> {
        self.http.get_json(&format!("/blog/tags/{slug}/"), &[]).await
    }

    pub async fn comments(&self, post_slug: &str) -> Result<Vec<Comment>, XenClientError> {
        let listing: Listing<Comment> = self
            .http
            .get_json("/blog/comments/", &[("post", post_slug.to_string())])
            .await?;
        Ok(listing.into_results())
    }

    pub async fn add_comment(&self, comment: &NewComment) -> Result<(), XenClientError> {
        self.http.post_json_unit("/blog/comments/", comment).await
    }

    pub async fn subscribe(
        &self,
        subscription: &NewsletterSubscription,
    ) -> Result<(), XenClientError> {
        self.http
            .post_json_unit("/blog/subscriptions/", subscription)
            .await
    }

    pub async fn unsubscribe(&self, email: &str) -> Result<(), XenClientError> {
        self.http
            .post_json_unit(
                "/blog/subscriptions/unsubscribe/",
                &serde_json::json!({ "email": email }),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_absent_and_all_values() {
        let query = PostQuery {
            page: Some(2),
            category: Some("eng".to_string()),
            tag: Some("all".to_string()),
            search: Some(String::new()),
            limit: None,
        };

        assert_eq!(
            query.to_params(),
            vec![("page", "2".to_string()), ("category", "eng".to_string())]
        );
    }

    #[test]
    fn query_with_every_filter_set() {
        let query = PostQuery {
            page: Some(1),
            category: Some("payroll".to_string()),
            tag: Some("automation".to_string()),
            search: Some("leave policy".to_string()),
            limit: Some(3),
        };

        assert_eq!(
            query.to_params(),
            vec![
                ("page", "1".to_string()),
                ("category", "payroll".to_string()),
                ("tags", "automation".to_string()),
                ("search", "leave policy".to_string()),
                ("limit", "3".to_string()),
            ]
        );
    }

    #[test]
    fn default_query_is_empty() {
        assert!(PostQuery::default().to_params().is_empty());
    }
}
