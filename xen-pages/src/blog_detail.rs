use crate::effects::optimistic;
use crate::Phase;
use xen_client::models::Post;
use xen_client::{PostQuery, XenClient};

const RELATED_LIMIT: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct BlogDetailState {
    pub phase: Phase,
    pub post: Option<Post>,
    pub related: Vec<Post>,
    pub error: Option<String>,
}

/// Controller for a single post page.
///
/// The related-posts fetch runs after the post fetch, not alongside it: the
/// filter value is the post's own category slug and is unknown until the
/// first request resolves.
#[derive(Debug, Default)]
pub struct BlogDetailController {
    state: BlogDetailState,
}

impl BlogDetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &BlogDetailState {
        &self.state
    }

    /// Related posts: same category when the post has one, otherwise the
    /// most recent posts, capped at three either way.
    pub fn related_query(category_slug: Option<&str>) -> PostQuery {
        PostQuery {
            category: category_slug.map(str::to_string),
            limit: Some(RELATED_LIMIT),
            ..PostQuery::default()
        }
    }

    pub async fn load(&mut self, client: &XenClient, slug: &str) {
        self.state.phase = Phase::Loading;
        self.state.error = None;

        let blog = client.blog();
        match blog.post(slug).await {
            Ok(post) => {
                let query =
                    Self::related_query(post.category.as_ref().map(|c| c.slug.as_str()));
                self.state.related = match blog.posts(&query).await {
                    Ok(page) => page.results,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to fetch related posts");
                        Vec::new()
                    }
                };
                self.state.post = Some(post);
                self.state.phase = Phase::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, %slug, "failed to fetch blog post");
                self.state.post = None;
                self.state.related.clear();
                self.state.phase = Phase::Error;
                self.state.error =
                    Some("Failed to load blog post. Please try again later.".to_string());
            }
        }
    }

    /// Optimistic like: the local counter moves first, the server call is
    /// fire-and-forget, and repeat invocations are not guarded.
    pub async fn like(&mut self, client: &XenClient) {
        let Some(post) = self.state.post.as_mut() else {
            return;
        };

        let slug = post.slug.clone();
        let blog = client.blog();
        optimistic(
            post,
            |p| {
                p.like_count += 1;
                p.is_liked = true;
            },
            async move { blog.like(&slug).await },
        )
        .await;
    }
}
