use crate::pagination;
use crate::Phase;
use xen_client::models::{Category, Page, Post, Tag};
use xen_client::{PostQuery, XenClient};

pub const ALL: &str = "all";

/// Everything the blog listing view renders.
#[derive(Debug, Clone)]
pub struct BlogListState {
    pub phase: Phase,
    pub posts: Vec<Post>,
    pub featured: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    /// 1-based
    pub page: u32,
    pub total_pages: u32,
    pub selected_category: String,
    pub selected_tag: String,
    pub search_query: String,
    pub error: Option<String>,
}

impl Default for BlogListState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            posts: Vec::new(),
            featured: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            page: 1,
            total_pages: 1,
            selected_category: ALL.to_string(),
            selected_tag: ALL.to_string(),
            search_query: String::new(),
            error: None,
        }
    }
}

impl BlogListState {
    pub fn has_filters(&self) -> bool {
        self.selected_category != ALL || self.selected_tag != ALL || !self.search_query.is_empty()
    }

    /// Featured posts are shown only on the unfiltered first page.
    pub fn featured_visible(&self) -> bool {
        self.page == 1 && !self.has_filters() && !self.featured.is_empty()
    }
}

/// Events the view (or the fetch executor) feeds into the controller.
#[derive(Debug)]
pub enum BlogListMsg {
    /// Initial load on mount.
    Load,
    GoToPage(u32),
    NextPage,
    PrevPage,
    SelectCategory(String),
    SelectTag(String),
    /// Explicit submit; typing does not fetch.
    SubmitSearch(String),
    ClearFilters,
    /// Re-issue the fetch with identical query state.
    Retry,
    Loaded {
        seq: u64,
        data: Box<BlogData>,
    },
    Failed {
        seq: u64,
        error: String,
    },
}

/// Payload of one completed listing fetch.
#[derive(Debug, Clone, Default)]
pub struct BlogData {
    pub posts: Page<Post>,
    pub featured: Vec<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

/// What the controller wants executed next.
#[derive(Debug, Clone, PartialEq)]
pub enum BlogListCmd {
    Fetch { seq: u64, query: PostQuery },
}

/// State machine for the blog listing page.
///
/// `dispatch` mutates state and may hand back a fetch command; `run` executes
/// a command against the backend and dispatches the completion back in. Each
/// fetch carries a sequence number, and a completion whose number is not the
/// latest is dropped, so a slow superseded request can never overwrite newer
/// results.
#[derive(Debug, Default)]
pub struct BlogListController {
    state: BlogListState,
    seq: u64,
}

impl BlogListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &BlogListState {
        &self.state
    }

    /// Query parameters derived from the current state. The request builder
    /// drops "all" and empty values before they reach the wire.
    pub fn query(&self) -> PostQuery {
        PostQuery {
            page: Some(self.state.page),
            category: Some(self.state.selected_category.clone()),
            tag: Some(self.state.selected_tag.clone()),
            search: Some(self.state.search_query.clone()),
            limit: None,
        }
    }

    pub fn dispatch(&mut self, msg: BlogListMsg) -> Option<BlogListCmd> {
        match msg {
            BlogListMsg::Load | BlogListMsg::Retry => self.begin_fetch(false),

            BlogListMsg::GoToPage(page) => {
                let page = page.clamp(1, self.state.total_pages.max(1));
                if page == self.state.page {
                    return None;
                }
                self.state.page = page;
                self.begin_fetch(true)
            }
            BlogListMsg::NextPage => self.dispatch(BlogListMsg::GoToPage(self.state.page + 1)),
            BlogListMsg::PrevPage => {
                self.dispatch(BlogListMsg::GoToPage(self.state.page.saturating_sub(1)))
            }

            BlogListMsg::SelectCategory(category) => {
                if category == self.state.selected_category {
                    return None;
                }
                self.state.selected_category = category;
                self.state.page = 1;
                self.begin_fetch(false)
            }
            BlogListMsg::SelectTag(tag) => {
                if tag == self.state.selected_tag {
                    return None;
                }
                self.state.selected_tag = tag;
                self.state.page = 1;
                self.begin_fetch(false)
            }
            BlogListMsg::SubmitSearch(query) => {
                self.state.search_query = query;
                self.state.page = 1;
                self.begin_fetch(false)
            }
            BlogListMsg::ClearFilters => {
                self.state.selected_category = ALL.to_string();
                self.state.selected_tag = ALL.to_string();
                self.state.search_query.clear();
                self.state.page = 1;
                self.begin_fetch(false)
            }

            BlogListMsg::Loaded { seq, data } => {
                if seq != self.seq {
                    tracing::debug!(seq, latest = self.seq, "stale listing response ignored");
                    return None;
                }
                let BlogData {
                    posts,
                    featured,
                    categories,
                    tags,
                } = *data;
                // Нулевой count оставляет прежнее число страниц
                if posts.count > 0 {
                    self.state.total_pages = pagination::total_pages(posts.count);
                }
                self.state.posts = posts.results;
                self.state.featured = featured;
                self.state.categories = categories;
                self.state.tags = tags;
                self.state.phase = Phase::Success;
                self.state.error = None;
                None
            }
            BlogListMsg::Failed { seq, error } => {
                if seq != self.seq {
                    tracing::debug!(seq, latest = self.seq, "stale listing failure ignored");
                    return None;
                }
                self.state.posts.clear();
                self.state.featured.clear();
                self.state.categories.clear();
                self.state.tags.clear();
                self.state.phase = Phase::Error;
                self.state.error = Some(error);
                None
            }
        }
    }

    fn begin_fetch(&mut self, pagination_only: bool) -> Option<BlogListCmd> {
        self.seq += 1;
        self.state.phase = if pagination_only {
            Phase::PaginationLoading
        } else {
            Phase::Loading
        };
        self.state.error = None;
        Some(BlogListCmd::Fetch {
            seq: self.seq,
            query: self.query(),
        })
    }

    /// Execute a fetch command and feed the completion back into the machine.
    ///
    /// The listing itself decides success or failure; the facet requests
    /// (featured, categories, tags) fall back to empty collections with a
    /// logged warning, matching how the page renders without them.
    pub async fn run(&mut self, cmd: BlogListCmd, client: &XenClient) {
        let BlogListCmd::Fetch { seq, query } = cmd;
        let blog = client.blog();

        let (posts, featured, categories, tags) = futures::join!(
            blog.posts(&query),
            blog.featured(),
            blog.categories(),
            blog.tags(),
        );

        let msg = match posts {
            Ok(posts) => BlogListMsg::Loaded {
                seq,
                data: Box::new(BlogData {
                    posts,
                    featured: featured.unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "failed to fetch featured posts");
                        Vec::new()
                    }),
                    categories: categories.unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "failed to fetch categories");
                        Vec::new()
                    }),
                    tags: tags.unwrap_or_else(|e| {
                        tracing::warn!(error = %e, "failed to fetch tags");
                        Vec::new()
                    }),
                }),
            },
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch blog posts");
                BlogListMsg::Failed {
                    seq,
                    error: "Failed to load blog posts. Please try again later.".to_string(),
                }
            }
        };

        self.dispatch(msg);
    }
}
