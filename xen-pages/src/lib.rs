pub mod blog_detail;
pub mod blog_list;
pub mod effects;
pub mod pagination;
pub mod pricing;
pub mod support;

pub use blog_detail::BlogDetailController;
pub use blog_list::BlogListController;
pub use pricing::PricingController;
pub use support::SupportController;

/// Lifecycle of a page's data fetch.
///
/// `PaginationLoading` is entered when only the page number changed; the
/// previous results stay visible until the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    PaginationLoading,
    Success,
    Error,
}
