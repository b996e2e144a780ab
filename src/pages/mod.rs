//! maud templates for every page of the site.
mod article;
mod index;
mod layout;
mod not_found;

pub use article::article_page;
pub use index::index_page;
pub use layout::layout;
pub use not_found::not_found_page;
