pub mod browsing_view_model;

pub use browsing_view_model::{BrowsingViewModel, IssueDetailViewModel};
