pub mod calendar;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod output;
pub mod pager;
pub mod reports;
pub mod session;
