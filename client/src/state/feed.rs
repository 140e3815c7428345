//! Public read data: the news feed and the about text.
//!
//! Read failures are logged and leave the previous value in place; nothing
//! is shown to the user and nothing is retried.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::api::ApiError;
use crate::net::types::{AboutEnvelope, NewsEnvelope, NewsItem};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    pub news: Vec<NewsItem>,
    pub about: String,
}

impl FeedState {
    pub fn apply_news(&mut self, result: Result<NewsEnvelope, ApiError>) {
        match result {
            Ok(envelope) => self.news = envelope.news.unwrap_or_default(),
            Err(e) => leptos::logging::warn!("failed to fetch news: {e}"),
        }
    }

    pub fn apply_about(&mut self, result: Result<AboutEnvelope, ApiError>) {
        match result {
            Ok(envelope) => self.about = envelope.about.unwrap_or_default(),
            Err(e) => leptos::logging::warn!("failed to fetch about: {e}"),
        }
    }

    /// Replace the about text after a successful admin edit.
    pub fn set_about(&mut self, about: String) {
        self.about = about;
    }
}
