use super::*;
use serde_json::json;

fn news_envelope(ids: &[i64]) -> NewsEnvelope {
    let news: Vec<_> = ids
        .iter()
        .map(|id| json!({"id": id, "title": format!("t{id}"), "content": "c", "category": "General", "published_at": "2024-01-01 00:00:00"}))
        .collect();
    serde_json::from_value(json!({ "news": news })).unwrap()
}

#[test]
fn apply_news_replaces_list() {
    let mut feed = FeedState::default();
    feed.apply_news(Ok(news_envelope(&[1, 2])));
    feed.apply_news(Ok(news_envelope(&[3])));
    assert_eq!(feed.news.iter().map(|n| n.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn apply_news_missing_field_yields_empty_feed() {
    let mut feed = FeedState::default();
    feed.apply_news(Ok(news_envelope(&[1])));
    feed.apply_news(Ok(NewsEnvelope::default()));
    assert!(feed.news.is_empty());
}

#[test]
fn apply_news_error_keeps_previous_list() {
    let mut feed = FeedState::default();
    feed.apply_news(Ok(news_envelope(&[1])));
    feed.apply_news(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(feed.news.len(), 1);
}

#[test]
fn apply_about_sets_text_or_empty() {
    let mut feed = FeedState::default();
    feed.apply_about(Ok(AboutEnvelope { about: Some("Hello".to_owned()) }));
    assert_eq!(feed.about, "Hello");
    feed.apply_about(Err(ApiError::Unauthorized));
    assert_eq!(feed.about, "Hello");
    feed.apply_about(Ok(AboutEnvelope::default()));
    assert_eq!(feed.about, "");
}

#[test]
fn set_about_replaces_text() {
    let mut feed = FeedState::default();
    feed.set_about("New".to_owned());
    assert_eq!(feed.about, "New");
}
