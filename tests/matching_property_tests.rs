use std::collections::HashSet;

use proptest::prelude::*;

use vestnik::{Interests, NewsItem};

/// Небольшая вселенная тем: даёт и пересекающиеся,
/// и непересекающиеся множества.
fn topic() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["tech", "sport", "culture", "science", "world", "local"])
        .prop_map(str::to_string)
}

fn topic_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(topic(), 0..4)
}

fn title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}"
}

prop_compose! {
    fn text_item()(t in title(), topics in topic_set(), body in "[a-z]{1,16}") -> NewsItem {
        NewsItem::text(t, topics, body).unwrap()
    }
}

prop_compose! {
    fn video_item()(t in title(), topics in topic_set(), path in "[a-z]{1,12}") -> NewsItem {
        NewsItem::video(t, topics, format!("https://video-url.com/{path}")).unwrap()
    }
}

proptest! {
    /// Общая текстовая подписка совпадает с любой текстовой новостью,
    /// каким бы ни было множество её тем.
    #[test]
    fn general_text_matches_every_text_item(item in text_item()) {
        let mut interests = Interests::new();
        interests.subscribe_to_all_text();
        prop_assert!(interests.matches(&item));
    }

    /// Подписчик без деклараций не совпадает ни с одной новостью.
    #[test]
    fn empty_interests_match_nothing(text in text_item(), video in video_item()) {
        let interests = Interests::new();
        prop_assert!(!interests.matches(&text));
        prop_assert!(!interests.matches(&video));
    }

    /// Тематическая подписка совпадает с текстовой новостью тогда и
    /// только тогда, когда множества тем пересекаются.
    #[test]
    fn topic_match_iff_intersection(subscribed in topic_set(), item in text_item()) {
        let mut interests = Interests::new();
        for t in &subscribed {
            interests.subscribe_to_topic(t);
        }

        let subscribed: HashSet<&str> = subscribed.iter().map(String::as_str).collect();
        let intersects = item
            .topics()
            .iter()
            .any(|t| subscribed.contains(t.as_ref()));

        prop_assert_eq!(interests.matches(&item), intersects);
    }

    /// Без видео-подписки видео не совпадает никогда, сколько бы
    /// текстовых деклараций ни было.
    #[test]
    fn video_never_matches_without_video_subscription(
        subscribed in topic_set(),
        general in any::<bool>(),
        item in video_item(),
    ) {
        let mut interests = Interests::new();
        if general {
            interests.subscribe_to_all_text();
        }
        for t in &subscribed {
            interests.subscribe_to_topic(t);
        }
        prop_assert!(!interests.matches(&item));
    }

    /// Видео-подписка совпадает с любым видео независимо от тем.
    #[test]
    fn video_subscription_matches_every_video(item in video_item()) {
        let mut interests = Interests::new();
        interests.subscribe_to_video();
        prop_assert!(interests.matches(&item));
    }

    /// Предикат чистый: повторные вычисления дают один результат.
    #[test]
    fn matches_is_pure(subscribed in topic_set(), video in any::<bool>(), item in text_item()) {
        let mut interests = Interests::new();
        for t in &subscribed {
            interests.subscribe_to_topic(t);
        }
        if video {
            interests.subscribe_to_video();
        }

        let first = interests.matches(&item);
        for _ in 0..3 {
            prop_assert_eq!(interests.matches(&item), first);
        }
    }
}
