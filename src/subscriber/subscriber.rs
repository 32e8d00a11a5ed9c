use std::sync::Arc;

use crate::{
    news::NewsItem,
    subscriber::{Interests, Notification, NotificationSink},
    SinkError,
};

/// Подписчик: имя, интересы и внедрённый сток доставки.
///
/// Имя — идентификатор для уведомлений, уникальность не
/// гарантируется. Сток задаётся при создании; ядро сопоставления
/// остаётся чистым и тестируется отдельно от механизма доставки.
pub struct Subscriber {
    name: String,
    interests: Interests,
    sink: Arc<dyn NotificationSink>,
}

impl Subscriber {
    /// Создаёт подписчика без интересов: до первой подписки
    /// он не совпадает ни с одной новостью.
    pub fn new(name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            name: name.into(),
            interests: Interests::new(),
            sink,
        }
    }

    /// Имя подписчика.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Текущие интересы.
    pub fn interests(&self) -> &Interests {
        &self.interests
    }

    /// Подписка на все текстовые новости независимо от тем.
    pub fn subscribe_to_all_text(&mut self) {
        self.interests.subscribe_to_all_text();
    }

    /// Подписка на текстовые новости с данной темой.
    pub fn subscribe_to_topic<S: AsRef<str>>(&mut self, topic: S) {
        self.interests.subscribe_to_topic(topic);
    }

    /// Подписка на видео-новости.
    pub fn subscribe_to_video(&mut self) {
        self.interests.subscribe_to_video();
    }

    /// Должна ли новость дойти до этого подписчика.
    /// Чистый предикат, делегирует [`Interests::matches`].
    pub fn should_receive(&self, item: &NewsItem) -> bool {
        self.interests.matches(item)
    }

    /// Передаёт заголовок новости в сток доставки.
    /// Одна попытка; повторы — забота стока.
    pub fn notify(&self, item: &NewsItem) -> Result<(), SinkError> {
        self.sink
            .notify(Notification::new(self.name.clone(), item.title()))
    }
}

impl std::fmt::Debug for Subscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriber")
            .field("name", &self.name)
            .field("interests", &self.interests)
            .finish_non_exhaustive()
    }
}
