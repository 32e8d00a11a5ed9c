use std::{collections::HashSet, sync::Arc};

use super::intern_topic;
use crate::{NewsError, NewsResult};

/// Содержимое новости.
///
/// Новость несёт ровно один из двух видов содержимого;
/// состояние "и то и другое" или "ни того ни другого"
/// непредставимо на уровне типа.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsPayload {
    /// Текстовая новость с телом.
    Text(String),
    /// Видео-новость с адресом ролика.
    Video(String),
}

/// Опубликованная новость.
///
/// Неизменяемое значение: заголовок, множество тем (порядок не
/// важен, может быть пустым) и содержимое. Создаётся фабриками
/// [`NewsItem::text`] и [`NewsItem::video`], которые проверяют
/// непустоту заголовка и содержимого.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    title: String,
    topics: HashSet<Arc<str>>,
    payload: NewsPayload,
}

impl NewsItem {
    /// Создаёт текстовую новость.
    ///
    /// # Возвращает
    /// - `Err(NewsError::EmptyTitle)` при пустом заголовке
    /// - `Err(NewsError::EmptyBody)` при пустом теле
    pub fn text<T, I, S>(title: T, topics: I, body: impl Into<String>) -> NewsResult<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = body.into();
        if body.is_empty() {
            return Err(NewsError::EmptyBody);
        }
        Self::build(title.into(), topics, NewsPayload::Text(body))
    }

    /// Создаёт видео-новость.
    ///
    /// # Возвращает
    /// - `Err(NewsError::EmptyTitle)` при пустом заголовке
    /// - `Err(NewsError::EmptyLocator)` при пустом адресе
    pub fn video<T, I, S>(title: T, topics: I, locator: impl Into<String>) -> NewsResult<Self>
    where
        T: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locator = locator.into();
        if locator.is_empty() {
            return Err(NewsError::EmptyLocator);
        }
        Self::build(title.into(), topics, NewsPayload::Video(locator))
    }

    fn build<I, S>(title: String, topics: I, payload: NewsPayload) -> NewsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if title.is_empty() {
            return Err(NewsError::EmptyTitle);
        }
        let topics = topics.into_iter().map(intern_topic).collect();
        Ok(Self {
            title,
            topics,
            payload,
        })
    }

    /// Заголовок новости.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Множество тем новости.
    pub fn topics(&self) -> &HashSet<Arc<str>> {
        &self.topics
    }

    /// Содержимое новости.
    pub fn payload(&self) -> &NewsPayload {
        &self.payload
    }

    /// Помечена ли новость данной темой.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains(topic)
    }

    /// Текстовая ли это новость.
    pub fn is_text(&self) -> bool {
        matches!(self.payload, NewsPayload::Text(_))
    }

    /// Видео ли это.
    pub fn is_video(&self) -> bool {
        matches!(self.payload, NewsPayload::Video(_))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    /// Тест проверяет создание текстовой новости с темами.
    #[test]
    fn test_text_item_creation() {
        let item = NewsItem::text("Launch", ["tech"], "details").unwrap();

        assert_eq!(item.title(), "Launch");
        assert!(item.is_text());
        assert!(!item.is_video());
        assert!(item.has_topic("tech"));
        assert_eq!(item.payload(), &NewsPayload::Text("details".into()));
    }

    /// Тест проверяет создание видео-новости.
    #[test]
    fn test_video_item_creation() {
        let item = NewsItem::video("Event highlights", ["tech"], "https://video-url.com").unwrap();

        assert!(item.is_video());
        assert!(!item.is_text());
        assert_eq!(
            item.payload(),
            &NewsPayload::Video("https://video-url.com".into())
        );
    }

    /// Тест проверяет, что пустое множество тем допустимо.
    #[test]
    fn test_empty_topic_set_is_allowed() {
        let item = NewsItem::text("Untagged", Vec::<&str>::new(), "body").unwrap();
        assert!(item.topics().is_empty());
        assert!(!item.has_topic("tech"));
    }

    /// Тест проверяет, что дубликаты тем схлопываются как множество.
    #[test]
    fn test_duplicate_topics_collapse() {
        let item = NewsItem::text("Dup", ["tech", "tech", "sport"], "body").unwrap();
        assert_eq!(item.topics().len(), 2);
    }

    /// Тест проверяет отказ конструирования при пустом заголовке,
    /// пустом теле и пустом адресе видео.
    #[test]
    fn test_construction_rejects_empty_fields() {
        assert_eq!(
            NewsItem::text("", ["tech"], "body").unwrap_err(),
            NewsError::EmptyTitle
        );
        assert_eq!(
            NewsItem::text("Launch", ["tech"], "").unwrap_err(),
            NewsError::EmptyBody
        );
        assert_eq!(
            NewsItem::video("Launch", ["tech"], "").unwrap_err(),
            NewsError::EmptyLocator
        );
    }

    /// Тест проверяет, что одинаковые темы двух новостей делят один Arc.
    #[test]
    fn test_topics_are_interned() {
        let a = NewsItem::text("A", ["shared-topic"], "x").unwrap();
        let b = NewsItem::video("B", ["shared-topic"], "https://v").unwrap();

        let ta = a.topics().iter().next().unwrap();
        let tb = b.topics().iter().next().unwrap();
        assert!(Arc::ptr_eq(ta, tb), "Одна тема - один Arc");
    }
}
