use std::{collections::HashSet, sync::Arc};

use crate::news::{intern_topic, NewsItem};

/// Декларации интересов подписчика.
///
/// Три независимые, аддитивные декларации:
/// - общая текстовая подписка — любая текстовая новость;
/// - подписка по теме — текстовая новость, помеченная темой;
/// - видео-подписка — любое видео, темы не учитываются.
///
/// Интересы только растут: операции отписки нет.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interests {
    general_text: bool,
    topics: HashSet<Arc<str>>,
    video: bool,
}

impl Interests {
    /// Создаёт пустые интересы: не совпадает ни с чем.
    pub fn new() -> Self {
        Self::default()
    }

    /// Подписка на все текстовые новости независимо от тем.
    pub fn subscribe_to_all_text(&mut self) {
        self.general_text = true;
    }

    /// Подписка на текстовые новости с данной темой.
    /// Повторная подписка на ту же тему инертна.
    pub fn subscribe_to_topic<S: AsRef<str>>(&mut self, topic: S) {
        self.topics.insert(intern_topic(topic));
    }

    /// Подписка на видео-новости.
    pub fn subscribe_to_video(&mut self) {
        self.video = true;
    }

    /// Подписан ли на все текстовые новости.
    pub fn general_text(&self) -> bool {
        self.general_text
    }

    /// Темы текстовых подписок.
    pub fn topics(&self) -> &HashSet<Arc<str>> {
        &self.topics
    }

    /// Подписан ли на видео.
    pub fn video(&self) -> bool {
        self.video
    }

    /// Чистый предикат: должна ли новость дойти до носителя
    /// этих интересов.
    ///
    /// Текстовая новость совпадает при общей текстовой подписке
    /// или непустом пересечении тем; видео — только при
    /// видео-подписке, темы не учитываются.
    pub fn matches(&self, item: &NewsItem) -> bool {
        if item.is_text()
            && (self.general_text || item.topics().iter().any(|t| self.topics.contains(t)))
        {
            return true;
        }

        if item.is_video() && self.video {
            return true;
        }

        false
    }
}
