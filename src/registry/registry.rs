use crate::{
    news::{NewsItem, NewsPayload},
    subscriber::Subscriber,
};

/// Итог одной публикации.
///
/// `matched` — сколько подписчиков совпало с новостью,
/// `delivered` — сколько доставок приняты стоками,
/// `delivery_errors` — сколько отклонены.
/// Всегда `matched == delivered + delivery_errors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublishReport {
    pub matched: usize,
    pub delivered: usize,
    pub delivery_errors: usize,
}

/// Реестр новостей.
///
/// Держит подписчиков в порядке регистрации и рассылает каждую
/// публикацию: для каждого подписчика вычисляется предикат
/// совпадения, при совпадении — ровно одна попытка доставки.
/// Ошибка стока считается и логируется, но не прерывает обход.
///
/// Опубликованные новости складываются в журналы по виду
/// содержимого (текст/видео) — для последующих запросов, на
/// корректность рассылки журналы не влияют.
#[derive(Debug, Default)]
pub struct NewsRegistry {
    subscribers: Vec<Subscriber>,
    text_log: Vec<NewsItem>,
    video_log: Vec<NewsItem>,
    publish_count: usize,
    delivery_error_count: usize,
}

impl NewsRegistry {
    /// Создаёт пустой реестр.
    pub fn new() -> Self {
        Self::default()
    }

    /// Регистрирует подписчика.
    ///
    /// Дедупликации нет: повторная регистрация того же подписчика
    /// даст повторные уведомления.
    pub fn add_subscriber(&mut self, subscriber: Subscriber) {
        tracing::debug!(name = %subscriber.name(), "subscriber registered");
        self.subscribers.push(subscriber);
    }

    /// Количество зарегистрированных подписчиков.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Подписчик по порядковому номеру регистрации — для роста
    /// интересов между публикациями.
    pub fn subscriber_mut(&mut self, index: usize) -> Option<&mut Subscriber> {
        self.subscribers.get_mut(index)
    }

    /// Публикует новость: журналирует её по виду содержимого и
    /// рассылает всем совпавшим подписчикам в порядке регистрации.
    ///
    /// Возвращается только после того, как каждый подписчик проверен
    /// и каждая совпавшая доставка предпринята.
    pub fn publish(&mut self, item: NewsItem) -> PublishReport {
        self.publish_count += 1;

        match item.payload() {
            NewsPayload::Text(_) => self.text_log.push(item.clone()),
            NewsPayload::Video(_) => self.video_log.push(item.clone()),
        }

        let mut report = PublishReport::default();
        for subscriber in &self.subscribers {
            if !subscriber.should_receive(&item) {
                continue;
            }
            report.matched += 1;
            match subscriber.notify(&item) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    report.delivery_errors += 1;
                    self.delivery_error_count += 1;
                    tracing::warn!(
                        recipient = %subscriber.name(),
                        title = %item.title(),
                        error = %err,
                        "notification delivery failed"
                    );
                }
            }
        }

        tracing::debug!(
            title = %item.title(),
            matched = report.matched,
            delivered = report.delivered,
            delivery_errors = report.delivery_errors,
            "news published"
        );
        report
    }

    /// Журнал опубликованных текстовых новостей.
    pub fn text_news(&self) -> &[NewsItem] {
        &self.text_log
    }

    /// Журнал опубликованных видео-новостей.
    pub fn video_news(&self) -> &[NewsItem] {
        &self.video_log
    }

    /// Общее количество публикаций.
    pub fn publish_count(&self) -> usize {
        self.publish_count
    }

    /// Общее количество отказов доставки.
    pub fn delivery_errors(&self) -> usize {
        self.delivery_error_count
    }
}
