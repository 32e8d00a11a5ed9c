use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::SinkError;

/// Уведомление, пересекающее внешнюю границу ядра:
/// кому и о какой новости сообщаем.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: String,
    pub title: String,
}

impl Notification {
    pub fn new(recipient: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            title: title.into(),
        }
    }
}

/// Сток доставки уведомлений.
///
/// Единственная внешняя зависимость ядра: очередь, лог, webhook —
/// любая реализация. Ядро вызывает `notify` синхронно, один раз на
/// совпадение; ни форматированием, ни транспортом не занимается.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification) -> Result<(), SinkError>;
}

/// Сток, пишущий уведомления в структурный лог.
///
/// Замена консольной печати: событие уровня `info` с именем
/// получателя и заголовком новости.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: Notification) -> Result<(), SinkError> {
        tracing::info!(
            recipient = %notification.recipient,
            title = %notification.title,
            "news delivered"
        );
        Ok(())
    }
}

/// Сток, толкающий уведомления в ограниченную mpsc-очередь.
///
/// Потребитель на стороне встраивающей системы вычитывает очередь
/// асинхронно. Переполненная или закрытая очередь — ошибка доставки,
/// которую реестр считает и логирует.
#[derive(Debug)]
pub struct ChannelSink {
    tx: mpsc::Sender<Notification>,
}

impl ChannelSink {
    /// Создаёт сток и приёмник с заданной ёмкостью очереди.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: Notification) -> Result<(), SinkError> {
        self.tx.try_send(notification).map_err(Into::into)
    }
}

/// Сток, копящий уведомления в памяти.
///
/// Для тестов и встраивателей, опрашивающих доставку синхронно.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Забирает все накопленные уведомления, очищая буфер.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut self.delivered.lock())
    }

    /// Количество накопленных уведомлений.
    pub fn len(&self) -> usize {
        self.delivered.lock().len()
    }

    /// Пуст ли буфер.
    pub fn is_empty(&self) -> bool {
        self.delivered.lock().is_empty()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) -> Result<(), SinkError> {
        self.delivered.lock().push(notification);
        Ok(())
    }
}
