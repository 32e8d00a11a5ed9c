use thiserror::Error;
use tokio::sync::mpsc;

use crate::subscriber::Notification;

/// Ошибка доставки уведомления в сток.
///
/// Реестр пытается доставить уведомление ровно один раз на
/// совпадение; политика повторов целиком на стороне стока.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("notification channel is closed")]
    Closed,

    #[error("notification queue is full")]
    QueueFull,
}

// === Преобразования ===

impl From<mpsc::error::TrySendError<Notification>> for SinkError {
    fn from(err: mpsc::error::TrySendError<Notification>) -> Self {
        match err {
            mpsc::error::TrySendError::Full(_) => SinkError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SinkError::Closed,
        }
    }
}
