//! Модель новостей.
//!
//! - `item`: неизменяемая новость `NewsItem` и её содержимое
//!   `NewsPayload` (текст или видео, ровно одно из двух).
//! - `intern` (приватный): пул переиспользуемых `Arc<str>` для
//!   имён тем — темы повторяются и в новостях, и в подписках.

pub mod item;
mod intern;

pub use item::*;
pub(crate) use intern::intern_topic;
