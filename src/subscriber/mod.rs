//! Подписчики и доставка уведомлений.
//!
//! - `interests`: декларации интересов и чистый предикат совпадения.
//! - `subscriber`: подписчик — имя, интересы и внедрённый сток доставки.
//! - `sink`: уведомление и стоки доставки (`TracingSink`, `ChannelSink`,
//!   `MemorySink`).

pub mod interests;
pub mod sink;
pub mod subscriber;

pub use interests::*;
pub use sink::*;
pub use subscriber::*;
