/// Configuration loading.
pub mod config;
/// Common error types: news construction, notification delivery.
pub mod error;
/// Flexible logging (filter, console sink).
pub mod logging;
/// News item model: payload variants, topics, construction.
pub mod news;
/// Registry: subscriber registration and dispatch.
pub mod registry;
/// Subscribers: interests, matching, notification sinks.
pub mod subscriber;

// -----------------------------------------------------------------------------
//  Frequently used public types
// -----------------------------------------------------------------------------

/// config
pub use config::Settings;
/// Operation errors and result types.
pub use error::{NewsError, NewsResult, SinkError};
/// News model: items and payload kinds.
pub use news::{NewsItem, NewsPayload};
/// Dispatch: registry and per-publish report.
pub use registry::{NewsRegistry, PublishReport};
/// Subscriber API: interests, sinks, notifications.
pub use subscriber::{
    ChannelSink, Interests, MemorySink, Notification, NotificationSink, Subscriber, TracingSink,
};
