pub mod news;
pub mod sink;

pub use news::{NewsError, NewsResult};
pub use sink::SinkError;
