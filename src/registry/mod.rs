//! Реестр новостей: регистрация подписчиков и рассылка публикаций.

pub mod registry;

pub use registry::*;
