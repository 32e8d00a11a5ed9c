use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;

/// Пул для повторного использования Arc<str> по одинаковым именам тем.
/// Crate-private: другие модули внутри этого крейта видят, а внешние — нет.
static TOPIC_INTERN: Lazy<DashMap<String, Arc<str>>> = Lazy::new(DashMap::new);

/// Возвращает interned Arc<str> для данной темы.
/// При первом вызове для нового имени создаёт Arc<str> и сохраняет его в пуле.
#[inline(always)]
pub(crate) fn intern_topic<S: AsRef<str>>(topic: S) -> Arc<str> {
    let key = topic.as_ref();
    if let Some(existing) = TOPIC_INTERN.get(key) {
        existing.clone()
    } else {
        let s = key.to_string();
        let arc: Arc<str> = Arc::from(s.clone());
        TOPIC_INTERN.insert(s, arc.clone());
        arc
    }
}
