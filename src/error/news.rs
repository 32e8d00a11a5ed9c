use thiserror::Error;

/// Результат операций конструирования новостей.
pub type NewsResult<T> = Result<T, NewsError>;

/// Ошибка конструирования новости.
///
/// Новость обязана нести непустой заголовок и ровно одно
/// непустое содержимое (текст или адрес видео). Оба фабричных
/// метода проверяют это до создания значения.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    #[error("news title must not be empty")]
    EmptyTitle,

    #[error("text news requires a non-empty body")]
    EmptyBody,

    #[error("video news requires a non-empty locator url")]
    EmptyLocator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_error_display() {
        assert_eq!(NewsError::EmptyTitle.to_string(), "news title must not be empty");
        assert_eq!(
            NewsError::EmptyBody.to_string(),
            "text news requires a non-empty body"
        );
        assert_eq!(
            NewsError::EmptyLocator.to_string(),
            "video news requires a non-empty locator url"
        );
    }
}
