//! Error taxonomy shared by the API client, the session store and the pages.
//!
//! Classification is driven by the HTTP status: 401 forces a logout, 404 has a
//! dedicated message, anything else is surfaced with the status code or the
//! server's own `error` field. Client-side rejections never reach the network
//! and are reported as [`ValidationError`].

use serde::Deserialize;
use thiserror::Error;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("resource not found")]
    NotFound,

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        /// The `error` field of the response body, when the server sent one.
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Body shape the API uses for error responses: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl ApiError {
    /// Builds the error for a non-2xx response. `body` is the raw response text.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            404 => ApiError::NotFound,
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(|b| b.error)
                    .filter(|m| !m.trim().is_empty());
                ApiError::Status { status, message }
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Text shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized => "Нет прав доступа. Попробуйте войти заново.".to_string(),
            ApiError::NotFound => "Не найдено".to_string(),
            ApiError::Status {
                message: Some(message),
                ..
            } => format!("Ошибка: {}", message),
            ApiError::Status { status, .. } => format!("Ошибка сервера: {}", status),
            ApiError::Network(_) => "Ошибка сети. Проверьте подключение к интернету.".to_string(),
            ApiError::Decode(_) => "Некорректный ответ сервера".to_string(),
            ApiError::Validation(err) => err.to_string(),
        }
    }

    /// Like [`ApiError::user_message`], but prefixed with what the page was doing.
    pub fn user_message_for(&self, action: &str) -> String {
        match self {
            ApiError::Unauthorized | ApiError::Validation(_) => self.user_message(),
            _ => format!("{}: {}", action, self.user_message()),
        }
    }
}

/// Form input rejected before any request was sent.
///
/// The `Display` text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Заполните все обязательные поля")]
    MissingFields,

    #[error("Некорректная дата: {0}")]
    InvalidDate(String),

    #[error("Время открытия должно быть раньше времени закрытия")]
    WindowOrder,

    #[error("Время на прохождение должно быть не менее 1 минуты")]
    TimeLimitTooShort,

    #[error("Выберите хотя бы одного студента")]
    NoStudents,

    #[error("Квоты по типам для темы {topic_id} превышают число вопросов ({quota} > {count})")]
    QuotaExceedsCount { topic_id: i64, quota: u32, count: u32 },

    #[error("Тема {0} добавлена в тест дважды")]
    DuplicateTopic(i64),

    #[error("Некорректный адрес электронной почты")]
    InvalidEmail,

    #[error("Пароль должен содержать не менее {0} символов")]
    PasswordTooShort(usize),

    #[error("Пароли не совпадают")]
    PasswordMismatch,

    #[error("Выберите файл для загрузки")]
    MissingFile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(404, "{\"error\":\"x\"}"), ApiError::NotFound);
        assert_eq!(
            ApiError::from_status(409, "{\"error\":\"discipline exists\"}"),
            ApiError::Status {
                status: 409,
                message: Some("discipline exists".into())
            }
        );
        assert_eq!(
            ApiError::from_status(500, "<html>oops</html>"),
            ApiError::Status {
                status: 500,
                message: None
            }
        );
    }

    #[test]
    fn banner_text() {
        assert_eq!(ApiError::NotFound.user_message(), "Не найдено");
        assert_eq!(
            ApiError::from_status(502, "").user_message(),
            "Ошибка сервера: 502"
        );
        assert_eq!(
            ApiError::from_status(400, "{\"error\":\"bad title\"}").user_message_for("Ошибка при создании теста"),
            "Ошибка при создании теста: Ошибка: bad title"
        );
        assert_eq!(
            ApiError::from(ValidationError::WindowOrder).user_message(),
            "Время открытия должно быть раньше времени закрытия"
        );
    }
}
