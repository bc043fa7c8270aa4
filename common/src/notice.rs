use crate::error::ApiError;

pub const ERROR_DISMISS_MS: u32 = 5000;
pub const SUCCESS_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A banner message. Pages raise them; the app shell shows and dismisses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// Error banner for a failed call, prefixed with what was being done.
    pub fn failed(action: &str, err: &ApiError) -> Self {
        Self::error(err.user_message_for(action))
    }

    pub fn dismiss_after_ms(&self) -> u32 {
        match self.kind {
            NoticeKind::Error => ERROR_DISMISS_MS,
            NoticeKind::Success => SUCCESS_DISMISS_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_delays() {
        assert_eq!(Notice::error("x").dismiss_after_ms(), 5000);
        assert_eq!(Notice::success("x").dismiss_after_ms(), 3000);
        assert_eq!(
            Notice::failed("Ошибка при удалении", &ApiError::NotFound).text,
            "Ошибка при удалении: Не найдено"
        );
    }
}
