//! Localized user-facing strings.

use crate::models::Locale;

/// The fixed message set for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub invalid_input: &'static str,
    pub division_by_zero: &'static str,
    /// Shown in the result area whenever the attempt failed.
    pub result_placeholder: &'static str,
    pub transport_failure: &'static str,
    pub unknown_command: &'static str,
    pub result_label: &'static str,
    pub error_label: &'static str,
    pub waiting: &'static str,
}

static EN: Messages = Messages {
    invalid_input: "Please enter both numbers",
    division_by_zero: "Division by zero is not allowed",
    result_placeholder: "Error",
    transport_failure: "Request failed",
    unknown_command: "Unknown command, type `help` for usage",
    result_label: "result",
    error_label: "error",
    waiting: "waiting for server…",
};

static RU: Messages = Messages {
    invalid_input: "Пожалуйста, введите оба числа",
    division_by_zero: "Деление на ноль невозможно",
    result_placeholder: "Ошибка",
    transport_failure: "Ошибка запроса",
    unknown_command: "Неизвестная команда, введите `help` для справки",
    result_label: "результат",
    error_label: "ошибка",
    waiting: "ожидание ответа сервера…",
};

impl Messages {
    pub fn for_locale(locale: Locale) -> &'static Messages {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}
