//! Fixed Russian message templates for the console game.
//!
//! All user-facing wording lives here so the driver logic stays free of
//! string literals and the templates can be adjusted in one place.

use chislo_core::GameConfig;

pub const WELCOME: &str = "Добро пожаловать в игру 'Угадай число'!";
pub const FAREWELL: &str = "\nСпасибо за игру! До свидания!";

pub const RESTORE_PROMPT: &str = "Обнаружено сохранение. Загрузить? (да/нет): ";
pub const RESTORE_OK: &str = "Игра загружена!";
pub const RESTORE_FAILED: &str = "Не удалось загрузить сохранение. Начинаем новую игру.";
pub const SAVE_PROMPT: &str = "Хотите сохранить игру перед выходом? (да/нет): ";
pub const SAVED: &str = "Игра сохранена!";
pub const REPLAY_PROMPT: &str = "\nХотите сыграть еще раз? (да/нет): ";
pub const YES_NO_REPROMPT: &str = "Пожалуйста, введите 'да' или 'нет'.";

pub const HINT_NEED_ATTEMPT: &str = "Сделайте хотя бы одну попытку!";
pub const SECRET_HIGHER: &str = "Загаданное число больше!";
pub const SECRET_LOWER: &str = "Загаданное число меньше!";
pub const INVALID_NUMBER: &str = "Пожалуйста, введите целое число или 'выход'!";

pub const STATS_HEADER: &str = "\n=== Статистика игр ===";
pub const NO_STATS: &str = "Статистика пока отсутствует.";

pub fn instructions(config: &GameConfig) -> String {
    format!(
        "\n=== Игра 'Угадай число' ===\n\
         Я загадал число от {} до {}.\n\
         У вас есть {} попыток, чтобы угадать его.\n\
         После каждой попытки я скажу, больше или меньше ваше число.\n\
         Для выхода введите 'выход'\n\
         Для подсказки введите 'подсказка'\n",
        config.min_range, config.max_range, config.max_attempts
    )
}

pub fn guess_prompt(attempt: u32) -> String {
    format!("Попытка {}. Ваше число: ", attempt)
}

pub fn out_of_range(config: &GameConfig) -> String {
    format!(
        "Число должно быть от {} до {}!",
        config.min_range, config.max_range
    )
}

pub fn hint_range(min: i64, max: i64) -> String {
    format!("Подсказка: число между {} и {}", min, max)
}

pub fn win(number: i64, attempts: u32) -> String {
    format!(
        "\nПоздравляю! Вы угадали число {} за {} попыток!",
        number, attempts
    )
}

pub fn loss(number: i64) -> String {
    format!(
        "\nК сожалению, вы исчерпали все попытки. Загаданное число было {}.",
        number
    )
}
