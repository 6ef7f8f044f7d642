//! Fixed user-facing texts of the console protocol.

pub const COMMAND_PROMPT: &str = "Введіть команду: ";
pub const INVALID_COMMAND: &str = "Неправильна команда";
pub const INPUT_ERROR: &str = "Помилка введення. Спробуйте ще раз.";
pub const CONTACT_NOT_FOUND: &str = "Контакту з таким ім'ям не знайдено.";
pub const FAREWELL: &str = "До побачення!";
pub const GREETING: &str = "Привіт! Я можу допомогти Вам з наступними командами: ";

// Prompts. `{name}` is replaced with the name entered earlier in the command.
pub const ADD_NAME_PROMPT: &str = "Введіть ім'я для записної книги: ";
pub const ADD_PHONE_PROMPT: &str = "Введіть мобільний номер телефону для контакта {name}: ";
pub const CHANGE_NAME_PROMPT: &str = "Введіть ім'я контакту, номер якого хочете змінити: ";
pub const CHANGE_PHONE_PROMPT: &str = "Введіть новий номер телефону для контакта {name}: ";
pub const REMOVE_PHONE_NAME_PROMPT: &str =
    "Введіть ім'я контакту, з якого хочете видалити номер телефону: ";
pub const REMOVE_PHONE_PHONE_PROMPT: &str =
    "Введіть номер телефону, який хочете видалити з контакту {name}: ";
pub const REMOVE_RECORD_NAME_PROMPT: &str = "Введіть ім'я контакту, який хочете видалити: ";
pub const PHONE_NAME_PROMPT: &str =
    "Введіть ім'я контакту, номери телефону якого хочете побачити: ";

pub fn contact_added(name: &str, phone: &str) -> String {
    format!("Запис з ім'ям {} та номером телефону {} додано.", name, phone)
}

pub fn phone_changed(name: &str) -> String {
    format!("Для контакту {} номер телефону оновлено.", name)
}

pub fn phone_removed(name: &str, phone: &str) -> String {
    format!("Номер телефону {} видалено з контакту {}.", phone, name)
}

pub fn record_removed(name: &str) -> String {
    format!("Контакт {} видалено.", name)
}
