mod mocks;

use mocks::ScriptedConsole;
use phone_book_assistant::messages;
use phone_book_assistant::{Assistant, AssistantError};

fn run_session(lines: &[&str]) -> (Assistant, ScriptedConsole) {
    let mut assistant = Assistant::default();
    let mut console = ScriptedConsole::new(lines);
    assistant.run(&mut console).unwrap();
    (assistant, console)
}

#[test]
fn test_add_then_phone_returns_number() {
    let (_, console) = run_session(&["add", "Alice", "+380501234567", "phone", "Alice", "exit"]);

    assert_eq!(
        console.output(),
        &[
            "Запис з ім'ям Alice та номером телефону +380501234567 додано.".to_string(),
            "+380501234567".to_string(),
            messages::FAREWELL.to_string(),
        ]
    );
}

#[test]
fn test_prompts_follow_command_protocol() {
    let (_, console) = run_session(&["add", "Alice", "0501234567", "exit"]);

    assert_eq!(
        console.prompts(),
        &[
            messages::COMMAND_PROMPT.to_string(),
            "Введіть ім'я для записної книги: ".to_string(),
            "Введіть мобільний номер телефону для контакта Alice: ".to_string(),
            messages::COMMAND_PROMPT.to_string(),
        ]
    );
}

#[test]
fn test_add_same_name_twice_keeps_one_entry() {
    let (assistant, console) = run_session(&[
        "add", "Alice", "0501112233", "add", "Alice", "0672223344", "show_all", "exit",
    ]);

    assert_eq!(assistant.address_book().len(), 1);
    assert_eq!(console.output()[2], "Alice: 0672223344");
}

#[test]
fn test_change_missing_contact_reports_not_found() {
    let (assistant, console) = run_session(&["change", "Ghost", "0501112233", "exit"]);

    assert_eq!(console.output()[0], messages::CONTACT_NOT_FOUND);
    assert!(assistant.address_book().is_empty());
}

#[test]
fn test_remove_absent_phone_reports_input_error() {
    let (assistant, console) = run_session(&[
        "add",
        "Bob",
        "0501112233",
        "remove_phone",
        "Bob",
        "0672223344",
        "phone",
        "Bob",
        "exit",
    ]);

    assert_eq!(console.output()[1], messages::INPUT_ERROR);
    assert_eq!(console.output()[2], "0501112233");
    assert_eq!(assistant.address_book().len(), 1);
}

#[test]
fn test_show_all_in_insertion_order() {
    let (_, console) = run_session(&[
        "add",
        "Bob",
        "0501112233",
        "add",
        "Ann",
        "0502223344",
        "change",
        "Ann",
        "0503334455",
        "show_all",
        "exit",
    ]);

    assert_eq!(console.output()[3], "Bob: 0501112233\nAnn: 0503334455");
}

#[test]
fn test_invalid_phone_keeps_session_alive() {
    let (assistant, console) = run_session(&["add", "Alice", "abc", "add", "Alice", "12", "exit"]);

    assert_eq!(
        console.output(),
        &[
            messages::INPUT_ERROR.to_string(),
            messages::INPUT_ERROR.to_string(),
            messages::FAREWELL.to_string(),
        ]
    );
    assert!(assistant.address_book().is_empty());
}

#[test]
fn test_commands_are_case_insensitive_and_trimmed() {
    let (assistant, console) = run_session(&["  ADD ", "Alice", "0501112233", "Exit"]);

    assert_eq!(assistant.address_book().len(), 1);
    assert_eq!(console.output().last().unwrap(), messages::FAREWELL);
}

#[test]
fn test_unknown_command_continues() {
    let (_, console) = run_session(&["add alice", "", "exit"]);

    assert_eq!(
        console.output(),
        &[
            messages::INVALID_COMMAND.to_string(),
            messages::INVALID_COMMAND.to_string(),
            messages::FAREWELL.to_string(),
        ]
    );
}

#[test]
fn test_exit_stops_reading_input() {
    let (_, console) = run_session(&["exit", "add", "Alice", "0501112233"]);

    assert_eq!(console.output(), &[messages::FAREWELL.to_string()]);
    assert_eq!(console.prompts().len(), 1);
    assert_eq!(console.unread(), 3);
}

#[test]
fn test_remove_record_then_lookup() {
    let (assistant, console) = run_session(&[
        "add",
        "Alice",
        "0501112233",
        "remove_record",
        "Alice",
        "phone",
        "Alice",
        "remove_record",
        "Alice",
        "exit",
    ]);

    assert_eq!(console.output()[1], "Контакт Alice видалено.");
    assert_eq!(console.output()[2], messages::CONTACT_NOT_FOUND);
    assert_eq!(console.output()[3], "Контакт Alice видалено.");
    assert!(assistant.address_book().is_empty());
}

#[test]
fn test_hello_lists_every_command() {
    let (assistant, console) = run_session(&["hello", "exit"]);

    let greeting = &console.output()[0];
    assert!(greeting.starts_with(messages::GREETING));
    for command in assistant.registry().iter() {
        assert!(greeting.contains(&format!("\n{}: {}", command.name, command.description)));
    }
}

#[test]
fn test_end_of_input_ends_session() {
    let (assistant, console) = run_session(&["add", "Alice"]);

    assert!(console.output().is_empty());
    assert!(assistant.address_book().is_empty());
}

#[test]
fn test_console_failure_propagates() {
    let mut assistant = Assistant::default();
    let mut console = ScriptedConsole::new(&["show_all"]).failing_writes();

    let result = assistant.run(&mut console);
    assert!(matches!(result, Err(AssistantError::Io(_))));
}

#[test]
fn test_long_names_are_stored_and_removed() {
    let name = "A".repeat(501);
    let (assistant, console) = run_session(&[
        "add",
        &name,
        "0501112233",
        "phone",
        &name,
        "remove_record",
        &name,
        "exit",
    ]);

    assert_eq!(
        console.output(),
        &[
            messages::contact_added(&name, "0501112233"),
            "0501112233".to_string(),
            messages::record_removed(&name),
            messages::FAREWELL.to_string(),
        ]
    );
    assert!(assistant.address_book().is_empty());
}
