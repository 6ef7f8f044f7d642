mod scripted_console;

pub use scripted_console::ScriptedConsole;
