mod operator_command;
mod operator_console;

pub(crate) use operator_console::OperatorConsole;
