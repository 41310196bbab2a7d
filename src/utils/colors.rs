/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Overtime cells are highlighted, regular ones are left as they are.
pub fn colorize_overtime(value: &str, is_overtime: bool) -> String {
    if is_overtime {
        format!("{MAGENTA}{value}{RESET}")
    } else {
        value.to_string()
    }
}
