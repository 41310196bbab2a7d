//! Console messages. Status lines go to stdout; warnings and errors go to
//! stderr so that piped `shifts` / `events` output stays clean.

use crate::utils::colors::{BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => CYAN,
            Level::Success => GREEN,
            Level::Warning => YELLOW,
            Level::Error => RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let line = format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg);
    match level {
        Level::Warning | Level::Error => eprintln!("{line}"),
        Level::Info | Level::Success => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Report section title, e.g. above the shift table.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "─".repeat(title.chars().count().max(24));
    println!("{CYAN}{BOLD}{title}\n{rule}{RESET}");
}
