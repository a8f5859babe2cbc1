//! Console message helpers with consistent colors and icons.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> &'static str {
        match self {
            Level::Info => "\x1b[34m",
            Level::Success => "\x1b[32m",
            Level::Warning => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg);
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
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
