//! User-facing status lines with a colored icon prefix.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

fn emit<T: fmt::Display>(color: &str, icon: &str, msg: T, to_stderr: bool) {
    let line = format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    if to_stderr {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(BLUE, "ℹ️", msg, false);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(GREEN, "✅", msg, false);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(YELLOW, "⚠️", msg, false);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(RED, "❌", msg, true);
}

/// Section header for multi-part outputs.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", BLUE, BOLD, msg, RESET);
}
