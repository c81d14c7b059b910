//! Colored console messages shared by every command handler.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn color(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn emit<T: fmt::Display>(tone: Tone, msg: T) {
    let line = format!("{}{}{} {}{}", tone.color(), BOLD, tone.icon(), RESET, msg);
    match tone {
        Tone::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, msg);
}

/// Section header printed above tables and reports.
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}{}====================== {}\n{}",
        Tone::Info.color(),
        BOLD,
        msg,
        RESET
    );
}
