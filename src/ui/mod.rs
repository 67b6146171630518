use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};

pub mod progress;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Disable colors when stdout is not a terminal or `NO_COLOR` is set
pub fn init_colors() {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Whether prompts can be answered by a human
pub fn is_interactive() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout)
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{}", title.bold().underline());
}

pub fn success(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn info(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "ℹ".blue().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

pub fn verbose(msg: &str) {
    if !is_verbose() {
        return;
    }
    eprintln!("{} {}", "·".dimmed(), msg.dimmed());
}

pub fn separator() {
    let width = terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| usize::from(w).min(60))
        .unwrap_or(50);
    println!("{}", "─".repeat(width).bright_black());
}

pub fn keyval(key: &str, val: &str) {
    if is_quiet() {
        return;
    }
    println!("{}: {}", key.bold(), val);
}

pub fn indent(msg: &str, level: usize) {
    if is_quiet() {
        return;
    }
    let spaces = " ".repeat(level * 2);
    println!("{}{}", spaces, msg);
}

/// Print a block of text between two separators
pub fn framed(content: &str) {
    separator();
    println!("{}", content.trim_end_matches('\n'));
    separator();
}

fn read_line() -> Option<String> {
    if let Err(e) = io::stdout().flush() {
        eprintln!("\nWarning: Failed to flush terminal: {}", e);
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            eprintln!("\nWarning: Failed to read input: {}", e);
            None
        }
    }
}

/// Ask a yes/no question; empty input or a broken stdin picks `default`
pub fn prompt_yes_no(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{} {} {} ", "?".yellow().bold(), question, hint);

    match read_line().map(|s| s.to_lowercase()).as_deref() {
        Some("y") | Some("yes") => true,
        Some("n") | Some("no") => false,
        _ => default,
    }
}

/// Ask for free text; empty input keeps `default`
pub fn prompt_text(question: &str, default: &str) -> String {
    print!(
        "{} {} {} ",
        "?".yellow().bold(),
        question,
        format!("({})", default).dimmed()
    );

    match read_line() {
        Some(answer) if !answer.is_empty() => answer,
        _ => default.to_string(),
    }
}

/// Numbered menu. Returns `None` when the user cancels (empty input, `q`, EOF).
pub fn prompt_select(question: &str, choices: &[String]) -> Option<usize> {
    println!("{} {}", "?".yellow().bold(), question.bold());
    for (i, choice) in choices.iter().enumerate() {
        println!("  {} {}", format!("{:>2})", i + 1).cyan(), choice);
    }

    loop {
        print!("{} ", format!("Select 1-{} (enter to cancel):", choices.len()).dimmed());
        let answer = read_line()?;
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            return None;
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Some(n - 1),
            _ => warning(&format!("'{}' is not a valid choice", answer)),
        }
    }
}
