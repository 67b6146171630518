use crate::ui;
use colored::Colorize;
use std::io::{self, Write};

/// Stage marker for operations of unknown duration.
///
/// The install is a strict sequence of blocking steps, so the spinner draws a
/// single frame when a step starts and is replaced by a ✓/✗ line when it ends.
pub struct Spinner {
    message: String,
    active: bool,
    drawn: bool,
}

impl Spinner {
    /// Create and draw a new spinner
    pub fn start(message: &str) -> Self {
        let mut spinner = Self {
            message: message.to_string(),
            active: true,
            drawn: false,
        };
        spinner.draw();
        spinner
    }

    /// Update the spinner message
    pub fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
        self.draw();
    }

    /// Stop the spinner with success message
    pub fn finish_with_success(mut self, message: &str) {
        self.stop();
        ui::success(message);
    }

    /// Stop the spinner with error message
    pub fn finish_with_error(mut self, message: &str) {
        self.stop();
        ui::error(message);
    }

    /// Stop the spinner without a closing line (e.g. before prompting)
    pub fn clear(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if self.drawn {
            // Clear the spinner line
            print!("\r{:width$}\r", "", width = self.message.chars().count() + 8);
            io::stdout().flush().unwrap_or(());
        }
    }

    fn draw(&mut self) {
        if !self.active || ui::is_quiet() {
            return;
        }

        if atty::is(atty::Stream::Stdout) {
            print!("\r{} {}...", "⠋".cyan().bold(), self.message);
            io::stdout().flush().unwrap_or(());
            self.drawn = true;
        } else {
            ui::verbose(&format!("{}...", self.message));
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let spinner = Spinner::start("Testing");
        assert_eq!(spinner.message, "Testing");
        assert!(spinner.active);
    }

    #[test]
    fn test_spinner_update_message() {
        let mut spinner = Spinner::start("Fetching");
        spinner.update_message("Installing");
        assert_eq!(spinner.message, "Installing");
        spinner.clear();
    }
}
