//! Console module - Styled output and transient spinners
//!
//! All output goes through a [`Console`] so the same code can write to the
//! terminal or to a buffer.

use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Stdout, Write};
use std::time::Duration;

pub struct Console<W: Write> {
    out: W,
    spinners: bool,
}

impl Console<Stdout> {
    /// Console on stdout, with spinners when stdout is a terminal
    pub fn stdout() -> Self {
        use std::io::IsTerminal;

        let out = io::stdout();
        let spinners = out.is_terminal();
        Self::new(out, spinners)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, spinners: bool) -> Self {
        Self { out, spinners }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print a plain line
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Print a banner (bold green)
    pub fn banner(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.bright_green().bold())
    }

    /// Print an info message (bold cyan)
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.bright_cyan().bold())
    }

    /// Print a success item
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "  {} {}", "✓".bright_green(), message)
    }

    /// Print a celebration message (bold yellow)
    pub fn celebrate(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.bright_yellow().bold())
    }

    /// Print an error message (bold red)
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.bright_red().bold())
    }

    /// Start a transient status line; clear it with `finish_and_clear`
    pub fn status(&self, message: &str) -> ProgressBar {
        if !self.spinners {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    }

    /// Show `message` on a spinner for `delay`, then clear it
    pub fn hold(&mut self, message: &str, delay: Duration) -> io::Result<()> {
        self.out.flush()?;
        let pb = self.status(message);
        std::thread::sleep(delay);
        pb.finish_and_clear();
        Ok(())
    }
}
