//! Messages on stdout, and the spinner shown while the backend works.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Leading symbol and colour of a status line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Info,
}

impl Tone {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }

    fn style(self) -> Style {
        match self {
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Info => Style::new().blue(),
        }
    }
}

/// Writes user-facing lines to stdout, honouring `--quiet` and colour settings.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args.output_format.resolve(io::stdout().is_terminal());
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    /// Unadorned line, e.g. a file listing.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(|| msg.to_owned())
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(|| {
            if self.no_color {
                text.to_owned()
            } else {
                text.cyan().bold().to_string()
            }
        })
    }

    /// Run `work` behind a spinner on stderr.
    ///
    /// The spinner is hidden in quiet mode and when stderr is not a terminal.
    pub fn with_spinner<T>(&self, msg: &str, work: impl FnOnce() -> T) -> T {
        let spinner = if self.quiet || !io::stderr().is_terminal() {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                bar.set_style(style);
            }
            bar.set_message(msg.to_owned());
            bar.enable_steady_tick(Duration::from_millis(80));
            bar
        };

        let result = work();
        spinner.finish_and_clear();
        result
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        self.emit(|| {
            if self.no_color {
                format!("{} {msg}", tone.symbol())
            } else {
                let style = tone.style();
                format!("{} {}", tone.symbol().style(style.bold()), msg.style(style))
            }
        })
    }

    fn emit(&self, line: impl FnOnce() -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&line())
    }
}
