use nu_ansi_term::{Color, Style};
use std::fmt::Display;
use std::io::IsTerminal;

/// Terminal styling for text output.
///
/// Each stream is painted only when it is itself a terminal, so
/// `hopgraph ... 2>log` keeps escape codes out of the log.
pub struct Ui {
    paint_out: bool,
    paint_err: bool,
    heading: Style,
    warning: Style,
}

impl Ui {
    pub fn new() -> Self {
        let ui = Self::with_paint(
            std::io::stdout().is_terminal(),
            std::io::stderr().is_terminal(),
        );
        #[cfg(windows)]
        if ui.paint_out || ui.paint_err {
            let _ = nu_ansi_term::enable_ansi_support();
        }
        ui
    }

    fn with_paint(paint_out: bool, paint_err: bool) -> Self {
        Self {
            paint_out,
            paint_err,
            heading: Style::new().bold().fg(Color::Cyan),
            warning: Color::Yellow.bold(),
        }
    }

    pub fn heading(&self, text: impl Display) {
        println!("{}", styled(self.paint_out, self.heading, text));
    }

    pub fn warn(&self, text: impl Display) {
        eprintln!("{} {text}", self.warning_label());
    }

    fn warning_label(&self) -> String {
        styled(self.paint_err, self.warning, "warning:")
    }
}

fn styled(paint: bool, style: Style, text: impl Display) -> String {
    if paint {
        style.paint(text.to_string()).to_string()
    } else {
        text.to_string()
    }
}
