use chrono::Local;
use std::io::Write;
use tracing::{debug, warn};

use crate::form::{DisplaySink, FormText, ResultField, SubmitLabel};

/// Renders the results panel and notifications as text on a writer.
pub struct TerminalDisplay<W: Write> {
    out: W,
    text: FormText,
    fields: [String; 6],
    visible: bool,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, text: FormText) -> Self {
        TerminalDisplay {
            out,
            text,
            fields: Default::default(),
            visible: false,
        }
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub fn field(&self, field: ResultField) -> &str {
        &self.fields[field.index()]
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_panel(&mut self) -> std::io::Result<()> {
        let separator = "-".repeat(50);
        writeln!(self.out, "{}", separator)?;
        writeln!(self.out, "{}", Local::now().format("%d.%m.%Y %H:%M:%S"))?;
        for field in ResultField::ALL {
            writeln!(
                self.out,
                "{:<22}{}",
                format!("{}:", self.text.caption(field)),
                self.fields[field.index()]
            )?;
        }
        writeln!(self.out, "{}", separator)?;
        self.out.flush()
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> DisplaySink for TerminalDisplay<W> {
    fn set_text(&mut self, field: ResultField, text: &str) {
        self.fields[field.index()] = text.to_string();
    }

    fn show_results(&mut self) {
        if !self.visible {
            self.visible = true;
            debug!("Results panel revealed");
        }
        if let Err(e) = self.write_panel() {
            warn!("Failed to write results: {}", e);
        }
    }

    fn render_submit(&mut self, enabled: bool, label: SubmitLabel<'_>) {
        debug!("Submit control enabled={} label={:?}", enabled, label);
        if let SubmitLabel::Loading(text) = label {
            self.write_line(&format!("⏳ {}", text));
        }
    }

    fn notify(&mut self, message: &str) {
        warn!("{}", message);
        self.write_line(&format!("! {}", message));
    }
}
