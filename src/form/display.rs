//! Render target for the prediction form.
//!
//! The controller never touches a concrete page; it writes through this
//! trait so a browser binding, a terminal or a test recorder can sit behind
//! it.

/// Output text fields of the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultField {
    HomeWin,
    Draw,
    AwayWin,
    Score,
    HalfTimeFullTime,
    BothTeamsToScore,
}

impl ResultField {
    pub const ALL: [ResultField; 6] = [
        ResultField::HomeWin,
        ResultField::Draw,
        ResultField::AwayWin,
        ResultField::Score,
        ResultField::HalfTimeFullTime,
        ResultField::BothTeamsToScore,
    ];

    pub fn index(self) -> usize {
        match self {
            ResultField::HomeWin => 0,
            ResultField::Draw => 1,
            ResultField::AwayWin => 2,
            ResultField::Score => 3,
            ResultField::HalfTimeFullTime => 4,
            ResultField::BothTeamsToScore => 5,
        }
    }
}

/// Content of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel<'a> {
    /// Plain label text.
    Text(&'a str),
    /// Loading indicator followed by the given text.
    Loading(&'a str),
}

pub trait DisplaySink {
    fn set_text(&mut self, field: ResultField, text: &str);

    /// Reveal the results panel (animated). No-op once visible.
    fn show_results(&mut self);

    fn render_submit(&mut self, enabled: bool, label: SubmitLabel<'_>);

    /// Blocking user notification.
    fn notify(&mut self, message: &str);
}
