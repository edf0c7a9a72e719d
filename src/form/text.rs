use super::display::ResultField;

/// Localized strings shown by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormText {
    pub submit: &'static str,
    pub predicting: &'static str,
    pub duplicate_teams: &'static str,
    /// Prepended to the raw error text of a failed request.
    pub failure_prefix: &'static str,
    pub home_win: &'static str,
    pub draw: &'static str,
    pub away_win: &'static str,
    pub score: &'static str,
    pub htft: &'static str,
    pub btts: &'static str,
}

impl FormText {
    pub fn english() -> Self {
        FormText {
            submit: "Predict",
            predicting: "Predicting...",
            duplicate_teams: "Please select different teams!",
            failure_prefix: "An error occurred while predicting: ",
            home_win: "Home win",
            draw: "Draw",
            away_win: "Away win",
            score: "Predicted score",
            htft: "HT/FT",
            btts: "Both teams to score",
        }
    }

    pub fn turkish() -> Self {
        FormText {
            submit: "Tahmin Yap",
            predicting: "Tahmin yapılıyor...",
            duplicate_teams: "Lütfen farklı takımlar seçin!",
            failure_prefix: "Tahmin yapılırken bir hata oluştu: ",
            home_win: "Ev Sahibi",
            draw: "Beraberlik",
            away_win: "Deplasman",
            score: "Tahmini Skor",
            htft: "İY/MS",
            btts: "Karşılıklı Gol",
        }
    }

    pub fn caption(&self, field: ResultField) -> &'static str {
        match field {
            ResultField::HomeWin => self.home_win,
            ResultField::Draw => self.draw,
            ResultField::AwayWin => self.away_win,
            ResultField::Score => self.score,
            ResultField::HalfTimeFullTime => self.htft,
            ResultField::BothTeamsToScore => self.btts,
        }
    }
}

impl Default for FormText {
    fn default() -> Self {
        FormText::english()
    }
}
