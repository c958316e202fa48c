//! Team win/loss record

use standings_formula::Bindings;

/// A team's season record: the numeric inputs to a points formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    /// Overtime losses
    pub otl: u32,
}

impl TeamRecord {
    pub fn new(won: u32, lost: u32, tied: u32, otl: u32) -> Self {
        Self {
            won,
            lost,
            tied,
            otl,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.won + self.lost + self.tied + self.otl
    }

    /// Winning fraction, counting ties as half a win. Zero games is 0.0.
    ///
    /// Used for ordering teams when a league ranks by win percentage rather
    /// than by a points formula.
    pub fn win_pct(&self) -> f64 {
        let games = self.games_played();
        if games == 0 {
            return 0.0;
        }
        (self.won as f64 + self.tied as f64 / 2.0) / games as f64
    }

    /// Bindings for the W/L/T/OTL formula vocabulary
    pub fn bindings(&self) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("W", self.won as f64);
        bindings.insert("L", self.lost as f64);
        bindings.insert("T", self.tied as f64);
        bindings.insert("OTL", self.otl as f64);
        bindings
    }
}
