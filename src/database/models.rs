use chrono::NaiveDateTime;

pub type PlayerId = i64;
pub type MatchId = i64;

/// A registered player together with the win/loss record aggregated from `matches`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub wins: u32,
    pub losses: u32,
    pub created_at: Option<NaiveDateTime>,
}

impl Player {
    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}

impl Match {
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }

    /// The other participant, or `None` if `player_id` did not play in this
    /// match or the row pairs a player with themself.
    pub fn opponent_of(&self, player_id: PlayerId) -> Option<PlayerId> {
        if self.winner_id == self.loser_id {
            None
        } else if self.winner_id == player_id {
            Some(self.loser_id)
        } else if self.loser_id == player_id {
            Some(self.winner_id)
        } else {
            None
        }
    }
}
