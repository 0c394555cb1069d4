use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a primary click.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    /// A mine was clicked and the round goes on.
    MineHit { lives_left: u8 },
    /// A mine reached its click limit and is now shown.
    MineExploded { lives_left: u8 },
    /// The last life was spent; all mines are shown and a restart is pending.
    GameOver,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            MineHit { .. } => true,
            MineExploded { .. } => true,
            GameOver => true,
            Won => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AssistOutcome {
    NoChange,
    /// The cell was temporarily marked as a hint.
    Marked(Coord2),
}

impl AssistOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Marked(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    NoChange,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Restored)
    }
}

/// Any of the above, as produced by [`GameSession::handle`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Mark(MarkOutcome),
    Reveal(RevealOutcome),
    Assist(AssistOutcome),
    Undo(UndoOutcome),
}

impl EventOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Mark(outcome) => outcome.has_update(),
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Assist(outcome) => outcome.has_update(),
            Self::Undo(outcome) => outcome.has_update(),
        }
    }
}
