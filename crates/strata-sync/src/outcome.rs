/// Result of one reconciliation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Nothing was touched.
    NoEffect,
    /// The mirrored side was updated; the host's default effect still happens.
    Applied,
    /// The rule took over the event; the host must not apply its default effect.
    Suppress,
}

impl RuleOutcome {
    #[inline]
    pub fn suppresses(self) -> bool {
        self == RuleOutcome::Suppress
    }

    /// Joins two outcomes of work done for the same event.
    pub fn and(self, other: RuleOutcome) -> RuleOutcome {
        use RuleOutcome::*;
        match (self, other) {
            (Suppress, _) | (_, Suppress) => Suppress,
            (Applied, _) | (_, Applied) => Applied,
            (NoEffect, NoEffect) => NoEffect,
        }
    }
}

/// What the host should do with the event after it was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allow,
    Cancel,
}

impl Verdict {
    /// Folds a rule outcome into the cancellation state the event arrived with.
    pub fn fold(already_cancelled: bool, outcome: RuleOutcome) -> Verdict {
        if already_cancelled || outcome.suppresses() {
            Verdict::Cancel
        } else {
            Verdict::Allow
        }
    }

    #[inline]
    pub fn is_cancel(self) -> bool {
        self == Verdict::Cancel
    }
}
