use serde::Serialize;

/// One named stage of the ordering wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Step {
    Start,
    Flavor,
    Pickup,
    Summary,
}

impl Step {
    /// Forward order of the wizard.
    pub const ORDER: [Step; 4] = [Step::Start, Step::Flavor, Step::Pickup, Step::Summary];

    pub fn index(self) -> usize {
        match self {
            Step::Start => 0,
            Step::Flavor => 1,
            Step::Pickup => 2,
            Step::Summary => 3,
        }
    }

    /// Step that follows this one, `None` for the terminal step.
    pub fn next(self) -> Option<Step> {
        Step::ORDER.get(self.index() + 1).copied()
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_order() {
        for (position, step) in Step::ORDER.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
    }

    #[test]
    fn only_summary_is_terminal() {
        assert_eq!(Step::Start.next(), Some(Step::Flavor));
        assert_eq!(Step::Flavor.next(), Some(Step::Pickup));
        assert_eq!(Step::Pickup.next(), Some(Step::Summary));
        assert!(Step::Summary.is_terminal());
        assert!(!Step::Pickup.is_terminal());
    }
}
