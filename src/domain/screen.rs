use std::fmt;

/// Which data source the "more" action fetches from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Cat,
    Dog,
}

impl Selection {
    pub fn toggle(self) -> Self {
        match self {
            Selection::Cat => Selection::Dog,
            Selection::Dog => Selection::Cat,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Selection::Cat => "Cats",
            Selection::Dog => "Dogs",
        }
    }
}

/// Latest counts of both services, recomputed whenever either changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub cats: u64,
    pub dogs: u64,
}

impl Score {
    pub fn new(cats: u64, dogs: u64) -> Self {
        Self { cats, dogs }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {} cats and {} dogs", self.cats, self.dogs)
    }
}
