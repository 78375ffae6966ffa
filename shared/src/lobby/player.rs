#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Team {
    Unassigned,
    Real,
    Chaos,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub team: Team,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: Team::Unassigned,
        }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = team;
        self
    }
}
