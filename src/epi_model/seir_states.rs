use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
#[derive(Serialize, Deserialize)]
pub enum SeirState{
    Susceptible,
    Exposed,
    Infectious,
    Recovered,
}

impl SeirState{
    pub fn sus_check(&self) -> bool{
        matches!(self, SeirState::Susceptible)
    }
    pub fn exp_check(&self) -> bool{
        matches!(self, SeirState::Exposed)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, SeirState::Infectious)
    }
    pub fn rec_check(&self) -> bool{
        matches!(self, SeirState::Recovered)
    }

    pub fn is_or_was_infected(&self) -> bool
    {
        matches!(self, Self::Infectious | Self::Recovered)
    }

    /// Legal transitions only ever move forward through S -> E -> I -> R.
    pub fn may_become(&self, next: Self) -> bool
    {
        matches!(
            (*self, next),
            (Self::Susceptible, Self::Susceptible)
            | (Self::Susceptible, Self::Exposed)
            | (Self::Exposed, Self::Exposed)
            | (Self::Exposed, Self::Infectious)
            | (Self::Infectious, Self::Infectious)
            | (Self::Infectious, Self::Recovered)
            | (Self::Recovered, Self::Recovered)
        )
    }
}

impl Default for SeirState{
    fn default() -> Self{
        SeirState::Susceptible
    }
}
