use{
    serde::{Serialize, Deserialize},
};

pub const DEFAULT_SEED: u64 = 100;
pub const DEFAULT_NUM_TARGET_SETS: usize = 100;
pub const TARGETS_PER_SET: usize = 10;
pub const DEFAULT_DELAY: usize = 0;

/// Incubation ends once an exposed node has aged this far.
pub const INCUBATION_AGE: u32 = 3;
/// Infectious nodes recover once they have aged this far.
pub const RECOVERY_AGE: u32 = 11;
/// Hard horizon on a single run.
pub const MAX_STEPS: usize = 99;

pub const EFFORT_STEP_PERCENT: usize = 5;

/// Edge in dense node indices, source first.
pub type EdgePair = [usize; 2];

#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq, Eq)]
pub enum StrategyKind{
    Random,
    Betweenness,
    Weight,
    Cluster,
}

impl StrategyKind{
    pub fn name(self) -> &'static str
    {
        match self{
            Self::Random => "random",
            Self::Betweenness => "betweenness",
            Self::Weight => "weight",
            Self::Cluster => "cluster",
        }
    }
}

pub fn effort_grid() -> impl Iterator<Item=usize>
{
    (0..=100).step_by(EFFORT_STEP_PERCENT)
}

/// Zero padded index for per-target file names, e.g. 0007.
pub fn pad_string(integer: usize, n: usize) -> String
{
    format!("{:0width$}", integer, width = n)
}
