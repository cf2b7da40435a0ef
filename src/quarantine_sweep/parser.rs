use{
    super::*,
    structopt::StructOpt,
    std::num::*,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,

    crate::misc_types::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Sweep quarantine effort from 0% to 100% for the configured strategies
pub struct QuarantineSweep{
    #[structopt(long)]
    json: Option<String>,

    #[structopt(long)]
    num_threads: Option<NonZeroUsize>
}

impl QuarantineSweep{
    pub fn parse(&self) -> (QuarantineSweepParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_simulation(opt, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct QuarantineSweepParams{
    pub airport_file: String,
    pub route_file: String,
    pub strategies: Vec<StrategyKind>,
    pub delay: usize,
    pub undirect: bool,
    pub international: bool,
    pub domestic: bool,
    pub recalculate: bool,
    pub num_target_sets: usize,
    pub targets_per_set: usize,
    pub seed: u64,
    pub out_dir: Option<String>,
}

impl Default for QuarantineSweepParams{
    fn default() -> Self{
        Self{
            airport_file: "airports.dat".to_owned(),
            route_file: "routes.dat".to_owned(),
            strategies: vec![
                StrategyKind::Random,
                StrategyKind::Betweenness,
                StrategyKind::Weight,
                StrategyKind::Cluster,
            ],
            delay: DEFAULT_DELAY,
            undirect: false,
            international: false,
            domestic: false,
            recalculate: true,
            num_target_sets: DEFAULT_NUM_TARGET_SETS,
            targets_per_set: TARGETS_PER_SET,
            seed: DEFAULT_SEED,
            out_dir: None,
        }
    }
}

impl QuarantineSweepParams{
    pub fn name(&self, num_threads: Option<NonZeroUsize>) -> String{
        let k = match num_threads{
            None => "".to_owned(),
            Some(v) => format!("k{}", v)
        };
        format!(
            "ver{}QSweep_D{}_SEED{}_N{}x{}_I{}Q{}_REC{}_UND{}{}",
            crate::VERSION,
            self.delay,
            self.seed,
            self.num_target_sets,
            self.targets_per_set,
            self.international,
            self.domestic,
            self.recalculate,
            self.undirect,
            k
        )
    }
}
