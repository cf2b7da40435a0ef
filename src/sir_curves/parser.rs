use{
    super::*,
    structopt::StructOpt,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,

    crate::misc_types::*,
};

#[derive(Debug, StructOpt, Clone)]
/// Naive runs without quarantine, writing the per-step SEIR curves
pub struct SirCurves{
    #[structopt(long)]
    json: Option<String>,
}

impl SirCurves{
    pub fn parse(&self) -> (SirCurvesParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_simulation(opt, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SirCurvesParams{
    pub airport_file: String,
    pub route_file: String,
    pub undirect: bool,
    pub num_target_sets: usize,
    pub targets_per_set: usize,
    pub seed: u64,
    pub out_dir: Option<String>,
}

impl Default for SirCurvesParams{
    fn default() -> Self{
        Self{
            airport_file: "airports.dat".to_owned(),
            route_file: "routes.dat".to_owned(),
            undirect: false,
            num_target_sets: DEFAULT_NUM_TARGET_SETS,
            targets_per_set: TARGETS_PER_SET,
            seed: DEFAULT_SEED,
            out_dir: None,
        }
    }
}

impl SirCurvesParams{
    pub fn name(&self) -> String{
        format!(
            "ver{}SirCurves_SEED{}_N{}x{}_UND{}",
            crate::VERSION,
            self.seed,
            self.num_target_sets,
            self.targets_per_set,
            self.undirect
        )
    }
}
