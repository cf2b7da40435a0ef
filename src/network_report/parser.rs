use{
    super::*,
    structopt::StructOpt,
    crate::json_parsing::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
};

#[derive(Debug, StructOpt, Clone)]
/// Write descriptive statistics of the flight network to network.dat
pub struct NetworkReport{
    #[structopt(long)]
    json: Option<String>,
}

impl NetworkReport{
    pub fn parse(&self) -> (NetworkReportParams, Value){
        parse(self.json.as_ref())
    }
    pub fn execute(&self){
        let (opt, json) = self.parse();
        run_report(opt, json)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NetworkReportParams{
    pub airport_file: String,
    pub route_file: String,
    pub undirect: bool,
    pub out_dir: Option<String>,
}

impl Default for NetworkReportParams{
    fn default() -> Self{
        Self{
            airport_file: "airports.dat".to_owned(),
            route_file: "routes.dat".to_owned(),
            undirect: false,
            out_dir: None,
        }
    }
}

impl NetworkReportParams{
    pub fn name(&self) -> String{
        format!("ver{}NetReport_UND{}", crate::VERSION, self.undirect)
    }
}
