use{
    std::{
        time::Instant
    },
    structopt::StructOpt,
    indicatif::*
};

pub mod misc_types;
pub mod errors;
pub mod json_parsing;
pub mod network;
pub mod epi_model;
pub mod quarantine_methods;
pub mod quarantine_sweep;
pub mod sir_curves;
pub mod network_report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let start_time = Instant::now();
    println!("Flu Quarantine Simulator {}", VERSION);
    let opt = CmdOption::from_args();
    match opt{
        CmdOption::QuarantineSweep(o) => o.execute(),
        CmdOption::SirCurves(o) => o.execute(),
        CmdOption::NetworkReport(o) => o.execute(),
    }
    println!("Execution took {}", humantime::format_duration(start_time.elapsed()))
}

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Edge quarantine strategies for infections on the air travel network!")]
pub enum CmdOption
{
    QuarantineSweep(quarantine_sweep::QuarantineSweep),
    SirCurves(sir_curves::SirCurves),
    NetworkReport(network_report::NetworkReport),
}
