use{
    indicatif::ParallelProgressIterator,
    rand::SeedableRng,
    rand_pcg::Pcg64,
    rayon::prelude::*,
    serde_json::Value,
    std::{
        fs::{File, create_dir_all},
        io::{BufWriter, Write},
        num::NonZeroUsize,
        path::Path,
    },

    super::*,
    crate::{
        errors::{CellError, ConfigError},
        epi_model::*,
        misc_types::*,
        network::*,
        quarantine_methods::*,
    },
};

pub fn run_simulation(
    param: QuarantineSweepParams,
    json: Value,
    num_threads: Option<NonZeroUsize>
){
    let mut network = network_from_files(&param.airport_file, &param.route_file)
        .expect("unable to build the flight network");

    let filter = EdgeFilter::from_flags(param.international, param.domestic)
        .expect("bad filter configuration");

    let mut rng = Pcg64::seed_from_u64(param.seed);
    let targets = choose_target_sets(
        &network,
        param.num_target_sets,
        param.targets_per_set,
        &mut rng
    ).expect("bad target configuration");

    if param.undirect{
        network.make_undirected();
    }

    let out_dir = param.out_dir
        .clone()
        .unwrap_or_else(|| param.name(num_threads));
    create_dir_all(&out_dir).expect("unable to create output directory");
    println!("Writing to {}", &out_dir);

    let header = File::create(Path::new(&out_dir).join("parameters.json"))
        .expect("unable to create parameter record");
    crate::json_parsing::write_json(BufWriter::new(header), &json);

    let k = num_threads.unwrap_or_else(|| NonZeroUsize::new(1).unwrap());
    rayon::ThreadPoolBuilder::new()
        .num_threads(k.get())
        .build_global()
        .unwrap();

    for &kind in &param.strategies{
        println!("{} mode ({} edges)", kind.name(), filter.name());
        let strategy: QuarantineStrategy = kind.into();
        // ranked once, independent of effort and target
        let candidates = strategy.rank(&network, filter, &mut rng);
        println!("\t{} candidate edges", candidates.len());

        let strategy_dir = Path::new(&out_dir).join(kind.name());
        create_dir_all(&strategy_dir)
            .expect("unable to create strategy directory");

        let bar = crate::indication_bar(targets.len() as u64);
        targets.par_iter()
            .enumerate()
            .progress_with(bar)
            .for_each(
                |(iteration, target)|
                {
                    let path = strategy_dir.join(
                        format!("{}_{}.csv", kind.name(), pad_string(iteration, 4))
                    );
                    let res = sweep_one_target(
                        &network,
                        &candidates,
                        target,
                        &param,
                        iteration,
                        &path
                    );
                    if let Err(e) = res{
                        // the cell dies, the sweep continues
                        eprintln!(
                            "skipping strategy {} target set {}: {}",
                            kind.name(), iteration, e
                        );
                    }
                }
            );
    }
}

/// One outbreak-size-vs-effort series, written row by row so partial results
/// survive a later failure.
fn sweep_one_target(
    network: &FlightNetwork,
    candidates: &[EdgePair],
    target: &[usize],
    param: &QuarantineSweepParams,
    target_index: usize,
    path: &Path,
) -> Result<(), CellError>
{
    let file = File::create(path).expect("unable to create csv");
    let mut writer = BufWriter::new(file);
    writeln!(writer, "\"effort\",\"total_infected\",\"edges_closed\"")
        .expect("unable to write header");

    effort_series(
        network,
        candidates,
        target,
        param.delay,
        param.recalculate,
        param.seed,
        target_index,
        |effort, total, closed|
        {
            writeln!(writer, "{},{},{}", effort as f64 / 100.0, total, closed)
                .expect("unable to write row");
            writer.flush().expect("unable to flush row");
        }
    )
}

/// Effort loop for one target set. Emits `(effort_percent, total_infected,
/// edges_closed)` per level.
///
/// Once a level ends with a total of 1 the remaining levels are emitted with
/// the same total without simulating them. That assumes totals are
/// non increasing in effort, which is a heuristic, not a theorem; the test
/// suite probes it against direct simulation.
pub fn effort_series<F>(
    network: &FlightNetwork,
    candidates: &[EdgePair],
    target: &[usize],
    delay: usize,
    recalculate: bool,
    seed_base: u64,
    target_index: usize,
    mut emit: F,
) -> Result<(), CellError>
where F: FnMut(usize, u32, usize)
{
    let mut grid = effort_grid();
    while let Some(effort) = grid.next(){
        let closed = effort_prefix_len(candidates.len(), effort);
        let outcome = simulate_cell(
            network,
            &candidates[..closed],
            target,
            delay,
            recalculate,
            cell_seed(seed_base, target_index, effort)
        ).map_err(|source| CellError{effort, source})?;
        let total = outcome.total_infected();
        emit(effort, total, closed);

        if total == 1{
            for remaining in grid.by_ref(){
                emit(
                    remaining,
                    total,
                    effort_prefix_len(candidates.len(), remaining)
                );
            }
            break;
        }
    }
    Ok(())
}

/// One (target set, effort) cell.
pub fn simulate_cell(
    network: &FlightNetwork,
    quarantine: &[EdgePair],
    target: &[usize],
    delay: usize,
    recalculate: bool,
    seed: u64,
) -> Result<SimOutcome, ConfigError>
{
    let mut sim = EpidemicSim::new(network, target, seed, delay, recalculate)?;
    let outcome = sim.run(Some(quarantine), &mut DiscardSteps)
        .expect("discarding sink cannot fail");
    Ok(outcome)
}

/// Closed prefix of the ranked candidates for an effort percentage.
pub fn effort_prefix_len(candidates: usize, effort: usize) -> usize
{
    (candidates * effort / 100).saturating_sub(1)
}

/// Deterministic per-cell simulator seed. Cells are independent of sweep
/// order and thread count, and skipped cells can be re-simulated under the
/// identical seed.
pub fn cell_seed(base: u64, target_index: usize, effort: usize) -> u64
{
    let mut h = base ^ 0x9E37_79B9_7F4A_7C15;
    h = h.wrapping_add(target_index as u64)
        .wrapping_mul(0xBF58_476D_1CE4_E5B9);
    h ^= h >> 31;
    h = h.wrapping_add(effort as u64)
        .wrapping_mul(0x94D0_49BB_1331_11EB);
    h ^ (h >> 29)
}
