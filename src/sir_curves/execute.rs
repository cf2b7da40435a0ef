use{
    rand::SeedableRng,
    rand_pcg::Pcg64,
    serde_json::Value,
    std::{
        fs::{File, create_dir_all},
        io::BufWriter,
        path::Path,
    },

    super::*,
    crate::{
        epi_model::*,
        misc_types::pad_string,
        network::network_from_files,
        quarantine_sweep::cell_seed,
    },
};

pub fn run_simulation(param: SirCurvesParams, json: Value)
{
    println!("SIR Mode");

    let mut network = network_from_files(&param.airport_file, &param.route_file)
        .expect("unable to build the flight network");

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

    let out_dir = param.out_dir.clone().unwrap_or_else(|| param.name());
    let sir_dir = Path::new(&out_dir).join("sir");
    create_dir_all(&sir_dir).expect("unable to create output directory");

    let header = File::create(Path::new(&out_dir).join("parameters.json"))
        .expect("unable to create parameter record");
    crate::json_parsing::write_json(BufWriter::new(header), &json);

    let bar = crate::indication_bar(targets.len() as u64);
    for (iteration, target) in targets.iter().enumerate(){
        let path = sir_dir.join(format!("sir_{}.csv", pad_string(iteration, 4)));
        let mut writer = SeirWriter::new(&path)
            .expect("unable to create curve file");

        let res = EpidemicSim::new(
            &network,
            target,
            cell_seed(param.seed, iteration, 0),
            0,
            false
        );
        match res{
            Err(e) => eprintln!("skipping target set {}: {}", iteration, e),
            Ok(mut sim) => {
                sim.run(None, &mut writer)
                    .expect("unable to write curve");
            }
        }
        bar.inc(1);
    }
    bar.finish();
}
