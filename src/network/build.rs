use{
    std::{
        fs::File,
        io::{BufRead, BufReader},
        path::Path,
    },
    super::{
        graph::{Airport, FlightNetwork},
        weights::calculate_weights,
        clustering::assign_cluster_scores,
    },
    crate::errors::BuildError,
};

/// Build the flight network from the airport and route csv files.
///
/// After loading, the graph is restricted to the largest connected component
/// of its undirected projection, isolated nodes are dropped, and edge
/// weights, cluster scores and international flags are populated. Everything
/// downstream relies on those invariants.
pub fn network_from_files<P: AsRef<Path>>(airports: P, routes: P)
-> Result<FlightNetwork, BuildError>
{
    let airport_reader = BufReader::new(File::open(airports)?);
    let route_reader = BufReader::new(File::open(routes)?);
    load_network(airport_reader, route_reader)
}

pub fn load_network<A, R>(airports: A, routes: R) -> Result<FlightNetwork, BuildError>
where A: BufRead,
    R: BufRead
{
    println!("Creating network.");

    print!("\tLoading airports");
    let mut parsed = Vec::new();
    for line in airports.lines(){
        let line = line?;
        if let Some(airport) = parse_airport(&line){
            parsed.push(airport);
        }
    }
    let mut network = FlightNetwork::new(parsed);
    println!("\t\t\t\t\t[Done]");

    print!("\tLoading routes");
    let mut edge_count = 0_usize;
    let mut duplicate_count = 0_usize;
    let mut error_count = 0_usize;
    for (line_num, line) in routes.lines().enumerate(){
        let line = line?;
        if line_num == 0{
            // header
            continue;
        }
        match parse_route(&line, &network){
            None => error_count += 1,
            Some((from, to)) => {
                if network.add_edge(from, to){
                    edge_count += 1;
                } else {
                    duplicate_count += 1;
                }
            }
        }
    }
    println!("\t\t\t\t\t\t[Done]");
    println!(
        "\t{} routes, {} duplicates, {} unparseable lines",
        edge_count, duplicate_count, error_count
    );

    print!("\tFinding largest subgraph");
    let components = network.connected_components();
    let largest = components.into_iter()
        .next()
        .ok_or(BuildError::EmptyNetwork)?;
    let mut network = network.restricted_to(&largest);
    println!("\t\t\t\t[Done]");

    print!("\tRemoving isolated vertices");
    let connected: Vec<usize> = (0..network.vertex_count())
        .filter(|&node| network.degree(node) >= 1)
        .collect();
    if connected.is_empty(){
        return Err(BuildError::EmptyNetwork);
    }
    if connected.len() < network.vertex_count(){
        network = network.restricted_to(&connected);
    }
    println!("\t\t\t\t[Done]");

    print!("\tCalculating edge weights");
    calculate_weights(&mut network);
    println!("\t\t\t\t[Done]");

    print!("\tCalculating clustering coefficents");
    assign_cluster_scores(&mut network);
    println!("\t\t\t[Done]");

    print!("\tCategorizing international and domestic flights");
    assign_international_flags(&mut network);
    println!("\t\t[Done]");

    Ok(network)
}

fn assign_international_flags(network: &mut FlightNetwork)
{
    let pairs = network.edge_pairs();
    for [from, to] in pairs{
        let international =
            network.airport(from).country != network.airport(to).country;
        network.edge_info_mut(from, to)
            .unwrap()
            .international = international;
    }
}

fn parse_airport(line: &str) -> Option<Airport>
{
    let cleaned = line.replace('"', "");
    let fields: Vec<&str> = cleaned.trim_end().split(',').collect();
    if fields.len() < 8{
        return None;
    }
    Some(
        Airport{
            id: fields[0].parse().ok()?,
            name: fields[1].to_owned(),
            country: fields[3].to_owned(),
            lat: fields[6].parse().ok()?,
            lon: fields[7].parse().ok()?,
        }
    )
}

/// Route columns 3 and 5 hold the endpoint airport ids. Lines referencing
/// unknown airports count as errors like unparseable ones.
fn parse_route(line: &str, network: &FlightNetwork) -> Option<(usize, usize)>
{
    let cleaned = line.replace('"', "");
    let fields: Vec<&str> = cleaned.trim_end().split(',').collect();
    if fields.len() < 6{
        return None;
    }
    let from_id: u32 = fields[3].parse().ok()?;
    let to_id: u32 = fields[5].parse().ok()?;
    let from = network.index_of_id(from_id)?;
    let to = network.index_of_id(to_id)?;
    Some((from, to))
}
