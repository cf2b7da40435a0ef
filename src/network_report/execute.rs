use{
    serde_json::Value,
    std::{
        collections::VecDeque,
        fs::{File, create_dir_all},
        io::{BufWriter, Write},
        path::Path,
    },

    super::*,
    crate::network::{FlightNetwork, network_from_files},
};

pub fn run_report(param: NetworkReportParams, json: Value)
{
    let mut network = network_from_files(&param.airport_file, &param.route_file)
        .expect("unable to build the flight network");
    if param.undirect{
        network.make_undirected();
    }

    let out_dir = param.out_dir.clone().unwrap_or_else(|| param.name());
    create_dir_all(&out_dir).expect("unable to create output directory");

    print!("\tFinding network diameter");
    let diameter = diameter(&network);
    println!("\t\t\t\t[Done]");

    let path = Path::new(&out_dir).join("network.dat");
    println!("Creating: {}", path.display());
    let file = File::create(path).expect("unable to create network.dat");
    let mut writer = BufWriter::new(file);
    crate::json_parsing::write_json(&mut writer, &json);
    write_report(&mut writer, &network, diameter)
        .expect("unable to write network.dat");
}

fn write_report<W: Write>(
    mut writer: W,
    network: &FlightNetwork,
    diameter: usize,
) -> std::io::Result<()>
{
    let network_type = if network.is_directed(){
        "Directed"
    } else {
        "Undirected"
    };
    writeln!(writer, "Network properties")?;
    writeln!(writer, "===============")?;
    writeln!(writer, "Network type: {}", network_type)?;
    writeln!(writer, "Number of verticies: {}", network.vertex_count())?;
    writeln!(writer, "Number of edges: {}", network.edge_count())?;
    writeln!(writer, "Diameter: {}", diameter)
}

/// Longest shortest path (hops) on the undirected projection. The build
/// phase already reduced the graph to one component, so every eccentricity
/// is finite.
pub fn diameter(network: &FlightNetwork) -> usize
{
    let n = network.vertex_count();
    let mut diameter = 0;
    let mut dist = vec![usize::MAX; n];
    for start in 0..n{
        dist.fill(usize::MAX);
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front(){
            for neighbor in network.undirected_neighbors(node){
                if dist[neighbor] == usize::MAX{
                    dist[neighbor] = dist[node] + 1;
                    diameter = diameter.max(dist[neighbor]);
                    queue.push_back(neighbor);
                }
            }
        }
    }
    diameter
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        crate::network::graph::test_network,
    };

    #[test]
    fn path_graph_diameter()
    {
        let net = test_network(
            4,
            &[(0, 1, 0.0), (1, 2, 0.0), (2, 3, 0.0)],
        );
        assert_eq!(diameter(&net), 3);
    }

    #[test]
    fn report_layout()
    {
        let net = test_network(2, &[(0, 1, 0.0)]);
        let mut out = Vec::new();
        write_report(&mut out, &net, 1).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Network type: Directed"));
        assert!(text.contains("Number of verticies: 2"));
        assert!(text.contains("Diameter: 1"));
    }
}
