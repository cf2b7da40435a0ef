use super::graph::FlightNetwork;

/// Local clustering coefficient of every node on the undirected projection:
/// fraction of neighbor pairs that are themselves connected.
pub fn local_clustering(network: &FlightNetwork) -> Vec<f64>
{
    let n = network.vertex_count();
    let neighbor_sets: Vec<Vec<usize>> = (0..n)
        .map(|node| network.undirected_neighbors(node))
        .collect();

    (0..n).map(
        |node|
        {
            let neighbors = &neighbor_sets[node];
            let k = neighbors.len();
            if k < 2{
                return 0.0;
            }
            let mut links = 0_usize;
            for (i, &a) in neighbors.iter().enumerate(){
                for &b in &neighbors[i + 1..]{
                    // sorted neighbor lists, so binary search
                    if neighbor_sets[a].binary_search(&b).is_ok(){
                        links += 1;
                    }
                }
            }
            2.0 * links as f64 / (k * (k - 1)) as f64
        }
    ).collect()
}

/// Store the sum of the endpoint clustering coefficients on every edge.
pub fn assign_cluster_scores(network: &mut FlightNetwork)
{
    let clustering = local_clustering(network);
    let pairs = network.edge_pairs();
    for [from, to] in pairs{
        network.edge_info_mut(from, to)
            .unwrap()
            .cluster = clustering[from] + clustering[to];
    }
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        crate::network::graph::test_network,
    };

    #[test]
    fn triangle_clusters_fully()
    {
        let mut net = test_network(
            4,
            &[(0, 1, 0.0), (1, 2, 0.0), (2, 0, 0.0), (2, 3, 0.0)],
        );
        let clustering = local_clustering(&net);
        assert_eq!(clustering[0], 1.0);
        assert_eq!(clustering[1], 1.0);
        // node 2 has three neighbors, one of three pairs linked
        assert!((clustering[2] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(clustering[3], 0.0);

        assign_cluster_scores(&mut net);
        assert_eq!(net.edge_info(0, 1).unwrap().cluster, 2.0);
        assert!((net.edge_info(2, 3).unwrap().cluster - 1.0 / 3.0).abs() < 1e-12);
    }
}
