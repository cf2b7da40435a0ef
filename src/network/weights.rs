use super::graph::FlightNetwork;

/// Assign each edge a transmission probability from the out degrees of the
/// source's successors, min-max normalized within that successor set.
///
/// The result is a relative ranking of a node's successors by downstream
/// connectivity, not a global probability. Degenerate cases (no out degree
/// anywhere, or all successors equal) map to weight 0 instead of erroring.
pub fn calculate_weights(network: &mut FlightNetwork)
{
    for node in 0..network.vertex_count(){
        let successors: Vec<usize> = network.successors(node).collect();
        if successors.is_empty(){
            continue;
        }

        let total_degree: usize = successors.iter()
            .map(|&s| network.out_degree(s))
            .sum();

        let shares: Vec<f64> = successors.iter()
            .map(|&s| {
                if total_degree > 0{
                    network.out_degree(s) as f64 / total_degree as f64
                } else {
                    0.0
                }
            })
            .collect();

        let smallest = shares.iter().copied().fold(f64::INFINITY, f64::min);
        let largest = shares.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for (&successor, &share) in successors.iter().zip(shares.iter()){
            let relative = if largest != smallest{
                (share - smallest) / (largest - smallest)
            } else {
                0.0
            };
            network.edge_info_mut(node, successor)
                .unwrap()
                .weight = relative;
        }
    }
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        crate::network::graph::test_network,
    };

    #[test]
    fn weights_normalized_per_source()
    {
        // 0 -> {1,2,3}; successor out degrees 2, 1, 0
        let mut net = test_network(
            6,
            &[
                (0, 1, 0.0), (0, 2, 0.0), (0, 3, 0.0),
                (1, 4, 0.0), (1, 5, 0.0),
                (2, 4, 0.0),
            ],
        );
        calculate_weights(&mut net);

        assert_eq!(net.edge_info(0, 1).unwrap().weight, 1.0);
        assert_eq!(net.edge_info(0, 3).unwrap().weight, 0.0);
        let mid = net.edge_info(0, 2).unwrap().weight;
        assert!(mid > 0.0 && mid < 1.0);
        for (_, info) in net.edges(){
            assert!((0.0..=1.0).contains(&info.weight));
        }
    }

    #[test]
    fn single_successor_is_degenerate_zero()
    {
        let mut net = test_network(3, &[(0, 1, 0.9), (1, 2, 0.9)]);
        calculate_weights(&mut net);
        // min == max within each successor set
        assert_eq!(net.edge_info(0, 1).unwrap().weight, 0.0);
        assert_eq!(net.edge_info(1, 2).unwrap().weight, 0.0);
    }

    #[test]
    fn zero_total_out_degree_is_zero()
    {
        // successors of 0 are both sinks
        let mut net = test_network(3, &[(0, 1, 0.5), (0, 2, 0.5)]);
        calculate_weights(&mut net);
        assert_eq!(net.edge_info(0, 1).unwrap().weight, 0.0);
        assert_eq!(net.edge_info(0, 2).unwrap().weight, 0.0);
    }
}
