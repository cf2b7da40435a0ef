use{
    rand::Rng,
    rand_pcg::Pcg64,
    crate::{errors::ConfigError, network::FlightNetwork},
};

/// Choose the initial infection sets: `rounds` sets of `per_set` distinct
/// nodes, sampled degree weighted (in plus out) without replacement within a
/// set. The sets are chosen once and shared by every strategy and effort
/// level so the curves stay comparable.
///
/// A `per_set` larger than the network cannot be sampled without
/// replacement, so it is rejected up front.
pub fn choose_target_sets(
    network: &FlightNetwork,
    rounds: usize,
    per_set: usize,
    rng: &mut Pcg64
) -> Result<Vec<Vec<usize>>, ConfigError>
{
    if per_set > network.vertex_count(){
        return Err(
            ConfigError::InvalidTarget{
                reason: format!(
                    "{} targets per set requested, network only has {} airports",
                    per_set,
                    network.vertex_count()
                )
            }
        );
    }

    let degrees: Vec<usize> = (0..network.vertex_count())
        .map(|node| network.degree(node))
        .collect();

    let sets = (0..rounds)
        .map(
            |_|
            {
                let mut round = Vec::with_capacity(per_set);
                while round.len() < per_set{
                    let chosen = weighted_random(&degrees, rng);
                    if !round.contains(&chosen){
                        round.push(chosen);
                    }
                }
                round
            }
        )
        .collect();
    Ok(sets)
}

/// Roulette wheel over the degree list. The build phase guarantees every
/// node has degree >= 1, so the total is positive.
fn weighted_random(degrees: &[usize], rng: &mut Pcg64) -> usize
{
    let total: usize = degrees.iter().sum();
    let mut number = rng.gen::<f64>() * total as f64;
    let mut last = 0;
    for (node, &degree) in degrees.iter().enumerate(){
        last = node;
        if number <= degree as f64{
            break;
        }
        number -= degree as f64;
    }
    last
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        rand::SeedableRng,
        crate::network::graph::test_network,
    };

    #[test]
    fn sets_are_distinct_and_sized()
    {
        let net = test_network(
            6,
            &[(0, 1, 0.0), (1, 2, 0.0), (2, 3, 0.0), (3, 4, 0.0), (4, 5, 0.0), (5, 0, 0.0)],
        );
        let mut rng = Pcg64::seed_from_u64(1234);
        let sets = choose_target_sets(&net, 5, 3, &mut rng).unwrap();
        assert_eq!(sets.len(), 5);
        for set in &sets{
            assert_eq!(set.len(), 3);
            let mut sorted = set.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
        }
    }

    #[test]
    fn high_degree_nodes_are_favored()
    {
        // hub 0 touches every other node
        let net = test_network(
            5,
            &[(0, 1, 0.0), (0, 2, 0.0), (0, 3, 0.0), (0, 4, 0.0), (1, 0, 0.0)],
        );
        let mut rng = Pcg64::seed_from_u64(42);
        let sets = choose_target_sets(&net, 50, 1, &mut rng).unwrap();
        let hub_hits = sets.iter().filter(|set| set[0] == 0).count();
        assert!(hub_hits > 15);
    }

    #[test]
    fn oversized_set_is_rejected_not_looped()
    {
        let net = test_network(3, &[(0, 1, 0.0), (1, 2, 0.0), (2, 0, 0.0)]);
        let mut rng = Pcg64::seed_from_u64(9);
        assert!(matches!(
            choose_target_sets(&net, 1, 4, &mut rng),
            Err(ConfigError::InvalidTarget{..})
        ));
        // exactly the whole network is still fine
        let sets = choose_target_sets(&net, 2, 3, &mut rng).unwrap();
        for set in sets{
            let mut set = set;
            set.sort_unstable();
            assert_eq!(set, vec![0, 1, 2]);
        }
    }
}
