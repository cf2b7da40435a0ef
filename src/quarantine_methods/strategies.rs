use{
    rand::seq::SliceRandom,
    rand_pcg::Pcg64,
    serde::{Serialize, Deserialize},
    crate::{
        errors::ConfigError,
        misc_types::*,
        network::{FlightNetwork, RouteInfo, edge_betweenness},
    },
};

/// Which routes a strategy may close at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeFilter{
    All,
    InternationalOnly,
    DomesticOnly,
}

impl EdgeFilter{
    /// The two cli toggles are mutually exclusive.
    pub fn from_flags(international: bool, domestic: bool)
    -> Result<Self, ConfigError>
    {
        match (international, domestic){
            (true, true) => Err(ConfigError::UnsupportedFilter),
            (true, false) => Ok(Self::InternationalOnly),
            (false, true) => Ok(Self::DomesticOnly),
            (false, false) => Ok(Self::All),
        }
    }

    pub fn admits(&self, info: &RouteInfo) -> bool
    {
        match self{
            Self::All => true,
            Self::InternationalOnly => info.international,
            Self::DomesticOnly => !info.international,
        }
    }

    pub fn name(&self) -> &'static str
    {
        match self{
            Self::All => "all",
            Self::InternationalOnly => "intl",
            Self::DomesticOnly => "dom",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum QuarantineStrategy{
    Random,
    BetweennessRank,
    WeightRank,
    ClusteringRank,
}

impl From<StrategyKind> for QuarantineStrategy{
    fn from(kind: StrategyKind) -> Self{
        match kind{
            StrategyKind::Random => Self::Random,
            StrategyKind::Betweenness => Self::BetweennessRank,
            StrategyKind::Weight => Self::WeightRank,
            StrategyKind::Cluster => Self::ClusteringRank,
        }
    }
}

impl QuarantineStrategy{
    /// Ranked candidate edges, highest priority to close first. The ranking
    /// is computed once per sweep; effort levels later slice prefixes off
    /// it. Filtering always builds a selected copy of the edge set.
    pub fn rank(
        &self,
        network: &FlightNetwork,
        filter: EdgeFilter,
        rng: &mut Pcg64,
    ) -> Vec<EdgePair>
    {
        match self{
            Self::Random => {
                let mut candidates = filtered_edges(network, filter);
                candidates.shuffle(rng);
                candidates
            }
            Self::WeightRank => {
                let mut scored: Vec<(EdgePair, f64)> = network.edges()
                    .filter(|(_, info)| filter.admits(info))
                    .map(|(pair, info)| (pair, info.weight))
                    .collect();
                sort_descending(&mut scored);
                strip_scores(scored)
            }
            Self::ClusteringRank => {
                // edges without clustering signal (0) or above the
                // pathological bound (2) are dropped, not deprioritized
                let mut scored: Vec<(EdgePair, f64)> = network.edges()
                    .filter(|(_, info)| filter.admits(info))
                    .filter(|(_, info)| info.cluster > 0.0 && info.cluster < 2.0)
                    .map(|(pair, info)| (pair, info.cluster))
                    .collect();
                sort_descending(&mut scored);
                strip_scores(scored)
            }
            Self::BetweennessRank => {
                let betweenness = edge_betweenness(network);
                let mut scored: Vec<(EdgePair, f64)> = network.edges()
                    .filter(|(_, info)| filter.admits(info))
                    .map(|(pair, _)| (pair, betweenness[&pair]))
                    .collect();
                sort_descending(&mut scored);
                strip_scores(scored)
            }
        }
    }
}

fn filtered_edges(network: &FlightNetwork, filter: EdgeFilter) -> Vec<EdgePair>
{
    network.edges()
        .filter(|(_, info)| filter.admits(info))
        .map(|(pair, _)| pair)
        .collect()
}

// stable, so ties keep the graph's edge order
fn sort_descending(scored: &mut [(EdgePair, f64)])
{
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
}

fn strip_scores(scored: Vec<(EdgePair, f64)>) -> Vec<EdgePair>
{
    scored.into_iter().map(|(pair, _)| pair).collect()
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        rand::SeedableRng,
        crate::network::graph::test_network,
    };

    fn rng() -> Pcg64{
        Pcg64::seed_from_u64(0xfeed)
    }

    #[test]
    fn filter_flags()
    {
        assert!(matches!(
            EdgeFilter::from_flags(true, true),
            Err(ConfigError::UnsupportedFilter)
        ));
        assert_eq!(EdgeFilter::from_flags(false, false).unwrap(), EdgeFilter::All);
        assert_eq!(
            EdgeFilter::from_flags(true, false).unwrap(),
            EdgeFilter::InternationalOnly
        );
    }

    #[test]
    fn weight_rank_is_descending()
    {
        let net = test_network(
            4,
            &[(0, 1, 0.2), (1, 2, 0.9), (2, 3, 0.5), (3, 0, 0.9)],
        );
        let ranked = QuarantineStrategy::WeightRank
            .rank(&net, EdgeFilter::All, &mut rng());
        assert_eq!(ranked.len(), 4);
        // stable tie-break keeps edge order for the two 0.9 edges
        assert_eq!(ranked[0], [1, 2]);
        assert_eq!(ranked[1], [3, 0]);
        assert_eq!(ranked[3], [0, 1]);
    }

    #[test]
    fn cluster_rank_excludes_out_of_range()
    {
        let mut net = test_network(
            4,
            &[(0, 1, 0.0), (1, 2, 0.0), (2, 3, 0.0), (3, 0, 0.0)],
        );
        let clusters = [0.0, 1.5, 2.0, 0.5];
        for (pair, cluster) in net.edge_pairs().into_iter().zip(clusters){
            net.edge_info_mut(pair[0], pair[1]).unwrap().cluster = cluster;
        }
        let ranked = QuarantineStrategy::ClusteringRank
            .rank(&net, EdgeFilter::All, &mut rng());
        assert_eq!(ranked, vec![[1, 2], [3, 0]]);
    }

    #[test]
    fn random_rank_is_a_permutation_of_the_filtered_set()
    {
        let mut net = test_network(
            4,
            &[(0, 1, 0.0), (1, 2, 0.0), (2, 3, 0.0), (3, 0, 0.0)],
        );
        // mark two edges international
        net.edge_info_mut(0, 1).unwrap().international = true;
        net.edge_info_mut(2, 3).unwrap().international = true;

        let ranked = QuarantineStrategy::Random
            .rank(&net, EdgeFilter::InternationalOnly, &mut rng());
        let mut sorted = ranked.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![[0, 1], [2, 3]]);

        let domestic = QuarantineStrategy::Random
            .rank(&net, EdgeFilter::DomesticOnly, &mut rng());
        assert_eq!(domestic.len(), 2);
        assert!(!domestic.contains(&[0, 1]));
    }

    #[test]
    fn betweenness_rank_prefers_bridges()
    {
        // two symmetric triangles joined by a single one-way bridge; every
        // cross pair runs over the bridge while the triangle edges split
        // their load, so the bridge strictly dominates
        let net = test_network(
            6,
            &[
                (0, 1, 1.0), (1, 0, 1.0),
                (1, 2, 1.0), (2, 1, 1.0),
                (2, 0, 1.0), (0, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0), (4, 3, 1.0),
                (4, 5, 1.0), (5, 4, 1.0),
                (5, 3, 1.0), (3, 5, 1.0),
            ],
        );
        let bc = edge_betweenness(&net);
        assert!(
            bc.iter().all(|(pair, value)| *pair == [2, 3] || *value < bc[&[2, 3]])
        );

        let ranked = QuarantineStrategy::BetweennessRank
            .rank(&net, EdgeFilter::All, &mut rng());
        assert_eq!(ranked[0], [2, 3]);
    }
}
