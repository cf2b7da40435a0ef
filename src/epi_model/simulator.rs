use{
    rand::{SeedableRng, distributions::{Distribution, Uniform}},
    rand_pcg::Pcg64,
    super::{seir_states::SeirState, seir_writer::StepSink},
    crate::{
        errors::ConfigError,
        misc_types::*,
        network::{FlightNetwork, calculate_weights},
    },
};

/// Compartment totals at the end of a run. Exposed nodes still incubating
/// when the last infectious node recovers are reported but do not count
/// towards the outbreak size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimOutcome{
    pub susceptible: u32,
    pub exposed: u32,
    pub infectious: u32,
    pub recovered: u32,
}

impl SimOutcome{
    pub fn total_infected(&self) -> u32
    {
        self.infectious + self.recovered
    }
}

/// Discrete-time SEIR stepper.
///
/// Owns a private clone of the base network plus per-node status and age, so
/// runs never share mutable state. A quarantine edge list is applied once,
/// on the step matching the configured delay, optionally followed by a
/// weight recalculation on the reduced graph.
pub struct EpidemicSim{
    network: FlightNetwork,
    status: Vec<SeirState>,
    age: Vec<u32>,
    rng: Pcg64,
    delay: usize,
    recalculate: bool,
    quarantine_applied: bool,
}

impl EpidemicSim{
    /// Validates the target set before any stepping happens.
    pub fn new(
        base: &FlightNetwork,
        targets: &[usize],
        seed: u64,
        delay: usize,
        recalculate: bool,
    ) -> Result<Self, ConfigError>
    {
        let n = base.vertex_count();
        if targets.is_empty(){
            return Err(
                ConfigError::InvalidTarget{
                    reason: "target set is empty".to_owned()
                }
            );
        }
        let mut status = vec![SeirState::Susceptible; n];
        let age = vec![0_u32; n];
        for &target in targets{
            if target >= n{
                return Err(
                    ConfigError::InvalidTarget{
                        reason: format!("node index {} is not in the network", target)
                    }
                );
            }
            if status[target].inf_check(){
                return Err(
                    ConfigError::InvalidTarget{
                        reason: format!(
                            "duplicate target airport {}",
                            base.airport(target).id
                        )
                    }
                );
            }
            status[target] = SeirState::Infectious;
        }

        Ok(
            Self{
                network: base.clone(),
                status,
                age,
                rng: Pcg64::seed_from_u64(seed),
                delay,
                recalculate,
                quarantine_applied: false,
            }
        )
    }

    pub fn network(&self) -> &FlightNetwork
    {
        &self.network
    }

    pub fn statuses(&self) -> &[SeirState]
    {
        &self.status
    }

    /// Run to completion: at most [`MAX_STEPS`] steps, stopping early once
    /// no infectious node remains. `None` means no quarantine was supplied
    /// at all; `Some(&[])` behaves identically apart from triggering the
    /// (idempotent) recalculation at the delay step.
    pub fn run<S>(
        &mut self,
        quarantine: Option<&[EdgePair]>,
        sink: &mut S,
    ) -> std::io::Result<SimOutcome>
    where S: StepSink
    {
        let mut outcome = self.tally();
        for step in 0..MAX_STEPS{
            self.advance_one_step(step, quarantine);
            outcome = self.tally();
            sink.record(
                step,
                outcome.susceptible,
                outcome.exposed,
                outcome.infectious,
                outcome.recovered
            )?;
            if outcome.infectious == 0{
                break;
            }
        }
        Ok(outcome)
    }

    /// One time unit: quarantine check, then the mutation pass. Counting is
    /// a separate pass ([`Self::tally`]); merging the two would bias the
    /// totals with half-updated state.
    pub(crate) fn advance_one_step(
        &mut self,
        step: usize,
        quarantine: Option<&[EdgePair]>,
    )
    {
        if step == self.delay && !self.quarantine_applied{
            if let Some(edges) = quarantine{
                self.network.remove_edges(edges);
                if self.recalculate{
                    calculate_weights(&mut self.network);
                }
                self.quarantine_applied = true;
            }
        }

        let network = &self.network;
        let status = &mut self.status;
        let age = &mut self.age;
        let rng = &mut self.rng;
        let draw = Uniform::new_inclusive(0.0_f64, 1.0);

        for node in 0..network.vertex_count(){
            match status[node]{
                SeirState::Infectious if age[node] >= RECOVERY_AGE => {
                    // no propagation on the recovery step
                    status[node] = SeirState::Recovered;
                }
                SeirState::Exposed if (INCUBATION_AGE..RECOVERY_AGE).contains(&age[node]) => {
                    // age carries over, so the infectious window is fixed
                    status[node] = SeirState::Infectious;
                }
                SeirState::Exposed => {
                    age[node] += 1;
                }
                SeirState::Infectious => {
                    // not on the step it became infectious
                    if age[node] > 0{
                        for (victim, info) in network.out_edges(node){
                            let u = draw.sample(rng);
                            if u <= info.weight && status[victim].sus_check(){
                                status[victim] = SeirState::Exposed;
                                age[victim] = 0;
                            }
                        }
                    }
                    age[node] += 1;
                }
                _ => {}
            }
        }
    }

    fn tally(&self) -> SimOutcome
    {
        let mut outcome = SimOutcome{
            susceptible: 0,
            exposed: 0,
            infectious: 0,
            recovered: 0,
        };
        for status in self.status.iter(){
            match status{
                SeirState::Susceptible => outcome.susceptible += 1,
                SeirState::Exposed => outcome.exposed += 1,
                SeirState::Infectious => outcome.infectious += 1,
                SeirState::Recovered => outcome.recovered += 1,
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests{
    use{
        super::*,
        crate::{
            epi_model::seir_writer::{CollectSteps, DiscardSteps},
            network::graph::test_network,
        },
    };

    #[test]
    fn certain_transmission_runs_its_course()
    {
        let net = test_network(2, &[(0, 1, 1.0)]);
        let mut sim = EpidemicSim::new(&net, &[0], 7, 0, false).unwrap();
        let mut sink = CollectSteps::new();
        let outcome = sim.run(None, &mut sink).unwrap();

        assert_eq!(outcome.total_infected(), 2);
        assert_eq!(outcome.recovered, 2);
        assert_eq!(outcome.susceptible, 0);

        // patient zero needs one step of age before transmitting
        assert_eq!(sink.rows[0], (0, 1, 0, 1, 0));
        assert_eq!(sink.rows[1], (1, 0, 1, 1, 0));
        // incubation completes after three aging steps
        assert_eq!(sink.rows[4].3, 2);
    }

    #[test]
    fn isolated_target_recovers_alone()
    {
        // target has an inbound edge only
        let net = test_network(2, &[(1, 0, 0.8)]);
        for quarantine in [None, Some([[1_usize, 0_usize]].as_slice())]{
            let mut sim = EpidemicSim::new(&net, &[0], 3, 0, true).unwrap();
            let outcome = sim.run(quarantine, &mut DiscardSteps).unwrap();
            assert_eq!(outcome.total_infected(), 1);
            assert_eq!(outcome.recovered, 1);
            assert_eq!(outcome.susceptible, 1);
        }
    }

    #[test]
    fn transitions_never_skip_or_reverse()
    {
        let net = test_network(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
        );
        let mut sim = EpidemicSim::new(&net, &[0], 99, 0, false).unwrap();
        for step in 0..MAX_STEPS{
            let before = sim.statuses().to_vec();
            sim.advance_one_step(step, None);
            for (prev, next) in before.iter().zip(sim.statuses()){
                assert!(prev.may_become(*next), "{:?} -> {:?}", prev, next);
            }
            if sim.statuses().iter().all(|s| !s.inf_check()){
                break;
            }
        }
    }

    #[test]
    fn quarantine_delay_lets_infection_escape()
    {
        let net = test_network(2, &[(0, 1, 1.0)]);
        let block = [[0_usize, 1_usize]];

        let mut immediate = EpidemicSim::new(&net, &[0], 11, 0, false).unwrap();
        let contained = immediate.run(Some(&block), &mut DiscardSteps).unwrap();
        assert_eq!(contained.total_infected(), 1);

        let mut late = EpidemicSim::new(&net, &[0], 11, 5, false).unwrap();
        let escaped = late.run(Some(&block), &mut DiscardSteps).unwrap();
        assert_eq!(escaped.total_infected(), 2);
    }

    #[test]
    fn quarantine_cannot_raise_in_degree_and_weights_stay_normalized()
    {
        let net = test_network(
            5,
            &[
                (0, 1, 0.0), (0, 2, 0.0), (1, 2, 0.0),
                (2, 3, 0.0), (3, 4, 0.0), (4, 0, 0.0),
            ],
        );
        let in_degrees: Vec<usize> = (0..5).map(|v| net.in_degree(v)).collect();

        let mut sim = EpidemicSim::new(&net, &[0], 5, 0, true).unwrap();
        sim.run(Some(&[[0, 2], [3, 4]]), &mut DiscardSteps).unwrap();

        for node in 0..5{
            assert!(sim.network().in_degree(node) <= in_degrees[node]);
        }
        for (_, info) in sim.network().edges(){
            assert!((0.0..=1.0).contains(&info.weight));
        }
    }

    #[test]
    fn bad_target_sets_fail_before_stepping()
    {
        let net = test_network(2, &[(0, 1, 1.0)]);
        assert!(matches!(
            EpidemicSim::new(&net, &[], 0, 0, false),
            Err(ConfigError::InvalidTarget{..})
        ));
        assert!(matches!(
            EpidemicSim::new(&net, &[0, 0], 0, 0, false),
            Err(ConfigError::InvalidTarget{..})
        ));
        assert!(matches!(
            EpidemicSim::new(&net, &[17], 0, 0, false),
            Err(ConfigError::InvalidTarget{..})
        ));
    }

    #[test]
    fn same_seed_same_curve_with_and_without_empty_quarantine()
    {
        let net = {
            let mut net = test_network(
                6,
                &[
                    (0, 1, 0.0), (0, 2, 0.0), (1, 3, 0.0),
                    (2, 4, 0.0), (3, 5, 0.0), (4, 5, 0.0), (5, 0, 0.0),
                ],
            );
            calculate_weights(&mut net);
            net
        };

        let mut baseline_sink = CollectSteps::new();
        let mut baseline = EpidemicSim::new(&net, &[0], 555, 0, true).unwrap();
        let base_outcome = baseline.run(None, &mut baseline_sink).unwrap();

        let mut empty_sink = CollectSteps::new();
        let mut empty = EpidemicSim::new(&net, &[0], 555, 0, true).unwrap();
        let empty_outcome = empty.run(Some(&[]), &mut empty_sink).unwrap();

        assert_eq!(base_outcome, empty_outcome);
        assert_eq!(baseline_sink.rows, empty_sink.rows);
    }
}
