use{
    std::collections::HashMap,
    crate::misc_types::*,
};

#[derive(Debug, Clone)]
pub struct Airport{
    pub id: u32,
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Attributes of a single route. `weight` is the transmission probability
/// assigned by the weight model, `cluster` the sum of the endpoint local
/// clustering coefficients.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo{
    pub weight: f64,
    pub cluster: f64,
    pub international: bool,
}

impl Default for RouteInfo{
    fn default() -> Self{
        Self{
            weight: 0.0,
            cluster: 0.0,
            international: false,
        }
    }
}

#[derive(Debug, Clone)]
struct OutEdge{
    to: usize,
    info: RouteInfo,
}

/// Directed adjacency list graph over dense node indices.
///
/// `Clone` is the deep copy every simulation run starts from.
/// The build phase guarantees the graph handed to the simulation is one
/// connected component (undirected projection) without isolated nodes;
/// nothing here re-checks that.
#[derive(Debug, Clone)]
pub struct FlightNetwork{
    airports: Vec<Airport>,
    index_of: HashMap<u32, usize>,
    out_adj: Vec<Vec<OutEdge>>,
    in_adj: Vec<Vec<usize>>,
    directed: bool,
}

impl FlightNetwork{
    pub fn new(airports: Vec<Airport>) -> Self
    {
        let n = airports.len();
        let index_of = airports.iter()
            .enumerate()
            .map(|(index, airport)| (airport.id, index))
            .collect();
        Self{
            airports,
            index_of,
            out_adj: vec![Vec::new(); n],
            in_adj: vec![Vec::new(); n],
            directed: true,
        }
    }

    pub fn vertex_count(&self) -> usize
    {
        self.airports.len()
    }

    pub fn edge_count(&self) -> usize
    {
        self.out_adj.iter().map(Vec::len).sum()
    }

    pub fn is_directed(&self) -> bool
    {
        self.directed
    }

    pub fn airport(&self, index: usize) -> &Airport
    {
        &self.airports[index]
    }

    pub fn index_of_id(&self, id: u32) -> Option<usize>
    {
        self.index_of.get(&id).copied()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool
    {
        self.out_adj[from].iter().any(|e| e.to == to)
    }

    /// Inserts the edge with default attributes. Duplicates are refused.
    pub fn add_edge(&mut self, from: usize, to: usize) -> bool
    {
        if self.has_edge(from, to){
            return false;
        }
        self.out_adj[from].push(
            OutEdge{to, info: RouteInfo::default()}
        );
        self.in_adj[to].push(from);
        true
    }

    pub fn successors(&self, node: usize) -> impl Iterator<Item=usize> + '_
    {
        self.out_adj[node].iter().map(|e| e.to)
    }

    pub fn predecessors(&self, node: usize) -> impl Iterator<Item=usize> + '_
    {
        self.in_adj[node].iter().copied()
    }

    pub fn out_edges(&self, node: usize) -> impl Iterator<Item=(usize, &RouteInfo)>
    {
        self.out_adj[node].iter().map(|e| (e.to, &e.info))
    }

    pub fn out_degree(&self, node: usize) -> usize
    {
        self.out_adj[node].len()
    }

    pub fn in_degree(&self, node: usize) -> usize
    {
        self.in_adj[node].len()
    }

    /// Combined in plus out degree, the weight used for target sampling.
    pub fn degree(&self, node: usize) -> usize
    {
        self.out_degree(node) + self.in_degree(node)
    }

    pub fn edge_info(&self, from: usize, to: usize) -> Option<&RouteInfo>
    {
        self.out_adj[from].iter()
            .find(|e| e.to == to)
            .map(|e| &e.info)
    }

    pub fn edge_info_mut(&mut self, from: usize, to: usize) -> Option<&mut RouteInfo>
    {
        self.out_adj[from].iter_mut()
            .find(|e| e.to == to)
            .map(|e| &mut e.info)
    }

    pub fn edges(&self) -> impl Iterator<Item=(EdgePair, &RouteInfo)>
    {
        self.out_adj.iter()
            .enumerate()
            .flat_map(|(from, adj)| {
                adj.iter().map(move |e| ([from, e.to], &e.info))
            })
    }

    pub fn edge_pairs(&self) -> Vec<EdgePair>
    {
        self.edges().map(|(pair, _)| pair).collect()
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool
    {
        let pos = self.out_adj[from].iter().position(|e| e.to == to);
        match pos{
            None => false,
            Some(pos) => {
                self.out_adj[from].remove(pos);
                let in_pos = self.in_adj[to].iter()
                    .position(|&p| p == from)
                    .unwrap();
                self.in_adj[to].remove(in_pos);
                true
            }
        }
    }

    /// Quarantine entry point. Pairs not present (anymore) are ignored,
    /// matching `remove_edges_from` semantics of the reference tooling.
    pub fn remove_edges(&mut self, pairs: &[EdgePair])
    {
        for pair in pairs{
            self.remove_edge(pair[0], pair[1]);
        }
    }

    /// Neighbors in the undirected projection, deduplicated.
    pub fn undirected_neighbors(&self, node: usize) -> Vec<usize>
    {
        let mut neighbors: Vec<usize> = self.successors(node)
            .chain(self.predecessors(node))
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        neighbors
    }

    /// Connected components of the undirected projection, largest first.
    pub fn connected_components(&self) -> Vec<Vec<usize>>
    {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut components = Vec::new();
        for start in 0..n{
            if visited[start]{
                continue;
            }
            visited[start] = true;
            let mut component = vec![start];
            let mut queue = std::collections::VecDeque::from([start]);
            while let Some(node) = queue.pop_front(){
                for neighbor in self.undirected_neighbors(node){
                    if !visited[neighbor]{
                        visited[neighbor] = true;
                        component.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
            components.push(component);
        }
        components.sort_by_key(|c| std::cmp::Reverse(c.len()));
        components
    }

    /// Reindexed subgraph containing only `keep`, attributes carried over.
    pub fn restricted_to(&self, keep: &[usize]) -> Self
    {
        let mut new_index = vec![usize::MAX; self.vertex_count()];
        let airports: Vec<Airport> = keep.iter()
            .enumerate()
            .map(|(new, &old)| {
                new_index[old] = new;
                self.airports[old].clone()
            })
            .collect();
        let mut reduced = Self::new(airports);
        reduced.directed = self.directed;
        for &old_from in keep{
            for edge in &self.out_adj[old_from]{
                if new_index[edge.to] != usize::MAX{
                    let from = new_index[old_from];
                    let to = new_index[edge.to];
                    reduced.out_adj[from].push(
                        OutEdge{to, info: edge.info}
                    );
                    reduced.in_adj[to].push(from);
                }
            }
        }
        reduced
    }

    /// Symmetrize: every edge gains its reverse with the same attributes.
    /// Existing reverse edges keep their own.
    pub fn make_undirected(&mut self)
    {
        let pairs: Vec<(EdgePair, RouteInfo)> = self.edges()
            .map(|(pair, info)| (pair, *info))
            .collect();
        for ([from, to], info) in pairs{
            if !self.has_edge(to, from){
                self.out_adj[to].push(OutEdge{to: from, info});
                self.in_adj[from].push(to);
            }
        }
        self.directed = false;
    }
}

#[cfg(test)]
pub(crate) fn test_network(n: usize, edges: &[(usize, usize, f64)]) -> FlightNetwork
{
    let airports = (0..n)
        .map(|i| Airport{
            id: i as u32,
            name: format!("A{}", i),
            country: "X".to_owned(),
            lat: 0.0,
            lon: 0.0,
        })
        .collect();
    let mut net = FlightNetwork::new(airports);
    for &(from, to, weight) in edges{
        net.add_edge(from, to);
        net.edge_info_mut(from, to).unwrap().weight = weight;
    }
    net
}

#[cfg(test)]
mod tests{
    use super::*;

    #[test]
    fn degrees_and_removal()
    {
        let mut net = test_network(3, &[(0, 1, 0.5), (1, 2, 0.5), (2, 0, 0.5)]);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.degree(1), 2);
        assert_eq!(net.in_degree(2), 1);

        let before = net.in_degree(1);
        net.remove_edges(&[[0, 1], [0, 1]]);
        assert!(net.in_degree(1) < before);
        assert_eq!(net.edge_count(), 2);
        assert!(!net.has_edge(0, 1));
    }

    #[test]
    fn components_largest_first()
    {
        let net = test_network(5, &[(0, 1, 0.0), (1, 2, 0.0), (3, 4, 0.0)]);
        let components = net.connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 3);
        assert_eq!(components[1].len(), 2);
    }

    #[test]
    fn restriction_reindexes_edges()
    {
        let net = test_network(4, &[(0, 2, 0.7), (2, 3, 0.2), (1, 3, 0.9)]);
        let reduced = net.restricted_to(&[0, 2, 3]);
        assert_eq!(reduced.vertex_count(), 3);
        assert_eq!(reduced.edge_count(), 2);
        let from = reduced.index_of_id(0).unwrap();
        let to = reduced.index_of_id(2).unwrap();
        assert_eq!(reduced.edge_info(from, to).unwrap().weight, 0.7);
    }

    #[test]
    fn undirect_adds_reverse_edges()
    {
        let mut net = test_network(2, &[(0, 1, 0.3)]);
        net.make_undirected();
        assert!(net.has_edge(1, 0));
        assert_eq!(net.edge_info(1, 0).unwrap().weight, 0.3);
        assert!(!net.is_directed());
    }
}
