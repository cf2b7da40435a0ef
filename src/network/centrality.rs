use{
    std::{
        cmp::Ordering,
        collections::{BinaryHeap, HashMap},
    },
    super::graph::FlightNetwork,
    crate::misc_types::EdgePair,
};

struct HeapItem{
    dist: f64,
    node: usize,
}

// min-heap on distance; weights are finite and non negative
impl Ord for HeapItem{
    fn cmp(&self, other: &Self) -> Ordering{
        other.dist.total_cmp(&self.dist)
    }
}

impl PartialOrd for HeapItem{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>{
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapItem{
    fn eq(&self, other: &Self) -> bool{
        self.dist == other.dist && self.node == other.node
    }
}

impl Eq for HeapItem {}

/// Edge betweenness centrality with the edge weight as length metric.
///
/// Brandes' accumulation over Dijkstra trees from every source, directed,
/// normalized by 1/(n(n-1)) so values are comparable across network sizes.
/// Only the descending order matters to the ranking strategies.
pub fn edge_betweenness(network: &FlightNetwork) -> HashMap<EdgePair, f64>
{
    let n = network.vertex_count();
    let mut betweenness: HashMap<EdgePair, f64> = network.edge_pairs()
        .into_iter()
        .map(|pair| (pair, 0.0))
        .collect();

    let mut dist = vec![f64::INFINITY; n];
    let mut sigma = vec![0.0_f64; n];
    let mut delta = vec![0.0_f64; n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut settled = Vec::with_capacity(n);
    let mut done = vec![false; n];

    for source in 0..n{
        dist.fill(f64::INFINITY);
        sigma.fill(0.0);
        delta.fill(0.0);
        done.fill(false);
        for p in preds.iter_mut(){
            p.clear();
        }
        settled.clear();

        dist[source] = 0.0;
        sigma[source] = 1.0;
        let mut heap = BinaryHeap::new();
        heap.push(HeapItem{dist: 0.0, node: source});

        while let Some(HeapItem{dist: d, node}) = heap.pop(){
            if done[node]{
                continue;
            }
            done[node] = true;
            settled.push(node);

            for (next, info) in network.out_edges(node){
                if done[next]{
                    continue;
                }
                let candidate = d + info.weight;
                if candidate < dist[next]{
                    dist[next] = candidate;
                    sigma[next] = sigma[node];
                    preds[next].clear();
                    preds[next].push(node);
                    heap.push(HeapItem{dist: candidate, node: next});
                } else if candidate == dist[next]{
                    sigma[next] += sigma[node];
                    preds[next].push(node);
                }
            }
        }

        for &node in settled.iter().rev(){
            for &pred in &preds[node]{
                let credit = sigma[pred] / sigma[node] * (1.0 + delta[node]);
                *betweenness.get_mut(&[pred, node]).unwrap() += credit;
                delta[pred] += credit;
            }
        }
    }

    if n > 1{
        let scale = 1.0 / (n * (n - 1)) as f64;
        for value in betweenness.values_mut(){
            *value *= scale;
        }
    }

    betweenness
}
