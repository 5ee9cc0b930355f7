//! Models shared by the integration tests, along with the brute force
//! procedures used to check the optimality of the solutions found by the
//! solver.
#![allow(dead_code)]

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::Not;
use std::path::PathBuf;

use bitset_fixed::BitSet;
use ddbnb::*;
use regex::Regex;

pub fn locate(kind: &str, id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(kind)
        .join(id)
}

fn lines(kind: &str, id: &str) -> impl Iterator<Item=String> {
    let file = File::open(locate(kind, id)).expect("File not found");
    BufReader::new(file).lines()
        .map(|l| l.expect("Unreadable line").trim().to_string())
        .filter(|l| !l.is_empty() && !l.starts_with('c'))
}

/// Solves the problem with the given maximum width and cutset type and
/// returns the best node, making sure the resolution was exact.
pub fn solve<P, R>(problem: &P, relax: R, width: usize, cutset_type: CutsetType) -> Option<Node<P::State>>
    where P: Problem,
          R: Relaxation<State=P::State>
{
    let config = SolverConfigBuilder::default()
        .width(width)
        .cutset_type(cutset_type)
        .build()
        .unwrap();
    let mdd        = mdd_builder(problem, relax).into_diagram();
    let mut solver = SequentialSolver::customized(mdd, config);
    let best       = solver.solve().unwrap();
    assert!(solver.is_exact());
    best
}

// ----------------------------------------------------------------------------
// --- MAX CUT ----------------------------------------------------------------
// ----------------------------------------------------------------------------
const S: isize =  1;
const T: isize = -1;

/// The graph is represented by its (symmetric) adjacency matrix
pub struct Graph {
    pub nb_vertices: usize,
    pub adj_matrix : Vec<isize>,
}
impl Graph {
    pub fn new(n: usize) -> Self {
        Graph { nb_vertices: n, adj_matrix: vec![0; n * n] }
    }
    pub fn add_bidir_edge(&mut self, x: usize, y: usize, w: isize) {
        self.adj_matrix[x * self.nb_vertices + y] = w;
        self.adj_matrix[y * self.nb_vertices + x] = w;
    }
    pub fn weight(&self, x: usize, y: usize) -> isize {
        self.adj_matrix[x * self.nb_vertices + y]
    }
    pub fn sum_of_negative_edges(&self) -> isize {
        // sum is divided by two because the graph is symmetrical
        self.adj_matrix.iter()
            .filter(|x| x.is_negative())
            .sum::<isize>() / 2
    }
}

/// The state of the max cut problem: the marginal benefit of putting each
/// unassigned vertex on the S side of the cut.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct McpState {
    pub benef  : Vec<isize>,
    pub initial: bool,
}
impl StateRepresentation for McpState {
    fn rank(&self, node: &Node<Self>) -> isize {
        node.value()
    }
}

pub struct Mcp {
    pub graph: Graph,
}
impl Problem for Mcp {
    type State = McpState;

    fn nb_vars(&self) -> usize {
        self.graph.nb_vertices
    }
    fn initial_state(&self) -> McpState {
        McpState { initial: true, benef: vec![0; self.nb_vars()] }
    }
    fn initial_value(&self) -> isize {
        self.graph.sum_of_negative_edges()
    }
    fn variables(&self) -> Result<Vec<Variable>, Error> {
        (0..self.nb_vars()).map(|i| Variable::from_set(i, vec![S, T])).collect()
    }
    fn successors(&self, node: &Node<McpState>, var: usize) -> Result<Vec<Node<McpState>>, Error> {
        let state = node.state();
        // the first vertex is always put on the S side (symmetry breaking)
        let sides = if state.initial { vec![S] } else { vec![S, T] };
        let free  = node.free_variables().iter()
            .map(Variable::id)
            .filter(|v| *v != var)
            .collect::<Vec<usize>>();

        sides.into_iter()
            .map(|side| {
                let mut benef = vec![0; self.nb_vars()];
                for v in free.iter().copied() {
                    benef[v] = state.benef[v] + side * self.graph.weight(var, v);
                }
                let cost = if state.initial { 0 } else { self.branch_cost(state, &free, var, side) };
                node.successor(McpState { initial: false, benef }, node.value() + cost, var, side)
            })
            .collect()
    }
}
impl Mcp {
    /// Loads a weighted graph: one `p edge <vertices> <edges>` line followed
    /// by `e <x> <y> <weight>` lines (vertices are numbered from 1).
    pub fn from_file(id: &str) -> Mcp {
        let pb_decl   = Regex::new(r"^p\s+edge\s+(?P<vars>\d+)\s+(?P<edges>\d+)$").unwrap();
        let edge_decl = Regex::new(r"^e\s+(?P<src>\d+)\s+(?P<dst>\d+)\s+(?P<w>-?\d+)$").unwrap();

        let mut graph = Graph::new(0);
        for line in lines("mcp", id) {
            if let Some(caps) = pb_decl.captures(&line) {
                graph = Graph::new(caps["vars"].parse::<usize>().unwrap());
            } else if let Some(caps) = edge_decl.captures(&line) {
                let src = caps["src"].parse::<usize>().unwrap();
                let dst = caps["dst"].parse::<usize>().unwrap();
                let w   = caps["w"].parse::<isize>().unwrap();
                graph.add_bidir_edge(src - 1, dst - 1, w);
            } else {
                panic!("Ill formed \"{}\"", line);
            }
        }
        Mcp { graph }
    }
    fn branch_cost(&self, state: &McpState, free: &[usize], var: usize, side: isize) -> isize {
        let skk = state.benef[var];
        let mut cost = if side == S { (-skk).max(0) } else { skk.max(0) };
        for l in free.iter().copied() {
            let skl = state.benef[l];
            let wkl = self.graph.weight(var, l);
            if (side == S && skl * wkl <= 0) || (side == T && skl * wkl >= 0) {
                cost += skl.abs().min(wkl.abs());
            }
        }
        cost
    }
    /// The weight of the cut described by the given sides.
    pub fn cut_value(&self, sides: &[isize]) -> isize {
        let n = self.graph.nb_vertices;
        let mut cut = 0;
        for x in 0..n {
            for y in x + 1..n {
                if sides[x] != sides[y] {
                    cut += self.graph.weight(x, y);
                }
            }
        }
        cut
    }
    pub fn brute_force(&self) -> isize {
        let n = self.graph.nb_vertices;
        (0..1_usize << n)
            .map(|mask| (0..n).map(|i| if mask & (1 << i) == 0 { S } else { T }).collect::<Vec<isize>>())
            .map(|sides| self.cut_value(&sides))
            .max()
            .unwrap_or(0)
    }
}

pub struct McpRelax<'a> {
    pub pb: &'a Mcp,
}
impl Relaxation for McpRelax<'_> {
    type State = McpState;

    fn merge(&self, nodes: &[Node<McpState>]) -> Node<McpState> {
        let n = self.pb.nb_vars();
        let mut benef = vec![0; n];
        for (v, b) in benef.iter_mut().enumerate() {
            let positive = nodes.iter().all(|x| x.state().benef[v] >= 0);
            let negative = nodes.iter().all(|x| x.state().benef[v] <= 0);
            *b = if positive {
                nodes.iter().map(|x| x.state().benef[v]).min().unwrap_or(0)
            } else if negative {
                -nodes.iter().map(|x| x.state().benef[v].abs()).min().unwrap_or(0)
            } else {
                0
            };
        }
        // each node's value is raised by the benefit it loses in the merge
        let value = nodes.iter()
            .map(|x| x.value() + (0..n).map(|v| x.state().benef[v].abs() - benef[v].abs()).sum::<isize>())
            .max()
            .unwrap_or(isize::MIN);

        nodes[0].approximate(McpState { initial: false, benef }, value)
    }
}

// ----------------------------------------------------------------------------
// --- MAXIMUM INDEPENDENT SET ------------------------------------------------
// ----------------------------------------------------------------------------
/// The state of the maximum independent set problem: the set of vertices
/// which can still be added to the independent set.
#[derive(Clone, Hash, Eq, PartialEq)]
pub struct MispState(pub BitSet);
impl StateRepresentation for MispState {
    fn rank(&self, node: &Node<Self>) -> isize {
        node.value() + self.0.count_ones() as isize
    }
}

pub struct Misp {
    pub nb_vars   : usize,
    pub neighbors : Vec<Vec<usize>>,
    /// for each vertex, the set of vertices that are *not* adjacent to it
    pub compatible: Vec<BitSet>,
    pub weights   : Vec<isize>,
}
impl Misp {
    pub fn from_file(id: &str) -> Misp {
        let pb_decl   = Regex::new(r"^p\s+edge\s+(?P<vars>\d+)\s+(?P<edges>\d+)$").unwrap();
        let edge_decl = Regex::new(r"^e\s+(?P<src>\d+)\s+(?P<dst>\d+)").unwrap();

        let mut edges   = vec![];
        let mut nb_vars = 0;
        for line in lines("misp", id) {
            if let Some(caps) = pb_decl.captures(&line) {
                nb_vars = caps["vars"].parse::<usize>().unwrap();
            } else if let Some(caps) = edge_decl.captures(&line) {
                let src = caps["src"].parse::<usize>().unwrap();
                let dst = caps["dst"].parse::<usize>().unwrap();
                edges.push((src - 1, dst - 1));
            } else {
                panic!("Ill formed \"{}\"", line);
            }
        }
        Misp::new(nb_vars, &edges)
    }
    pub fn new(nb_vars: usize, edges: &[(usize, usize)]) -> Misp {
        let mut neighbors = vec![vec![]; nb_vars];
        let mut adjacency = vec![BitSet::new(nb_vars); nb_vars];
        for (x, y) in edges.iter().copied() {
            neighbors[x].push(y);
            neighbors[y].push(x);
            adjacency[x].set(y, true);
            adjacency[y].set(x, true);
        }
        let compatible = adjacency.iter().map(|a| a.not()).collect();
        Misp { nb_vars, neighbors, compatible, weights: vec![1; nb_vars] }
    }
    pub fn brute_force(&self) -> isize {
        (0..1_usize << self.nb_vars)
            .filter(|mask| (0..self.nb_vars).all(|x| mask & (1 << x) == 0
                || self.neighbors[x].iter().all(|y| mask & (1 << y) == 0)))
            .map(|mask| (0..self.nb_vars).filter(|x| mask & (1 << x) != 0).map(|x| self.weights[x]).sum())
            .max()
            .unwrap_or(0)
    }
    pub fn is_independent(&self, solution: &[Decision]) -> bool {
        let chosen = solution.iter().filter(|d| d.value == 1).map(|d| d.variable).collect::<Vec<usize>>();
        chosen.iter().all(|x| self.neighbors[*x].iter().all(|y| !chosen.contains(y)))
    }
}
impl Problem for Misp {
    type State = MispState;

    fn nb_vars(&self) -> usize {
        self.nb_vars
    }
    fn initial_state(&self) -> MispState {
        MispState(BitSet::new(self.nb_vars).not())
    }
    fn initial_value(&self) -> isize {
        0
    }
    fn variables(&self) -> Result<Vec<Variable>, Error> {
        (0..self.nb_vars).map(|i| Variable::new(i, 2)).collect()
    }
    fn successors(&self, node: &Node<MispState>, var: usize) -> Result<Vec<Node<MispState>>, Error> {
        let mut out = node.state().0.clone();
        out.set(var, false);

        let mut result = vec![node.successor(MispState(out.clone()), node.value(), var, 0)?];
        if node.state().0[var] {
            let mut take = out;
            take &= &self.compatible[var];
            result.push(node.successor(MispState(take), node.value() + self.weights[var], var, 1)?);
        }
        Ok(result)
    }
}

pub struct MispRelax {
    pub nb_vars: usize,
}
impl Relaxation for MispRelax {
    type State = MispState;

    fn merge(&self, nodes: &[Node<MispState>]) -> Node<MispState> {
        let mut bs = BitSet::new(self.nb_vars);
        for n in nodes {
            bs |= &n.state().0;
        }
        let value = nodes.iter().map(|n| n.value()).max().unwrap_or(isize::MIN);
        nodes[0].approximate(MispState(bs), value)
    }
}

/// Orders the nodes by increasing number of vertices they can still add to
/// their independent set.
pub fn fewest_candidates_first(layer: &Layer<MispState>, k: usize) -> Vec<usize> {
    let nodes = layer.nodes();
    let mut positions = (0..nodes.len()).collect::<Vec<usize>>();
    positions.sort_by(|a, b| {
        let (a, b) = (&nodes[*a], &nodes[*b]);
        a.state().0.count_ones().cmp(&b.state().0.count_ones())
            .then_with(|| a.value().cmp(&b.value()))
    });
    positions.truncate(k);
    positions
}

// ----------------------------------------------------------------------------
// --- BOUNDED KNAPSACK -------------------------------------------------------
// ----------------------------------------------------------------------------
#[derive(Debug)]
pub struct ItemData {
    pub profit  : usize,
    pub weight  : usize,
    pub quantity: usize,
}

#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Capacity(pub usize);
impl StateRepresentation for Capacity {
    fn rank(&self, node: &Node<Self>) -> isize {
        node.value()
    }
}

#[derive(Debug)]
pub struct Knapsack {
    pub capacity: usize,
    pub data    : Vec<ItemData>,
}
impl Knapsack {
    pub fn from_file(id: &str) -> Knapsack {
        let sack = Regex::new(r"^(?P<capa>\d+)\s+(?P<nb_items>\d+)$").unwrap();
        let item = Regex::new(r"^(?P<item>\d+)\s+(?P<profit>\d+)\s+(?P<weight>\d+)\s+(?P<qty>\d+)$").unwrap();

        let mut knapsack = Knapsack { capacity: 0, data: vec![] };
        for line in lines("knapsack", id) {
            if let Some(caps) = sack.captures(&line) {
                knapsack.capacity = caps["capa"].parse::<usize>().unwrap();
            } else if let Some(caps) = item.captures(&line) {
                knapsack.data.push(ItemData {
                    profit  : caps["profit"].parse::<usize>().unwrap(),
                    weight  : caps["weight"].parse::<usize>().unwrap(),
                    quantity: caps["qty"].parse::<usize>().unwrap(),
                });
            } else {
                panic!("Ill formed \"{}\"", line);
            }
        }
        knapsack
    }
    pub fn brute_force(&self) -> isize {
        fn explore(pb: &Knapsack, item: usize, capacity: usize) -> isize {
            if item == pb.data.len() {
                return 0;
            }
            let it = &pb.data[item];
            (0..=it.quantity)
                .take_while(|n| n * it.weight <= capacity)
                .map(|n| (n * it.profit) as isize + explore(pb, item + 1, capacity - n * it.weight))
                .max()
                .unwrap_or(0)
        }
        explore(self, 0, self.capacity)
    }
    pub fn evaluate(&self, solution: &[Decision]) -> (usize, isize) {
        solution.iter().fold((0, 0), |(w, p), d| {
            let it = &self.data[d.variable];
            (w + it.weight * d.value as usize, p + (it.profit * d.value as usize) as isize)
        })
    }
}
impl Problem for Knapsack {
    type State = Capacity;

    fn nb_vars(&self) -> usize {
        self.data.len()
    }
    fn initial_state(&self) -> Capacity {
        Capacity(self.capacity)
    }
    fn initial_value(&self) -> isize {
        0
    }
    fn variables(&self) -> Result<Vec<Variable>, Error> {
        self.data.iter().enumerate()
            .map(|(i, it)| Variable::new(i, it.quantity + 1))
            .collect()
    }
    fn successors(&self, node: &Node<Capacity>, var: usize) -> Result<Vec<Node<Capacity>>, Error> {
        let item = &self.data[var];
        let capa = node.state().0;
        (0..=item.quantity.min(capa / item.weight))
            .map(|n| node.successor(
                Capacity(capa - n * item.weight),
                node.value() + (n * item.profit) as isize,
                var,
                n as isize))
            .collect()
    }
}

pub struct KnapsackRelax;
impl Relaxation for KnapsackRelax {
    type State = Capacity;

    fn merge(&self, nodes: &[Node<Capacity>]) -> Node<Capacity> {
        let capa  = nodes.iter().map(|n| n.state().0).max().unwrap_or(0);
        let value = nodes.iter().map(|n| n.value()).max().unwrap_or(isize::MIN);
        nodes[0].approximate(Capacity(capa), value)
    }
}
