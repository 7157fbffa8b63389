use std::collections::{BTreeSet, HashMap};
use std::ops::{BitAnd, RangeInclusive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Epsilon,
    Symbol(char),
}

#[derive(Debug, Clone, Copy)]
pub struct NFAEdge(pub u32, pub u32, pub Condition);

/// Thompson-style automaton. Vertex 0 is the start, vertex `vertex_num - 1`
/// the end; `states` maps accepting vertices to the token they accept.
#[derive(Debug, Clone)]
pub struct NFA<AcceptEnum> {
    edges: Vec<NFAEdge>,
    vertex_num: u32,
    states: HashMap<u32, AcceptEnum>,
    symbol_set: BTreeSet<char>,
}

impl<Ac> NFA<Ac> {
    pub fn from_symbol(symbol: char) -> NFA<Ac> {
        NFA::from_symbols(std::iter::once(symbol))
    }
    pub fn from_symbol_set(s: &str) -> NFA<Ac> {
        NFA::from_symbols(s.chars())
    }
    pub fn from_symbol_range(symbol_rng: RangeInclusive<char>) -> NFA<Ac> {
        NFA::from_symbols(symbol_rng)
    }
    fn from_symbols(symbols: impl Iterator<Item = char>) -> NFA<Ac> {
        let mut edges = Vec::new();
        let mut symbol_set = BTreeSet::new();
        for symbol in symbols {
            edges.push(NFAEdge(0, 1, Condition::Symbol(symbol)));
            symbol_set.insert(symbol);
        }
        NFA { edges, vertex_num: 2, states: HashMap::new(), symbol_set }
    }
    pub fn zero_or_one(symbol: char) -> NFA<Ac> {
        let mut nfa = NFA::from_symbol(symbol);
        nfa.edges.push(NFAEdge(0, 1, Condition::Epsilon));
        nfa
    }
    /// `self+`: the end loops back to the start.
    pub fn one_or_more(mut self) -> NFA<Ac> {
        self.edges.push(NFAEdge(self.vertex_num - 1, 0, Condition::Epsilon));
        self
    }
    /// Marks the end vertex as accepting `state`.
    pub fn set_state(&mut self, state: Ac) {
        self.states.clear();
        self.states.insert(self.vertex_num - 1, state);
    }
    /// Joins `nfas` under a fresh start vertex, keeping every accepting
    /// vertex. Earlier automata win when two accept the same input.
    pub fn link(nfas: Vec<NFA<Ac>>) -> NFA<Ac> {
        let mut edges = Vec::new();
        let mut states = HashMap::new();
        let mut symbol_set = BTreeSet::new();
        let mut vertex_num = 1;
        for nfa in nfas {
            let offset = vertex_num;
            edges.push(NFAEdge(0, offset, Condition::Epsilon));
            edges.extend(
                nfa.edges
                    .into_iter()
                    .map(|NFAEdge(start, end, condition)| NFAEdge(start + offset, end + offset, condition)),
            );
            states.extend(nfa.states.into_iter().map(|(vertex, state)| (vertex + offset, state)));
            symbol_set.extend(nfa.symbol_set);
            vertex_num += nfa.vertex_num;
        }
        NFA { edges, vertex_num, states, symbol_set }
    }
    pub fn e_closure(&self, vertexs: &BTreeSet<u32>) -> BTreeSet<u32> {
        let mut result = vertexs.clone();
        let mut stack: Vec<u32> = vertexs.iter().copied().collect();
        while let Some(current_vertex) = stack.pop() {
            for NFAEdge(start, end, condition) in &self.edges {
                if *start == current_vertex && *condition == Condition::Epsilon && result.insert(*end) {
                    stack.push(*end);
                }
            }
        }
        result
    }
    pub fn move_set(&self, vertexs: &BTreeSet<u32>, symbol: char) -> BTreeSet<u32> {
        self.edges
            .iter()
            .filter(|NFAEdge(start, _, condition)| {
                vertexs.contains(start) && *condition == Condition::Symbol(symbol)
            })
            .map(|NFAEdge(_, end, _)| *end)
            .collect()
    }
    pub fn symbol_set(&self) -> &BTreeSet<char> {
        &self.symbol_set
    }
}

impl<Ac: Copy> NFA<Ac> {
    /// Token accepted by a set of vertices; the lowest accepting vertex wins.
    pub fn get_state(&self, vertexs: &BTreeSet<u32>) -> Option<Ac> {
        vertexs.iter().find_map(|v| self.states.get(v).copied())
    }
}

/// Concatenation. Accepting states are dropped; call `set_state` on the result.
impl<Ac> BitAnd for NFA<Ac> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        let tvn = self.vertex_num;
        let mut edges = self.edges;
        // self.end(tvn - 1) -> rhs.start(tvn)
        edges.push(NFAEdge(tvn - 1, tvn, Condition::Epsilon));
        edges.extend(
            rhs.edges
                .into_iter()
                .map(|NFAEdge(start, end, condition)| NFAEdge(start + tvn, end + tvn, condition)),
        );
        let mut symbol_set = self.symbol_set;
        symbol_set.extend(rhs.symbol_set);
        NFA { edges, vertex_num: tvn + rhs.vertex_num, states: HashMap::new(), symbol_set }
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::NFA;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Token {
        Num,
        Op,
    }

    #[test]
    fn test_e_closure() {
        // 0 -'a'-> 1 -> 2 -'b'-> 3, with 3 -> 2 looping
        let nfa: NFA<Token> = NFA::from_symbol('a') & NFA::from_symbol('b').one_or_more();
        assert_eq!(nfa.e_closure(&BTreeSet::from([1])), BTreeSet::from([1, 2]));
        assert_eq!(nfa.e_closure(&BTreeSet::from([3])), BTreeSet::from([2, 3]));
        assert_eq!(nfa.move_set(&BTreeSet::from([2, 3]), 'b'), BTreeSet::from([3]));
        assert!(nfa.move_set(&BTreeSet::from([2, 3]), 'a').is_empty());
    }

    #[test]
    fn test_link_keeps_states() {
        let mut num = NFA::from_symbol_range('0'..='9').one_or_more();
        num.set_state(Token::Num);
        let mut op = NFA::from_symbol('+');
        op.set_state(Token::Op);
        let nfa = NFA::link(vec![num, op]);
        let start = nfa.e_closure(&BTreeSet::from([0]));
        let after_digit = nfa.e_closure(&nfa.move_set(&start, '7'));
        let after_plus = nfa.e_closure(&nfa.move_set(&start, '+'));
        assert_eq!(nfa.get_state(&start), None);
        assert_eq!(nfa.get_state(&after_digit), Some(Token::Num));
        assert_eq!(nfa.get_state(&after_plus), Some(Token::Op));
        assert_eq!(nfa.symbol_set().len(), 11);
    }
}
