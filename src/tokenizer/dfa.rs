use std::collections::{BTreeSet, HashMap};

use super::nfa::NFA;
use super::token::{Token, TokenType};
use crate::error::{EvalError, Result};

const START: u32 = 0;

#[derive(Debug)]
pub struct DFA<AcceptEnum> {
    transitions: HashMap<(u32, char), u32>,
    states: HashMap<u32, AcceptEnum>,
}

impl<Ac: Copy> DFA<Ac> {
    /// Subset construction: every DFA vertex stands for the e-closure of a
    /// set of NFA vertices reachable on the same input.
    pub fn subset_construct(nfa: &NFA<Ac>) -> Self {
        let mut transitions = HashMap::new();
        let mut states = HashMap::new();

        let init = nfa.e_closure(&BTreeSet::from([0]));
        if let Some(state) = nfa.get_state(&init) {
            states.insert(START, state);
        }
        let mut nfa_vertex_sets = vec![init.clone()];
        let mut table = HashMap::new();
        table.insert(init, START);

        let mut unmarked_pos = 0;
        while unmarked_pos < nfa_vertex_sets.len() {
            for &symbol in nfa.symbol_set() {
                let move_set = nfa.move_set(&nfa_vertex_sets[unmarked_pos], symbol);
                let nfa_vertex_set = nfa.e_closure(&move_set);
                if nfa_vertex_set.is_empty() {
                    continue;
                }
                let end = match table.get(&nfa_vertex_set) {
                    Some(&dfa_vertex) => dfa_vertex,
                    None => {
                        let dfa_vertex = nfa_vertex_sets.len() as u32;
                        if let Some(state) = nfa.get_state(&nfa_vertex_set) {
                            states.insert(dfa_vertex, state);
                        }
                        table.insert(nfa_vertex_set.clone(), dfa_vertex);
                        nfa_vertex_sets.push(nfa_vertex_set);
                        dfa_vertex
                    }
                };
                transitions.insert((unmarked_pos as u32, symbol), end);
            }
            unmarked_pos += 1;
        }
        DFA { transitions, states }
    }
}

impl<Ac: TokenType> DFA<Ac> {
    /// Longest-match scan. When no transition applies the symbols read so far
    /// must form an accepted token, which is emitted before scanning resumes
    /// from the start vertex.
    pub fn tokenize(&self, origin: &str) -> Result<Vec<Token<Ac>>> {
        let mut result = Vec::new();
        let mut current_vertex = START;
        let mut val = String::new();
        let mut token_pos = 0;
        let chars = origin.chars().collect::<Vec<_>>();
        let mut current_pos = 0;
        while current_pos < chars.len() {
            let symbol = chars[current_pos];
            if let Some(&next) = self.transitions.get(&(current_vertex, symbol)) {
                if val.is_empty() {
                    token_pos = current_pos;
                }
                val.push(symbol);
                current_vertex = next;
                current_pos += 1;
                continue;
            }
            match self.states.get(&current_vertex) {
                Some(ac) if current_vertex != START => {
                    if !ac.is_blank() {
                        result.push(Token::new(val.clone(), *ac, token_pos));
                    }
                    current_vertex = START;
                    val.clear();
                }
                _ => return Err(EvalError::UnknownCharacter { ch: symbol, pos: current_pos }),
            }
        }
        if current_vertex != START {
            match self.states.get(&current_vertex) {
                Some(ac) => {
                    if !ac.is_blank() {
                        result.push(Token::new(val, *ac, token_pos));
                    }
                }
                None => {
                    let pos = chars.len() - 1;
                    return Err(EvalError::UnknownCharacter { ch: chars[pos], pos });
                }
            }
        }
        Ok(result)
    }
}
