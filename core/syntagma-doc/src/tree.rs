use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use syntagma_protocol::{Result, SentenceId, SyntagmaError, TokenId};

use crate::token::{Head, Token};

/// Token id -> head id for every non-root token of a sentence, with the
/// reverse (head -> dependants) index precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    sentence: SentenceId,
    len: usize,
    heads: BTreeMap<TokenId, TokenId>,
    dependants: BTreeMap<TokenId, Vec<TokenId>>,
}

impl DependencyTree {
    /// Builds the tree from resolved tokens and rejects cycles.
    pub fn build(sentence: SentenceId, tokens: &[Token]) -> Result<Self> {
        let mut heads = BTreeMap::new();
        for token in tokens {
            match token.head {
                Head::Root => {}
                Head::Resolved(head) => {
                    heads.insert(token.id, head);
                }
                Head::Unresolved(_) => return Err(SyntagmaError::TreeNotBuilt { sentence }),
            }
        }

        let tree = Self::from_heads(sentence, tokens.len(), heads);
        tree.check_acyclic()?;
        Ok(tree)
    }

    /// Unchecked constructor: the mapping is taken as is, cycles included.
    pub fn from_heads(sentence: SentenceId, len: usize, heads: BTreeMap<TokenId, TokenId>) -> Self {
        let mut dependants: BTreeMap<TokenId, Vec<TokenId>> = BTreeMap::new();
        // Keys come out ascending, so every dependant list is sorted.
        for (&dependant, &head) in &heads {
            dependants.entry(head).or_default().push(dependant);
        }
        Self {
            sentence,
            len,
            heads,
            dependants,
        }
    }

    pub fn sentence(&self) -> SentenceId {
        self.sentence
    }

    pub fn head(&self, token: TokenId) -> Option<TokenId> {
        self.heads.get(&token).copied()
    }

    /// (dependant, head) pairs in ascending dependant order.
    pub fn edges(&self) -> impl Iterator<Item = (TokenId, TokenId)> + '_ {
        self.heads.iter().map(|(&dependant, &head)| (dependant, head))
    }

    pub fn dependants(&self, token: TokenId) -> &[TokenId] {
        self.dependants.get(&token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `token` and everything below it.
    pub fn subtree(&self, token: TokenId) -> Result<BTreeSet<TokenId>> {
        let mut members = BTreeSet::new();
        let mut stack = vec![token];

        // Each token has a single head, so meeting a member twice means a cycle.
        while let Some(current) = stack.pop() {
            if !members.insert(current) {
                return Err(SyntagmaError::CyclicDependency {
                    sentence: self.sentence,
                    token: current,
                });
            }
            stack.extend_from_slice(self.dependants(current));
        }

        Ok(members)
    }

    /// Number of head links between `token` and its root.
    pub fn depth(&self, token: TokenId) -> Result<usize> {
        let mut depth = 0;
        let mut current = token;
        while let Some(head) = self.head(current) {
            depth += 1;
            if depth > self.len {
                return Err(SyntagmaError::CyclicDependency {
                    sentence: self.sentence,
                    token,
                });
            }
            current = head;
        }
        Ok(depth)
    }

    /// Head -> dependant graph over every token of the sentence.
    pub fn to_graph(&self) -> DiGraphMap<TokenId, ()> {
        let mut graph = DiGraphMap::with_capacity(self.len, self.heads.len());
        for id in 1..=self.len as u32 {
            graph.add_node(TokenId(id));
        }
        for (dependant, head) in self.edges() {
            graph.add_edge(head, dependant, ());
        }
        graph
    }

    fn check_acyclic(&self) -> Result<()> {
        toposort(&self.to_graph(), None)
            .map(|_| ())
            .map_err(|cycle| SyntagmaError::CyclicDependency {
                sentence: self.sentence,
                token: cycle.node_id(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(pairs: &[(u32, u32)], len: usize) -> DependencyTree {
        let heads = pairs.iter().map(|&(d, h)| (TokenId(d), TokenId(h))).collect();
        DependencyTree::from_heads(SentenceId(0), len, heads)
    }

    #[test]
    fn dependants_are_indexed_in_order() {
        // 2 is the root; 1, 4 under 2; 3 under 4
        let tree = tree(&[(1, 2), (3, 4), (4, 2)], 4);
        assert_eq!(tree.dependants(TokenId(2)), &[TokenId(1), TokenId(4)]);
        assert_eq!(tree.dependants(TokenId(4)), &[TokenId(3)]);
        assert!(tree.dependants(TokenId(3)).is_empty());
        assert_eq!(tree.head(TokenId(3)), Some(TokenId(4)));
        assert_eq!(tree.head(TokenId(2)), None);
    }

    #[test]
    fn subtree_includes_the_token_itself() {
        let tree = tree(&[(1, 2), (3, 4), (4, 2)], 4);
        let ids: Vec<u32> = tree.subtree(TokenId(4)).unwrap().into_iter().map(u32::from).collect();
        assert_eq!(ids, vec![3, 4]);
        assert_eq!(tree.subtree(TokenId(2)).unwrap().len(), 4);
        assert_eq!(tree.depth(TokenId(3)).unwrap(), 2);
        assert_eq!(tree.depth(TokenId(2)).unwrap(), 0);
    }

    #[test]
    fn subtree_stops_on_cycles() {
        // 1 -> 2 -> 3 -> 1
        let tree = tree(&[(1, 2), (2, 3), (3, 1)], 3);
        assert!(matches!(
            tree.subtree(TokenId(1)),
            Err(SyntagmaError::CyclicDependency { .. })
        ));
        assert!(matches!(
            tree.depth(TokenId(2)),
            Err(SyntagmaError::CyclicDependency { .. })
        ));
        assert!(tree.check_acyclic().is_err());
    }

    #[test]
    fn self_loops_are_cycles() {
        let tree = tree(&[(1, 1)], 2);
        assert_eq!(
            tree.check_acyclic(),
            Err(SyntagmaError::CyclicDependency {
                sentence: SentenceId(0),
                token: TokenId(1),
            })
        );
    }

    #[test]
    fn graph_has_one_edge_per_non_root_token() {
        let tree = tree(&[(1, 2), (3, 4), (4, 2)], 4);
        let graph = tree.to_graph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.contains_edge(TokenId(4), TokenId(3)));
    }
}
