use crate::{Chain, Negative};

quickcheck::quickcheck! {
    /// Every node of a chain is on the only root-to-leaf path.
    fn chain_depths_equal_len(chain: Chain) -> bool {
        let tree = chain.0;
        tree.min_depth() == tree.len() && tree.max_depth() == tree.len()
    }
}

quickcheck::quickcheck! {
    /// Consecutive nodes of a chain are parent and child, never cousins.
    fn chain_has_no_cousins(chain: Chain) -> bool {
        let tree = chain.0;
        let nodes = tree.pre_order().collect::<Vec<_>>();

        nodes
            .iter()
            .all(|a| nodes.iter().all(|b| !tree.are_cousins(a, b)))
    }
}

quickcheck::quickcheck! {
    /// In a chain the ancestor of any two nodes is the shallower one.
    fn chain_ancestor_is_shallower_node(chain: Chain) -> bool {
        let tree = chain.0;
        let nodes = tree.pre_order().collect::<Vec<_>>();

        nodes.iter().enumerate().all(|(i, a)| {
            nodes[i..].iter().all(|b| {
                tree.lowest_common_ancestor(a, b)
                    .map_or(false, |got| std::ptr::eq(got, *a))
            })
        })
    }
}

quickcheck::quickcheck! {
    /// With nothing to gain from extending a path, the best path is the
    /// single largest value.
    fn all_negative_max_sum_is_largest_value(tree: Negative) -> bool {
        let tree = tree.0;
        let largest = tree.pre_order().map(|n| *n.value()).max();

        tree.max_sum() == Ok(largest.unwrap_or(0))
    }
}
