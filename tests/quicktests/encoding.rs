use bintree::{codec, DecodeError, Tree};

use crate::{Chain, Negative};

quickcheck::quickcheck! {
    fn chain_round_trip(chain: Chain) -> bool {
        let tree = chain.0;
        codec::deserialize(&codec::serialize(&tree)) == Ok(tree)
    }
}

quickcheck::quickcheck! {
    fn negative_round_trip(tree: Negative) -> bool {
        let tree = tree.0;
        tree.to_string().parse::<Tree<i64>>() == Ok(tree)
    }
}

quickcheck::quickcheck! {
    /// A serialized tree has one token per node plus one per absent child.
    fn token_count(chain: Chain) -> bool {
        let tree = chain.0;
        tree.serialize().split(',').count() == 2 * tree.len() + 1
    }
}

quickcheck::quickcheck! {
    /// Dropping the last token of a serialized tree always leaves it
    /// truncated.
    fn truncation_is_detected(chain: Chain) -> bool {
        let encoded = chain.0.serialize();
        let truncated = match encoded.rfind(',') {
            Some(idx) => &encoded[..idx],
            None => return true,
        };

        matches!(
            codec::deserialize::<i16>(truncated),
            Err(DecodeError::UnexpectedEnd { .. })
        )
    }
}
