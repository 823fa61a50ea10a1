use super::*;

/// Right-nested chain shaped like `Seq(s, Seq(s, ...))`.
enum Chain {
    Link(Box<Chain>),
    End,
}

fn build_chain(depth: usize) -> Chain {
    let mut chain = Chain::End;
    for _ in 0..depth {
        chain = Chain::Link(Box::new(chain));
    }
    chain
}

fn chain_depth(chain: &Chain) -> usize {
    ensure_sufficient_stack(|| match chain {
        Chain::Link(rest) => chain_depth(rest) + 1,
        Chain::End => 0,
    })
}

fn drop_chain(chain: Chain) {
    let mut current = chain;
    while let Chain::Link(rest) = current {
        current = *rest;
    }
}

#[test]
fn shallow_walk() {
    let chain = build_chain(10);
    assert_eq!(chain_depth(&chain), 10);
    drop_chain(chain);
}

#[test]
fn deep_walk_grows_stack() {
    // Far past what an 8MB stack holds without growth.
    let chain = build_chain(200_000);
    assert_eq!(chain_depth(&chain), 200_000);
    drop_chain(chain);
}

#[test]
fn passes_result_through() {
    let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(55));
    assert_eq!(result, Ok(55));
}
