//! Tree walk example.
//!
//! Builds a small org chart and walks it both depth-first and
//! breadth-first, then enumerates review pairs with the lazy
//! combination generator.

use anyhow::Result;
use arbor::prelude::*;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let org = Node::with_children(
        "CEO",
        vec![
            Node::with_children("VP Eng", vec![Node::leaf("Backend"), Node::leaf("Frontend")]),
            Node::with_children("VP Sales", vec![Node::leaf("EMEA")]),
        ],
    );

    let reporting_chain: Vec<&&str> = depth_first(Some(&org))?.collect();
    println!("pre-order:   {reporting_chain:?}");

    let by_level: Vec<&&str> = breadth_first(Some(&org))?.collect();
    println!("level-order: {by_level:?}");

    // Every pair of teams that could review each other's work.
    let teams = ["Backend", "Frontend", "EMEA", "Platform"];
    for pair in combinations(&teams, 2)? {
        println!("review pair: {pair:?}");
    }

    // Lazy sequences only compute what is pulled.
    let fib: Vec<u64> = fibonacci(12)?.collect();
    println!("fibonacci:   {fib:?}");

    Ok(())
}
