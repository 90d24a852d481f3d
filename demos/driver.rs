//! Builds a tree from random keys, unbalances it, rebalances it, and prints every step.
//!
//! Usage: `cargo run --example driver [COUNT] [SEED]`

use bst::Tree;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::error::Error;
use std::fmt::Display;

const DEFAULT_COUNT: usize = 15;
const UNBALANCING_KEYS: [u32; 5] = [101, 150, 120, 170, 200];

fn print_traversals<T>(tree: &Tree<T>) where T: Display {
    fn line<T, W>(name: &str, walk: W) where T: Display, W: FnOnce(&mut dyn FnMut(&bst::Node<T>)) {
        let mut keys = vec![];
        walk(&mut |node: &bst::Node<T>| keys.push(node.key().to_string()));
        println!("{}: {}", name, keys.join(" "));
    }

    line::<T, _>("Level Order", |f| tree.level_order(f));
    line::<T, _>("In Order", |f| tree.in_order(f));
    line::<T, _>("Pre Order", |f| tree.pre_order(f));
    line::<T, _>("Post Order", |f| tree.post_order(f));
}

fn print_tree<T>(title: &str, tree: &Tree<T>) where T: Display {
    println!("\n{}:", title);
    print!("{}", tree.pretty());
    println!("Balanced: {}", tree.is_balanced());
}

fn main() -> Result<(), Box<dyn Error>> {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)?;

    let mut args = env::args().skip(1);
    let count = match args.next() {
        Some(arg) => arg.parse::<usize>().map_err(|e| format!("invalid key count {:?}: {}", arg, e))?,
        None => DEFAULT_COUNT,
    };
    let mut rng = match args.next() {
        Some(arg) => StdRng::seed_from_u64(
            arg.parse::<u64>().map_err(|e| format!("invalid seed {:?}: {}", arg, e))?),
        None => StdRng::from_entropy(),
    };

    let keys: Vec<u32> = (0..count).map(|_| rng.gen_range(0..100)).collect();
    info!("generated keys {:?}", keys);

    let mut tree = Tree::build(keys);
    print_tree("Initial Tree", &tree);
    print_traversals(&tree);

    for key in UNBALANCING_KEYS { tree.insert(key); }
    print_tree("After Unbalancing", &tree);

    tree.rebalance();
    print_tree("After Rebalancing", &tree);
    print_traversals(&tree);

    Ok(())
}
