//! Insert a few points, look them up, then reset and start over.
use prquad::prelude::*;

fn main() -> Result<(), QuadTreeError> {
    let mut tree = QuadTree::<u64>::new(4)?;

    println!("insert (0, 0): {:?}", tree.insert(Coordinate::new(0, 0))?);
    println!("insert (0, 0): {:?}", tree.insert(Coordinate::new(0, 0))?);
    println!("insert (10, 10): {:?}", tree.insert(Coordinate::new(10, 10))?);

    println!("find (10, 10): {:?}", tree.find(Coordinate::new(10, 10))?);
    println!("find (5, 5): {:?}", tree.find(Coordinate::new(5, 5))?);
    println!(
        "{} points, {} nodes, depth {}, {} pages",
        tree.len(),
        tree.node_count(),
        tree.depth(),
        tree.page_count()
    );

    tree.reset();
    println!("after reset, find (10, 10): {:?}", tree.find(Coordinate::new(10, 10))?);

    // A bounded domain rejects points outside it.
    let config = QuadTreeConfig::<u64>::new(16)
        .with_domain(Bounds::new(Coordinate::new(100, 100), Coordinate::new(199, 199)));
    let mut bounded = QuadTree::with_config(config)?;
    println!("insert (150, 150): {:?}", bounded.insert(Coordinate::new(150, 150)));
    println!("insert (5, 5): {:?}", bounded.insert(Coordinate::new(5, 5)));

    match tree.sanity_check() {
        Ok(()) => println!("tree is consistent"),
        Err(violation) => println!("tree is broken: {violation}"),
    }
    Ok(())
}
