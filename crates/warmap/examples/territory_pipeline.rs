//! Run the whole map pipeline on a small grid of square territories.
//!
//! Usage:
//!   cargo run -p warmap --example territory_pipeline -- 4
//!
//! Builds an n×n grid (default 3), checks every boundary, places labels,
//! derives neighbors from shared edges, and scores one bonus per row.

use warmap::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);
    if let Err(e) = run(n.max(1)) {
        eprintln!("territory_pipeline: {e}");
        std::process::exit(1);
    }
}

fn run(n: usize) -> Result<()> {
    let size = 10i64;
    let mut territories = Vec::with_capacity(n * n);
    for id in 0..n * n {
        let (x, y) = ((id % n) as i64 * size, (id / n) as i64 * size);
        let poly = Polygon::from_points(vec![
            Point::new(x, y),
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ])?;
        if !poly.is_valid() {
            eprintln!("t{id}: boundary self-intersects");
        }
        territories.push(Territory::new(id, format!("t{id}"), poly));
    }

    CenterCalculator::new(LabelCfg::default()).create_centerpoints(&mut territories)?;
    let graph = adjacency_from_shared_segments(&territories);
    println!("territories={} edges={}", graph.vertex_count(), graph.edge_count());

    let mut bonuses: Vec<Bonus> = (0..n)
        .map(|row| Bonus::new(format!("row{row}"), (row * n..(row + 1) * n).collect()))
        .collect();
    let mut supers = vec![SuperBonus::new("all", (0..n).collect())];
    ArmyCalculator::new(territories.len(), &graph, ArmyCfg::default())?
        .calculate_armies(&mut bonuses, &mut supers)?;

    for b in &bonuses {
        println!("{}: armies={}", b.name, b.armies);
    }
    println!("{}: armies={}", supers[0].name, supers[0].armies);
    if let Some(center) = territories[0].center {
        println!("t0 label at ({:.1}, {:.1})", center.x, center.y);
    }
    Ok(())
}
