//! Print which sample states fit inside which, with centroids aligned.
//!
//! Usage:
//!   cargo run -p statefit --example fit_matrix
//!   cargo run -p statefit --example fit_matrix -- midpoints

use statefit::api::{area_ratio, fit_pair, sample_regions, FitCfg, Placement};

fn main() {
    let cfg = match std::env::args().nth(1).as_deref() {
        Some("midpoints") => FitCfg::with_midpoints(),
        _ => FitCfg::default(),
    };
    let regions = sample_regions();
    print!("    ");
    for b in &regions {
        print!(" {:>3}", b.abbreviation);
    }
    println!();
    for a in &regions {
        print!("{:>3} ", a.abbreviation);
        for b in &regions {
            let mark = if a.name == b.name {
                "-"
            } else if fit_pair(&a.geometry, &b.geometry, Placement::CentroidAligned, cfg).fits {
                "Y"
            } else {
                "."
            };
            print!(" {mark:>3}");
        }
        println!();
    }
    let (ri, me) = (&regions[0], &regions[regions.len() - 1]);
    println!(
        "\n{} / {} area ratio: {:.3}",
        ri.name,
        me.name,
        area_ratio(&ri.geometry, &me.geometry)
    );
}
