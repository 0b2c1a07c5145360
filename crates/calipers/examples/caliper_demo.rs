//! Print the hull and every candidate rectangle for a point list.
//!
//! Usage:
//!   cargo run -p calipers --example caliper_demo
//!   cargo run -p calipers --example caliper_demo -- "(0,0), (4,0), (4,3), (0,3)"
//!
//! Lists candidates as `rectangle i, area: ~A` and marks the minimum,
//! the way an interactive viewer would label them.

use calipers::prelude::*;

fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "(60,10), (60,20), (70,10), (60,20), (10,70), (50,30)".to_string());
    let points = match parse_points(&text) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("usage: caliper_demo \"(x,y), (x,y), ...\": {e}");
            return;
        }
    };
    match sweep(&points) {
        Ok(s) => {
            let hull: Vec<String> = s.hull.vertices().iter().map(|p| p.to_string()).collect();
            println!("hull: {}", hull.join(" "));
            for (i, r) in s.rectangles.iter().enumerate() {
                let mark = if i == s.min_index { "  <- minimum" } else { "" };
                println!("rectangle {}, {}{mark}", i + 1, r.area_label());
            }
            println!("minimum area (exact): {}", s.minimum().area());
        }
        Err(e) => eprintln!("{e} ({:?})", e.kind()),
    }
}
