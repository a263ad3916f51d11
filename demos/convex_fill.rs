//! Generate a random convex polygon, fill it and print it as Braille.
//!
//! ```text
//! cargo run --example convex_fill -- [count] [seed]
//! ```
//!
//! Set `RUST_LOG=debug` to see the generator's retries.
use convex_raster::data::BraillePrinter;
use convex_raster::{GenerationContext, MIN_VERTICES};
use rand::Rng;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
  env_logger::init();

  let mut args = std::env::args().skip(1);
  let count = match args.next() {
    Some(arg) => arg.parse::<usize>()?,
    None => 12,
  };
  let seed = match args.next() {
    Some(arg) => arg.parse::<u64>()?,
    None => rand::thread_rng().gen(),
  };

  let mut ctx = GenerationContext::default();
  if let Err(err) = ctx.regenerate(count, seed) {
    eprintln!("{} (counts start at {})", err, MIN_VERTICES);
    std::process::exit(1);
  }
  let fill = ctx.rasterize();
  let Some(polygon) = ctx.polygon() else {
    return Ok(());
  };

  println!("seed: {}", seed);
  println!("vertices:");
  for pt in polygon.iter() {
    println!("  ({:.2}, {:.2})", pt.x_coord(), pt.y_coord());
  }
  println!("pixels: {}", fill.len());
  println!(
    "{}",
    BraillePrinter::new(polygon).with_fill(&fill).with_scale(8)
  );
  Ok(())
}
