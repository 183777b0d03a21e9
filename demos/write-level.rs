//! This executable writes a small level.dat style file to the path given as
//! the first argument, or `level.dat` in the current directory. The NBT is
//! compressed with GZip, as the game expects.
//!
//! Set `RUST_LOG=nbtag=trace` to see the encoder walk the tree.

use env_logger::Env;
use flate2::{write::GzEncoder, Compression};
use log::info;
use nbtag::{error::Result, EncOpts, List, NamedTag, Value};

fn level() -> Result<NamedTag> {
    let data = NamedTag::compound(
        "Data",
        vec![
            NamedTag::string("LevelName", "New World")?,
            NamedTag::int("DataVersion", 2586)?,
            NamedTag::long("RandomSeed", -4_172_144_997_902_289_642)?,
            NamedTag::int("SpawnX", 0)?,
            NamedTag::int("SpawnY", 100)?,
            NamedTag::int("SpawnZ", 0)?,
            NamedTag::byte("hardcore", 0)?,
            NamedTag::new("ServerBrands", List::from(vec!["vanilla"]))?,
            NamedTag::compound(
                "Player",
                vec![
                    NamedTag::float("Health", 20.0)?,
                    NamedTag::list(
                        "Pos",
                        vec![Value::Double(0.5), Value::Double(100.0), Value::Double(0.5)],
                    )?,
                    NamedTag::new("Inventory", List::new())?,
                ],
            )?,
        ],
    )?;

    NamedTag::compound("", vec![data])
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args_os()
        .nth(1)
        .unwrap_or_else(|| "level.dat".into());

    let level = level()?;
    print!("{}", level);

    let outfile = std::fs::File::create(&path)?;
    let mut encoder = GzEncoder::new(outfile, Compression::default());
    nbtag::to_writer_with_opts(&mut encoder, &level, EncOpts::java())?;
    encoder.finish()?;

    info!("wrote {}", path.to_string_lossy());
    Ok(())
}
