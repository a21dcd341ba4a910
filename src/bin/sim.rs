use broadside::{init_logging, sim::simulate};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;

    let report = simulate(seed, games)?;
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
