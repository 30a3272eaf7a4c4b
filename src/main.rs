use clap::Parser;
use linear::prelude::*;
use log::{info, warn};

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    /// Number of values pushed onto the stack
    #[clap(short = 'n', long, default_value_t = 100)]
    count: i32,
    /// Number of pops attempted
    #[clap(short = 'p', long, default_value_t = 102)]
    pops: usize,
    /// Value the stack is seeded with before pushing
    #[clap(long, default_value_t = -1, allow_hyphen_values = true)]
    seed_value: i32,
    /// Growth policy json used by the stack
    #[clap(long)]
    policy: Option<std::path::PathBuf>,
}

fn load_policy(opts: &Opts) -> Result<GrowthPolicy> {
    match &opts.policy {
        Some(path) => {
            info!("loading policy from {}", path.display());
            GrowthPolicy::from_file(path)
        }
        None => Ok(GrowthPolicy::default()),
    }
}

fn run(opts: &Opts) -> Result<()> {
    let policy = load_policy(opts)?;
    info!("policy={:?}", policy);

    let v = vector![10, 20, 30];
    for index in 0..v.size() {
        println!("Vector element at index {} is {}", index, v.get(index)?);
    }

    let mut stack = Stack::with_policy(policy)?;
    stack.push(opts.seed_value);
    for num in 0..opts.count {
        stack.push(num);
    }
    for _ in 0..opts.pops {
        match stack.pop() {
            Ok(top) => println!("Stack element at top is {}", top),
            Err(e) => {
                println!("{}", e);
                break;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# opts={:?}", opts);
    if let Err(e) = run(&opts) {
        warn!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
