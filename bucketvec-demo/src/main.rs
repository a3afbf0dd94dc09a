use std::io;

use anyhow::Result;
use bucketvec_demo::{run, Section};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Number of slots in each bucket
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BucketCapacity {
    #[value(name = "4")]
    Four,
    #[value(name = "10")]
    Ten,
    #[value(name = "16")]
    Sixteen,
}

#[derive(Parser)]
#[command(name = "bucketvec-demo")]
#[command(about = "Walk through construction, modification, splitting and iteration of a bucket vector")]
struct Args {
    /// Slots per bucket
    #[arg(long, value_enum, default_value_t = BucketCapacity::Ten)]
    bucket_capacity: BucketCapacity,

    /// Part of the walkthrough to run
    #[arg(long, value_enum, default_value_t = Section::All)]
    section: Section,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.bucket_capacity {
        BucketCapacity::Four => run::<4, _>(&mut out, args.section),
        BucketCapacity::Ten => run::<10, _>(&mut out, args.section),
        BucketCapacity::Sixteen => run::<16, _>(&mut out, args.section),
    }
}
