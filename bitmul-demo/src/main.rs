//! Multiplies two random boolean matrices sequentially and in parallel, checks that both results
//! agree, and reports how long each strategy took.

mod error;

use bitmul::{BitMatrix, Multiply, ParallelMultiplier, SequentialMultiplier, MAX_SIZE};
use clap::Parser;
use error::Error;
use rand::{rngs::SmallRng, SeedableRng};
use rayon::ThreadPoolBuilder;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Matrix size; prompts on stdin when omitted
    #[arg(long)]
    size: Option<usize>,

    /// Worker threads for the parallel run (defaults to the available parallelism)
    #[arg(long, short)]
    threads: Option<NonZeroUsize>,

    /// Seed for generating reproducible matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Print the matrices when the size is below this value
    #[arg(long, default_value_t = 10)]
    print_below: usize,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let size = match cli.size {
        Some(size) => size,
        None => read_size()?,
    };
    let threads = match cli.threads {
        Some(n) => n.get(),
        None => std::thread::available_parallelism()?.get(),
    };
    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    info!(size, threads, seed = ?cli.seed, "generating matrices");

    let a = BitMatrix::random(&mut rng, size)?;
    let b = BitMatrix::random(&mut rng, size)?;

    let (seq, seq_elapsed) = timed(|| SequentialMultiplier.multiply(&a, &b))?;
    debug!(elapsed = ?seq_elapsed, "sequential multiplication done");

    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("bitmul-worker-{}", i))
        .build()?;
    let (par, par_elapsed) = timed(|| ParallelMultiplier::new(&pool).multiply(&a, &b))?;
    drop(pool);
    debug!(elapsed = ?par_elapsed, threads, "parallel multiplication done");

    if seq != par {
        return Err(Error::ResultsDiffer {
            size,
            differing: differing_cells(&seq, &par),
        });
    }

    if size < cli.print_below {
        println!("Matrix 1:\n{}--------------", a);
        println!("Matrix 2:\n{}--------------", b);
        println!("Product:\n{}--------------", par);
    }
    println!(
        "Elapsed time when executing sequentially: {} ms",
        seq_elapsed.as_millis()
    );
    println!(
        "Elapsed time when executing in parallel: {} ms",
        par_elapsed.as_millis()
    );

    Ok(())
}

/// Prompts for a matrix size and reads one integer from stdin
fn read_size() -> Result<usize, Error> {
    print!("Please enter a matrix size (in range [1..{}]): ", MAX_SIZE);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse()?)
}

fn timed<T>(f: impl FnOnce() -> bitmul::Result<T>) -> Result<(T, Duration), Error> {
    let start = Instant::now();
    let res = f()?;
    Ok((res, start.elapsed()))
}

fn differing_cells(x: &BitMatrix, y: &BitMatrix) -> usize {
    x.rows()
        .zip(y.rows())
        .map(|(r1, r2)| r1.iter().zip(r2.iter()).filter(|(b1, b2)| b1 != b2).count())
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cli_parses() {
        let cli = Cli::parse_from(["bitmul-demo", "--size", "5", "-t", "3", "--seed", "9"]);
        assert_eq!(cli.size, Some(5));
        assert_eq!(cli.threads.map(NonZeroUsize::get), Some(3));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.print_below, 10);

        assert!(Cli::try_parse_from(["bitmul-demo", "--threads", "0"]).is_err());
    }

    #[test]
    fn run_with_seed() {
        let cli = Cli::parse_from(["bitmul-demo", "--size", "12", "-t", "2", "--seed", "1"]);
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn run_rejects_invalid_size() {
        let cli = Cli::parse_from(["bitmul-demo", "--size", "0", "-t", "2"]);
        assert!(matches!(
            run(&cli),
            Err(Error::Matrix(bitmul::Error::InvalidSize { size: 0, .. }))
        ));
    }

    #[test]
    fn counts_differing_cells() {
        let x = BitMatrix::create(3).unwrap();
        let mut y = x.clone();
        assert_eq!(differing_cells(&x, &y), 0);
        y.set(0, 1, true).unwrap();
        y.set(2, 2, true).unwrap();
        assert_eq!(differing_cells(&x, &y), 2);
    }
}
