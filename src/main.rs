use clap::Parser;
use dice_expression::Expression;
use log::debug;
use rand::{rngs::StdRng, SeedableRng};

/// Roll dice notation like `3d6 + 2d4 - 5`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The dice expression to roll
    expression: String,

    /// How many times to roll the expression
    #[arg(short = 'n', long, default_value_t = 1)]
    times: u32,

    /// Seed the rng to get the same rolls every time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the lowest and highest possible totals instead of rolling
    #[arg(short, long)]
    bounds: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    debug!("{args:?}");

    let expression = match Expression::parse(&args.expression) {
        Ok(expression) => expression,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if args.bounds {
        println!("min: {}, max: {}", expression.min(), expression.max());
        return;
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..args.times {
        let rolled = expression.roll_with(&mut rng);
        println!("{rolled} = {}", rolled.total());
    }
}
