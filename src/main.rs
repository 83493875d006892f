use auto_enums::auto_enum;
use clap::{Parser, ValueEnum};
use eight_puzzle::{
    random_board, shortest_solution_len, Board, Solution, Strategy, VisitPolicy, DEFAULT_MAX_DEPTH,
};
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// A* on the misplaced-tile count
    Astar,
    /// Depth-limited depth-first search
    Ldfs,
}

#[derive(Parser)]
#[command(name = "eight-puzzle")]
#[command(about = "Solves the 8-puzzle with A* or limited depth-first search", long_about = None)]
struct Args {
    /// Search algorithm
    #[arg(short, long, value_enum, default_value = "astar")]
    algorithm: Algorithm,

    /// Depth bound for limited depth-first search
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Mark boards visited when pushed instead of when expanded (ldfs only)
    #[arg(long)]
    mark_on_push: bool,

    /// Board to solve, e.g. "1 2 5 / 3 4 0 / 6 7 8"; random when omitted
    #[arg(short, long)]
    board: Option<Board>,

    /// Where the blank is expected to be in --board, as ROW,COL
    #[arg(long, value_parser = parse_blank, requires = "board")]
    blank: Option<(usize, usize)>,

    /// Number of random puzzles to solve
    #[arg(short = 'n', long, default_value_t = 1, conflicts_with = "board")]
    count: usize,

    /// Seed for random puzzles
    #[arg(long, conflicts_with = "board")]
    seed: Option<u64>,

    /// Replay the moves and compare their count with a breadth-first search
    #[arg(long)]
    verify: bool,
}

fn parse_blank(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let parse = |v: &str| v.trim().parse::<usize>().map_err(|e| e.to_string());
    Ok((parse(row)?, parse(col)?))
}

#[auto_enum(Iterator)]
fn starts(board: Option<Board>, count: usize, seed: Option<u64>) -> impl Iterator<Item = Board> {
    match board {
        Some(board) => std::iter::once(board),
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            std::iter::repeat_with(move || random_board(&mut rng)).take(count)
        }
    }
}

fn verify(start: &Board, goal: &Board, solution: &Solution, strategy: Strategy) -> Result<(), String> {
    if start.replay(&solution.moves).as_ref() != Some(goal) {
        return Err("moves do not lead to the goal".to_owned());
    }

    let shortest = shortest_solution_len(start, goal)
        .ok_or_else(|| "breadth-first search found no solution".to_owned())?;
    println!("Shortest possible: {}", shortest);

    if strategy == Strategy::AStar && solution.moves.len() != shortest {
        return Err(format!(
            "A* used {} moves but {} suffice",
            solution.moves.len(),
            shortest
        ));
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let (Some(board), Some(blank)) = (&args.board, args.blank) {
        if let Err(e) = board.check_blank(blank) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let strategy = match args.algorithm {
        Algorithm::Astar => Strategy::AStar,
        Algorithm::Ldfs => Strategy::LimitedDfs {
            max_depth: args.max_depth,
            policy: if args.mark_on_push {
                VisitPolicy::OnPush
            } else {
                VisitPolicy::OnExpand
            },
        },
    };
    let goal = Board::goal();

    let mut failed = false;
    for start in starts(args.board, args.count, args.seed) {
        println!("Base state:");
        println!("{}", start);
        println!();

        info!("solving {:?} with {:?}", start.key(), strategy);
        match strategy.search(&start, &goal) {
            Ok(solution) => {
                println!("{}", solution.stats);
                println!("Sequence of moves:");
                println!("{}", solution.moves.iter().join(" -> "));
                println!("Number of moves: {}", solution.moves.len());

                if args.verify {
                    if let Err(e) = verify(&start, &goal, &solution, strategy) {
                        eprintln!("Verification failed: {}", e);
                        failed = true;
                    }
                }
            }
            Err(e) => {
                println!("{}", e.stats);
                println!("There is no solution");
            }
        }

        println!("----");
    }

    if failed {
        std::process::exit(1);
    }
}
