//! # Traffic Light
//!
//! A three-phase traffic light (green `q0`, amber `q1`, red `q2`, with the
//! French-labeled propositions `orange` and `rouge`). Two checks:
//!
//! 1. The safety invariant `¬(rouge ∧ orange)`: the light is never red and
//!    amber at the same time. This holds.
//! 2. The bare proposition `orange`, demanded as an invariant ("the light
//!    is amber in every reachable state"). This fails on purpose and shows
//!    what a counterexample trace looks like.
//!
//! Run with: `cargo run --example traffic_light`
//!
//! Pass `--dot` to print the system in Graphviz format instead.

use clap::Parser;

use invariant_rs::counterexample::Counterexample;
use invariant_rs::expr::Expr;
use invariant_rs::transition::TransitionSystem;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Print the system in DOT format and exit.
    #[clap(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();

    let mut ts = TransitionSystem::new("Feu_Tricolore");
    let q0 = ts.create_state("q0", true);
    let q1 = ts.create_state("q1", false);
    let q2 = ts.create_state("q2", false);
    ts.add_proposition(q1, "orange");
    ts.add_proposition(q2, "rouge");

    ts.add_transition(q0, q1);
    ts.add_transition(q1, q0);
    ts.add_transition(q0, q0);
    ts.add_transition(q1, q1);
    ts.add_transition(q0, q2); // red is terminal: no way back from q2

    if args.dot {
        print!("{}", ts.to_dot()?);
        return Ok(());
    }

    println!("Traffic Light");
    println!("=============\n");
    println!("{}", ts);

    // -- Check 1: never red and amber together --

    let invariant = Expr::atom("rouge").and(Expr::atom("orange")).not();
    println!("Check 1: invariant {}", invariant);

    let verdict = ts.check_invariant(&invariant);
    println!("  Result: {}", verdict);
    if verdict.holds() {
        println!("  ✓ The light is never red and amber at once\n");
    }

    // -- Check 2: a proposition that is not an invariant --
    //
    // "Amber everywhere" is false in most phases; the checker finds a
    // reachable phase without it and reports the path there.

    let orange = Expr::atom("orange");
    println!("Check 2: invariant {} (expected to fail)", orange);

    let verdict = ts.check_invariant(&orange);
    println!("  Result: {}", verdict);
    if !verdict.holds() {
        let cex = Counterexample::new(&ts, verdict.trace()).with_annotations();
        println!("\n{}", cex);
        println!("  Path: {}", cex.arrow());
    }

    Ok(())
}
