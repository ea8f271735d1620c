//! # Binary-Semaphore Mutual Exclusion
//!
//! Two processes compete for a critical section guarded by a binary
//! semaphore. The lock enforces the classic *mutual exclusion* property:
//! at most one process in the critical section at any time.
//!
//! The model is tiny (three states), which makes it a good first look at
//! explicit-state checking: every reachable state is visited and judged
//! against the invariant `¬(C1 ∧ C2)`.
//!
//! Run with: `cargo run --example mutex`
//!
//! Add `--broken` to inject a faulty handover transition and watch the
//! checker produce a counterexample trace instead.

use clap::Parser;

use invariant_rs::counterexample::Counterexample;
use invariant_rs::expr::Expr;
use invariant_rs::transition::TransitionSystem;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Inject a faulty transition that lets P2 enter while P1 holds the lock.
    #[clap(long)]
    broken: bool,

    /// Log the checker's exploration step by step.
    #[clap(long)]
    verbose: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("Binary-Semaphore Mutual Exclusion");
    println!("=================================\n");

    // -- Step 1: Build the model --
    //
    // Three states: the lock is free, P1 is in its critical section, or P2
    // is. The propositions C1/C2 mark who is inside.

    println!("Step 1: Building the model...\n");

    let mut ts = TransitionSystem::new("Mutex");
    let free = ts.create_state("free", true);
    let p1cs = ts.create_state("p1cs", false);
    let p2cs = ts.create_state("p2cs", false);
    ts.add_proposition(p1cs, "C1");
    ts.add_proposition(p2cs, "C2");

    ts.add_transition(free, p1cs); // P1 acquires the lock
    ts.add_transition(free, p2cs); // P2 acquires the lock
    ts.add_transition(p1cs, free); // P1 releases the lock
    ts.add_transition(p2cs, free); // P2 releases the lock

    if args.broken {
        // Faulty handover: P2 enters directly while P1 never released.
        ts.add_transition(p1cs, p2cs);
        ts.add_proposition(p2cs, "C1");
        println!("  --broken: added p1cs -> p2cs without releasing the lock\n");
    }

    println!("{}", ts);

    // -- Step 2: The invariant --
    //
    // Mutual exclusion as a propositional invariant over all reachable
    // states: never C1 and C2 at once.

    let invariant = Expr::atom("C1").and(Expr::atom("C2")).not();
    println!("Step 2: Checking invariant {}\n", invariant);

    let verdict = ts.check_invariant(&invariant);
    println!("  Result: {}", verdict);

    if verdict.holds() {
        println!("  ✓ Mutual exclusion guaranteed\n");
    } else {
        println!("  ✗ Mutual exclusion violated\n");
        let cex = Counterexample::new(&ts, verdict.trace()).with_annotations();
        println!("{}", cex);
        println!("  Path: {}\n", cex.arrow());
    }

    Ok(())
}
