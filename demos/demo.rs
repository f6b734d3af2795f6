//! End-to-end demo of the equity engine.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `holdem_equity` works end to end:
//!
//! 1. **Typed requests** — [`EquityRequest`] built directly from cards, with
//!    a fixed seed so the output is deterministic and reproducible.
//! 2. **Client tokens** — the same flow driven by the card-token notation
//!    the presentation layer speaks ("1s" is the ace of spades), finishing
//!    with the JSON object a client would render.
//!
//! ## Key concepts demonstrated
//!
//! - `rng_seed: Some(u64)` makes the estimate fully deterministic.
//! - The decision threshold is `1/(opponents+1)`: half the pot heads-up,
//!   an eighth of the pot at a full table.
//! - Split pots are counted fractionally, so a board that plays for
//!   everyone reports exactly 50% heads-up.
//!
//! Set `RUST_LOG=debug` to watch the estimator's own log lines.

use holdem_equity::{client_adapter, estimate_equity, Card, EquityRequest};

/// Estimate one scenario and pretty-print the report.
fn print_scenario(label: &str, mut request: EquityRequest, seed: u64) {
    request.rng_seed = Some(seed);
    let report = match estimate_equity(&request) {
        Ok(report) => report,
        Err(err) => {
            println!("  {label}: rejected — {err}");
            return;
        }
    };

    let board: Vec<String> = request.board.iter().map(|c| c.to_string()).collect();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{label}]  Street: {}  Opponents: {}", report.street, report.opponents);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Hero:  {}{}", request.hero[0], request.hero[1]);
    if !board.is_empty() {
        println!("  Board: {}", board.join(" "));
    }
    println!(
        "  Win probability: {:.1}%  Threshold: {:.1}%  →  {}",
        report.win_probability * 100.0,
        report.threshold * 100.0,
        if report.should_play { "PLAY" } else { "FOLD" },
    );
    println!();
}

fn main() {
    env_logger::init();

    // ── Typed requests ───────────────────────────────────────────────────────
    // Codes 12 and 25 are the aces of spades and hearts.
    let aces = [Card::from_code(12).unwrap(), Card::from_code(25).unwrap()];
    print_scenario("Pocket aces, heads-up", EquityRequest::new(aces), 42);

    // A weak offsuit hand at a full table: clearly below the 1/8 threshold.
    let trash = [Card::from_code(0).unwrap(), Card::from_code(31).unwrap()];
    let mut request = EquityRequest::new(trash);
    request.opponents = 7;
    print_scenario("Seven-deuce offsuit, full table", request, 42);

    // ── Client tokens ────────────────────────────────────────────────────────
    // The presentation layer sends Ace as rank 1; the adapter lifts it to 14,
    // checks the request shape, and clamps the opponent count.
    let parsed = client_adapter::parse_request("ah kh", Some("qh jh 2c"), 2)
        .expect("tokens are well-formed");
    print_scenario("Royal draw on the flop (parsed from tokens)", parsed.clone(), 7);

    let mut with_seed = parsed;
    with_seed.rng_seed = Some(7);
    let report = estimate_equity(&with_seed).expect("request already validated");
    println!("  Client JSON:");
    println!(
        "{}",
        serde_json::to_string_pretty(&client_adapter::to_client_report(&report))
            .expect("report serialises")
    );
}
