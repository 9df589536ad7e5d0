#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use armada::{
    init_logging, print_board, print_guide_board, Game, GameError, Orientation, Phase, PlayerId,
    ShipClass, ShotOutcome, CLASSES,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat naval battle", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Place both fleets randomly instead of prompting for coordinates.
    #[arg(long)]
    random: bool,
    /// Fix the RNG seed for reproducible fleet placement.
    #[arg(long)]
    seed: Option<u64>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut game: Game = Game::new();
    game.start()?;

    if cli.random {
        let mut rng = match cli.seed {
            Some(s) => SmallRng::seed_from_u64(s),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        for player in [PlayerId::P1, PlayerId::P2] {
            for class in CLASSES {
                let (row, col, orientation) = game.board(player).random_placement(&mut rng, class)?;
                game.place_boat(player, class, (row, col), orientation)?;
            }
        }
    } else {
        for player in [PlayerId::P1, PlayerId::P2] {
            println!("{}: place your fleet (format: row col v|h, zero-based)", player);
            for class in CLASSES {
                place_interactive(&mut game, player, class)?;
            }
        }
    }

    game.play()?;

    while game.phase() == Phase::Active {
        let player = game.turn();
        let line = prompt(&format!("{} fire (row col): ", player))?;
        let (row, col) = match parse_coord(&line) {
            Ok(coord) => coord,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match game.shot(row, col) {
            Ok(ShotOutcome::Miss) => println!("miss"),
            Ok(ShotOutcome::Hit) => println!("hit, shoot again"),
            Ok(ShotOutcome::Sunk(class)) => println!("sunk the {} ship, shoot again", class),
            Err(e @ GameError::ShotOutOfRange { .. }) => println!("{}", e),
            Err(e) => return Err(e.into()),
        }
        print_guide_board(&format!("{} guide board", player), &game.show_guide_board(player)?);
    }

    if let Some(winner) = game.winner() {
        println!("\n{} won, sunk all enemy ships!", winner);
    }
    for player in [PlayerId::P1, PlayerId::P2] {
        print_board(&format!("{} board", player), &game.show_board(player)?);
    }
    Ok(())
}

#[cfg(feature = "std")]
fn place_interactive(game: &mut Game, player: PlayerId, class: ShipClass) -> anyhow::Result<()> {
    loop {
        let line = prompt(&format!("{} {} ({} segments): ", player, class, class.segments()))?;
        match parse_placement(&line) {
            Ok((origin, orientation)) => {
                game.place_boat(player, class, origin, orientation)?;
                return Ok(());
            }
            Err(e) => println!("{}", e),
        }
    }
}

#[cfg(feature = "std")]
fn prompt(msg: &str) -> anyhow::Result<String> {
    use std::io::Write;
    print!("{}", msg);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(feature = "std")]
fn parse_coord(line: &str) -> anyhow::Result<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected: row col"))?
        .parse()?;
    let col = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected: row col"))?
        .parse()?;
    Ok((row, col))
}

#[cfg(feature = "std")]
fn parse_placement(line: &str) -> anyhow::Result<((usize, usize), Orientation)> {
    let mut parts = line.split_whitespace();
    let row = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected: row col v|h"))?
        .parse()?;
    let col = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("expected: row col v|h"))?
        .parse()?;
    let orientation = match parts.next() {
        Some("v") | Some("vertical") => Orientation::Vertical,
        Some("h") | Some("horizontal") => Orientation::Horizontal,
        _ => anyhow::bail!("orientation must be v or h"),
    };
    Ok(((row, col), orientation))
}
