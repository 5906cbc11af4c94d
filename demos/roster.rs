use roster_fnd::{read_records, write_records, AppContext, Config, Encoding, Player, PlayerData};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Settings {
    numlives: u32,
    board: Board,
    roster: Roster,
}

#[derive(Debug, Deserialize)]
struct Board {
    width: u16,
    height: u16,
}

#[derive(Debug, Deserialize)]
struct Roster {
    file: String,
    charset: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load once at startup, then hand the context around
    let ctx = AppContext::builder()
        .with_config(Config::builder().with_file("demos/config.properties", true))
        .build()?;

    let config = ctx.config()?;
    let settings: Settings = config.deserialize()?;
    let lives = config.number_of_lives()?;
    info!(lives, "settings loaded");

    let encoding: Encoding = settings.roster.charset.parse()?;
    let mut roster = PlayerData::from_records(&read_records(&settings.roster.file, encoding)?)?;
    let bonus = i32::try_from(settings.numlives)?
        .checked_mul(10)
        .ok_or("starting score out of range")?;
    roster.add(Player::new("Giulia", "Neri", bonus));

    for player in roster.players() {
        println!("{:<8} {:<8} {:>4}", player.name, player.surname, player.score);
    }

    let out = std::env::temp_dir().join("roster-out.csv");
    write_records(&out, encoding, &roster.to_records())?;
    info!(path = %out.display(), players = roster.len(), "roster written");
    info!(width = settings.board.width, height = settings.board.height, "board size");

    Ok(())
}
