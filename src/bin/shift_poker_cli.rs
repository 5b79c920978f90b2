// src/bin/shift_poker_cli.rs
//
// Hot-seat партия в терминале: все игроки за одной клавиатурой.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use shift_poker::api::{execute_command, run_query, Command, CommandResponse, GameViewDto, Query, QueryResponse};
use shift_poker::domain::Card;
use shift_poker::engine::{GameEvent, RandomSource, ShiftPokerSession};
use shift_poker::infra::{DeterministicRng, SystemRng};
use shift_poker::GameConfig;

#[derive(Debug, Parser)]
#[command(name = "shift_poker_cli", about = "Shift Poker: партия в терминале")]
struct Args {
    /// Имя игрока (повторить 2–4 раза).
    #[arg(long = "player")]
    players: Vec<String>,

    /// Число раундов (2–7).
    #[arg(long)]
    rounds: Option<u8>,

    /// JSON-конфиг партии; флаги --player/--rounds его перекрывают.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed для воспроизводимой раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// Подробные логи движка.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if !args.players.is_empty() {
        config.player_names = args.players.clone();
    }
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }

    match args.seed {
        Some(seed) => run(ShiftPokerSession::with_rng(DeterministicRng::from_u64(seed)), config),
        None => run(ShiftPokerSession::with_rng(SystemRng), config),
    }
}

fn run<R: RandomSource>(
    mut session: ShiftPokerSession<R>,
    config: GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== SHIFT POKER ===\n");

    session.subscribe(|event: &GameEvent| match event {
        GameEvent::RoundStarted { remaining_rounds } => {
            println!("--- Раунд начинается, осталось кругов: {remaining_rounds} ---")
        }
        GameEvent::Shifted {
            direction, discarded, drawn, ..
        } => println!(
            "  Сдвиг {direction}: {} в сброс, {} из добора",
            discarded.pretty(),
            drawn.pretty()
        ),
        GameEvent::NextPlayer { name, .. } => println!("\nХод игрока {name}"),
        _ => {}
    });

    if let Err(err) = execute_command(&mut session, Command::StartGame(config)) {
        println!("Не удалось начать партию: {err:?}");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_table(&session);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "q" => break,
            "help" | "?" => {
                print_help();
                continue;
            }
            _ => {}
        }

        let command: Command = match line.parse() {
            Ok(c) => c,
            Err(err) => {
                println!("  {err:?}");
                continue;
            }
        };

        match execute_command(&mut session, command) {
            Ok(CommandResponse::Ok) => {}
            Ok(CommandResponse::GameOver(standings)) => {
                println!("\n=== ИТОГИ ===");
                for s in standings {
                    let cards: Vec<String> = s.cards.iter().map(Card::pretty).collect();
                    println!(
                        "  {}. {:<12} {:<16} [{}]",
                        s.place,
                        s.player_name,
                        s.hand_name,
                        cards.join(" ")
                    );
                }
                break;
            }
            Err(err) => println!("  Ошибка: {err:?}"),
        }
    }

    println!("\n=== SHIFT POKER DONE ===");
    Ok(())
}

fn print_table<R: RandomSource>(session: &ShiftPokerSession<R>) {
    let viewer = session.current_player().map(|p| p.name.clone());
    let Ok(QueryResponse::Game(Some(view))) = run_query(session, &Query::GetGame { viewer }) else {
        return;
    };
    render(&view);
}

fn render(view: &GameViewDto) {
    let slot = |c: Option<Card>| c.map_or("--".to_string(), |c| c.pretty());
    let middle: Vec<String> = view.middle_cards.iter().map(Card::pretty).collect();

    println!(
        "\n  [{}]  {}  [{}]   добор: {}",
        slot(view.discard_left),
        middle.join(" "),
        slot(view.discard_right),
        view.draw_pile_size
    );

    for p in &view.players {
        let marker = if p.seat == view.current_player { "*" } else { " " };
        let open: Vec<String> = p.open_cards.iter().map(Card::pretty).collect();
        let hidden = match p.hidden_cards {
            Some(cards) => format!("{} {}", cards[0].pretty(), cards[1].pretty()),
            None => "?? ??".to_string(),
        };
        println!("  {marker} {:<12} {}  | {}", p.name, open.join(" "), hidden);
    }
}

fn print_help() {
    println!("  shift left|right    сдвинуть ряд (обязательно в начале хода)");
    println!("  swap <рука> <ряд>   обменять одну карту (индексы 0..2)");
    println!("  swapall             обменять все три карты");
    println!("  pass                не менять карты");
    println!("  end                 завершить партию досрочно");
    println!("  quit                выйти");
}
