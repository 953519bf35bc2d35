extern crate podracer;

use std::io::{self, BufRead};

use anyhow::{ensure, Context, Result};
use clap::Parser;

use podracer::{Bot, BotConfig, Point, PodState, StrategyKind, Vector, POD_COUNT};

macro_rules! parse_input {
    ($x:expr, $t:ident) => {
        $x.trim()
            .parse::<$t>()
            .with_context(|| format!("expected {} but got {:?}", stringify!($t), $x))?
    };
}

#[derive(Parser, Debug)]
#[command(name = "podracer")]
#[command(about = "Pod racing bot: referee turns on stdin, pod commands on stdout")]
struct Cli {
    /// Strategy for our first pod
    #[arg(long, value_enum, default_value_t = StrategyKind::Fly)]
    first: StrategyKind,
    /// Strategy for our second pod
    #[arg(long, value_enum, default_value_t = StrategyKind::Block)]
    second: StrategyKind,
    /// Lap before which the legacy strategy keeps its boost
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dont_boost_before_lap: i32,
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("reading referee input")?)),
        None => Ok(None),
    }
}

fn expect_line(lines: &mut impl Iterator<Item = io::Result<String>>, what: &str) -> Result<String> {
    next_line(lines)?.with_context(|| format!("input ended before {}", what))
}

fn read_setup(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<(i32, Vec<Point>)> {
    let input_line = expect_line(lines, "lap count")?;
    let laps = parse_input!(input_line, i32);

    let input_line = expect_line(lines, "checkpoint count")?;
    let checkpoint_count = parse_input!(input_line, usize);
    ensure!(checkpoint_count > 0, "track has no checkpoints");

    let mut checkpoints = Vec::with_capacity(checkpoint_count);
    for i in 0..checkpoint_count {
        let input_line = expect_line(lines, &format!("checkpoint {}", i))?;
        let inputs = input_line.split_whitespace().collect::<Vec<_>>();
        ensure!(inputs.len() == 2, "checkpoint line {:?}", input_line);
        let x = parse_input!(inputs[0], f64);
        let y = parse_input!(inputs[1], f64);
        checkpoints.push(Point::new(x, y));
    }

    Ok((laps, checkpoints))
}

fn parse_pod(input_line: &str, checkpoint_count: usize) -> Result<PodState> {
    let inputs = input_line.split_whitespace().collect::<Vec<_>>();
    ensure!(inputs.len() == 6, "pod line {:?}", input_line);
    let x = parse_input!(inputs[0], f64);
    let y = parse_input!(inputs[1], f64);
    let vx = parse_input!(inputs[2], f64);
    let vy = parse_input!(inputs[3], f64);
    let angle = parse_input!(inputs[4], f64);
    let next_checkpoint = parse_input!(inputs[5], usize);
    ensure!(
        next_checkpoint < checkpoint_count,
        "next checkpoint {} out of {}",
        next_checkpoint,
        checkpoint_count
    );

    Ok(PodState {
        pos: Point::new(x, y),
        vel: Vector::new(vx, vy),
        angle,
        next_checkpoint,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = BotConfig {
        first: cli.first,
        second: cli.second,
        dont_boost_before_lap: cli.dont_boost_before_lap,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let (laps, checkpoints) = read_setup(&mut lines)?;
    let checkpoint_count = checkpoints.len();
    let mut bot = Bot::new(laps, checkpoints, &config);

    // game loop
    let mut turn = 0;
    while let Some(first_line) = next_line(&mut lines)? {
        let mut states = [PodState::default(); POD_COUNT];
        states[0] = parse_pod(&first_line, checkpoint_count)?;
        for state in states.iter_mut().skip(1) {
            let input_line = expect_line(&mut lines, "all pods of the turn")?;
            *state = parse_pod(&input_line, checkpoint_count)?;
        }

        bot.update(states);
        for decision in bot.play() {
            println!("{}", decision);
        }
        turn += 1;
    }

    log::info!("input closed after {} turns", turn);
    Ok(())
}
