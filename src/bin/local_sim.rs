extern crate podracer;

use clap::Parser;
use podracer::block::{intercept_time, MIN_PURSUIT_SPEED};
use podracer::{
    Action, Bot, BotConfig, Decision, PodState, Point, Race, StrategyKind, Vector,
    CHECKPOINT_RADIUS, COLLISION_DISTANCE, MY_PODS, POD_COUNT,
};

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TRACK_WIDTH: f64 = 16000.;
const TRACK_HEIGHT: f64 = 9000.;
const SCALE: f32 = 0.1;
const MIN_CHECKPOINT_GAP: f64 = 2500.;

#[derive(Parser, Debug)]
#[command(name = "local_sim")]
#[command(about = "Draws a random track and the decisions our pods would take on it")]
struct Cli {
    /// Seed for track generation; random if omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = StrategyKind::Fly)]
    first: StrategyKind,
    #[arg(long, value_enum, default_value_t = StrategyKind::Block)]
    second: StrategyKind,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    dont_boost_before_lap: i32,
}

struct SimRace {
    bot: Bot,
    decisions: [Decision; 2],
}

impl SimRace {
    fn gen_checkpoints(rng: &mut StdRng) -> Vec<Point> {
        let count = rng.gen_range(3..=8);
        let mut checkpoints: Vec<Point> = Vec::with_capacity(count);

        while checkpoints.len() < count {
            let cp = Point::new(
                rng.gen_range(1000.0..TRACK_WIDTH - 1000.),
                rng.gen_range(1000.0..TRACK_HEIGHT - 1000.),
            );
            if checkpoints.iter().all(|other| other.dist(cp) > MIN_CHECKPOINT_GAP) {
                checkpoints.push(cp);
            }
        }
        checkpoints
    }

    fn gen_pod(rng: &mut StdRng, checkpoint_count: usize) -> PodState {
        let speed = rng.gen_range(0.0..600.);
        let heading: f64 = rng.gen_range(0.0..360.);
        let drift = heading + rng.gen_range(-30.0..30.);
        PodState {
            pos: Point::new(
                rng.gen_range(0.0..TRACK_WIDTH),
                rng.gen_range(0.0..TRACK_HEIGHT),
            ),
            vel: Vector::new(
                drift.to_radians().cos() * speed,
                drift.to_radians().sin() * speed,
            ),
            angle: heading,
            next_checkpoint: rng.gen_range(0..checkpoint_count),
        }
    }

    fn gen_random_race(rng: &mut StdRng, config: &BotConfig) -> Self {
        let checkpoints = Self::gen_checkpoints(rng);
        let count = checkpoints.len();
        let mut bot = Bot::new(3, checkpoints, config);

        let mut states = [PodState::default(); POD_COUNT];
        for state in states.iter_mut() {
            *state = Self::gen_pod(rng, count);
        }
        bot.update(states);
        let decisions = bot.play();

        SimRace { bot, decisions }
    }
}

fn to_canvas(p: Point) -> (f32, f32) {
    (p.x as f32 * SCALE, (TRACK_HEIGHT as f32 - p.y as f32) * SCALE)
}

fn draw_circle_at_pos(gc: &mut CanvasGraphicsContext, pos: Point, radius: f64, col: Color) {
    let (x, y) = to_canvas(pos);
    gc.new_path();

    gc.circle(x, y, radius as f32 * SCALE);

    gc.fill_color(col);

    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn draw_line(gc: &mut CanvasGraphicsContext, from: Point, to: Point, col: Color) {
    let (x1, y1) = to_canvas(from);
    let (x2, y2) = to_canvas(to);
    gc.new_path();
    gc.move_to(x1, y1);
    gc.line_to(x2, y2);
    gc.line_width(1.5);
    gc.stroke_color(col);
    gc.stroke();
}

fn draw_track(gc: &mut CanvasGraphicsContext, race: &Race) {
    let cps = &race.checkpoints;
    for (i, cp) in cps.iter().enumerate() {
        let shade = if i == 0 { 0.4 } else { 0.8 };
        draw_circle_at_pos(gc, *cp, CHECKPOINT_RADIUS, Color::Rgba(shade, shade, shade, 0.6));
        draw_line(gc, *cp, cps[(i + 1) % cps.len()], Color::Rgba(0., 0., 0., 0.15));
    }
}

fn draw_pods(gc: &mut CanvasGraphicsContext, race: &Race) {
    for (slot, pod) in race.pods.iter().enumerate() {
        let color = if MY_PODS.contains(&slot) {
            Color::Rgba(0., 0., 1., 1.)
        } else {
            Color::Rgba(1., 0., 0., 1.)
        };
        draw_circle_at_pos(gc, pod.pos, 400., color);

        let heading = pod.angle.to_radians();
        let nose = pod.pos + Vector::new(heading.cos(), heading.sin()) * 800.;
        draw_line(gc, pod.pos, nose, Color::Rgba(0., 0., 0., 1.));
        draw_line(gc, pod.pos, pod.next_checkpoint(&race.checkpoints, 0), color);
    }

    // The blocker always chases opposing slot 0; ring the actual leader.
    let leader = race.pod(race.opp_leader());
    draw_circle_at_pos(gc, leader.pos, 600., Color::Rgba(1., 0., 0., 0.15));
}

fn action_color(action: Action) -> Color {
    match action {
        Action::Thrust(power) => Color::Rgba(0., 0.3 + 0.7 * power as f32 / 100., 0., 1.),
        Action::Boost => Color::Rgba(1., 0.6, 0., 1.),
        Action::Shield => Color::Rgba(0., 0.8, 1., 1.),
    }
}

fn draw_decisions(gc: &mut CanvasGraphicsContext, race: &Race, decisions: &[Decision; 2]) {
    for (i, decision) in decisions.iter().enumerate() {
        let pod = race.my_pod(i);
        draw_line(gc, pod.pos, decision.target, action_color(decision.action));
        draw_circle_at_pos(gc, decision.target, 150., action_color(decision.action));
    }
}

fn draw_predictions(gc: &mut CanvasGraphicsContext, race: &Race) {
    for pod in &race.pods {
        let next = pod.next_pos();
        draw_line(gc, pod.pos, next, Color::Rgba(0.5, 0., 0.5, 1.));
        draw_circle_at_pos(gc, next, COLLISION_DISTANCE / 2., Color::Rgba(0.5, 0., 0.5, 0.1));
    }
}

fn draw_intercepts(gc: &mut CanvasGraphicsContext, race: &Race) {
    for i in 0..2 {
        let hunter = race.my_pod(i);
        let prey = race.opp_pod(0);
        let speed = hunter.vel.len().max(MIN_PURSUIT_SPEED);
        if let Some(t) = intercept_time(hunter.pos, speed, prey) {
            let meet = prey.pos + prey.vel * t;
            draw_line(gc, prey.pos, meet, Color::Rgba(1., 0., 0., 0.4));
            draw_circle_at_pos(gc, meet, 100., Color::Rgba(1., 0., 0., 0.4));
        }
    }
}

struct App {
    rng: StdRng,
    config: BotConfig,
    sim_race: SimRace,
    canvas: Canvas,

    draw_predictions: bool,
    draw_intercepts: bool,
}

impl App {
    fn new(canvas: Canvas, mut rng: StdRng, config: BotConfig) -> Self {
        let sim_race = SimRace::gen_random_race(&mut rng, &config);

        App {
            rng,
            config,
            sim_race,
            canvas,
            draw_predictions: false,
            draw_intercepts: false,
        }
    }

    fn redraw(&mut self) {
        let race = self.sim_race.bot.race();
        let decisions = &self.sim_race.decisions;
        let (show_predictions, show_intercepts) = (self.draw_predictions, self.draw_intercepts);

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(TRACK_HEIGHT as f32 * SCALE);
            gc.center_region(
                0.0,
                0.0,
                TRACK_WIDTH as f32 * SCALE,
                TRACK_HEIGHT as f32 * SCALE,
            );

            draw_track(gc, race);
            draw_pods(gc, race);

            if show_predictions {
                draw_predictions(gc, race);
            }

            if show_intercepts {
                draw_intercepts(gc, race);
            }

            draw_decisions(gc, race, decisions);
        });
    }

    fn regenerate_race(&mut self) {
        self.sim_race = SimRace::gen_random_race(&mut self.rng, &self.config);
        for (i, decision) in self.sim_race.decisions.iter().enumerate() {
            log::info!("pod {}: {}", i, decision);
        }

        self.redraw();
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = BotConfig {
        first: cli.first,
        second: cli.second,
        dont_boost_before_lap: cli.dont_boost_before_lap,
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    with_2d_graphics(move || {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("PODRACER");

            let mut app = App::new(canvas, rng, config);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.regenerate_race();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.draw_predictions = !app.draw_predictions;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.draw_intercepts = !app.draw_intercepts;
                        app.redraw();
                    }
                    _ => {}
                }
            }
        });
    });
}
