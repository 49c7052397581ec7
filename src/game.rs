//! Phase state machine
//!
//! `Game` owns the world and the platform ports. Each call to [`Game::step`]
//! runs the handler for the current phase once; a handler that produces an
//! event moves the game through [`transition`] and runs the entry actions of
//! the new phase.
//!
//! | phase | handler | entry |
//! |---|---|---|
//! | Intro | wait for start, new game | welcome screen |
//! | Playing | one tick + pacing sleep | rebuild screen, reset ball/paddle |
//! | LifeLost | short pause | - |
//! | LevelComplete | banner pause, speed up, new grid | level + 1, banner |
//! | Win / GameOver | final screen pause | final score |

use serde::Serialize;

use crate::hud;
use crate::platform::{Clock, DrawSurface, KeyCode, KeySource, TextDisplay};
use crate::settings::Settings;
use crate::sim::autopilot::Autopilot;
use crate::sim::bricks::BrickLayout;
use crate::sim::state::{GameEvent, GamePhase, GameState, GameWorld, transition};
use crate::sim::tick::{TickInput, TickOutcome, tick};

/// Result of one finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub score: u32,
    pub level: u32,
    pub won: bool,
}

pub struct Game<D, T, K, C> {
    settings: Settings,
    phase: GamePhase,
    world: GameWorld,
    display: D,
    text: T,
    keys: K,
    clock: C,
    autopilot: Option<Autopilot>,
    ticks: u64,
    records: Vec<GameRecord>,
}

impl<D, T, K, C> Game<D, T, K, C>
where
    D: DrawSurface,
    T: TextDisplay,
    K: KeySource,
    C: Clock,
{
    /// Takes ownership of the ports and shows the welcome screen
    pub fn new(settings: Settings, display: D, text: T, keys: K, clock: C) -> Self {
        let autopilot = settings
            .autopilot
            .enabled
            .then(|| Autopilot::new(&settings.autopilot, settings.keymap));
        let world = GameWorld::new(BrickLayout::default(), &settings);
        let mut game = Self {
            settings,
            phase: GamePhase::Intro,
            world,
            display,
            text,
            keys,
            clock,
            autopilot,
            ticks: 0,
            records: Vec::new(),
        };
        game.enter(GamePhase::Intro);
        game
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn state(&self) -> &GameState {
        &self.world.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn text(&self) -> &T {
        &self.text
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.keys
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Playing ticks simulated so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Finished games, oldest first
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    /// Run the current phase's handler once and apply any resulting
    /// transition. Returns the phase afterwards.
    pub fn step(&mut self) -> GamePhase {
        let event = match self.phase {
            GamePhase::Intro => Some(self.wait_for_start()),
            GamePhase::Playing => self.play_tick(),
            GamePhase::LifeLost => Some(self.pause_after_life_lost()),
            GamePhase::LevelComplete => Some(self.next_level()),
            GamePhase::Win | GamePhase::GameOver => Some(self.hold_final_screen()),
        };

        if let Some(event) = event {
            let next = transition(self.phase, event, self.settings.win_level);
            if next != self.phase {
                log::info!("{:?} -> {:?} ({:?})", self.phase, next, event);
                self.phase = next;
                self.enter(next);
            }
        }
        self.phase
    }

    // --- entry actions ---

    fn enter(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::Intro => {
                self.display.clear_screen();
                hud::show_welcome(&mut self.text, self.settings.keymap.start);
            }
            GamePhase::Playing => self.begin_life(),
            GamePhase::LifeLost => {}
            GamePhase::LevelComplete => {
                self.world.state.level += 1;
                log::info!("Level {} reached", self.world.state.level);
                self.display.clear_screen();
                hud::show_level_complete(&mut self.text);
            }
            GamePhase::Win | GamePhase::GameOver => {
                let won = phase == GamePhase::Win;
                let state = self.world.state;
                let record = GameRecord {
                    score: state.score,
                    level: state.level,
                    won,
                };
                log::info!(
                    "Game {} finished: {} with score {} on level {}",
                    self.records.len() + 1,
                    if won { "won" } else { "lost" },
                    record.score,
                    record.level
                );
                self.records.push(record);
                self.display.clear_screen();
                hud::show_final_score(&mut self.text, state.score, won);
            }
        }
    }

    /// Fresh screen for a new life or level. Bricks keep their active flags.
    fn begin_life(&mut self) {
        self.display.clear_screen();
        self.world.bricks.redraw(&mut self.display);
        self.world.reset_objects();
        self.display.draw_shape(&self.world.paddle);
        self.display.draw_shape(&self.world.ball);
        let state = &self.world.state;
        hud::show_play_header(&mut self.text, state.level, state.score, state.lives);
    }

    fn rebuild_bricks(&mut self) {
        let live = self.world.bricks.init(&mut self.display);
        self.world.state.bricks_remaining = live as u32;
    }

    // --- phase handlers ---

    /// Blocks until the start key arrives, then resets for a new game
    fn wait_for_start(&mut self) -> GameEvent {
        loop {
            let keys = self.poll_keys(|pilot, _| pilot.start_keys());
            if self.settings.keymap.has_start(&keys) {
                break;
            }
        }

        self.world.state = GameState::new(&self.settings);
        self.display.clear_screen();
        self.rebuild_bricks();
        log::info!(
            "New game: {} lives, {} bricks",
            self.world.state.lives,
            self.world.state.bricks_remaining
        );
        GameEvent::StartPressed
    }

    fn play_tick(&mut self) -> Option<GameEvent> {
        let keys = self.poll_keys(|pilot, world| pilot.play_keys(world));
        let input = TickInput {
            paddle_intent: self.settings.keymap.paddle_intent(&keys),
        };

        let outcome = tick(&mut self.world, &input, &mut self.display, &mut self.text);
        self.ticks += 1;
        log::trace!(
            "tick {}: ball {} paddle {}",
            self.ticks,
            self.world.ball.position,
            self.world.paddle.position
        );

        match outcome {
            TickOutcome::Continue => {
                self.clock.sleep_ms(self.world.state.tick_interval_ms);
                None
            }
            TickOutcome::Event(event) => Some(event),
        }
    }

    fn pause_after_life_lost(&mut self) -> GameEvent {
        self.clock.sleep_ms(self.settings.pacing.life_lost_pause_ms);
        GameEvent::BannerElapsed
    }

    /// Banner, bounded speed-up, new grid
    fn next_level(&mut self) -> GameEvent {
        self.clock.sleep_ms(self.settings.pacing.level_banner_ms);
        let state = &mut self.world.state;
        state.tick_interval_ms = self.settings.pacing.faster(state.tick_interval_ms);
        log::info!("Tick interval now {} ms", state.tick_interval_ms);
        self.rebuild_bricks();
        GameEvent::BannerElapsed
    }

    fn hold_final_screen(&mut self) -> GameEvent {
        self.clock.sleep_ms(self.settings.pacing.final_screen_ms);
        GameEvent::BannerElapsed
    }

    /// Keypad events plus whatever the autopilot adds
    fn poll_keys<F>(&mut self, pilot_keys: F) -> Vec<KeyCode>
    where
        F: FnOnce(&mut Autopilot, &GameWorld) -> Vec<KeyCode>,
    {
        let mut keys = self.keys.poll_events();
        if let Some(pilot) = self.autopilot.as_mut() {
            keys.extend(pilot_keys(pilot, &self.world));
        }
        keys
    }
}
