// app.rs - Desktop host state: the model menu and one live session at a time

use automata::config::{parse_dimension, parse_interval_ms};
use automata::{
    Automaton, Dimensions, Fire, Frame, Life, ModelKind, RngSource, Scheduler, Settings, Sir,
    SimulationController,
};
use eframe::egui;
use tracing::info;

use crate::canvas::CanvasRenderer;
use crate::scheduler::RepaintScheduler;

/// One model running in the window, together with its text inputs.
pub struct Session<A: Automaton> {
    pub sim           : SimulationController<A>,
    pub canvas        : CanvasRenderer,
    pub scheduler     : RepaintScheduler,
    pub rows_text     : String,
    pub cols_text     : String,
    pub interval_text : String,
}

impl<A: Automaton> Session<A> {
    pub fn new(kind: ModelKind, automaton: A, settings: Settings, seed: Option<u64>, ctx: &egui::Context) -> Self {
        let mut canvas = CanvasRenderer::for_model(kind);
        let rng = RngSource::from_seed_option(seed);
        let sim = SimulationController::new(automaton, settings, rng, &mut canvas);
        let settings = sim.settings();

        Self {
            sim,
            canvas,
            scheduler: RepaintScheduler::new(ctx.clone()),
            rows_text: settings.dims.rows.to_string(),
            cols_text: settings.dims.cols.to_string(),
            interval_text: settings.interval_ms().to_string(),
        }
    }

    /// Delivers the frame requested during the previous update, if any.
    pub fn pump(&mut self) -> Frame {
        let Some(handle) = self.scheduler.take_due() else {
            return Frame::Ignored;
        };
        let now = self.scheduler.now();
        self.sim.on_frame(&mut self.scheduler, handle, now, &mut self.canvas)
    }

    pub fn toggle_running(&mut self) {
        let running = !self.sim.is_running();
        self.sim.set_running(running, &mut self.scheduler, &mut self.canvas);
    }

    /// The Reset button: pause, then reseed at the current size.
    pub fn reset(&mut self) {
        self.sim.set_running(false, &mut self.scheduler, &mut self.canvas);
        let dims = self.sim.dims();
        self.sim.reset(dims, &mut self.scheduler, &mut self.canvas);
    }

    /// Commits the rows/cols text inputs. Invalid text falls back to the
    /// default size; the inputs are rewritten with what was applied.
    pub fn apply_dimensions(&mut self) {
        let dims = Dimensions::clamped(parse_dimension(&self.rows_text), parse_dimension(&self.cols_text));
        self.sim.resize(dims, &mut self.scheduler, &mut self.canvas);
        self.rows_text = dims.rows.to_string();
        self.cols_text = dims.cols.to_string();
    }

    pub fn apply_interval(&mut self) {
        let ms = parse_interval_ms(&self.interval_text);
        self.sim.set_tick_interval(ms, &mut self.scheduler);
        self.interval_text = self.sim.settings().interval_ms().to_string();
    }
}

impl Session<Life> {
    /// The Random button: pause, then fill the board with a random soup.
    pub fn randomize(&mut self) {
        self.sim.set_running(false, &mut self.scheduler, &mut self.canvas);
        self.sim.randomize(&mut self.canvas);
    }
}

pub enum Screen {
    Menu,
    Life(Session<Life>),
    Fire(Session<Fire>),
    Sir(Session<Sir>),
}

pub struct AutomataApp {
    pub screen   : Screen,
    pub settings : Settings,
    pub seed     : Option<u64>,
}

impl AutomataApp {
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        Self { screen: Screen::Menu, settings, seed }
    }

    pub fn open(&mut self, kind: ModelKind, ctx: &egui::Context) {
        info!(model = kind.name(), "opening model");
        self.screen = match kind {
            ModelKind::Life => Screen::Life(Session::new(kind, Life::new(), self.settings, self.seed, ctx)),
            ModelKind::Fire => Screen::Fire(Session::new(kind, Fire, self.settings, self.seed, ctx)),
            ModelKind::Sir  => Screen::Sir(Session::new(kind, Sir, self.settings, self.seed, ctx)),
        };
    }

    /// Back to the menu. The session, its loop and any queued frame are dropped.
    pub fn close(&mut self) {
        self.screen = Screen::Menu;
    }

    pub fn pump(&mut self) {
        match &mut self.screen {
            Screen::Menu => {}
            Screen::Life(s) => {
                s.pump();
            }
            Screen::Fire(s) => {
                s.pump();
            }
            Screen::Sir(s) => {
                s.pump();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session<Life> {
        let ctx = egui::Context::default();
        Session::new(ModelKind::Life, Life::new(), Settings::default(), Some(1), &ctx)
    }

    #[test]
    fn dimension_inputs_fall_back_and_clamp() {
        let mut s = session();
        s.rows_text = "abc".into();
        s.cols_text = "500".into();
        s.apply_dimensions();
        assert_eq!(s.sim.dims(), Dimensions { rows: 10, cols: 200 });
        assert_eq!((s.rows_text.as_str(), s.cols_text.as_str()), ("10", "200"));
    }

    #[test]
    fn interval_input_falls_back_to_default() {
        let mut s = session();
        s.interval_text = "soon".into();
        s.apply_interval();
        assert_eq!(s.interval_text, "100");
        s.interval_text = "7".into();
        s.apply_interval();
        assert_eq!(s.interval_text, "10");
    }

    #[test]
    fn reset_pauses_and_reseeds() {
        let mut s = session();
        s.sim.toggle_cell(1, 1, &mut s.canvas);
        s.toggle_running();
        assert!(s.sim.is_running());

        s.reset();
        assert!(!s.sim.is_running());
        assert_eq!(s.sim.grid().count(|a| a), 0);
        assert_eq!(s.scheduler.take_due(), None);
    }

    #[test]
    fn random_button_pauses_before_reseeding() {
        let mut s = session();
        s.toggle_running();
        assert!(s.sim.is_running());

        s.randomize();
        assert!(!s.sim.is_running());
        assert_eq!(s.sim.generation(), 0);
        assert!(s.sim.grid().count(|a| a) > 0);
        assert_eq!(s.scheduler.take_due(), None);
    }
}
