//! Stochastic, grid-based cellular automata: Conway's Life, forest-fire
//! spread and SIR epidemics on bounded grids, advanced one synchronous
//! generation at a time by a frame-rate independent pacer.
//!
//! Hosts plug in two collaborators: a [`Renderer`] that paints grid
//! snapshots and a [`Scheduler`] that delivers frame callbacks.

pub mod animation;
pub mod config;
pub mod controller;
pub mod grid;
pub mod random;
pub mod render;
pub mod rules;

pub use animation::{AnimationLoop, Frame, FrameHandle, LoopState, Scheduler};
pub use config::Settings;
pub use controller::SimulationController;
pub use grid::{Dimensions, Grid, GridError};
pub use random::{DefaultSource, RandomSource, RngSource};
pub use render::{Census, Cell, Renderer, Rgb};
pub use rules::{Advance, Automaton, Fire, FireCell, Life, ModelKind, Sir, SirCell};
