// ui.rs - egui front end: model menu, controls, canvas and statistics

use automata::{Automaton, Cell, Life, ModelKind};
use eframe::egui;

use crate::app::{AutomataApp, Screen, Session};
use crate::canvas::to_color32;

impl eframe::App for AutomataApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver the frame the running session asked for last time round
        self.pump();

        let mut back = false;
        let mut picked = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            match &mut self.screen {
                Screen::Menu => {
                    picked = menu(ui);
                }
                Screen::Life(session) => {
                    back = back_button(ui);
                    life_screen(ui, session);
                }
                Screen::Fire(session) => {
                    back = back_button(ui);
                    model_screen(ui, session);
                }
                Screen::Sir(session) => {
                    back = back_button(ui);
                    model_screen(ui, session);
                }
            }
        });

        if back {
            self.close();
        }
        if let Some(kind) = picked {
            self.open(kind, ctx);
        }
    }
}

fn menu(ui: &mut egui::Ui) -> Option<ModelKind> {
    ui.heading("Choose a cellular automaton");
    ui.separator();

    let mut picked = None;
    for kind in ModelKind::ALL {
        if ui.button(kind.name()).clicked() {
            picked = Some(kind);
        }
    }
    picked
}

fn back_button(ui: &mut egui::Ui) -> bool {
    ui.button("← Back").clicked()
}

/// Rows, cols and interval inputs plus start/pause and reset.
fn controls<A: Automaton>(ui: &mut egui::Ui, session: &mut Session<A>) {
    ui.horizontal(|ui| {
        ui.label("Rows:");
        let rows = ui.add(egui::TextEdit::singleline(&mut session.rows_text).desired_width(40.0));
        ui.label("Cols:");
        let cols = ui.add(egui::TextEdit::singleline(&mut session.cols_text).desired_width(40.0));
        if rows.lost_focus() || cols.lost_focus() {
            session.apply_dimensions();
        }

        ui.separator();

        ui.label("Interval (ms):");
        let interval = ui.add(egui::TextEdit::singleline(&mut session.interval_text).desired_width(50.0));
        if interval.lost_focus() {
            session.apply_interval();
        }
    });

    ui.horizontal(|ui| {
        let button_text = if session.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
        if ui.button(button_text).clicked() {
            session.toggle_running();
        }

        if ui.button("⟲ Reset").clicked() {
            session.reset();
        }
    });
}

/// Per-state counts under the canvas, each with its colour swatch.
fn statistics<A: Automaton>(ui: &mut egui::Ui, session: &Session<A>) {
    let census = session.sim.census();
    ui.horizontal(|ui| {
        for &(state, count) in &census.counts {
            ui.colored_label(to_color32(state.colour()), "■");
            ui.label(format!("{}: {} ({:.1}%)", state.label(), count, census.percent(state)));
            ui.separator();
        }
    });
}

// Large grids outgrow the window
fn canvas<A: Automaton>(ui: &mut egui::Ui, session: &Session<A>) -> egui::Response {
    egui::ScrollArea::both()
        .max_height((ui.available_height() - 40.0).max(100.0))
        .show(ui, |ui| session.canvas.show(ui))
        .inner
}

fn model_screen<A: Automaton>(ui: &mut egui::Ui, session: &mut Session<A>) {
    ui.heading(A::NAME);
    controls(ui, session);
    ui.separator();

    canvas(ui, session);

    ui.separator();
    statistics(ui, session);
}

fn life_screen(ui: &mut egui::Ui, session: &mut Session<Life>) {
    ui.heading(Life::NAME);
    controls(ui, session);

    ui.horizontal(|ui| {
        if ui.button("🎲 Random").clicked() {
            session.randomize();
        }
        ui.separator();
        ui.label(format!("Generation: {}", session.sim.generation()));
    });

    ui.label("Click cells to toggle them alive/dead.");
    ui.separator();

    let response = canvas(ui, session);
    if response.clicked() {
        let hit = response
            .interact_pointer_pos()
            .and_then(|pos| session.canvas.cell_at(response.rect.min, pos));
        if let Some((row, col)) = hit {
            session.sim.toggle_cell(row, col, &mut session.canvas);
        }
    }

    ui.separator();
    statistics(ui, session);
}
