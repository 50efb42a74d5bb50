// main.rs - Displays a seeded life grid with a Step control
// Settings come from config.rs, drawing lives in ui.rs

use eframe::egui;
use egui::Color32;
use life_grid::{cell_visual, render, CellVisual, Grid, NoopStep, StepStrategy};

mod config;   // life_grid.toml settings
mod ui;       // eframe::App impl

use config::Settings;

/// Identifier of the region the grid is painted into.
pub const MOUNT_ID: &str = "main";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load().unwrap_or_else(|err| {
        log::warn!("{}; using default settings", err);
        Settings::default()
    });

    let (settings, grid) = startup_grid(settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    let app = GridApp::new(grid, Box::new(NoopStep), &settings);

    eframe::run_native(
        "Life Grid",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}

/// Builds the startup grid, falling back to the default settings when the
/// configured ones cannot produce a grid.
fn startup_grid(settings: Settings) -> (Settings, Grid) {
    match settings.build_grid() {
        Ok(grid) => (settings, grid),
        Err(err) => {
            log::warn!("cannot build grid: {}; using default settings", err);
            let defaults = Settings::default();
            let grid = defaults.build_grid().expect("default settings build a grid");
            (defaults, grid)
        }
    }
}

pub struct GridApp {
    grid: Grid,
    visuals: Grid<CellVisual>,   // render output of `grid`
    step: Box<dyn StepStrategy>,
    pub live_color: Color32,
    pub dead_color: Color32,
}

impl GridApp {
    pub fn new(grid: Grid, step: Box<dyn StepStrategy>, settings: &Settings) -> Self {
        let visuals = render(cell_visual, &grid);
        Self {
            grid,
            visuals,
            step,
            live_color: settings.live_color(),
            dead_color: settings.dead_color(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn visuals(&self) -> &Grid<CellVisual> {
        &self.visuals
    }

    /// Runs the step strategy; a returned grid replaces the current one.
    pub fn on_step(&mut self) {
        log::info!("step clicked ({})", self.step.name());
        if let Some(next) = self.step.step(&self.grid) {
            self.visuals = render(cell_visual, &next);
            self.grid = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_grid::seed::{all_alive, checkerboard};

    #[test]
    fn new_app_renders_every_cell() {
        let grid = Grid::build(5, 4, checkerboard()).unwrap();
        let app = GridApp::new(grid, Box::new(NoopStep), &Settings::default());
        assert_eq!(app.visuals().width(), 5);
        assert_eq!(app.visuals().height(), 4);
        assert_eq!(app.visuals().iter().count(), 20);
    }

    #[test]
    fn unbuildable_settings_fall_back_to_defaults() {
        let settings = Settings { width: 0, ..Settings::default() };
        let (used, grid) = startup_grid(settings);
        assert_eq!(used, Settings::default());
        assert_eq!((grid.width(), grid.height()), (7, 7));
    }

    #[test]
    fn buildable_settings_are_kept() {
        let settings = Settings { width: 3, height: 2, seed: Some(5), ..Settings::default() };
        let (used, grid) = startup_grid(settings.clone());
        assert_eq!(used, settings);
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }

    #[test]
    fn noop_step_keeps_grid() {
        let grid = Grid::build(3, 3, checkerboard()).unwrap();
        let mut app = GridApp::new(grid.clone(), Box::new(NoopStep), &Settings::default());
        app.on_step();
        assert_eq!(app.grid(), &grid);
    }

    #[test]
    fn replacing_step_rerenders() {
        struct Fill;
        impl StepStrategy for Fill {
            fn name(&self) -> &str {
                "fill"
            }
            fn step(&mut self, grid: &Grid) -> Option<Grid> {
                Grid::build(grid.width(), grid.height(), all_alive()).ok()
            }
        }

        let grid = Grid::build(2, 2, checkerboard()).unwrap();
        let mut app = GridApp::new(grid, Box::new(Fill), &Settings::default());
        app.on_step();
        assert_eq!(app.grid().live_cells(), 4);
        assert!(app.visuals().iter().all(|v| v.class.css() == "cell alive"));
    }
}
