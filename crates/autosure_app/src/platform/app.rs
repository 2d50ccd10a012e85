use std::io::{self, Write};
use std::process::ExitCode;

use autosure_core::{update, AppState, Msg, UploadState};
use autosure_logging::{autosure_error, autosure_info};
use clap::Parser;

use super::cli::Cli;
use super::effects::EffectRunner;
use super::ui;

pub fn run_app() -> ExitCode {
    let cli = Cli::parse();
    autosure_logging::initialize(&cli.log_destination(), cli.log_level());

    let stdout = io::stdout();
    let mut shell = Shell::new(EffectRunner::new(cli.upload_settings()), stdout.lock());
    match shell.run(&cli) {
        Ok(UploadState::Succeeded) => ExitCode::SUCCESS,
        Ok(state) => {
            autosure_info!("Finished in state {:?}", state);
            ExitCode::FAILURE
        }
        Err(err) => {
            autosure_error!("Output failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

struct Shell<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(runner: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            runner,
            out,
        }
    }

    /// Applies the picks, submits once and waits for the submission to settle.
    fn run(&mut self, cli: &Cli) -> io::Result<UploadState> {
        for pick in cli.picks() {
            match pick.load() {
                Ok(file) => self.dispatch(Msg::FilePicked {
                    affordance: pick.affordance,
                    file: Some(file),
                })?,
                Err(err) => {
                    autosure_error!("Skipping {:?} pick: {:#}", pick.affordance, err);
                    eprintln!("{err:#}");
                }
            }
        }

        self.dispatch(Msg::SubmitClicked)?;
        while let Some(in_flight) = self.state.in_flight_submission() {
            let msg = self.runner.next_message(in_flight);
            self.dispatch(msg)?;
        }

        for line in ui::render::render(&self.state.view()) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(self.state.upload_state())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        if was_dirty {
            writeln!(self.out, "{}", ui::render::status_line(&view))?;
        }
        self.runner.run(effects, &mut self.out)
    }
}
