use clap::Parser;
use contact_form::config::{Cli, Config};
use contact_form::runtime::Runtime;
use contact_form::state::app_state::AppState;
use contact_form::terminal::{Terminal, TerminalSize};
use contact_form::ui::frame_json::frame_to_json;
use contact_form::ui::renderer::Renderer;
use contact_form::{ContactForm, Result, logging, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    logging::init_logging(&config.logging)?;
    tracing::info!(
        render_mode = ?config.render_mode,
        output = ?config.output,
        "starting contact form"
    );

    let state = AppState::new(ContactForm::with_state(config.prefill.clone()));

    if config.dump_frame {
        let frame = Renderer::default().render(&state);
        let json = frame_to_json(&frame, TerminalSize::probe());
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let terminal = Terminal::new()?.with_mode(config.render_mode);
    let mut runtime = Runtime::new(state, terminal);
    runtime.run()?;

    let form = runtime.into_state().into_form();
    match form.submitted() {
        Some(record) => println!("{}", output::format_record(record, config.output)?),
        None => tracing::info!("exited without submitting"),
    }
    Ok(())
}
