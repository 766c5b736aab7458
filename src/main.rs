use answer_check::utils::logger;
use answer_check::{AnswerCheck, CheckError, Settings};

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger("warn");
            fail(e);
        }
    };

    logger::init_cli_logger(&settings.logging.level);
    tracing::debug!(?settings, "configuration loaded");

    let source = match settings.answer_source() {
        Ok(source) => source,
        Err(e) => fail(e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match AnswerCheck::new(source).run(&mut out) {
        Ok(outcome) => std::process::exit(outcome.exit_status()),
        Err(e) => fail(e),
    }
}

fn fail(e: CheckError) -> ! {
    tracing::error!(category = ?e.category(), "answer check failed: {}", e);
    eprintln!("answer-check: {}", e);
    std::process::exit(e.exit_code());
}
