use std::io::{self, BufRead, Write};

use weave_demo::{App, Command, DemoConfig, Outcome, Shell};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = DemoConfig::from_env()?;
    log::debug!("config: {config:?}");

    let shell = Shell::new(App::new(config));
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", shell.app().render())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.parse::<Command>().and_then(|c| shell.execute(c)) {
            Ok(Outcome::Output(text)) => writeln!(stdout, "{text}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("error: {e}"),
        }
        stdout.flush()?;
    }
    Ok(())
}
