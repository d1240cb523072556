use std::io;
use std::process::exit;
use waitbar::{init_tracing, millis, wait_with_progress, BarDisplay, Opt, SystemClock};

fn main() {
    let opt = match Opt::try_parse_args(std::env::args_os()) {
        Ok(opt) => opt,
        // `--help` and `--version` come through here too.
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // clap's message carries its own short usage block; keep only
            // the first line so the full help below isn't preceded by it.
            let message = err.to_string();
            eprintln!("{}\n", message.lines().next().unwrap_or_default());
            let _ = Opt::write_usage(&mut io::stderr());
            exit(1);
        }
    };

    init_tracing();

    if let Err(err) = run(&opt) {
        eprintln!("Error: {:?}", err);
        exit(1);
    }
}

fn run(opt: &Opt) -> anyhow::Result<()> {
    let interval = opt.interval()?;
    let total = millis(opt.wait);

    let display = if opt.quiet {
        BarDisplay::hidden(total)?
    } else {
        BarDisplay::new(total)?
    };

    let report = wait_with_progress(opt.wait, interval, &mut SystemClock, display);
    tracing::info!(updates = report.updates, elapsed = ?report.elapsed, "done");

    Ok(())
}
