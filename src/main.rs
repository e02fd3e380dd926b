use std::process;

fn main() {
    env_logger::init();
    if let Err(err) = pkiregistry::app::run() {
        eprintln!("fatal: {err:#}");
        process::exit(1);
    }
}
