mod args;
mod attack;
mod entry;
mod error;
mod logger;
mod metrics;
mod output;
mod report;
mod targets;

fn main() {
    if let Err(err) = entry::run() {
        eprintln!("barrage: {}", err);
        std::process::exit(1);
    }
}
