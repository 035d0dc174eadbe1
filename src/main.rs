mod app;
mod console;
mod entry;
mod mergesort;
mod order;
mod pipeline;
mod sample;
mod text;
mod timestamp;

use log::*;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::{env, io, path::Path};

use pipeline::Report;

const LOG_CONFIG_FILE: &str = "log4rs.yaml";
const LOG_FILE: &str = "linelog.log";

#[derive(Debug, Default)]
struct Options {
    print: bool,
    issue: Option<u32>,
    files: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options, io::Error> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--print" => options.print = true,
            "--issue" => {
                let value = iter.next().ok_or_else(|| {
                    io::Error::new(io::ErrorKind::InvalidInput, "--issue needs a value")
                })?;
                let code = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("--issue must be a number, got={}", value),
                    )
                })?;
                options.issue = Some(code);
            }
            flag if flag.starts_with("--") => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("unknown option={}, usage: linelog [--print] [--issue <code>] [FILE...]", flag),
                ))
            }
            file => options.files.push(file.to_string()),
        }
    }

    Ok(options)
}

fn init_logging() -> Result<(), io::Error> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        return log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()));
    }

    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.6f)} {f:>20} {l:<5} - {M} - {m}{n}",
        )))
        .build(LOG_FILE)?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
}

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    init_logging()?;
    info!("main - start, options={:?}", options);

    let line_logs = if options.files.is_empty() {
        sample::line_logs()
    } else {
        text::load_line_logs(&options.files)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?
    };

    let report = Report::build(line_logs);

    if options.print {
        console::print_report(&report, options.issue)?;
    } else {
        app::run_app(report)?;
    }

    info!("main - done");
    Ok(())
}
