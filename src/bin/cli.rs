use anyhow::{Context, bail};
use indicatif::{ProgressBar, ProgressStyle};
use nnuebin::logger::init_logging;
use nnuebin::record::RECORD_BYTES;
use nnuebin::summary::DatasetSummary;
use nnuebin::{ReaderOptions, RecordReader, Sample};
use rand::Rng;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
#[structopt(name = "nnuebin", about = "Inspect files of packed 40-byte training records")]
struct Cli {
    /// Append logs to this file
    #[structopt(long)]
    log: Option<PathBuf>,

    /// Log filter, overridden by RUST_LOG
    #[structopt(long, default_value = "nnuebin=info")]
    log_filter: String,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Print the number of whole records
    Count(CountOptions),
    /// Print the first records
    Head(HeadOptions),
    /// Scan every record and print a summary
    Stats(StatsOptions),
    /// Print records at random positions
    Sample(SampleOptions),
}

#[derive(StructOpt)]
struct CountOptions {
    #[structopt(required = true)]
    input: PathBuf,
}

#[derive(StructOpt)]
struct HeadOptions {
    #[structopt(required = true)]
    input: PathBuf,

    /// Number of records to print
    #[structopt(short = "n", long, default_value = "10")]
    count: usize,

    /// Byte offset of the first record
    #[structopt(long, default_value = "0")]
    offset: u64,
}

#[derive(StructOpt)]
struct StatsOptions {
    #[structopt(required = true)]
    input: PathBuf,
}

#[derive(StructOpt)]
struct SampleOptions {
    #[structopt(required = true)]
    input: PathBuf,

    /// Number of records to print
    #[structopt(short = "n", long, default_value = "10")]
    count: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::from_args();

    if let Some(path) = &cli.log {
        init_logging(path, &cli.log_filter)
            .with_context(|| format!("Failed to open log file [{}]", path.display()))?;
    }

    match &cli.command {
        Command::Count(options) => options.run(),
        Command::Head(options) => options.run(),
        Command::Stats(options) => options.run(),
        Command::Sample(options) => options.run(),
    }
}

fn open(input: &Path, options: ReaderOptions) -> anyhow::Result<RecordReader> {
    RecordReader::open_with(input, options)
        .with_context(|| format!("Failed to open [{}]", input.display()))
}

fn print_sample(index: u64, sample: &Sample) {
    println!(
        "{index}: {} | {} | {} | {} | {}",
        sample.board, sample.mv, sample.score, sample.ply, sample.result
    );
}

impl CountOptions {
    fn run(&self) -> anyhow::Result<()> {
        let reader = open(&self.input, ReaderOptions::default())?;
        println!("Records = {}", reader.num_samples());
        println!(
            "Trailing bytes = {}",
            reader.total_bytes() % RECORD_BYTES as u64
        );
        Ok(())
    }
}

impl HeadOptions {
    fn run(&self) -> anyhow::Result<()> {
        let mut reader = open(&self.input, ReaderOptions { offset: self.offset })?;

        for (i, outcome) in reader.samples().take(self.count).enumerate() {
            match outcome {
                Ok(sample) => print_sample(i as u64, &sample),
                Err(e) => println!("{i}: <{e}>"),
            }
        }
        reader.close();
        Ok(())
    }
}

impl StatsOptions {
    fn run(&self) -> anyhow::Result<()> {
        let mut reader = open(&self.input, ReaderOptions::default())?;

        let bar = ProgressBar::new(reader.num_samples());
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} records [{elapsed_precise}]")?,
        );

        let mut summary = DatasetSummary::zero();
        for (i, outcome) in reader.samples().enumerate() {
            summary.record(outcome).context("Read failed")?;
            if i % 16384 == 0 {
                bar.set_position(i as u64);
            }
        }
        bar.finish_and_clear();
        reader.close();

        println!("Summary of [{}]:", self.input.display());
        println!("{summary}");
        Ok(())
    }
}

impl SampleOptions {
    fn run(&self) -> anyhow::Result<()> {
        let mut reader = open(&self.input, ReaderOptions::default())?;
        let n = reader.num_samples();
        if n == 0 {
            bail!("[{}] holds no whole records", self.input.display());
        }

        let mut rng = rand::rng();
        for _ in 0..self.count {
            let index = rng.random_range(0..n);
            reader.seek_to_sample(index)?;
            match reader.read_sample() {
                Ok(sample) => print_sample(index, &sample),
                Err(e) => println!("{index}: <{e}>"),
            }
        }
        reader.close();
        Ok(())
    }
}
