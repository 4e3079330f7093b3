use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

use greenmetric_core::config::Config;
use greenmetric_core::report::{CarbonReport, EsgReport};
use greenmetric_core::store::{JsonFileStore, RecordKind, RecordStore, SavedRecord};
use greenmetric_core::types::Severity;
use greenmetric_core::{assess_esg, assess_footprint, AssessOptions};

const DEFAULT_STORE: &str = "greenmetric-records.json";

#[derive(Parser, Debug)]
#[command(
    name = "greenmetric",
    version,
    about = "Carbon footprint and ESG readiness calculator for Malaysian businesses"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a Scope 1/2/3 carbon footprint from a JSON input file
    Carbon {
        #[arg(long)]
        input: PathBuf,

        /// Benchmark industry; overrides the company profile
        #[arg(long)]
        industry: Option<String>,

        #[arg(long, default_value = "greenmetric-out")]
        out: PathBuf,

        /// Append the report to the record store
        #[arg(long)]
        save: bool,

        #[arg(long)]
        store: Option<PathBuf>,

        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Score an ESG questionnaire response file
    Assess {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        industry: Option<String>,

        /// Readiness gate: exit 2 when the overall score is below this
        #[arg(long)]
        min_score: Option<u32>,

        #[arg(long, default_value = "greenmetric-out")]
        out: PathBuf,

        #[arg(long)]
        save: bool,

        #[arg(long)]
        store: Option<PathBuf>,

        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List or clear saved results
    History {
        #[arg(long)]
        store: Option<PathBuf>,

        #[arg(long)]
        clear: bool,

        #[arg(long)]
        config: Option<PathBuf>,
    },
}

struct Style {
    bold: &'static str,
    dim: &'static str,
    red: &'static str,
    green: &'static str,
    yellow: &'static str,
    orange: &'static str,
    reset: &'static str,
}

const COLOR: Style = Style {
    bold: "\x1b[1m",
    dim: "\x1b[2m",
    red: "\x1b[31m",
    green: "\x1b[32m",
    yellow: "\x1b[33m",
    orange: "\x1b[38;5;208m",
    reset: "\x1b[0m",
};

const PLAIN: Style = Style {
    bold: "",
    dim: "",
    red: "",
    green: "",
    yellow: "",
    orange: "",
    reset: "",
};

fn style() -> &'static Style {
    if std::env::var_os("NO_COLOR").is_some() {
        &PLAIN
    } else {
        &COLOR
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let res = match cli.cmd {
        Commands::Carbon {
            input,
            industry,
            out,
            save,
            store,
            config,
        } => {
            let cfg = load_config(config.as_deref());
            run_carbon(&input, industry, &out, save, store, &cfg)
        }
        Commands::Assess {
            input,
            industry,
            min_score,
            out,
            save,
            store,
            config,
        } => {
            let cfg = load_config(config.as_deref());
            run_assess(&input, industry, min_score, &out, save, store, &cfg)
        }
        Commands::History {
            store,
            clear,
            config,
        } => {
            let cfg = load_config(config.as_deref());
            run_history(store, clear, &cfg)
        }
    };

    match res {
        Ok(code) => code,
        Err(e) => {
            let s = style();
            eprintln!(
                "{}{red}error:{reset} {:#}",
                s.bold,
                e,
                red = s.red,
                reset = s.reset
            );
            std::process::ExitCode::from(1)
        }
    }
}

fn print_banner() {
    let s = style();
    eprintln!(
        "\n  {bold}green{reset}{orange}|{reset}{dim}metric{reset}  {dim}carbon & esg calculator{reset}\n",
        bold = s.bold,
        orange = s.orange,
        dim = s.dim,
        reset = s.reset,
    );
}

fn score_color(score: u32) -> &'static str {
    let s = style();
    if score >= 80 {
        s.green
    } else if score >= 40 {
        s.yellow
    } else {
        s.red
    }
}

fn severity_color(sev: &Severity) -> &'static str {
    let s = style();
    match sev {
        Severity::High => s.red,
        Severity::Medium => s.yellow,
        Severity::Low => s.dim,
    }
}

fn commas(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let bytes = digits.as_bytes();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        result.push('-');
    }
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(b as char);
    }
    result
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| {
            eprintln!(
                "{}{}warning:{} failed to load config {}: {}",
                style().bold,
                style().yellow,
                style().reset,
                p.display(),
                e
            );
            Config::default()
        }),
        None => Config::discover().unwrap_or_default(),
    }
}

fn warn_unknown_industry(industry: &str) {
    let s = style();
    let known: Vec<&str> = greenmetric_core::benchmark::known_industries().collect();
    eprintln!(
        "  {}{}warning:{} no benchmark data for industry {:?} (known: {})",
        s.bold,
        s.yellow,
        s.reset,
        industry,
        known.join(", ")
    );
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

fn write_artifacts(out: &Path, json: &impl serde::Serialize, md: String) -> anyhow::Result<()> {
    std::fs::create_dir_all(out).with_context(|| format!("create out dir {}", out.display()))?;

    let json_path = out.join("report.json");
    let bytes = serde_json::to_vec_pretty(json).context("serialize report json")?;
    std::fs::write(&json_path, bytes).with_context(|| format!("write {}", json_path.display()))?;

    let md_path = out.join("report.md");
    std::fs::write(&md_path, md).with_context(|| format!("write {}", md_path.display()))?;

    Ok(())
}

fn resolve_store(flag: Option<PathBuf>, cfg: &Config) -> JsonFileStore {
    let path = flag
        .or_else(|| cfg.store_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE));
    JsonFileStore::new(path)
}

fn print_out_paths(out: &Path) {
    let s = style();
    eprintln!();
    eprintln!(
        "  {dim}\u{2192} {}{reset}",
        out.join("report.json").display(),
        dim = s.dim,
        reset = s.reset
    );
    eprintln!(
        "  {dim}\u{2192} {}{reset}",
        out.join("report.md").display(),
        dim = s.dim,
        reset = s.reset
    );
    eprintln!();
}

fn print_recommendations(recommendations: &[greenmetric_core::types::Recommendation]) {
    let s = style();
    if !recommendations.is_empty() {
        eprintln!();
        for r in recommendations {
            let sc = severity_color(&r.severity);
            eprintln!(
                "  {sc}{:?}{reset}  {}",
                r.severity,
                r.id,
                sc = sc,
                reset = s.reset
            );
        }
    }
}

fn print_carbon_report(report: &CarbonReport) {
    let s = style();

    for (label, kg) in [
        ("scope1_kg", report.results.scope1_kg),
        ("scope2_kg", report.results.scope2_kg),
        ("scope3_kg", report.results.scope3_kg),
        ("total_kg ", report.results.total_kg),
    ] {
        eprintln!(
            "  {dim}{label}  {reset}{bold}{}{reset}",
            commas(kg),
            dim = s.dim,
            bold = s.bold,
            reset = s.reset
        );
    }

    if let Some(b) = &report.benchmark {
        match b.intensity_kg_per_employee {
            Some(i) => eprintln!(
                "  {dim}intensity  {reset}{bold}{i:.1}{reset} {dim}kg/employee vs {} industry avg{reset}",
                b.industry_avg_intensity,
                dim = s.dim,
                bold = s.bold,
                reset = s.reset
            ),
            None => eprintln!(
                "  {dim}intensity  n/a (no employee count){reset}",
                dim = s.dim,
                reset = s.reset
            ),
        }
    }

    print_recommendations(&report.recommendations);
}

fn print_esg_report(report: &EsgReport) {
    let s = style();

    for (label, score) in [
        ("environmental", report.results.environmental),
        ("social       ", report.results.social),
        ("governance   ", report.results.governance),
        ("overall      ", report.results.overall),
    ] {
        let sc = score_color(score);
        eprintln!(
            "  {dim}{label}  {reset}{sc}{bold}{score}{reset}",
            dim = s.dim,
            sc = sc,
            bold = s.bold,
            reset = s.reset
        );
    }
    eprintln!(
        "  {dim}band           {:?}{reset}",
        report.band,
        dim = s.dim,
        reset = s.reset
    );
    eprintln!(
        "  {dim}market         {:?}{reset}",
        report.market_standing,
        dim = s.dim,
        reset = s.reset
    );

    if let Some(b) = &report.benchmark {
        eprintln!(
            "  {dim}benchmark      {} avg {} ({:?}){reset}",
            b.industry,
            b.industry_avg_score,
            b.performance,
            dim = s.dim,
            reset = s.reset
        );
    }

    print_recommendations(&report.recommendations);
}

fn run_carbon(
    input: &Path,
    industry: Option<String>,
    out: &Path,
    save: bool,
    store: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<std::process::ExitCode> {
    print_banner();

    let data = read_json(input)?;
    let opts = AssessOptions {
        factors: cfg.factors(),
        industry: industry.or_else(|| cfg.industry.clone()),
    };

    let report = assess_footprint(&data, &opts)?;
    write_artifacts(out, &report, report.to_markdown())?;

    let effective_industry = opts
        .industry
        .as_deref()
        .unwrap_or(data.company.industry.as_str());
    if !effective_industry.is_empty() && report.benchmark.is_none() {
        warn_unknown_industry(effective_industry);
    }

    // Machine-parseable line on stdout
    println!(
        "scope1_kg={} scope2_kg={} scope3_kg={} total_kg={}",
        report.results.scope1_kg,
        report.results.scope2_kg,
        report.results.scope3_kg,
        report.results.total_kg
    );

    print_carbon_report(&report);

    if save {
        let store = resolve_store(store, cfg);
        store.append(SavedRecord::new(RecordKind::Calculation, &report)?)?;
        eprintln!(
            "  {dim}saved to {}{reset}",
            store.path().display(),
            dim = style().dim,
            reset = style().reset
        );
    }

    print_out_paths(out);
    Ok(std::process::ExitCode::from(0))
}

fn run_assess(
    input: &Path,
    industry: Option<String>,
    min_score: Option<u32>,
    out: &Path,
    save: bool,
    store: Option<PathBuf>,
    cfg: &Config,
) -> anyhow::Result<std::process::ExitCode> {
    let s = style();

    print_banner();

    let responses = read_json(input)?;
    let opts = AssessOptions {
        industry: industry.or_else(|| cfg.industry.clone()),
        ..AssessOptions::default()
    };

    let report = assess_esg(&responses, &opts)?;
    write_artifacts(out, &report, report.to_markdown())?;

    if let Some(industry) = opts.industry.as_deref() {
        if !industry.is_empty() && report.benchmark.is_none() {
            warn_unknown_industry(industry);
        }
    }

    // Machine-parseable line on stdout
    println!(
        "environmental={} social={} governance={} overall={}",
        report.results.environmental,
        report.results.social,
        report.results.governance,
        report.results.overall
    );

    print_esg_report(&report);

    if save {
        let store = resolve_store(store, cfg);
        store.append(SavedRecord::new(RecordKind::Assessment, &report)?)?;
        eprintln!(
            "  {dim}saved to {}{reset}",
            store.path().display(),
            dim = s.dim,
            reset = s.reset
        );
    }

    print_out_paths(out);

    let min_score = min_score.or(cfg.min_score);
    let exit = match min_score {
        Some(threshold) if report.results.overall < threshold => {
            eprintln!(
                "  {red}{bold}GATE FAILED{reset}  {dim}(overall {} < {} minimum){reset}",
                report.results.overall,
                threshold,
                red = s.red,
                bold = s.bold,
                dim = s.dim,
                reset = s.reset,
            );
            std::process::ExitCode::from(2)
        }
        _ => {
            eprintln!(
                "  {green}{bold}PASS{reset}",
                green = s.green,
                bold = s.bold,
                reset = s.reset
            );
            std::process::ExitCode::from(0)
        }
    };

    eprintln!();
    Ok(exit)
}

fn run_history(
    store: Option<PathBuf>,
    clear: bool,
    cfg: &Config,
) -> anyhow::Result<std::process::ExitCode> {
    let s = style();
    let store = resolve_store(store, cfg);

    if clear {
        store.clear()?;
        println!("records=0");
        eprintln!(
            "  {dim}cleared {}{reset}",
            store.path().display(),
            dim = s.dim,
            reset = s.reset
        );
        return Ok(std::process::ExitCode::from(0));
    }

    let records = store.list()?;
    println!("records={}", records.len());
    for r in &records {
        eprintln!(
            "  {dim}{}  {}{reset}  {}",
            r.created_at.to_rfc3339(),
            match r.kind {
                RecordKind::Calculation => "calculation",
                RecordKind::Assessment => "assessment ",
            },
            r.id,
            dim = s.dim,
            reset = s.reset
        );
    }

    Ok(std::process::ExitCode::from(0))
}
