use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use kira_labreport::catalog::Catalog;
use kira_labreport::input::{InputError, load_session, session_template};
use kira_labreport::model::session::SessionError;
use kira_labreport::output::{
    OutputError, REPORT_MIME, write_report, write_stdout, write_summary,
};
use kira_labreport::report::Report;
use kira_labreport::report::html::{
    DEFAULT_HEADER_HEIGHT_PX, DEFAULT_LAB_NAME, RenderOptions, render_report_html,
};
use kira_labreport::report::json::render_summary_json;

#[derive(Debug, Parser)]
#[command(name = "kira-labreport", version)]
#[command(about = "Pathology lab report generator with reference-range checks")]
struct Cli {
    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List available panels with their analytes and reference ranges
    Panels,
    /// Print a blank session file for the given panels
    Template {
        /// Panel name, repeatable; selection order is kept
        #[arg(long = "panel")]
        panels: Vec<String>,
    },
    /// Generate the HTML report from a session file
    Render(RenderArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct RenderArgs {
    /// Session file (JSON)
    #[arg(long)]
    session: PathBuf,
    /// Output directory for lab_report.html
    #[arg(long, required_unless_present = "stdout")]
    out: Option<PathBuf>,
    /// Write the document to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,
    /// Also write lab_report.summary.json next to the report
    #[arg(long, requires = "out")]
    summary: bool,
    /// Height of the fixed header band in pixels
    #[arg(long, default_value_t = DEFAULT_HEADER_HEIGHT_PX)]
    header_height: u32,
    /// Title shown in the header band
    #[arg(long, default_value = DEFAULT_LAB_NAME)]
    lab_name: String,
    /// Start a new printed page after every panel
    #[arg(long)]
    page_break_per_panel: bool,
}

impl RenderArgs {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            header_height_px: self.header_height,
            lab_name: self.lab_name.clone(),
            page_break_per_panel: self.page_break_per_panel,
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Output(#[from] OutputError),
    #[error("failed to render report: {0}")]
    Render(#[from] std::fmt::Error),
}

fn main() {
    let cli = Cli::parse();
    kira_labreport::tracing::init(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let catalog = Catalog::builtin();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Panels => {
            print!("{}", format_panel_list(&catalog));
        }
        Command::Template { panels } => {
            let template = session_template(&catalog, &panels, today)?;
            let text = serde_json::to_string_pretty(&template).map_err(OutputError::from)?;
            println!("{text}");
        }
        Command::Render(args) => {
            let session = load_session(&args.session, &catalog, today)?;
            let report = Report::from_session(&session);
            let html = render_report_html(&report, &args.render_options())?;

            match &args.out {
                Some(out_dir) if !args.stdout => {
                    let path = write_report(out_dir, &html)?;
                    if args.summary {
                        let summary = write_summary(out_dir, &render_summary_json(&report))?;
                        tracing::info!(path = %summary.display(), "summary written");
                    }
                    tracing::info!(
                        path = %path.display(),
                        mime = REPORT_MIME,
                        panels = report.sections.len(),
                        abnormal = report.abnormal_count(),
                        "Report generated"
                    );
                }
                _ => {
                    write_stdout(&html)?;
                    tracing::info!(
                        panels = report.sections.len(),
                        abnormal = report.abnormal_count(),
                        "Report generated"
                    );
                }
            }
            let unparsed = report.unparsed_count();
            if unparsed > 0 {
                tracing::warn!(
                    unparsed,
                    "some results are empty or non-numeric and are shown as normal"
                );
            }
        }
    }
    Ok(())
}

fn format_panel_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for panel in &catalog.panels {
        out.push_str(panel.name);
        out.push('\n');
        for analyte in &panel.analytes {
            out.push_str(&format!("  {}\t{}\n", analyte.name, analyte.range_text));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
