use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitprofile::models::ProfileReport;
use gitprofile::{Config, GitHubClient, ProfileAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "gitprofile")]
#[command(version = "0.1.0")]
#[command(about = "Analyze a GitHub profile: languages, activity, skill level")]
struct Args {
    /// GitHub username to analyze
    #[arg(short, long)]
    username: String,

    /// Personal access token (overrides GITHUB_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gitprofile=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if args.token.is_some() {
        config.github_token = args.token.clone();
    }

    let github = GitHubClient::from_config(&config)?;
    let analyzer = ProfileAnalyzer::new(github);

    tracing::info!("Starting analysis for GitHub user: {}", args.username);
    let report = analyzer.analyze(&args.username).await?;

    output_report(&report, &args)?;

    Ok(())
}

fn output_report(report: &ProfileReport, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(report)?,
        _ => format_text(report),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &ProfileReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== Profile Analysis: {} ===\n\n",
        report.username
    ));

    if let Some(ref bio) = report.bio {
        output.push_str(&format!("Bio: {}\n", bio));
    }
    output.push_str(&format!("Public repos: {}\n", report.public_repos));
    output.push_str(&format!(
        "Followers / following: {} / {}\n",
        report.followers, report.following
    ));
    output.push_str(&format!("Skill level: {}\n", report.skill_level));
    output.push_str(&format!(
        "Recent commits (sampled): {}\n",
        report.total_commits
    ));
    output.push_str(&format!(
        "Active: {}\n\n",
        if report.is_active { "yes" } else { "no" }
    ));

    if !report.primary_languages.is_empty() {
        output.push_str("Primary languages:\n");
        for share in &report.primary_languages {
            output.push_str(&format!("  - {} ({}%)\n", share.language, share.percentage));
        }
    }

    if !report.most_active_repos.is_empty() {
        output.push_str("\nMost active repositories:\n");
        for repo in &report.most_active_repos {
            output.push_str(&format!(
                "  - {} ({} stars, {} forks, updated {})\n",
                repo.name,
                repo.stars,
                repo.forks,
                repo.last_updated.format("%Y-%m-%d")
            ));
        }
    }

    output.push_str(&format!(
        "\nActive repos in the last 30 days: {}\n",
        report.recent_activity.active_repos_count
    ));
    if let Some(last) = report.recent_activity.last_activity {
        output.push_str(&format!(
            "Last activity: {}\n",
            last.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    output
}
