use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use toolhub::config::Config;
use toolhub::ui::{ConsoleHost, Element, Page};
use toolhub::{FollowOutcome, HttpToolsApi, ToolsApi, ToolsClient};

type Client = ToolsClient<HttpToolsApi, ConsoleHost>;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolhub")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolhub.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn build_client(config: &Config, page: Page) -> Result<Client> {
    let api = HttpToolsApi::new(&config.api).context("Failed to create API client")?;
    info!("Using API at {}", api.base_url());
    Ok(ToolsClient::new(api, ConsoleHost, page, &config.ui))
}

fn print_slot(slot: Option<&Element>) {
    match slot {
        Some(el) => println!("{}", el.inner_html()),
        None => println!("{}", "(empty)".dimmed()),
    }
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => handle_page_command(config).await,
        Some(Commands::Profile) => handle_profile_command(config).await,
        Some(Commands::Catalog) => handle_catalog_command(config).await,
        Some(Commands::Platform { name }) => handle_platform_command(name, config).await,
        Some(Commands::Subcategory {
            platform,
            category,
            subcategory,
        }) => handle_subcategory_command(platform, category, subcategory, config).await,
        Some(Commands::Search { query }) => handle_search_command(query, config).await,
        Some(Commands::Follow { tool }) => handle_follow_command(tool, config).await,
        Some(Commands::Featured) => handle_featured_command(config).await,
        Some(Commands::Health) => handle_health_command(config).await,
        Some(Commands::CheckUsername { username }) => handle_check_username_command(username, config).await,
    }
}

async fn handle_page_command(config: &Config) -> Result<()> {
    let page = Page::new(config.ui.page_path.clone())
        .with_user_info_slots(1)
        .with_search_input()
        .with_categories()
        .with_tools_list();
    let mut client = build_client(config, page)?;
    client.init().await;
    println!("{}", client.page().to_html());
    Ok(())
}

async fn handle_profile_command(config: &Config) -> Result<()> {
    let mut client = build_client(config, Page::new(config.ui.page_path.clone()).with_user_info_slots(1))?;
    if !client.load_user().await {
        eprintln!("{}", "Could not load profile".red());
        return Ok(());
    }
    print_slot(client.page().user_info.first());
    if let Some(user) = client.session().user() {
        eprintln!(
            "{} {} following {} tools",
            "Profile:".green(),
            user.username,
            user.followed_tools.len()
        );
    }
    Ok(())
}

async fn handle_catalog_command(config: &Config) -> Result<()> {
    let mut client = build_client(config, Page::tools_page(Vec::<String>::new()))?;
    client.load_user().await;
    if !client.load_tools().await {
        eprintln!("{}", "Could not load catalog".red());
        return Ok(());
    }
    print_slot(client.page().tools_list.as_ref());
    eprintln!("{} {} tools", "Catalog:".green(), client.page().tool_cards().len());
    Ok(())
}

async fn handle_platform_command(name: &str, config: &Config) -> Result<()> {
    info!("Loading platform: {}", name);
    let mut client = build_client(config, Page::tools_page([name]))?;
    if !client.load_tools_by_platform(name).await {
        eprintln!("{} {}", "Could not load platform:".red(), name);
        return Ok(());
    }
    print_slot(client.page().categories.as_ref());
    Ok(())
}

async fn handle_subcategory_command(platform: &str, category: &str, subcategory: &str, config: &Config) -> Result<()> {
    info!("Loading subcategory: {} / {} / {}", platform, category, subcategory);
    let mut client = build_client(config, Page::tools_page([platform]))?;
    client.load_user().await;
    if !client.load_subcategory(platform, category, subcategory).await {
        eprintln!("{}", "Could not load subcategory".red());
        return Ok(());
    }
    print_slot(client.page().tools_list.as_ref());
    Ok(())
}

async fn handle_search_command(query: &str, config: &Config) -> Result<()> {
    info!("Searching: {}", query);
    let mut client = build_client(config, Page::tools_page(Vec::<String>::new()))?;
    client.load_user().await;
    if !client.search_tools(query).await {
        eprintln!(
            "{} query must be at least {} characters, or the search failed",
            "No results:".yellow(),
            config.ui.min_query_len
        );
        return Ok(());
    }
    print_slot(client.page().tools_list.as_ref());
    Ok(())
}

async fn handle_follow_command(tool: &str, config: &Config) -> Result<()> {
    let mut client = build_client(config, Page::tools_page(Vec::<String>::new()))?;
    client.load_user().await;
    match client.toggle_follow(tool).await {
        FollowOutcome::Followed => println!("{} {}", "Following:".green(), tool),
        FollowOutcome::Unfollowed => println!("{} {}", "Unfollowed:".yellow(), tool),
        FollowOutcome::NeedsAccount => {}
        FollowOutcome::Failed => eprintln!("{} {}", "Failed to update follow state for".red(), tool),
    }
    Ok(())
}

async fn handle_featured_command(config: &Config) -> Result<()> {
    let mut client = build_client(config, Page::new(config.ui.page_path.clone()).with_featured())?;
    if !client.load_featured().await {
        eprintln!("{}", "Could not load featured tools".red());
        return Ok(());
    }
    print_slot(client.page().featured.as_ref());
    Ok(())
}

async fn handle_health_command(config: &Config) -> Result<()> {
    let api = HttpToolsApi::new(&config.api).context("Failed to create API client")?;
    let health = api.health().await.context("Health check failed")?;
    let status = if health.is_healthy() {
        health.status.green()
    } else {
        health.status.red()
    };
    println!("{} {}", "Status:".cyan(), status);
    println!("  users: {}  tools: {}  posts: {}", health.users, health.tools, health.posts);
    println!("  at {}", health.timestamp);
    Ok(())
}

async fn handle_check_username_command(username: &str, config: &Config) -> Result<()> {
    let api = HttpToolsApi::new(&config.api).context("Failed to create API client")?;
    let result = api
        .check_username(username)
        .await
        .context("Username check failed")?;
    if result.available {
        println!("{} {}", "Available:".green(), username);
    } else {
        println!("{} {}", "Taken:".red(), username);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
        config.validate().context("Invalid --base-url")?;
    }

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
