/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use smugbatch::v1::{API_ORIGIN, AlbumRegistry, Client, ClientOptions, Creds, SessionState};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "smugbatch")]
#[command(about = "Log in to SmugMug and list the account's albums")]
#[command(version)]
struct Cli {
    /// Account email address
    #[arg(short, long, env = "SMUGMUG_EMAIL")]
    email: String,

    /// Account password
    #[arg(short, long, env = "SMUGMUG_PASSWORD", hide_env_values = true)]
    password: String,

    /// API key issued by SmugMug
    #[arg(long, env = "SMUGMUG_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Origin of the REST API
    #[arg(long, env = "SMUGMUG_API_ORIGIN", default_value = API_ORIGIN)]
    api_origin: String,

    /// Print debug output
    #[arg(short, long)]
    debug: bool,

    /// Do not verify the server's TLS certificate
    #[arg(long)]
    insecure: bool,

    /// Print the albums as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn print_albums(albums: &AlbumRegistry, json: bool) -> Result<()> {
    if json {
        println!("{}", albums.to_json()?);
        return Ok(());
    }
    println!("Available albums:\nAlbum ID\tAlbum Name");
    for album in albums {
        println!("{}\t\t{}", album.id, album.title);
    }
    Ok(())
}

fn stage_message(stage: Option<SessionState>) -> &'static str {
    match stage {
        Some(SessionState::Authenticating) => "error trying to login",
        Some(SessionState::ListingAlbums) => "error trying to read list of albums",
        _ => "error",
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.debug);

    let options = ClientOptions {
        api_key: cli.api_key,
        api_origin: cli.api_origin,
        insecure: cli.insecure,
    };
    let client = Client::new(Creds::new(&cli.email, &cli.password), &options)?;
    let report = client.list_albums().await;

    if let Some(err) = &report.logout_error {
        eprintln!("error trying to logout: {err}");
    }

    match &report.albums {
        Ok(albums) => print_albums(albums, cli.json)?,
        Err(err) => eprintln!("{}: {}", stage_message(report.failed_stage), err),
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
