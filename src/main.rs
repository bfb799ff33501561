//! tfcctl - Main entry point

use clap::Parser;
use log::{debug, info};

use tfcctl::cli::{Cli, Command, VarAction, WsAction};
use tfcctl::hcp::{
    run_run_command, run_upload_command, run_var_convert_command, run_var_copy_command,
    run_var_delete_command, run_var_gcp_command, run_var_import_command, run_var_list_command,
    run_var_set_command, run_ws_create_command, run_ws_delete_command, run_ws_list_command,
};
use tfcctl::{TfeClient, TokenResolver};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfcctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: host={}, batch={}, explain={}",
        cli.host, cli.batch, cli.explain
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Var {
        action: VarAction::Convert(args),
    } = &cli.command
    {
        return run_var_convert_command(args);
    }

    // Resolve token with fallback logic
    let token = TokenResolver::new(&cli.host).resolve(cli.token.as_deref())?;

    let mut client = TfeClient::new(token, cli.host.clone());
    client.set_explain(cli.explain);

    let batch = cli.batch;
    match &cli.command {
        Command::Ws { action } => match action {
            WsAction::List(args) => run_ws_list_command(&client, args, batch).await,
            WsAction::Create(args) => run_ws_create_command(&client, args, batch).await,
            WsAction::Delete(args) => run_ws_delete_command(&client, args, batch).await,
        },
        Command::Var { action } => match action {
            VarAction::List(args) => run_var_list_command(&client, args, batch).await,
            VarAction::Set(args) => run_var_set_command(&client, args, batch).await,
            VarAction::Delete(args) => run_var_delete_command(&client, args, batch).await,
            VarAction::Import(args) => run_var_import_command(&client, args, batch).await,
            VarAction::Gcp(args) => run_var_gcp_command(&client, args, batch).await,
            VarAction::Copy(args) => run_var_copy_command(&client, args, batch).await,
            VarAction::Convert(args) => run_var_convert_command(args),
        },
        Command::Upload(args) => run_upload_command(&client, args, batch).await,
        Command::Run(args) => run_run_command(&client, args, batch).await,
    }
}
