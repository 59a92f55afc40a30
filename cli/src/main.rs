mod output;

use {
    crate::output::CliStakePool,
    clap::{
        crate_description, crate_name, crate_version, value_t, value_t_or_exit, App, AppSettings,
        Arg, SubCommand,
    },
    solana_clap_utils::{
        input_parsers::pubkey_of,
        input_validators::{is_amount, is_keypair, is_parsable, is_pubkey, is_url},
        keypair::signer_from_path,
    },
    solana_cli_output::OutputFormat,
    solana_client::nonblocking::rpc_client::RpcClient,
    solana_program::{native_token::sol_to_lamports, pubkey::Pubkey},
    solana_sdk::{commitment_config::CommitmentConfig, signature::Signer},
    spl_stake_pool::state::Fee as PoolFee,
    spl_stake_pool_client::{
        stake_pool::{
            actions::{create_all, create_token_metadata, update_token_metadata},
            constants::find_metadata_account,
            state::{get_stake_pool, get_validator_list},
        },
        system::actions::airdrop,
    },
    std::process::exit,
};

struct Config {
    rpc_client: RpcClient,
    verbose: bool,
    output_format: OutputFormat,
    manager: Box<dyn Signer>,
}

type Error = Box<dyn std::error::Error>;
type CommandResult = Result<(), Error>;

async fn command_airdrop(config: &Config, recipient: &Pubkey, lamports: u64) -> CommandResult {
    let signature = airdrop(&config.rpc_client, recipient, lamports).await?;
    println!("Signature: {}", signature);
    Ok(())
}

async fn command_create_pool(config: &Config, fee: PoolFee, referral_fee: u8) -> CommandResult {
    let (stake_pool, validator_list, pool_mint) =
        create_all(&config.rpc_client, config.manager.as_ref(), fee, referral_fee).await?;
    println!("Stake pool {}", stake_pool);
    if config.verbose {
        println!("Validator list {}", validator_list);
        println!("Pool token mint {}", pool_mint);
    }
    Ok(())
}

async fn command_create_token_metadata(
    config: &Config,
    stake_pool_address: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> CommandResult {
    let signature = create_token_metadata(
        &config.rpc_client,
        config.manager.as_ref(),
        stake_pool_address,
        name,
        symbol,
        uri,
    )
    .await?;
    println!("Signature: {}", signature);
    Ok(())
}

async fn command_update_token_metadata(
    config: &Config,
    stake_pool_address: &Pubkey,
    name: &str,
    symbol: &str,
    uri: &str,
) -> CommandResult {
    let signature = update_token_metadata(
        &config.rpc_client,
        config.manager.as_ref(),
        stake_pool_address,
        name,
        symbol,
        uri,
    )
    .await?;
    println!("Signature: {}", signature);
    Ok(())
}

async fn command_show(config: &Config, stake_pool_address: &Pubkey) -> CommandResult {
    let stake_pool = get_stake_pool(&config.rpc_client, stake_pool_address).await?;
    let validator_list = get_validator_list(&config.rpc_client, &stake_pool.validator_list).await?;

    let (metadata_address, _) = find_metadata_account(&stake_pool.pool_mint);
    let token_metadata = config
        .rpc_client
        .get_account_with_commitment(&metadata_address, config.rpc_client.commitment())
        .await?
        .value
        .map(|_| metadata_address);

    let cli_stake_pool = CliStakePool::new(
        stake_pool_address,
        stake_pool,
        validator_list.validators.len(),
        token_metadata,
    );
    println!("{}", config.output_format.formatted_string(&cli_stake_pool));
    Ok(())
}

fn pool_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("pool")
        .long("pool")
        .validator(is_pubkey)
        .value_name("ADDRESS")
        .takes_value(true)
        .required(true)
        .help("Stake pool address")
}

fn metadata_args<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
    app.arg(pool_arg())
        .arg(
            Arg::with_name("name")
                .long("name")
                .value_name("NAME")
                .takes_value(true)
                .required(true)
                .help("Name of the pool token"),
        )
        .arg(
            Arg::with_name("symbol")
                .long("symbol")
                .value_name("SYMBOL")
                .takes_value(true)
                .required(true)
                .help("Symbol of the pool token"),
        )
        .arg(
            Arg::with_name("uri")
                .long("uri")
                .value_name("URI")
                .takes_value(true)
                .required(true)
                .help("URI of the pool token logo or json document"),
        )
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg({
            let arg = Arg::with_name("config_file")
                .short("C")
                .long("config")
                .value_name("PATH")
                .takes_value(true)
                .global(true)
                .help("Configuration file to use");
            if let Some(ref config_file) = *solana_cli_config::CONFIG_FILE {
                arg.default_value(config_file)
            } else {
                arg
            }
        })
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .takes_value(false)
                .global(true)
                .help("Show additional information"),
        )
        .arg(
            Arg::with_name("output_format")
                .long("output")
                .value_name("FORMAT")
                .global(true)
                .takes_value(true)
                .possible_values(&["json", "json-compact"])
                .help("Return information in specified output format"),
        )
        .arg(
            Arg::with_name("json_rpc_url")
                .long("url")
                .value_name("URL")
                .takes_value(true)
                .validator(is_url)
                .help("JSON RPC URL for the cluster.  Default from the configuration file."),
        )
        .arg(
            Arg::with_name("manager")
                .long("manager")
                .value_name("KEYPAIR")
                .validator(is_keypair)
                .takes_value(true)
                .help(
                    "Specify the stake pool manager. \
                     This may be a keypair file, the ASK keyword. \
                     Pays for every account and transaction. \
                     Defaults to the client keypair.",
                ),
        )
        .subcommand(SubCommand::with_name("airdrop").about("Request SOL from the cluster faucet")
            .arg(
                Arg::with_name("recipient")
                    .index(1)
                    .validator(is_pubkey)
                    .value_name("ADDRESS")
                    .takes_value(true)
                    .required(true)
                    .help("Account to receive the airdrop"),
            )
            .arg(
                Arg::with_name("amount")
                    .index(2)
                    .validator(is_amount)
                    .value_name("AMOUNT")
                    .takes_value(true)
                    .required(true)
                    .help("Amount of SOL to request"),
            )
        )
        .subcommand(SubCommand::with_name("create-pool").about("Create a new stake pool with its reserve, mint and fee account")
            .arg(
                Arg::with_name("fee_numerator")
                    .long("fee-numerator")
                    .short("n")
                    .validator(is_parsable::<u64>)
                    .value_name("NUMERATOR")
                    .takes_value(true)
                    .required(true)
                    .help("Fee numerator, fee amount is numerator divided by denominator."),
            )
            .arg(
                Arg::with_name("fee_denominator")
                    .long("fee-denominator")
                    .short("d")
                    .validator(is_parsable::<u64>)
                    .value_name("DENOMINATOR")
                    .takes_value(true)
                    .required(true)
                    .help("Fee denominator, fee amount is numerator divided by denominator."),
            )
            .arg(
                Arg::with_name("referral_fee")
                    .long("referral-fee")
                    .validator(is_parsable::<u8>)
                    .value_name("PERCENTAGE")
                    .takes_value(true)
                    .default_value("0")
                    .help("Percentage of the deposit fee that goes to the referrer."),
            )
        )
        .subcommand(metadata_args(
            SubCommand::with_name("create-token-metadata").about("Create the metadata account of the pool token. Must be signed by the pool manager.")
        ))
        .subcommand(metadata_args(
            SubCommand::with_name("update-token-metadata").about("Update the metadata account of the pool token. Must be signed by the pool manager.")
        ))
        .subcommand(SubCommand::with_name("show").about("Show the stake pool state")
            .arg(pool_arg())
        )
}

#[tokio::main]
async fn main() {
    let matches = app().get_matches();

    let mut wallet_manager = None;
    let config = {
        let cli_config = if let Some(config_file) = matches.value_of("config_file") {
            solana_cli_config::Config::load(config_file).unwrap_or_default()
        } else {
            solana_cli_config::Config::default()
        };
        let json_rpc_url = value_t!(matches, "json_rpc_url", String)
            .unwrap_or_else(|_| cli_config.json_rpc_url.clone());

        let manager = signer_from_path(
            &matches,
            &cli_config.keypair_path,
            "manager",
            &mut wallet_manager,
        )
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            exit(1);
        });
        let verbose = matches.is_present("verbose");
        let output_format = matches
            .value_of("output_format")
            .map(|value| match value {
                "json" => OutputFormat::Json,
                "json-compact" => OutputFormat::JsonCompact,
                _ => unreachable!(),
            })
            .unwrap_or(if verbose {
                OutputFormat::DisplayVerbose
            } else {
                OutputFormat::Display
            });

        Config {
            rpc_client: RpcClient::new_with_commitment(json_rpc_url, CommitmentConfig::confirmed()),
            verbose,
            output_format,
            manager,
        }
    };

    solana_logger::setup_with_default("solana=info,spl_stake_pool_client=info");

    let result = match matches.subcommand() {
        ("airdrop", Some(arg_matches)) => {
            let recipient = pubkey_of(arg_matches, "recipient").unwrap();
            let lamports = sol_to_lamports(value_t_or_exit!(arg_matches, "amount", f64));
            command_airdrop(&config, &recipient, lamports).await
        }
        ("create-pool", Some(arg_matches)) => {
            let numerator = value_t_or_exit!(arg_matches, "fee_numerator", u64);
            let denominator = value_t_or_exit!(arg_matches, "fee_denominator", u64);
            let referral_fee = value_t_or_exit!(arg_matches, "referral_fee", u8);
            command_create_pool(
                &config,
                PoolFee {
                    numerator,
                    denominator,
                },
                referral_fee,
            )
            .await
        }
        ("create-token-metadata", Some(arg_matches)) => {
            let stake_pool_address = pubkey_of(arg_matches, "pool").unwrap();
            let name = arg_matches.value_of("name").unwrap();
            let symbol = arg_matches.value_of("symbol").unwrap();
            let uri = arg_matches.value_of("uri").unwrap();
            command_create_token_metadata(&config, &stake_pool_address, name, symbol, uri).await
        }
        ("update-token-metadata", Some(arg_matches)) => {
            let stake_pool_address = pubkey_of(arg_matches, "pool").unwrap();
            let name = arg_matches.value_of("name").unwrap();
            let symbol = arg_matches.value_of("symbol").unwrap();
            let uri = arg_matches.value_of("uri").unwrap();
            command_update_token_metadata(&config, &stake_pool_address, name, symbol, uri).await
        }
        ("show", Some(arg_matches)) => {
            let stake_pool_address = pubkey_of(arg_matches, "pool").unwrap();
            command_show(&config, &stake_pool_address).await
        }
        _ => unreachable!(),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manager_is_the_only_keypair_argument() {
        let pool = Pubkey::new_unique().to_string();
        let matches = app()
            .get_matches_from_safe(vec!["stake-pool", "show", "--pool", pool.as_str()])
            .unwrap();
        let (name, show) = matches.subcommand();
        assert_eq!(name, "show");
        assert_eq!(pubkey_of(show.unwrap(), "pool"), Some(pool.parse().unwrap()));

        assert!(app()
            .get_matches_from_safe(vec![
                "stake-pool",
                "--fee-payer",
                "ASK",
                "show",
                "--pool",
                pool.as_str()
            ])
            .is_err());
    }
}
