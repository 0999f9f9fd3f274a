mod students;

use std::time::{Duration, Instant};

use roster_core::{
    ClientConfig, Envelope, EnvelopeError, Operation, RemoteStudentClient, StudentError,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata;

/// Outcome of one subcommand before it is wrapped in an envelope.
pub struct CommandResult {
    pub operation: Operation,
    pub data: Value,
    pub errors: Vec<EnvelopeError>,
}

impl CommandResult {
    /// Remote failures become envelope errors with `null` data.
    pub fn from_outcome<T>(
        operation: Operation,
        outcome: Result<T, StudentError>,
    ) -> Result<Self, CliError>
    where
        T: Serialize,
    {
        match outcome {
            Ok(value) => Ok(Self {
                operation,
                data: serde_json::to_value(value)?,
                errors: Vec::new(),
            }),
            Err(error) => Ok(Self {
                operation,
                data: Value::Null,
                errors: vec![EnvelopeError::from(&error)],
            }),
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let config = client_config(cli, |name| std::env::var(name).ok())?;
    let client = RemoteStudentClient::new(config)?;

    let started = Instant::now();
    let result = match &cli.command {
        Command::List => students::list(&client).await?,
        Command::Get(args) => students::get(&client, args).await?,
        Command::Create(args) => students::create(&client, args).await?,
        Command::Update(args) => students::update(&client, args).await?,
        Command::Delete(args) => students::delete(&client, args).await?,
        Command::DeleteAll(args) => students::delete_all(&client, args).await?,
    };
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let CommandResult {
        operation,
        data,
        errors,
    } = result;
    let meta = metadata::envelope_meta(operation, latency_ms)?;

    Envelope::with_errors(meta, data, errors).map_err(CliError::from)
}

/// Environment first, then command-line overrides.
fn client_config<F>(cli: &Cli, lookup: F) -> Result<ClientConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ClientConfig::from_lookup(lookup)?;

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(api_key) = &cli.api_key {
        config = config.with_api_key(api_key.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    config.validate()?;
    Ok(config)
}
