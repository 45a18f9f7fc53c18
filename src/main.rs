use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trxps_payments::application::lifecycle::PluginLifecycle;
use trxps_payments::application::payment_method_service::PaymentMethodService;
use trxps_payments::config::PluginConfig;
use trxps_payments::domain::context::Context;
use trxps_payments::infrastructure::in_memory::{
    InMemoryMediaStore, InMemoryPaymentMethodRepository, StaticPluginIdProvider,
};
use trxps_payments::infrastructure::trxps_api::TrxpsApiClient;
use trxps_payments::interfaces::http::shipping::{
    ShipItemRequest, ShipOrderRequest, ShippingService,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Comma separated handler keys, overriding the configuration
    #[arg(long, global = true, value_delimiter = ',')]
    handlers: Option<Vec<String>>,

    /// Trxps API key
    #[arg(long, global = true, env = "TRXPS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URL of the host admin API
    #[arg(long, global = true)]
    admin_url: Option<String>,

    /// Bearer token for the host admin API
    #[arg(long, global = true, env = "TRXPS_ADMIN_TOKEN", hide_env_values = true)]
    admin_token: Option<String>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the enabled payment method handlers
    Handlers,
    /// Synchronize payment methods and print the resulting records as JSON
    Sync {
        /// Also activate the methods Trxps reports as active
        #[arg(long)]
        activate: bool,
    },
    /// Ship a quantity of one order line item
    Ship {
        #[arg(long)]
        item_id: Uuid,
        #[arg(long)]
        version_id: Uuid,
        #[arg(long)]
        quantity: u32,
    },
    /// Ship every remaining item of an order
    ShipTotal {
        #[arg(long)]
        order_id: Uuid,
    },
}

impl Cli {
    fn load_config(&self) -> Result<PluginConfig> {
        let mut config = match &self.config {
            Some(path) => PluginConfig::from_json_file(path).into_diagnostic()?,
            None => PluginConfig::default(),
        };

        if let Some(handlers) = &self.handlers {
            config.enabled_handlers = handlers.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.api.api_key = Some(api_key.clone());
        }
        if let Some(admin_url) = &self.admin_url {
            config.admin.base_url = admin_url.clone();
        }
        if let Some(token) = &self.admin_token {
            config.admin.token = Some(token.clone());
        }
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.load_config()?;
    let registry = config.handler_registry().into_diagnostic()?;

    match cli.command {
        Command::Handlers => {
            for handler in registry.handlers() {
                println!(
                    "{},{},{},{}",
                    handler.key(),
                    handler.name(),
                    handler.description(),
                    handler.handler_identifier()
                );
            }
        }
        Command::Sync { activate } => {
            let payments = InMemoryPaymentMethodRepository::new();
            let media = InMemoryMediaStore::new();
            let service = PaymentMethodService::new(
                Box::new(media.clone()),
                Box::new(media),
                Box::new(payments.clone()),
                Box::new(StaticPluginIdProvider::new(Uuid::new_v4())),
                registry,
            )
            .with_plugin_class(config.plugin_class.clone())
            .with_icon_folder(config.icon_folder.clone());

            let mut lifecycle = PluginLifecycle::new(service);
            let context = Context::default();
            if activate {
                let api = TrxpsApiClient::new(&config.api).into_diagnostic()?;
                lifecycle = lifecycle.with_methods_api(Box::new(api));
                lifecycle.activate(&context).await.into_diagnostic()?;
            } else {
                lifecycle.install(&context).await.into_diagnostic()?;
            }

            let records = payments.all().await;
            println!(
                "{}",
                serde_json::to_string_pretty(&records).into_diagnostic()?
            );
        }
        Command::Ship {
            item_id,
            version_id,
            quantity,
        } => {
            let service = ShippingService::new(&config.admin).into_diagnostic()?;
            let response = service
                .ship(&ShipItemRequest {
                    item_id: Some(item_id),
                    version_id: Some(version_id),
                    quantity: Some(quantity),
                })
                .await
                .into_diagnostic()?;
            println!("{}", response);
        }
        Command::ShipTotal { order_id } => {
            let service = ShippingService::new(&config.admin).into_diagnostic()?;
            let response = service
                .total(&ShipOrderRequest {
                    order_id: Some(order_id),
                })
                .await
                .into_diagnostic()?;
            println!("{}", response);
        }
    }

    Ok(())
}
