use clap::Parser;
use pcfdev_provisioner::utils::{logger, validation::Validate};
use pcfdev_provisioner::{
    CliConfig, ConsoleNotifier, LocalFileSystem, ProcessRunner, ProvisionSettings, Provisioner,
    SelfSignedCertGenerator,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(settings.verbose, settings.log_json);

    tracing::info!("Starting pcfdev-provisioner");
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    if settings.dry_run {
        print_plan(&settings);
        return Ok(());
    }

    let runner = match settings.script_timeout {
        Some(timeout) => ProcessRunner::with_timeout(timeout),
        None => ProcessRunner::new(),
    };
    let provisioner = Provisioner::new(
        SelfSignedCertGenerator::new(settings.organization.clone(), settings.validity_days),
        LocalFileSystem::new(),
        runner,
        ConsoleNotifier::stdout(),
    );

    let request = &settings.request;
    match provisioner
        .provision(&request.script_path, &request.domain)
        .await
    {
        Ok(()) => {
            tracing::info!("Provisioned VM for {}", request.domain);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Provisioning failed: {} (Category: {:?})", e, e.category());
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn print_plan(settings: &ProvisionSettings) {
    println!("Dry run, nothing will be changed:");
    for step in settings.plan() {
        println!("  {}", step);
    }
}
