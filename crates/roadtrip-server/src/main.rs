use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;

use roadtrip_server::{configure, signals, AppState, Cli, Environment, ListenTarget, TemplateEngine};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let mut env = Environment::from_process();
    let cwd = std::env::current_dir().context("unable to determine working directory")?;
    match env.load_dotenv(&cwd) {
        Ok(Some(path)) => log::info!("loaded {}", path.display()),
        Ok(None) => log::debug!("no .env found above {}", cwd.display()),
        Err(e) => log::warn!("unable to read .env: {e}"),
    }

    let listen = ListenTarget::resolve(&cli, &env);
    let state = web::Data::new(AppState {
        templates: TemplateEngine::new(cli.root.clone(), cli.debug, env),
    });
    signals::spawn_hup_listener(state.clone());

    let factory_state = state.clone();
    let server = HttpServer::new(move || {
        let state = factory_state.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| configure(cfg, state))
    });

    let server = match &listen {
        #[cfg(unix)]
        ListenTarget::Unix(path) => server
            .bind_uds(path)
            .with_context(|| format!("unable to bind {}", listen))?,
        #[cfg(not(unix))]
        ListenTarget::Unix(_) => anyhow::bail!("unix sockets are not supported on this platform"),
        ListenTarget::Tcp(addr) => server
            .bind(addr.as_str())
            .with_context(|| format!("unable to bind {}", listen))?,
    };

    log::info!(
        "listening on {} (root={}, debug={})",
        listen,
        cli.root.display(),
        cli.debug
    );
    server.run().await?;
    Ok(())
}
