use chrono::Local;
use dotenvy::dotenv;
use finance_client::{
    api::{auth, notifications},
    config::{
        api::ApiConfig,
        preferences::{DEFAULT_PREFERENCES_PATH, Preferences, load_preferences, save_preferences},
        settings::load_default_settings,
    },
    core::report::{generate_dashboard_report, render_report},
    entities::Credentials,
    errors::Result,
    http::ApiClient,
};
use std::env;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Display settings and the backend connection
    let settings = load_default_settings()
        .inspect_err(|e| error!("Failed to load settings: {}", e))?;
    let api_config = ApiConfig::from_env();
    info!("Using backend at {}", api_config.base_url);

    let client = ApiClient::from_config(&api_config)
        .inspect_err(|e| error!("Failed to build API client: {}", e))?;

    // 4. Acquire the CSRF token before the first form submission
    if client.bootstrap_csrf().await.is_none() {
        warn!("No CSRF token available; mutating requests will go out without one");
    }

    // 5. Sign in when credentials are provided
    let mut preferences = load_preferences(DEFAULT_PREFERENCES_PATH)?;
    if let (Ok(username), Ok(password)) =
        (env::var("FINANCE_USERNAME"), env::var("FINANCE_PASSWORD"))
    {
        let user = auth::login(&client, &Credentials { username, password })
            .await
            .inspect_err(|e| error!("Login failed: {}", e))?;
        preferences = Preferences {
            user: Some(user),
            ..preferences
        };
        save_preferences(DEFAULT_PREFERENCES_PATH, &preferences)?;
    }

    // 6. Dashboard report
    let today = Local::now().date_naive();
    let report = generate_dashboard_report(&client, today)
        .await
        .inspect(|_| info!("Dashboard report generated."))
        .inspect_err(|e| error!("Failed to generate dashboard report: {}", e))?;
    let text = render_report(&report, settings.display.locale, settings.display.currency)
        .inspect_err(|e| error!("Failed to render dashboard report: {}", e))?;
    println!("{text}");

    // 7. Optionally keep polling notifications until interrupted
    if env::var("FINANCE_WATCH").is_ok() {
        let mut ticker = tokio::time::interval(settings.notifications.poll_interval());
        info!(
            "Polling notifications every {}s; press Ctrl-C to stop",
            settings.notifications.poll_interval_secs
        );
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // a failed poll is retried on the next tick
                    if let Ok(snapshot) = notifications::poll(&client).await {
                        info!("{} unread notification(s)", snapshot.unread);
                    }
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }
    }

    // 8. End the session and forget the stored profile when asked
    if env::var("FINANCE_LOGOUT").is_ok() {
        auth::logout(&client).await;
        preferences.sign_out();
        save_preferences(DEFAULT_PREFERENCES_PATH, &preferences)?;
        info!("Logged out.");
    }

    Ok(())
}
