//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use ghrelay_config::Config;
use ghrelay_ghapi_github::GithubApiService;
use ghrelay_ghapi_interface::ApiService;
use ghrelay_notifier_discord::DiscordNotifierService;
use ghrelay_notifier_interface::NotifierService;
use tracing::info;

use crate::{
    health::health_check_route, middlewares::VerifySignature,
    queries::configure_query_handlers, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// API adapter.
    pub api_service: Box<dyn ApiService>,
    /// Notifier adapter.
    pub notifier_service: Box<dyn NotifierService>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config) -> Self {
        Self {
            api_service: Box::new(GithubApiService::new(config.clone())),
            notifier_service: Box::new(DiscordNotifierService::new(config.clone())),
            config,
        }
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        api_service: Box<dyn ApiService>,
        notifier_service: Box<dyn NotifierService>,
    ) -> Self {
        Self {
            config,
            api_service,
            notifier_service,
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context.clone())
        .wrap(Logger::default())
        .service(
            web::scope("/webhook")
                .wrap(VerifySignature::new(&context.config))
                .configure(configure_webhook_handlers),
        )
        .service(web::scope("/github").configure(configure_query_handlers))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on ghrelay!" }))
            }),
        )
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            // Display Bad Request response on invalid JSON data
            error::InternalError::from_response(
                "",
                HttpResponse::BadRequest().json(serde_json::json!({
                    "error": err.to_string()
                })),
            )
            .into()
        }))
}

/// Run relay server.
pub async fn run_relay_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        address = %address,
        repository_path = %context.config.repository_path(),
        message = "Starting relay server",
    );

    run_relay_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server_bind_ip, config.server_bind_port)
}

async fn run_relay_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server_workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
