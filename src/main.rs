use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use hrops_be::database::{
    init_database,
    repositories::{
        AttendanceRepository, HolidayRepository, LeaveRepository, PayrollRepository,
        SalaryRepository, UserRepository, WeekOffRepository,
    },
};
use hrops_be::handlers::payroll;
use hrops_be::services::{PayrollRunner, PayrollService, runner};
use hrops_be::Config;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("HR Ops Payroll API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting HR Ops payroll server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories and services
    let user_repository = UserRepository::new(pool.clone());
    let attendance_repository = AttendanceRepository::new(pool.clone());
    let leave_repository = LeaveRepository::new(pool.clone());
    let holiday_repository = HolidayRepository::new(pool.clone());
    let week_off_repository = WeekOffRepository::new(pool.clone());
    let salary_repository = SalaryRepository::new(pool.clone());
    let payroll_repository = PayrollRepository::new(pool.clone());

    let payroll_service = PayrollService::new(
        user_repository.clone(),
        attendance_repository,
        leave_repository,
        holiday_repository,
        week_off_repository,
        salary_repository,
    );
    let payroll_runner = PayrollRunner::new(
        user_repository,
        payroll_repository,
        payroll_service.clone(),
    );

    // First-of-month payroll generation
    if config.payroll_schedule_enabled {
        runner::spawn_monthly(payroll_runner.clone());
        println!("🗓  Monthly payroll schedule armed");
    }

    let payroll_service_data = web::Data::new(payroll_service);
    let payroll_runner_data = web::Data::new(payroll_runner);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(payroll_service_data.clone())
            .app_data(payroll_runner_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&config.client_base_url)
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Requested-With",
                    ])
                    .max_age(3600),
            )
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .service(hello)
            .service(health)
            .service(
                web::scope("/api/v1").service(
                    web::scope("/payroll")
                        .route("/calculate", web::post().to(payroll::calculate_payroll))
                        .route("/run", web::post().to(payroll::run_payroll)),
                ),
            )
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
