//! Users 리소스 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! `USER_STORE` 설정에 따라 MongoDB 또는 메모리 저장소를 연결하고
//! `/api/users` REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header::{self, HeaderName};
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_svc::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend};
use user_svc::db::Database;
use user_svc::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserRepository};
use user_svc::routes::configure_all_routes;
use user_svc::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 로거가 준비되기 전이므로 결과는 초기화 후에 기록
    let env_file = load_env_file();
    let environment = Environment::current();
    init_logging(&environment);

    info!("🚀 Users 서비스 시작중... ({:?})", environment);
    info!("{}", env_file);

    let backend = StoreBackend::current();
    let repository = initialize_repository(backend).await?;
    let service = web::Data::new(UserService::new(repository));

    info!("✅ 저장소 초기화 완료: {}", backend.as_str());

    start_http_server(service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 접근 로그, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limit 설정 오류 또는 서버 실행 오류
async fn start_http_server(service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limit 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드하고 결과 메시지를 반환합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod USER_STORE=mongodb cargo run
/// ```
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if filename == ".env" {
        dotenv().map(|_| ())
    } else {
        dotenv::from_filename(filename).map(|_| ())
    };

    match loaded {
        Ok(()) => format!("profile={}, {} 파일 로드 됨", profile, filename),
        Err(e) => format!("profile={}, {} 파일 로드 실패: {}", profile, filename, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=user_svc::handlers=debug cargo run
/// ```
fn init_logging(environment: &Environment) {
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

/// 설정된 저장소 종류에 맞는 리포지토리를 생성합니다
///
/// MongoDB 연결 실패는 `io::Error`로 변환되어 서버 기동이 중단됩니다.
async fn initialize_repository(backend: StoreBackend) -> io::Result<Arc<dyn UserRepository>> {
    match backend {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect_from_env().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            Ok(Arc::new(MongoUserRepository::new(Arc::new(database))))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용: 재시작하면 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽으며,
/// 클라이언트가 `Location`과 알림 헤더를 읽을 수 있도록 노출합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![
            header::LOCATION,
            HeaderName::from_static("x-usersvcapp-alert"),
            HeaderName::from_static("x-usersvcapp-error"),
            HeaderName::from_static("x-usersvcapp-params"),
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
