use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::info;

use garden_rush::{
    config::AppConfig,
    engine::spawn_engine,
    logic::session::GameSession,
    storage::FileHighScoreStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    let store = FileHighScoreStore::new(&config.high_score_path);
    let (game, _engine) = spawn_engine(GameSession::new(Box::new(store)));

    let bind_addr = config.bind_addr.clone();
    info!("🌻 Garden Rush started at http://{bind_addr}");
    info!("   GET  /api/game");
    info!("   POST /api/game/start");
    info!("   POST /api/game/plots/{{index}}/tap");
    info!("   GET  /api/high-score");
    info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   💾 High score file → {}", config.high_score_path.display());

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(game.clone()))
            .configure(garden_rush::api::routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
