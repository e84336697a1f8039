pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use modules::{
    catalog::{
        application::service::CatalogService,
        infrastructure::persistence::{CharacterRepositoryImpl, SeriesRepositoryImpl},
        CharacterRepository, SeriesRepository,
    },
    favorites::{
        application::service::FavoritesService,
        infrastructure::persistence::FavoritesRepositoryImpl,
    },
    ranking::application::service::RankingService,
    rating::{
        application::{PillarService, RatingService},
        infrastructure::persistence::{PillarRepositoryImpl, RatingRepositoryImpl},
        PillarRepository, RatingRepository,
    },
    status::{
        application::service::StatusService,
        infrastructure::persistence::StatusRepositoryImpl,
    },
};
use shared::errors::AppResult;
use shared::Database;

/// Fully wired application services over one shared connection pool.
///
/// The presentation layer (whatever shell serves HTTP or IPC) holds one of
/// these and calls the services; nothing here depends on how requests
/// arrive.
pub struct AppServices {
    pub catalog: Arc<CatalogService>,
    pub pillars: Arc<PillarService>,
    pub ratings: Arc<RatingService>,
    pub rankings: Arc<RankingService>,
    pub favorites: Arc<FavoritesService>,
    pub statuses: Arc<StatusService>,
}

impl AppServices {
    pub fn initialize(db: Arc<Database>) -> Self {
        let series_repo: Arc<dyn SeriesRepository> =
            Arc::new(SeriesRepositoryImpl::new(Arc::clone(&db)));
        let character_repo: Arc<dyn CharacterRepository> =
            Arc::new(CharacterRepositoryImpl::new(Arc::clone(&db)));
        let pillar_repo: Arc<dyn PillarRepository> =
            Arc::new(PillarRepositoryImpl::new(Arc::clone(&db)));
        let rating_repo: Arc<dyn RatingRepository> =
            Arc::new(RatingRepositoryImpl::new(Arc::clone(&db)));
        let favorites_repo = Arc::new(FavoritesRepositoryImpl::new(Arc::clone(&db)));
        let status_repo = Arc::new(StatusRepositoryImpl::new(Arc::clone(&db)));

        let catalog = Arc::new(CatalogService::new(
            Arc::clone(&series_repo),
            Arc::clone(&character_repo),
        ));
        let pillars = Arc::new(PillarService::new(
            Arc::clone(&pillar_repo),
            Arc::clone(&rating_repo),
        ));
        let ratings = Arc::new(RatingService::new(
            Arc::clone(&rating_repo),
            Arc::clone(&pillar_repo),
            Arc::clone(&series_repo),
            Arc::clone(&character_repo),
        ));
        let rankings = Arc::new(RankingService::new(
            Arc::clone(&series_repo),
            Arc::clone(&rating_repo),
        ));
        let favorites = Arc::new(FavoritesService::new(
            favorites_repo,
            Arc::clone(&series_repo),
        ));
        let statuses = Arc::new(StatusService::new(status_repo, series_repo));

        Self {
            catalog,
            pillars,
            ratings,
            rankings,
            favorites,
            statuses,
        }
    }

    /// Pool + migrations + wiring in one step, for binaries and tests with a
    /// real database behind them.
    pub fn bootstrap() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        shared::utils::logger::init_logger();

        let db = Arc::new(Database::new()?);
        db.run_pending_migrations()?;

        Ok(Self::initialize(db))
    }
}
