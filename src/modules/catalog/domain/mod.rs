pub mod entities;
pub mod repositories;

pub use entities::character::Character;
pub use entities::series::{Series, SeriesSummary};
pub use repositories::character_repository::CharacterRepository;
pub use repositories::series_repository::SeriesRepository;
