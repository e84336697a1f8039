mod support;

use std::sync::Arc;

use hyouka::modules::rating::application::{PillarService, RatingService};
use hyouka::modules::rating::domain::value_objects::rating_target::{
    RatingTarget, RatingTargetKind,
};
use hyouka::shared::errors::AppError;
use hyouka::shared::UserContext;

use support::{
    seed_series, InMemoryCharacterRepository, InMemoryPillarRepository, InMemoryRatingRepository,
    InMemorySeriesRepository,
};

struct Fixture {
    pillars: PillarService,
    ratings: RatingService,
    series_repo: Arc<InMemorySeriesRepository>,
    character_repo: Arc<InMemoryCharacterRepository>,
}

fn fixture() -> Fixture {
    let series_repo = Arc::new(InMemorySeriesRepository::new());
    let character_repo = Arc::new(InMemoryCharacterRepository::new());
    let pillar_repo = Arc::new(InMemoryPillarRepository::new());
    let rating_repo = Arc::new(InMemoryRatingRepository::new(Arc::clone(&pillar_repo)));

    Fixture {
        pillars: PillarService::new(pillar_repo.clone(), rating_repo.clone()),
        ratings: RatingService::new(
            rating_repo,
            pillar_repo,
            series_repo.clone(),
            character_repo.clone(),
        ),
        series_repo,
        character_repo,
    }
}

#[tokio::test]
async fn global_pillars_require_admin() {
    let fx = fixture();

    let denied = fx
        .pillars
        .create_pillar(
            &UserContext::user("u-1"),
            "Plot".to_string(),
            RatingTargetKind::Series,
            true,
        )
        .await;
    assert!(matches!(denied, Err(AppError::Unauthorized(_))));

    let created = fx
        .pillars
        .create_pillar(
            &UserContext::admin("a-1"),
            "Plot".to_string(),
            RatingTargetKind::Series,
            true,
        )
        .await
        .unwrap();
    assert!(created.is_global());
}

#[tokio::test]
async fn duplicate_pillar_name_in_same_scope_is_rejected() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");

    fx.pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();

    let duplicate = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await;
    assert!(matches!(duplicate, Err(AppError::ValidationError(_))));

    // Same name in a user's own scope is fine
    let private = fx
        .pillars
        .create_pillar(
            &UserContext::user("u-1"),
            "Plot".to_string(),
            RatingTargetKind::Series,
            false,
        )
        .await;
    assert!(private.is_ok());
}

#[tokio::test]
async fn plot_8_characters_6_aggregates_to_7() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Frieren"]).await.remove(0);
    let target = RatingTarget::series(series.id);

    let plot = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();
    let characters = fx
        .pillars
        .create_pillar(
            &admin,
            "Characters".to_string(),
            RatingTargetKind::Series,
            true,
        )
        .await
        .unwrap();

    fx.ratings.rate(&user, target, &plot.id, 8.0).await.unwrap();
    fx.ratings
        .rate(&user, target, &characters.id, 6.0)
        .await
        .unwrap();

    let score = fx.ratings.aggregated_score(target).await.unwrap().unwrap();
    assert_eq!(score.overall, 7.0);
    assert_eq!(score.pillar_averages.len(), 2);
}

#[tokio::test]
async fn re_rating_replaces_instead_of_duplicating() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Monster"]).await.remove(0);
    let target = RatingTarget::series(series.id);
    let plot = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();

    fx.ratings.rate(&user, target, &plot.id, 5.0).await.unwrap();
    fx.ratings.rate(&user, target, &plot.id, 9.0).await.unwrap();

    let mine = fx.ratings.user_ratings(&user, target).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].value, 9.0);

    let score = fx.ratings.aggregated_score(target).await.unwrap().unwrap();
    assert_eq!(score.overall, 9.0);
}

#[tokio::test]
async fn out_of_range_values_are_rejected_at_write_time() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Gintama"]).await.remove(0);
    let target = RatingTarget::series(series.id);
    let plot = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();

    for bad in [0.5_f32, 10.5, -1.0, f32::NAN] {
        let result = fx.ratings.rate(&user, target, &plot.id, bad).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    // Nothing got written
    assert!(fx.ratings.aggregated_score(target).await.unwrap().is_none());
}

#[tokio::test]
async fn pillar_kind_must_match_target_kind() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Mushishi"]).await.remove(0);
    let character_pillar = fx
        .pillars
        .create_pillar(
            &admin,
            "Depth".to_string(),
            RatingTargetKind::Character,
            true,
        )
        .await
        .unwrap();

    let result = fx
        .ratings
        .rate(
            &user,
            RatingTarget::series(series.id),
            &character_pillar.id,
            7.0,
        )
        .await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn rating_an_unknown_target_is_not_found() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let plot = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();

    let result = fx
        .ratings
        .rate(
            &UserContext::user("u-1"),
            RatingTarget::series(uuid::Uuid::new_v4()),
            &plot.id,
            7.0,
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn private_pillars_are_invisible_to_other_users() {
    let fx = fixture();
    let owner = UserContext::user("u-1");
    let stranger = UserContext::user("u-2");

    let series = seed_series(&fx.series_repo, &["Lain"]).await.remove(0);
    let target = RatingTarget::series(series.id);

    let private = fx
        .pillars
        .create_pillar(
            &owner,
            "Vibes".to_string(),
            RatingTargetKind::Series,
            false,
        )
        .await
        .unwrap();

    let result = fx.ratings.rate(&stranger, target, &private.id, 8.0).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    // The owner can use it
    assert!(fx.ratings.rate(&owner, target, &private.id, 8.0).await.is_ok());
}

#[tokio::test]
async fn referenced_pillar_cannot_be_deleted_until_ratings_go() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Haibane"]).await.remove(0);
    let target = RatingTarget::series(series.id);
    let plot = fx
        .pillars
        .create_pillar(&admin, "Plot".to_string(), RatingTargetKind::Series, true)
        .await
        .unwrap();

    fx.ratings.rate(&user, target, &plot.id, 8.0).await.unwrap();

    let blocked = fx.pillars.delete_pillar(&admin, &plot.id).await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));

    // Rename stays legal while referenced
    let renamed = fx
        .pillars
        .rename_pillar(&admin, &plot.id, "Story".to_string())
        .await
        .unwrap();
    assert_eq!(renamed.name, "Story");

    fx.ratings.delete_rating(&user, target, &plot.id).await.unwrap();
    assert!(fx.pillars.delete_pillar(&admin, &plot.id).await.is_ok());
}

#[tokio::test]
async fn questions_follow_their_pillar() {
    let fx = fixture();
    let owner = UserContext::user("u-1");

    let pillar = fx
        .pillars
        .create_pillar(
            &owner,
            "Pacing".to_string(),
            RatingTargetKind::Series,
            false,
        )
        .await
        .unwrap();

    fx.pillars
        .add_question(&owner, &pillar.id, "Did the middle drag?".to_string())
        .await
        .unwrap();
    let second = fx
        .pillars
        .add_question(&owner, &pillar.id, "Was the ending rushed?".to_string())
        .await
        .unwrap();

    let questions = fx.pillars.pillar_questions(&owner, &pillar.id).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].position, 0);
    assert_eq!(questions[1].position, 1);

    // A stranger cannot manage questions on someone else's pillar
    let denied = fx
        .pillars
        .remove_question(&UserContext::user("u-2"), &second.id)
        .await;
    assert!(matches!(denied, Err(AppError::Unauthorized(_))));

    fx.pillars.remove_question(&owner, &second.id).await.unwrap();
    let questions = fx.pillars.pillar_questions(&owner, &pillar.id).await.unwrap();
    assert_eq!(questions.len(), 1);
}

#[tokio::test]
async fn character_targets_aggregate_independently_of_their_series() {
    let fx = fixture();
    let admin = UserContext::admin("a-1");
    let user = UserContext::user("u-1");

    let series = seed_series(&fx.series_repo, &["Hunter x Hunter"])
        .await
        .remove(0);

    use hyouka::modules::catalog::domain::repositories::character_repository::CharacterRepository as _;
    let character = hyouka::modules::catalog::domain::entities::character::Character::new(
        series.id,
        "Kurapika".to_string(),
    );
    fx.character_repo.save(&character).await.unwrap();

    let depth = fx
        .pillars
        .create_pillar(
            &admin,
            "Depth".to_string(),
            RatingTargetKind::Character,
            true,
        )
        .await
        .unwrap();

    let target = RatingTarget::character(character.id);
    fx.ratings.rate(&user, target, &depth.id, 9.0).await.unwrap();

    let score = fx.ratings.aggregated_score(target).await.unwrap().unwrap();
    assert_eq!(score.overall, 9.0);

    // The parent series stays unrated
    let series_score = fx
        .ratings
        .aggregated_score(RatingTarget::series(series.id))
        .await
        .unwrap();
    assert!(series_score.is_none());
}
