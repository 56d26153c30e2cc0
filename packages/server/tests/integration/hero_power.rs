use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::json;

use superheroes::entity::hero_power;

use crate::common::{TestApp, routes};

async fn hero_and_power(app: &TestApp) -> (i32, i32) {
    let hero = app.create_hero("Kamala Khan", "Ms. Marvel").await;
    let power = app
        .create_power("elasticity", "can stretch the human body to extreme lengths")
        .await;
    (hero, power)
}

mod hero_power_creation {
    use super::*;

    #[tokio::test]
    async fn creates_a_hero_power_with_both_ends() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;

        let res = app
            .post(
                routes::HERO_POWERS,
                &json!({"strength": "Weak", "hero_id": hero, "power_id": power}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert!(res.content_type.starts_with("application/json"));
        assert!(res.body["id"].as_i64().unwrap() > 0);
        assert_eq!(res.body["hero_id"], hero);
        assert_eq!(res.body["power_id"], power);
        assert_eq!(res.body["strength"], "Weak");
        assert_eq!(res.body["hero"]["name"], "Kamala Khan");
        assert_eq!(res.body["power"]["name"], "elasticity");
        assert!(res.body["hero"].get("hero_powers").is_none());
        assert!(res.body["power"].get("hero_powers").is_none());

        let stored = hero_power::Entity::find()
            .filter(hero_power::Column::HeroId.eq(hero))
            .filter(hero_power::Column::PowerId.eq(power))
            .one(&app.db)
            .await
            .unwrap()
            .expect("hero_power should be persisted");
        assert_eq!(stored.strength, ::common::Strength::Weak);
    }

    #[tokio::test]
    async fn rejects_unknown_strength_and_persists_nothing() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;

        let res = app
            .post(
                routes::HERO_POWERS,
                &json!({"strength": "Cheese", "hero_id": hero, "power_id": power}),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["errors"],
            json!(["Strength must be one of Strong, Weak, Average."])
        );
        assert_eq!(app.hero_power_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let app = TestApp::spawn().await;
        let (hero, _) = hero_and_power(&app).await;

        let res = app
            .post(routes::HERO_POWERS, &json!({"strength": "Weak", "hero_id": hero}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["errors"], json!(["Missing required fields"]));
    }

    #[tokio::test]
    async fn rejects_links_to_missing_rows() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;

        for body in [
            json!({"strength": "Strong", "hero_id": hero + 100, "power_id": power}),
            json!({"strength": "Strong", "hero_id": hero, "power_id": power + 100}),
        ] {
            let res = app.post(routes::HERO_POWERS, &body).await;
            assert_eq!(res.status, 404);
            assert_eq!(res.body, json!({"error": "Hero or Power not found"}));
        }
        assert_eq!(app.hero_power_count().await, 0);
    }
}

mod hero_power_reads {
    use super::*;

    #[tokio::test]
    async fn gets_a_hero_power_by_id() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;
        let id = app.create_hero_power(hero, power, "Average").await;

        let res = app.get(&routes::hero_power(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], id);
        assert_eq!(res.body["strength"], "Average");
        assert_eq!(res.body["hero"]["id"], hero);
        assert_eq!(res.body["power"]["id"], power);
    }

    #[tokio::test]
    async fn returns_404_for_unknown_hero_power() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::hero_power(0)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "HeroPower not found"}));
    }

    #[tokio::test]
    async fn lists_hero_powers_in_creation_order() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;
        let first = app.create_hero_power(hero, power, "Strong").await;
        let second = app.create_hero_power(hero, power, "Weak").await;

        let res = app.get(routes::HERO_POWERS).await;

        assert_eq!(res.status, 200);
        let rows = res.body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], first);
        assert_eq!(rows[1]["id"], second);
        assert!(rows[0]["hero"].is_object());
        assert!(rows[0]["power"].is_object());
    }
}

mod hero_power_writes {
    use super::*;

    #[tokio::test]
    async fn changes_strength() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;
        let id = app.create_hero_power(hero, power, "Weak").await;

        let res = app
            .patch(&routes::hero_power(id), &json!({"strength": "Strong"}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["strength"], "Strong");
    }

    #[tokio::test]
    async fn rejects_invalid_strength_on_update() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;
        let id = app.create_hero_power(hero, power, "Weak").await;

        let res = app
            .patch(&routes::hero_power(id), &json!({"strength": "Mighty"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["errors"],
            json!(["Strength must be one of Strong, Weak, Average."])
        );
        let after = app.get(&routes::hero_power(id)).await;
        assert_eq!(after.body["strength"], "Weak");
    }

    #[tokio::test]
    async fn deletes_only_the_link() {
        let app = TestApp::spawn().await;
        let (hero, power) = hero_and_power(&app).await;
        let id = app.create_hero_power(hero, power, "Weak").await;

        let res = app.delete(&routes::hero_power(id)).await;

        assert_eq!(res.status, 204);
        assert_eq!(app.hero_power_count().await, 0);
        assert_eq!(app.hero_count().await, 1);
        assert_eq!(app.power_count().await, 1);
    }
}
