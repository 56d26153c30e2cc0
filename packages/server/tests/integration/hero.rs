use serde_json::json;

use crate::common::{TestApp, routes};

mod hero_listing {
    use super::*;

    #[tokio::test]
    async fn lists_heroes_without_hero_powers() {
        let app = TestApp::spawn().await;
        let first = app.create_hero("Kamala Khan", "Ms. Marvel").await;
        let second = app.create_hero("Doreen Green", "Squirrel Girl").await;
        let power = app
            .create_power("flight", "gives the wielder the ability to fly")
            .await;
        app.create_hero_power(first, power, "Strong").await;

        let res = app.get(routes::HEROES).await;

        assert_eq!(res.status, 200);
        assert!(res.content_type.starts_with("application/json"));
        let heroes = res.body.as_array().unwrap();
        assert_eq!(heroes.len(), 2);
        assert_eq!(heroes[0]["id"], first);
        assert_eq!(heroes[0]["name"], "Kamala Khan");
        assert_eq!(heroes[0]["super_name"], "Ms. Marvel");
        assert_eq!(heroes[1]["id"], second);
        for hero in heroes {
            assert!(hero.get("hero_powers").is_none());
        }
    }

    #[tokio::test]
    async fn empty_database_lists_nothing() {
        let app = TestApp::spawn().await;
        let res = app.get(routes::HEROES).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }
}

mod hero_detail {
    use super::*;

    #[tokio::test]
    async fn includes_hero_powers_without_back_references() {
        let app = TestApp::spawn().await;
        let hero = app.create_hero("Carol Danvers", "Captain Marvel").await;
        let strength = app
            .create_power("super strength", "gives the wielder super-human strengths")
            .await;
        let flight = app
            .create_power("flight", "gives the wielder the ability to fly")
            .await;
        app.create_hero_power(hero, strength, "Strong").await;
        app.create_hero_power(hero, flight, "Average").await;

        let res = app.get(&routes::hero(hero)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["id"], hero);
        assert_eq!(res.body["name"], "Carol Danvers");
        assert_eq!(res.body["super_name"], "Captain Marvel");

        let entries = res.body["hero_powers"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["power_id"], strength);
        assert_eq!(entries[0]["strength"], "Strong");
        assert_eq!(entries[1]["power_id"], flight);
        assert_eq!(entries[1]["strength"], "Average");
        for entry in entries {
            assert!(entry.get("hero").is_none());
            assert!(entry["power"]["name"].is_string());
            assert!(entry["power"].get("hero_powers").is_none());
        }
    }

    #[tokio::test]
    async fn hero_without_powers_has_empty_hero_powers() {
        let app = TestApp::spawn().await;
        let hero = app.create_hero("Gwen Stacy", "Spider-Gwen").await;

        let res = app.get(&routes::hero(hero)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["hero_powers"], json!([]));
    }

    #[tokio::test]
    async fn returns_404_for_unknown_hero() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::hero(0)).await;

        assert_eq!(res.status, 404);
        assert!(res.content_type.starts_with("application/json"));
        assert_eq!(res.body, json!({"error": "Hero not found"}));
    }
}

mod hero_writes {
    use super::*;

    #[tokio::test]
    async fn creates_a_hero() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::HEROES,
                &json!({"name": "Janet Van Dyne", "super_name": "The Wasp"}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["super_name"], "The Wasp");
        assert_eq!(res.body["hero_powers"], json!([]));
        assert_eq!(app.hero_count().await, 1);
    }

    #[tokio::test]
    async fn rejects_missing_names() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::HEROES, &json!({"name": ""})).await;

        assert_eq!(res.status, 400);
        assert_eq!(
            res.body["errors"],
            json!(["Name is required.", "Super name is required."])
        );
        assert_eq!(app.hero_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::HEROES, "{not json").await;

        assert_eq!(res.status, 400);
        assert!(res.body["error"].is_string());
    }

    #[tokio::test]
    async fn updates_a_hero() {
        let app = TestApp::spawn().await;
        let hero = app.create_hero("Wanda Maximoff", "Scarlet Witch").await;

        let res = app
            .patch(&routes::hero(hero), &json!({"super_name": "The Scarlet Witch"}))
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"], "Wanda Maximoff");
        assert_eq!(res.body["super_name"], "The Scarlet Witch");
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let app = TestApp::spawn().await;
        let hero = app.create_hero("Wanda Maximoff", "Scarlet Witch").await;

        let res = app.patch(&routes::hero(hero), &json!({"name": "  "})).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["errors"], json!(["Name must not be empty."]));
        let after = app.get(&routes::hero(hero)).await;
        assert_eq!(after.body["name"], "Wanda Maximoff");
    }

    #[tokio::test]
    async fn unknown_hero_is_reported_before_body_errors() {
        let app = TestApp::spawn().await;
        let res = app.patch(&routes::hero(0), &json!({"name": ""})).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({"error": "Hero not found"}));
    }

    #[tokio::test]
    async fn non_numeric_id_gets_a_json_error() {
        let app = TestApp::spawn().await;
        for res in [
            app.get("/heroes/abc").await,
            app.patch("/heroes/abc", &json!({"name": "Nobody"})).await,
            app.delete("/heroes/abc").await,
        ] {
            assert_eq!(res.status, 400);
            assert!(res.content_type.starts_with("application/json"));
            assert!(res.body["error"].as_str().is_some_and(|e| !e.is_empty()));
        }
    }

    #[tokio::test]
    async fn update_of_unknown_hero_is_404() {
        let app = TestApp::spawn().await;
        let res = app.patch(&routes::hero(0), &json!({"name": "Nobody"})).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Hero not found");
    }

    #[tokio::test]
    async fn deleting_a_hero_removes_its_hero_powers() {
        let app = TestApp::spawn().await;
        let doomed = app.create_hero("Doreen Green", "Squirrel Girl").await;
        let other = app.create_hero("Kamala Khan", "Ms. Marvel").await;
        let power = app
            .create_power("elasticity", "can stretch the human body to extreme lengths")
            .await;
        app.create_hero_power(doomed, power, "Weak").await;
        let kept = app.create_hero_power(other, power, "Strong").await;

        let res = app.delete(&routes::hero(doomed)).await;

        assert_eq!(res.status, 204);
        assert_eq!(app.get(&routes::hero(doomed)).await.status, 404);
        assert_eq!(app.hero_power_count().await, 1);
        assert_eq!(app.get(&routes::hero_power(kept)).await.status, 200);
        assert_eq!(app.get(&routes::power(power)).await.status, 200);
    }

    #[tokio::test]
    async fn deleting_unknown_hero_is_404() {
        let app = TestApp::spawn().await;
        let res = app.delete(&routes::hero(0)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Hero not found");
    }
}

mod hero_powers_projection {
    use super::*;

    #[tokio::test]
    async fn lists_powers_in_link_order() {
        let app = TestApp::spawn().await;
        let hero = app.create_hero("Carol Danvers", "Captain Marvel").await;
        let flight = app
            .create_power("flight", "gives the wielder the ability to fly")
            .await;
        let strength = app
            .create_power("super strength", "gives the wielder super-human strengths")
            .await;
        app.create_hero_power(hero, strength, "Strong").await;
        app.create_hero_power(hero, flight, "Weak").await;

        let res = app.get(&routes::hero_powers_of(hero)).await;

        assert_eq!(res.status, 200);
        let powers = res.body.as_array().unwrap();
        assert_eq!(powers.len(), 2);
        assert_eq!(powers[0]["id"], strength);
        assert_eq!(powers[1]["id"], flight);
        assert!(powers[0].get("hero_powers").is_none());
    }

    #[tokio::test]
    async fn unknown_hero_is_404() {
        let app = TestApp::spawn().await;
        let res = app.get(&routes::hero_powers_of(0)).await;
        assert_eq!(res.status, 404);
    }
}

#[tokio::test]
async fn index_serves_landing_page() {
    let app = TestApp::spawn().await;
    let res = app.get(routes::INDEX).await;
    assert_eq!(res.status, 200);
    assert!(res.content_type.starts_with("text/html"));
    assert_eq!(res.text, "<h1>Code challenge</h1>");
}
