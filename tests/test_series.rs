use serde_json::json;
use tvdb_rs::series::{ImagesQueryOptions, SeriesOptions};
use tvdb_rs::Locale;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod utils;

fn series_body(series_name: &str, aliases: &[&str]) -> serde_json::Value {
    json!({"data": {
        "id": 121361,
        "seriesName": series_name,
        "aliases": aliases,
        "seriesId": "75710",
        "status": "Ended",
        "firstAired": "2011-04-17",
        "network": "HBO",
        "runtime": "55",
        "genre": ["Adventure", "Drama", "Fantasy"],
        "lastUpdated": 1560000000,
        "rating": "TV-MA",
        "imdbId": "tt0944947",
        "siteRating": 9.4,
        "siteRatingCount": 2492,
        "slug": "game-of-thrones"
    }})
}

#[tokio::test]
async fn series_by_id() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(series_body("Game of Thrones", &["GoT"])),
        )
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let series = tvdb.series(121361, SeriesOptions::default()).await?;
    assert_eq!(series.id, 121361);
    assert_eq!(series.series_name.as_deref(), Some("Game of Thrones"));
    assert_eq!(series.slug, "game-of-thrones");
    Ok(())
}

#[tokio::test]
async fn per_call_language_overrides_the_default() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361"))
        .and(header("Accept-Language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(series_body(
            "Le Trône de fer",
            &["Le Trône de fer : Game of Thrones"],
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/121361"))
        .and(header("Accept-Language", "en"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(series_body("Game of Thrones", &["GoT"])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let tvdb = utils::client_with_language(&server, Locale::en);

    let english = tvdb.series(121361, SeriesOptions::default()).await?;
    let french = tvdb
        .series(121361, SeriesOptions::default().language(Locale::fr))
        .await?;
    // the override only lasted for one call
    let english_again = tvdb.series(121361, SeriesOptions::default()).await?;

    assert_eq!(english.id, 121361);
    assert_eq!(french.id, 121361);
    assert_ne!(english.aliases, french.aliases);
    assert_eq!(english.aliases, english_again.aliases);

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn series_head_returns_only_headers() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("HEAD"))
        .and(path("/series/121361"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Last-Modified", "Mon, 17 Jun 2019 15:12:30 GMT"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let headers = tvdb.series_head(121361, SeriesOptions::default()).await?;
    assert_eq!(
        headers.get("Last-Modified").unwrap(),
        "Mon, 17 Jun 2019 15:12:30 GMT"
    );

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn series_actors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/actors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{
            "id": 29650,
            "seriesId": 121361,
            "name": "Emilia Clarke",
            "role": "Daenerys Targaryen",
            "sortOrder": 0,
            "image": "actors/29650.jpg",
            "imageAuthor": 1,
            "imageAdded": "2011-08-27 21:33:34",
            "lastUpdated": "2011-08-27 21:33:34"
        }]})))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let actors = tvdb.series_actors(121361, SeriesOptions::default()).await?;
    assert_eq!(actors.len(), 1);
    assert_eq!(actors[0].role, "Daenerys Targaryen");
    Ok(())
}

#[tokio::test]
async fn series_filter_sends_the_keys_comma_joined() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/filter"))
        .and(query_param("keys", "seriesName,overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": {"seriesName": "Game of Thrones", "overview": "Seven noble families."}}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let filtered = tvdb
        .series_filter(121361, &["seriesName", "overview"], SeriesOptions::default())
        .await?;
    assert_eq!(filtered["seriesName"], "Game of Thrones");
    assert!(filtered.get("id").is_none());

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn series_episodes_summary() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/episodes/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {
            "airedSeasons": ["0", "1", "2"],
            "airedEpisodes": "130",
            "dvdSeasons": ["1", "2"],
            "dvdEpisodes": "20"
        }})))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let summary = tvdb
        .series_episodes_summary(121361, SeriesOptions::default())
        .await?;
    assert_eq!(summary.aired_episodes, "130");
    assert_eq!(summary.aired_seasons.len(), 3);
    Ok(())
}

#[tokio::test]
async fn series_image_counts_and_query() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"data": {"fanart": 18, "poster": 12, "season": 31, "seasonwide": 15, "series": 6}}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/121361/images/query"))
        .and(query_param("keyType", "poster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{
            "id": 761981,
            "keyType": "poster",
            "subKey": "",
            "fileName": "posters/121361-1.jpg",
            "languageId": 7,
            "resolution": "680x1000",
            "ratingsInfo": {"average": 8.0, "count": 28},
            "thumbnail": "_cache/posters/121361-1.jpg"
        }]})))
        .expect(1)
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let counts = tvdb.series_images(121361, SeriesOptions::default()).await?;
    assert_eq!(counts.poster, 12);

    let posters = tvdb
        .series_images_query(
            121361,
            ImagesQueryOptions::default().key_type("poster".to_string()),
        )
        .await?;
    assert_eq!(posters.len(), 1);
    assert_eq!(posters[0].ratings_info.count, 28);

    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn series_images_query_params() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    utils::mock_login(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/series/121361/images/query/params"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{
            "keyType": "poster",
            "languageId": "7",
            "resolution": ["680x1000"],
            "subKey": []
        }]})))
        .mount(&server)
        .await;

    let tvdb = utils::client(&server);
    let params = tvdb
        .series_images_query_params(121361, SeriesOptions::default())
        .await?;
    assert_eq!(params[0].key_type, "poster");
    assert_eq!(params[0].resolution, vec!["680x1000"]);
    Ok(())
}
